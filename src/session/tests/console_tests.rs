//! Unit tests for the console session.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use rstest::rstest;
use tokio_util::sync::CancellationToken;

use crate::command::domain::CommandContext;
use crate::command::ports::{CommandDispatcher, DispatchOutcome, ResponseWriter};
use crate::session::adapters::{ConsoleSession, ThreadedLineReader};
use crate::session::ports::{BotSession, SessionError};

/// Answers `ping` and `fail`; ignores everything else.
struct ScriptedDispatcher;

#[async_trait]
impl CommandDispatcher for ScriptedDispatcher {
    async fn dispatch(
        &self,
        context: &CommandContext,
        text: &str,
        response: &dyn ResponseWriter,
    ) -> DispatchOutcome {
        let delivered = match text {
            "ping" => response.reply("pong").await,
            "fail" => response.report_error("failed! ABC").await,
            "where" => {
                response
                    .reply(context.channel_id().unwrap_or("nowhere"))
                    .await
            }
            _ => return DispatchOutcome::Ignored,
        };
        assert!(delivered.is_ok(), "in-memory output should accept writes");
        DispatchOutcome::Handled {
            command: text.to_owned(),
        }
    }
}

async fn run(input: &'static [u8]) -> (Result<(), SessionError>, String) {
    let session = ConsoleSession::new(input, Vec::new());
    let result = session
        .listen(Arc::new(ScriptedDispatcher), CancellationToken::new())
        .await;
    let output = String::from_utf8(session.output().await.clone()).expect("output is UTF-8");
    (result, output)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replies_and_errors_are_written_per_line() {
    let (result, output) = run(b"ping\nunknown\nfail\n").await;

    assert!(result.is_ok());
    assert_eq!(output, "pong\nerror: failed! ABC\n");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn last_line_without_newline_is_dispatched() {
    let (result, output) = run(b"ping").await;

    assert!(result.is_ok());
    assert_eq!(output, "pong\n");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn console_channel_is_reported_in_context() {
    let (_, output) = run(b"where\n").await;

    assert_eq!(output, "console\n");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreadable_input_is_an_io_error() {
    let (result, output) = run(b"\xff\xfe\n").await;

    assert!(matches!(result, Err(SessionError::Io(_))));
    assert!(output.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancellation_stops_a_session_waiting_for_input() {
    let (reader, _keep_open) = tokio::io::duplex(64);
    let session = ConsoleSession::new(tokio::io::BufReader::new(reader), Vec::new());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = tokio::time::timeout(
        Duration::from_secs(1),
        session.listen(Arc::new(ScriptedDispatcher), cancel),
    )
    .await
    .expect("listen should return once cancelled");

    assert!(result.is_ok());
}

/// Blocking source whose reads park until the paired sender is dropped.
struct ParkedInput(std::sync::mpsc::Receiver<()>);

impl std::io::Read for ParkedInput {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        let _disconnected = self.0.recv();
        Ok(0)
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn threaded_input_feeds_the_session() {
    let input = ThreadedLineReader::spawn(std::io::Cursor::new(b"ping\nunknown\nfail".to_vec()))
        .expect("input thread should start");
    let session = ConsoleSession::new(tokio::io::BufReader::new(input), Vec::new());

    let result = session
        .listen(Arc::new(ScriptedDispatcher), CancellationToken::new())
        .await;

    assert!(result.is_ok());
    let output = String::from_utf8(session.output().await.clone()).expect("output is UTF-8");
    assert_eq!(output, "pong\nerror: failed! ABC\n");
}

#[rstest]
fn runtime_shuts_down_while_input_is_parked() {
    let (_hold_input, parked) = std::sync::mpsc::channel::<()>();
    let (done_tx, done_rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("runtime should build");
        let input = ThreadedLineReader::spawn(std::io::BufReader::new(ParkedInput(parked)))
            .expect("input thread should start");
        let session = ConsoleSession::new(tokio::io::BufReader::new(input), Vec::new());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = runtime.block_on(session.listen(Arc::new(ScriptedDispatcher), cancel));
        drop(runtime);
        done_tx
            .send(result.is_ok())
            .expect("test thread should still be waiting");
    });

    let listened = done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("runtime should drop without waiting for input");
    assert!(listened);
}
