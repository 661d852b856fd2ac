//! Line-oriented session over async reader/writer pairs.
//!
//! Used for local runs against stdin/stdout. Each input line is one inbound
//! message; replies are written as-is and error reports are prefixed with
//! `error: `.

use async_trait::async_trait;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadBuf,
    Stdout,
};
use tokio::sync::{Mutex, MutexGuard, mpsc};
use tokio_util::sync::CancellationToken;

use crate::command::domain::CommandContext;
use crate::command::ports::{
    CommandDispatcher, DispatchOutcome, ResponseError, ResponseResult, ResponseWriter,
};
use crate::session::ports::{BotSession, SessionError, SessionResult};

const CONSOLE_CHANNEL: &str = "console";
const ERROR_PREFIX: &str = "error: ";
const INPUT_THREAD_NAME: &str = "console-input";
const INPUT_QUEUE_DEPTH: usize = 16;

/// Session reading commands from `R` and answering on `W`.
#[derive(Debug)]
pub struct ConsoleSession<R, W> {
    input: Mutex<R>,
    output: Arc<Mutex<W>>,
}

impl ConsoleSession<BufReader<ThreadedLineReader>, Stdout> {
    /// Creates a session over the process's standard streams.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] when the stdin reader thread cannot be
    /// started.
    pub fn stdio() -> SessionResult<Self> {
        let input = ThreadedLineReader::spawn(io::BufReader::new(io::stdin()))
            .map_err(SessionError::io)?;
        Ok(Self::new(BufReader::new(input), tokio::io::stdout()))
    }
}

impl<R, W> ConsoleSession<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a session over `input` and `output`.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Arc::new(Mutex::new(output)),
        }
    }

    /// Locks and returns the output sink.
    pub async fn output(&self) -> MutexGuard<'_, W> {
        self.output.lock().await
    }
}

#[async_trait]
impl<R, W> BotSession for ConsoleSession<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    async fn listen(
        &self,
        dispatcher: Arc<dyn CommandDispatcher>,
        cancel: CancellationToken,
    ) -> SessionResult<()> {
        let mut input = self.input.lock().await;
        let mut lines = (&mut *input).lines();
        let context = CommandContext::new().with_channel(CONSOLE_CHANNEL);
        let writer = ConsoleResponseWriter::new(Arc::clone(&self.output));

        loop {
            let line = tokio::select! {
                () = cancel.cancelled() => {
                    tracing::info!("console session cancelled");
                    return Ok(());
                }
                line = lines.next_line() => line.map_err(SessionError::io)?,
            };

            let Some(line) = line else {
                tracing::info!("console input closed");
                return Ok(());
            };

            let outcome = dispatcher.dispatch(&context, &line, &writer).await;
            if outcome == DispatchOutcome::Ignored {
                tracing::debug!(text = %line, "no command matched console input");
            }
        }
    }
}

/// Async view of a blocking line source read on its own thread.
///
/// The thread is detached: a read parked on it never holds up runtime
/// shutdown, unlike reads on tokio's blocking pool.
#[derive(Debug)]
pub struct ThreadedLineReader {
    lines: mpsc::Receiver<io::Result<Vec<u8>>>,
    pending: Vec<u8>,
    consumed: usize,
}

impl ThreadedLineReader {
    /// Starts a thread feeding lines of `source` to the returned reader.
    ///
    /// The thread exits at end of input, after the first read error, or
    /// once the reader is dropped and its next line has nowhere to go.
    ///
    /// # Errors
    ///
    /// Returns the OS error when the thread cannot be spawned.
    pub fn spawn<B>(mut source: B) -> io::Result<Self>
    where
        B: io::BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(INPUT_QUEUE_DEPTH);
        std::thread::Builder::new()
            .name(INPUT_THREAD_NAME.to_owned())
            .spawn(move || {
                loop {
                    let mut line = Vec::new();
                    let read = match source.read_until(b'\n', &mut line) {
                        Ok(0) => return,
                        Ok(_) => Ok(line),
                        Err(err) => Err(err),
                    };
                    let failed = read.is_err();
                    if tx.blocking_send(read).is_err() || failed {
                        return;
                    }
                }
            })?;
        Ok(Self {
            lines: rx,
            pending: Vec::new(),
            consumed: 0,
        })
    }
}

impl AsyncRead for ThreadedLineReader {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        loop {
            let rest = this.pending.get(this.consumed..).unwrap_or_default();
            if !rest.is_empty() {
                let len = rest.len().min(buf.remaining());
                buf.put_slice(rest.get(..len).unwrap_or_default());
                this.consumed += len;
                return Poll::Ready(Ok(()));
            }
            match ready!(this.lines.poll_recv(cx)) {
                Some(Ok(line)) => {
                    this.pending = line;
                    this.consumed = 0;
                }
                Some(Err(err)) => return Poll::Ready(Err(err)),
                None => return Poll::Ready(Ok(())),
            }
        }
    }
}

/// Writes replies to a shared async sink, one line each.
#[derive(Debug)]
pub struct ConsoleResponseWriter<W> {
    output: Arc<Mutex<W>>,
}

impl<W> ConsoleResponseWriter<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a writer over `output`.
    #[must_use]
    pub const fn new(output: Arc<Mutex<W>>) -> Self {
        Self { output }
    }

    async fn write_line(&self, text: &str) -> ResponseResult<()> {
        let mut output = self.output.lock().await;
        output
            .write_all(format!("{text}\n").as_bytes())
            .await
            .map_err(ResponseError::delivery)?;
        output.flush().await.map_err(ResponseError::delivery)
    }
}

#[async_trait]
impl<W> ResponseWriter for ConsoleResponseWriter<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn reply(&self, text: &str) -> ResponseResult<()> {
        self.write_line(text).await
    }

    async fn report_error(&self, message: &str) -> ResponseResult<()> {
        self.write_line(&format!("{ERROR_PREFIX}{message}")).await
    }
}
