//! Runs the game administration bot.
//!
//! Configuration is read from the process environment and an optional env
//! file (see [`gamebot::config`]). `BOT_SESSION=console` reads commands from
//! stdin instead of connecting to Slack. The process runs until Ctrl-C.

use mockable::DefaultClock;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use gamebot::app::build_router;
use gamebot::command::ports::CommandDispatcher;
use gamebot::config::{SessionMode, Settings, SystemEnv};
use gamebot::game::adapters::postgres::PostgresGameRepository;
use gamebot::game::services::MissingGamePolicy;
use gamebot::observer::{LoggingObserver, command_event_channel, run_observer};
use gamebot::session::adapters::{ConsoleSession, SlackSession};
use gamebot::session::ports::BotSession;

const OBSERVER_DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = Settings::load(&SystemEnv).inspect_err(|err| {
        tracing::error!(error = %err, "failed to load configuration");
    })?;
    tracing::debug!(?settings, "configuration loaded");

    let (publisher, stream) = command_event_channel(settings.command_event_buffer);
    let observer = tokio::spawn(run_observer(stream, LoggingObserver::new()));

    let repository = Arc::new(PostgresGameRepository::from_settings(&settings.database));
    let router = build_router(
        repository,
        MissingGamePolicy::from_flag(settings.report_missing_games),
        publisher,
        Arc::new(DefaultClock),
    )?;
    let dispatcher: Arc<dyn CommandDispatcher> = Arc::new(router);

    let session: Box<dyn BotSession> = match settings.session {
        SessionMode::Slack => Box::new(SlackSession::new(settings.slack.clone())),
        SessionMode::Console => Box::new(ConsoleSession::stdio()?),
    };

    let cancel = CancellationToken::new();
    tokio::spawn({
        let shutdown = cancel.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
                Err(err) => tracing::error!(error = %err, "failed to listen for Ctrl+C"),
            }
            shutdown.cancel();
        }
    });

    let listened = session.listen(dispatcher, cancel).await;
    drop(session);

    match tokio::time::timeout(OBSERVER_DRAIN_TIMEOUT, observer).await {
        Ok(Ok(drained)) => {
            tracing::info!(observed = drained.observed(), "command observer stopped");
        }
        Ok(Err(err)) => tracing::error!(error = %err, "command observer panicked"),
        Err(_) => tracing::warn!("command observer still busy at shutdown"),
    }

    listened.inspect_err(|err| tracing::error!(error = %err, "session failed"))?;
    tracing::info!("shutdown complete");
    Ok(())
}
