//! Slack Socket Mode session.
//!
//! Plain channel messages and app mentions are dispatched as commands.
//! Replies go back to the originating channel with `chat.postMessage`,
//! in-thread when the inbound message was part of a thread.

use async_trait::async_trait;
use slack_morphism::prelude::*;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::command::domain::CommandContext;
use crate::command::ports::{
    CommandDispatcher, DispatchOutcome, ResponseError, ResponseResult, ResponseWriter,
};
use crate::config::SlackSettings;
use crate::session::ports::{BotSession, SessionError, SessionResult};

/// Session connected to Slack over Socket Mode.
#[derive(Debug, Clone)]
pub struct SlackSession {
    settings: SlackSettings,
}

impl SlackSession {
    /// Creates a session authenticating with `settings`.
    #[must_use]
    pub const fn new(settings: SlackSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl BotSession for SlackSession {
    async fn listen(
        &self,
        dispatcher: Arc<dyn CommandDispatcher>,
        cancel: CancellationToken,
    ) -> SessionResult<()> {
        tracing::info!("connecting to Slack via Socket Mode");
        let client = Arc::new(SlackClient::new(
            SlackClientHyperConnector::new().map_err(SessionError::connect)?,
        ));

        let state = ListenerState {
            dispatcher,
            bot_token: SlackApiToken::new(self.settings.bot_token.clone().into()),
        };

        let callbacks = SlackSocketModeListenerCallbacks::new().with_push_events(handle_push_event);
        let environment = Arc::new(
            SlackClientEventsListenerEnvironment::new(Arc::clone(&client))
                .with_error_handler(error_handler)
                .with_user_state(state),
        );
        let listener = SlackClientSocketModeListener::new(
            &SlackClientSocketModeConfig::new(),
            environment,
            callbacks,
        );

        let app_token = SlackApiToken::new(self.settings.app_token.clone().into());
        listener
            .listen_for(&app_token)
            .await
            .map_err(SessionError::connect)?;
        listener.start().await;
        tracing::info!("Slack session listening");

        cancel.cancelled().await;
        tracing::info!("shutting down Slack session");
        listener.shutdown().await;
        Ok(())
    }
}

/// State shared with the Socket Mode callbacks.
#[derive(Clone)]
struct ListenerState {
    dispatcher: Arc<dyn CommandDispatcher>,
    bot_token: SlackApiToken,
}

/// One chat message worth dispatching.
#[derive(Debug)]
pub(crate) struct InboundMessage {
    pub(crate) channel: SlackChannelId,
    pub(crate) thread_ts: Option<SlackTs>,
    pub(crate) user: Option<SlackUserId>,
    pub(crate) text: String,
}

async fn handle_push_event(
    event: SlackPushEventCallback,
    client: Arc<SlackHyperClient>,
    states: SlackClientEventsUserState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let Some(state) = states.read().await.get_user_state::<ListenerState>().cloned() else {
        tracing::error!("Slack listener state missing");
        return Ok(());
    };

    let Some(inbound) = inbound_message(event.event) else {
        return Ok(());
    };

    tokio::spawn(dispatch_inbound(state, client, inbound));
    Ok(())
}

/// Extracts a dispatchable message; edits, joins and bot posts yield `None`.
pub(crate) fn inbound_message(body: SlackEventCallbackBody) -> Option<InboundMessage> {
    match body {
        SlackEventCallbackBody::Message(msg) => {
            if msg.subtype.is_some() || msg.sender.bot_id.is_some() {
                return None;
            }
            Some(InboundMessage {
                channel: msg.origin.channel?,
                thread_ts: msg.origin.thread_ts,
                user: msg.sender.user,
                text: msg.content.and_then(|content| content.text)?,
            })
        }
        SlackEventCallbackBody::AppMention(mention) => Some(InboundMessage {
            channel: mention.channel,
            thread_ts: mention.origin.thread_ts,
            user: Some(mention.user),
            text: strip_leading_mention(mention.content.text.as_deref().unwrap_or_default())
                .to_owned(),
        }),
        _ => None,
    }
}

async fn dispatch_inbound(
    state: ListenerState,
    client: Arc<SlackHyperClient>,
    inbound: InboundMessage,
) {
    let mut context = CommandContext::new().with_channel(inbound.channel.0.clone());
    if let Some(user) = &inbound.user {
        context = context.with_user(user.0.clone());
    }

    let writer = SlackResponseWriter::new(client, state.bot_token, inbound.channel)
        .with_thread_ts(inbound.thread_ts);
    let outcome = state
        .dispatcher
        .dispatch(&context, &inbound.text, &writer)
        .await;
    if outcome == DispatchOutcome::Ignored {
        tracing::debug!(channel = ?context.channel_id(), "no command matched Slack message");
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "slack-morphism fixes the error handler signature"
)]
fn error_handler(
    err: Box<dyn std::error::Error + Send + Sync>,
    _client: Arc<SlackHyperClient>,
    _states: SlackClientEventsUserState,
) -> HttpStatusCode {
    tracing::error!(error = %err, "Slack socket mode error");
    HttpStatusCode::OK
}

/// Removes a leading `<@U123>` user mention and surrounding whitespace.
#[must_use]
pub fn strip_leading_mention(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("<@")
        .and_then(|rest| rest.split_once('>'))
        .map_or(trimmed, |(_, remainder)| remainder.trim())
}

/// Renders an error report the way the bot posts it.
#[must_use]
pub fn format_error_report(message: &str) -> String {
    format!("*Error:* _{message}_")
}

/// Posts replies into one Slack conversation.
#[derive(Clone)]
pub struct SlackResponseWriter {
    client: Arc<SlackHyperClient>,
    token: SlackApiToken,
    channel: SlackChannelId,
    thread_ts: Option<SlackTs>,
}

impl SlackResponseWriter {
    /// Creates a writer posting to `channel` with `token`.
    #[must_use]
    pub const fn new(
        client: Arc<SlackHyperClient>,
        token: SlackApiToken,
        channel: SlackChannelId,
    ) -> Self {
        Self {
            client,
            token,
            channel,
            thread_ts: None,
        }
    }

    /// Posts into the thread rooted at `thread_ts`, when given.
    #[must_use]
    pub fn with_thread_ts(mut self, thread_ts: Option<SlackTs>) -> Self {
        self.thread_ts = thread_ts;
        self
    }

    async fn post(&self, text: String) -> ResponseResult<()> {
        let mut request = SlackApiChatPostMessageRequest::new(
            self.channel.clone(),
            SlackMessageContent::new().with_text(text),
        );
        if let Some(ts) = &self.thread_ts {
            request = request.with_thread_ts(ts.clone());
        }

        let session = self.client.open_session(&self.token);
        session
            .chat_post_message(&request)
            .await
            .map_err(ResponseError::delivery)?;
        Ok(())
    }
}

#[async_trait]
impl ResponseWriter for SlackResponseWriter {
    async fn reply(&self, text: &str) -> ResponseResult<()> {
        self.post(text.to_owned()).await
    }

    async fn report_error(&self, message: &str) -> ResponseResult<()> {
        self.post(format_error_report(message)).await
    }
}
