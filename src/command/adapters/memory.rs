//! In-memory response writer that records what handlers send.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::command::ports::{ResponseResult, ResponseWriter};

/// One message sent by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedResponse {
    /// Sent with [`ResponseWriter::reply`].
    Reply(String),
    /// Sent with [`ResponseWriter::report_error`].
    Error(String),
}

/// Thread-safe response writer that keeps every message in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingResponseWriter {
    responses: Arc<Mutex<Vec<RecordedResponse>>>,
}

impl RecordingResponseWriter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded messages.
    #[must_use]
    pub fn responses(&self) -> Vec<RecordedResponse> {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, response: RecordedResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(response);
    }
}

#[async_trait]
impl ResponseWriter for RecordingResponseWriter {
    async fn reply(&self, text: &str) -> ResponseResult<()> {
        self.record(RecordedResponse::Reply(text.to_owned()));
        Ok(())
    }

    async fn report_error(&self, message: &str) -> ResponseResult<()> {
        self.record(RecordedResponse::Error(message.to_owned()));
        Ok(())
    }
}
