//! Logging middleware
//!
//! This module provides a pre-invocation hook that records incoming messages
//! and a helper for timing handler execution.

use std::time::{Duration, Instant};
use teloxide::types::{ChatKind, Message};
use tracing::{info, instrument, warn};
use crate::utils::errors::Result;
use super::locale::{message_language_code, InvocationPipeline};

/// Name of the pre-invocation hook installed by [`LoggingMiddleware::install`]
pub const LOGGING_HOOK: &str = "logging";

/// Logging middleware for bot interactions
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    log_user_interactions: bool,
    log_performance: bool,
}

impl LoggingMiddleware {
    /// Create a new LoggingMiddleware instance
    pub fn new(log_user_interactions: bool, log_performance: bool) -> Self {
        Self {
            log_user_interactions,
            log_performance,
        }
    }

    /// Register the message logging hook on a pipeline
    pub fn install(&self, pipeline: &mut InvocationPipeline<Message>) -> Result<()> {
        let middleware = self.clone();
        pipeline.before_invoke(LOGGING_HOOK, move |msg: &Message| {
            middleware.log_message(msg);
            Ok(())
        })
    }

    /// Log message details
    #[instrument(skip(self, message))]
    pub fn log_message(&self, message: &Message) {
        if !self.log_user_interactions {
            return;
        }

        let chat_type = match message.chat.kind {
            ChatKind::Public(_) => "public",
            ChatKind::Private(_) => "private",
        };

        info!(
            user_id = message.from.as_ref().map(|u| u.id.0),
            chat_id = message.chat.id.0,
            chat_type = chat_type,
            language_code = message_language_code(message).unwrap_or("none"),
            message_id = message.id.0,
            "Message received"
        );
    }

    /// Log how long a handler took
    pub fn log_performance(&self, operation: &str, duration: Duration, success: bool) {
        if !self.log_performance {
            return;
        }

        let duration_ms = duration.as_millis();

        if success {
            info!(
                operation = operation,
                duration_ms = duration_ms,
                "Operation completed successfully"
            );
        } else {
            warn!(
                operation = operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        if duration_ms > 1000 {
            warn!(
                operation = operation,
                duration_ms = duration_ms,
                "Slow operation detected"
            );
        }
    }

    /// Start timing an operation
    pub fn track(&self, operation: &str) -> PerformanceTracker {
        PerformanceTracker {
            operation: operation.to_string(),
            started: Instant::now(),
        }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Measures one operation started with [`LoggingMiddleware::track`]
#[derive(Debug)]
pub struct PerformanceTracker {
    operation: String,
    started: Instant,
}

impl PerformanceTracker {
    /// Stop the timer and log the result
    pub fn finish(self, middleware: &LoggingMiddleware, success: bool) -> Duration {
        let elapsed = self.started.elapsed();
        middleware.log_performance(&self.operation, elapsed, success);
        elapsed
    }
}
