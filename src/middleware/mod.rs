//! Middleware module
//!
//! This module contains middleware for request processing: the pre-invocation
//! hook pipeline and the hooks shipped with the crate.

pub mod locale;
pub mod logging;

// Re-export commonly used middleware
pub use locale::{message_language_code, user_language_code, InvocationPipeline, PreInvokeHook};
pub use logging::LoggingMiddleware;
