//! Bot handlers module
//!
//! This module contains the Telegram command handlers of the demo bot.

pub mod commands;

// Re-export commonly used handler functions
pub use commands::{handle_command, render_reply, Command};
