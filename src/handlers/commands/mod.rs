//! Command handlers module
//!
//! Every command runs through the invocation pipeline so the sender's locale
//! is bound before any text is translated.

pub mod help;
pub mod start;
pub mod stats;

use std::sync::Arc;
use teloxide::{prelude::*, types::Message, utils::command::BotCommands};
use tracing::error;
use crate::i18n::I18nExtension;
use crate::middleware::{InvocationPipeline, LoggingMiddleware};
use crate::utils::errors::Result;

/// Commands understood by the demo bot
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "bot18n demo commands")]
pub enum Command {
    #[command(description = "Greet the user in their language")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Show the language used for replies")]
    Language,
    #[command(description = "Show translation statistics")]
    Stats,
}

/// Build the reply for a command in the current locale
pub fn render_reply(cmd: &Command, first_name: &str, i18n: &I18nExtension) -> Result<String> {
    match cmd {
        Command::Start => start::render_start(first_name),
        Command::Help => help::render_help(&Command::descriptions().to_string()),
        Command::Language => start::render_language(i18n),
        Command::Stats => stats::render_stats(i18n),
    }
}

/// Handle a bot command
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    pipeline: Arc<InvocationPipeline<Message>>,
    i18n: Arc<I18nExtension>,
    logger: LoggingMiddleware,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let tracker = logger.track(&format!("command:{:?}", cmd));

    let reply = pipeline
        .invoke(msg, move |msg| async move {
            let first_name = msg
                .from
                .as_ref()
                .map(|u| u.first_name.clone())
                .unwrap_or_default();
            render_reply(&cmd, &first_name, &i18n)
        })
        .await
        .and_then(|reply| reply);

    tracker.finish(&logger, reply.is_ok());

    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => {
            error!(error = %e, "Failed to render command reply");
            return Err(e);
        }
    };

    bot.send_message(chat_id, reply).await?;
    Ok(())
}
