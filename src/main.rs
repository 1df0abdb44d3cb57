//! bot18n demo bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{error, info, warn};

use bot18n::{
    config::{validation::validate_bot_config, Settings},
    handlers::commands::{self, Command},
    i18n::{I18n, I18nExtension},
    middleware::{message_language_code, InvocationPipeline, LoggingMiddleware},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;
    validate_bot_config(&settings.bot)?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {} demo bot...", bot18n::info());

    // Initialize i18n system
    info!("Loading translations...");
    let i18n = I18n::load(&settings.i18n).await?;
    let extension = I18nExtension::new(i18n, true);

    // Pre-invocation hooks, run in registration order
    let logger = LoggingMiddleware::default();
    let mut pipeline = InvocationPipeline::<Message>::new();
    logger.install(&mut pipeline)?;

    let detector = Arc::clone(&extension);
    extension.init_bot_with(&mut pipeline, move |msg: &Message| {
        detector.i18n().detect_user_language(message_language_code(msg))
    })?;
    info!(hooks = ?pipeline.hook_names(), "Invocation pipeline ready");

    let bot = Bot::new(&settings.bot.token);

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![Arc::new(pipeline), extension, logger])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("bot18n demo bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message().branch(
        dptree::entry()
            .filter_command::<Command>()
            .endpoint(handle_commands),
    )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    pipeline: Arc<InvocationPipeline<Message>>,
    i18n: Arc<I18nExtension>,
    logger: LoggingMiddleware,
) -> HandlerResult {
    if let Err(e) = commands::handle_command(bot, msg, cmd, pipeline, i18n, logger).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}
