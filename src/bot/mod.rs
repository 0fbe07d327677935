//! Bot layer - Discord interface for the trip log
//!
//! This module wires the core trip store and the optional AI analyzer into slash
//! commands, and owns the poise framework setup.

/// Discord command implementations (trips, dashboard, analysis, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{analysis::GeminiAnalyzer, core::store::TripStore, errors::Error};
use poise::serenity_prelude as serenity;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
///
/// The trip store is the single owned store of the application; commands take the
/// read lock to list and the write lock to add.
pub struct BotData {
    /// The trip log
    pub store: RwLock<TripStore>,
    /// AI analysis client, absent when not configured
    pub analyzer: Option<GeminiAnalyzer>,
}

impl BotData {
    /// Creates the shared command context.
    #[must_use]
    pub fn new(store: TripStore, analyzer: Option<GeminiAnalyzer>) -> Self {
        Self {
            store: RwLock::new(store),
            analyzer,
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("❌ An error occurred: {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Starts the Discord client and blocks until it stops.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<(), Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::dashboard(),
                commands::trips(),
                commands::trip(),
                commands::addtrip(),
                commands::analyze(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Registered commands globally");
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
