use dotenvy::dotenv;
use frete_smart::{
    analysis::GeminiAnalyzer,
    bot::{self, BotData},
    config::{database, settings},
    core::store::TripStore,
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load settings
    let app_settings = settings::load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;

    // 4. Open the database and load the trip log
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    let store = TripStore::load(db, &app_settings.storage.trips_key)
        .await
        .inspect(|store| info!("Trip log ready with {} trips", store.list().len()))
        .inspect_err(|e| error!("Failed to load trips: {}", e))?;

    // 5. AI analysis is optional; the bot runs without it
    let analyzer = GeminiAnalyzer::from_env(&app_settings.analysis)?;

    // 6. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(store, analyzer)).await
}
