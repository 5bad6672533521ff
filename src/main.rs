use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use guildbot::{
    bot,
    command::CommandRegistry,
    config::Config,
    error::AppError,
    gateway::{discord::SerenityGateway, ChatGateway},
    startup::{self, AppServer},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let gateway: Arc<dyn ChatGateway> =
        Arc::new(SerenityGateway::new(bot::start::discord_http(&config)));

    let mut registry = CommandRegistry::new();
    startup::register_commands(&mut registry);
    let dispatcher = Arc::new(startup::build_dispatcher(&config, registry, db, gateway));

    // Start Discord bot in a separate task
    let bot_client = bot::start::init_bot(&config, dispatcher).await?;
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    AppServer::new(&config).serve().await
}
