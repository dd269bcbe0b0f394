//! Roastify Bot - Main entry point.

use anyhow::Context;
use roast_bot::auth::{AdminPolicy, UsernameAdmin};
use roast_bot::commands::*;
use roast_bot::config::Config;
use roast_bot::error::AppResult;
use roast_store::{LeaderboardRepository, RoastStore, SqliteStore};
use std::sync::Arc;
use telegram_client::{MessageReceiver, TelegramClient};
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting Roastify bot...");

    // Open storage
    let store = Arc::new(
        SqliteStore::connect(&config.database_url).context("Failed to open database")?,
    );
    let roasts = Arc::new(RoastStore::new(store.clone()));
    let leaderboard: Arc<dyn LeaderboardRepository> = store;
    let admin: Arc<dyn AdminPolicy> = Arc::new(UsernameAdmin::new(&config.bot.admin_username));

    let telegram = TelegramClient::new(
        &config.telegram.api_url,
        config.bot_token.clone(),
        config.telegram.request_timeout(),
    )
    .context("Failed to create Telegram client")?;

    // Health check
    let me = match telegram.get_me().await {
        Ok(me) => me,
        Err(e) => {
            error!("Telegram API not reachable at {}: {}", config.telegram.api_url, e);
            return Err(e.into());
        }
    };
    info!(
        "Telegram API healthy - bot @{}",
        me.username.as_deref().unwrap_or("unknown")
    );

    // Create command handlers
    let handlers: Vec<Box<dyn CommandHandler>> = vec![
        Box::new(RoastHandler::new(roasts.clone(), leaderboard.clone())),
        Box::new(LeaderboardHandler::new(
            leaderboard.clone(),
            config.bot.leaderboard_size,
        )),
        Box::new(AddRoastHandler::new(roasts.clone(), admin.clone())),
        Box::new(ResetLeaderboardHandler::new(leaderboard.clone(), admin.clone())),
        Box::new(HelpHandler::new()),
    ];

    let mut router = CommandRouter::new(handlers);
    if let Some(username) = me.username {
        router = router.with_bot_username(username);
    }

    info!("Registered {} command handlers", router.handler_count());
    info!("Admin user: @{}", config.bot.admin_username);
    info!("Listening for messages...");

    // Start message receiver
    let receiver = MessageReceiver::new(telegram.clone(), config.telegram.poll_timeout);
    let mut stream = Box::pin(receiver.stream());

    // Main message loop
    loop {
        tokio::select! {
            Some(message) = stream.next() => {
                if let Some(reply) = router.dispatch(&message).await {
                    if let Err(e) = telegram.reply(&message, &reply.text, reply.parse_mode).await {
                        error!("Failed to send reply: {}", e);
                    }
                }
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
