//! Roast command - sends a random roast at a mentioned user.

use crate::commands::{CommandHandler, Reply};
use crate::error::AppResult;
use async_trait::async_trait;
use roast_store::{LeaderboardRepository, RoastCategory, RoastStore};
use std::sync::Arc;
use telegram_client::BotMessage;
use tracing::info;

pub const USAGE: &str = "Usage: /roast @username level (mild, medium, savage, nuclear)";
pub const INVALID_LEVEL: &str =
    "Invalid roast level! Choose from mild, medium, savage, or nuclear.";

pub struct RoastHandler {
    roasts: Arc<RoastStore>,
    leaderboard: Arc<dyn LeaderboardRepository>,
}

impl RoastHandler {
    pub fn new(roasts: Arc<RoastStore>, leaderboard: Arc<dyn LeaderboardRepository>) -> Self {
        Self {
            roasts,
            leaderboard,
        }
    }
}

#[async_trait]
impl CommandHandler for RoastHandler {
    fn commands(&self) -> &'static [&'static str] {
        &["roast"]
    }

    async fn execute(&self, message: &BotMessage) -> AppResult<Reply> {
        let args: Vec<&str> = message.text.split_whitespace().collect();
        if args.len() < 3 {
            return Ok(Reply::text(USAGE));
        }

        let target = args[1];
        let Ok(category) = args[2].to_lowercase().parse::<RoastCategory>() else {
            return Ok(Reply::text(INVALID_LEVEL));
        };

        let roast = self.roasts.get_roast(category).await?;

        // The leaderboard counts roasts issued by the sender, not the target.
        self.leaderboard
            .record_roast(message.user_id, message.display_name())
            .await?;

        info!("User {} roasted {} ({})", message.user_id, target, category);
        Ok(Reply::text(format!("🔥 {}, {}", target, roast)))
    }
}
