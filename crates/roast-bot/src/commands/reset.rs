//! Reset leaderboard command - admin-only, clears every entry.

use crate::auth::AdminPolicy;
use crate::commands::{CommandHandler, Reply, UNAUTHORIZED_REPLY};
use crate::error::AppResult;
use async_trait::async_trait;
use roast_store::LeaderboardRepository;
use std::sync::Arc;
use telegram_client::BotMessage;
use tracing::{info, warn};

pub struct ResetLeaderboardHandler {
    leaderboard: Arc<dyn LeaderboardRepository>,
    admin: Arc<dyn AdminPolicy>,
}

impl ResetLeaderboardHandler {
    pub fn new(leaderboard: Arc<dyn LeaderboardRepository>, admin: Arc<dyn AdminPolicy>) -> Self {
        Self { leaderboard, admin }
    }
}

#[async_trait]
impl CommandHandler for ResetLeaderboardHandler {
    fn commands(&self) -> &'static [&'static str] {
        &["resetleaderboard"]
    }

    async fn execute(&self, message: &BotMessage) -> AppResult<Reply> {
        if !self.admin.is_admin(message) {
            warn!("Rejected /resetleaderboard from user {}", message.user_id);
            return Ok(Reply::text(UNAUTHORIZED_REPLY));
        }

        let removed = self.leaderboard.reset_all().await?;
        info!("Leaderboard reset by {} ({} entries)", message.display_name(), removed);

        Ok(Reply::text("✅ Leaderboard has been reset!"))
    }
}
