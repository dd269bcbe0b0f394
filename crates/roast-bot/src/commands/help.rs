//! Help command - displays available commands.

use crate::commands::{CommandHandler, Reply};
use crate::error::AppResult;
use async_trait::async_trait;
use telegram_client::BotMessage;

pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn commands(&self) -> &'static [&'static str] {
        &["help", "start"]
    }

    async fn execute(&self, _message: &BotMessage) -> AppResult<Reply> {
        Ok(Reply::text(
            r#"🔥 Roastify 🔥

Commands:
/roast @username level - Roast someone (mild, medium, savage, nuclear)
/leaderboard - Top roasters
/help - Show this message

Admin:
/addroast level roast_text - Add a roast
/resetleaderboard - Clear the leaderboard"#,
        ))
    }
}
