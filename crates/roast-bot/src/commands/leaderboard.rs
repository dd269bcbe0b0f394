//! Leaderboard command - shows who has issued the most roasts.

use crate::commands::{CommandHandler, Reply};
use crate::error::AppResult;
use async_trait::async_trait;
use roast_store::{LeaderboardEntry, LeaderboardRepository};
use std::sync::Arc;
use telegram_client::BotMessage;

pub const EMPTY_LEADERBOARD: &str = "No roasts recorded yet!";

pub struct LeaderboardHandler {
    leaderboard: Arc<dyn LeaderboardRepository>,
    size: usize,
}

impl LeaderboardHandler {
    pub fn new(leaderboard: Arc<dyn LeaderboardRepository>, size: usize) -> Self {
        Self { leaderboard, size }
    }
}

#[async_trait]
impl CommandHandler for LeaderboardHandler {
    fn commands(&self) -> &'static [&'static str] {
        &["leaderboard"]
    }

    async fn execute(&self, _message: &BotMessage) -> AppResult<Reply> {
        let entries = self.leaderboard.top(self.size).await?;

        if entries.is_empty() {
            return Ok(Reply::text(EMPTY_LEADERBOARD));
        }

        Ok(Reply::markdown(render(&entries)))
    }
}

fn render(entries: &[LeaderboardEntry]) -> String {
    let mut text = String::from("🔥 *Roastify Leaderboard* 🔥\n\n");

    for (rank, entry) in entries.iter().enumerate() {
        text.push_str(&format!(
            "{}. @{} - {} roasts received\n",
            rank + 1,
            escape_markdown(&entry.username),
            entry.roasts_received
        ));
    }

    text
}

/// Escape characters that legacy Markdown treats as entity markers.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
