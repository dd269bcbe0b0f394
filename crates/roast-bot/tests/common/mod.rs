//! Common test utilities for integration tests.

use roast_bot::auth::{AdminPolicy, UsernameAdmin};
use roast_bot::commands::*;
use roast_store::{LeaderboardRepository, MemoryStore, RoastRepository, RoastStore};
use std::sync::Arc;
use telegram_client::BotMessage;

pub const ADMIN: &str = "Mint_Dino";

/// A private-chat message from a user with a username.
pub fn message(user_id: i64, username: &str, text: &str) -> BotMessage {
    BotMessage {
        chat_id: user_id,
        message_id: 100,
        user_id,
        username: Some(username.to_string()),
        first_name: username.to_string(),
        text: text.to_string(),
    }
}

/// A private-chat message from a user who has no `@username`.
pub fn anonymous_message(user_id: i64, first_name: &str, text: &str) -> BotMessage {
    BotMessage {
        chat_id: user_id,
        message_id: 101,
        user_id,
        username: None,
        first_name: first_name.to_string(),
        text: text.to_string(),
    }
}

/// Router wired the same way as the binary, over the given repositories.
pub fn router_with(
    roast_repo: Arc<dyn RoastRepository>,
    leaderboard: Arc<dyn LeaderboardRepository>,
) -> CommandRouter {
    let roasts = Arc::new(RoastStore::new(roast_repo));
    let admin: Arc<dyn AdminPolicy> = Arc::new(UsernameAdmin::new(ADMIN));

    CommandRouter::new(vec![
        Box::new(RoastHandler::new(roasts.clone(), leaderboard.clone())),
        Box::new(LeaderboardHandler::new(leaderboard.clone(), 10)),
        Box::new(AddRoastHandler::new(roasts, admin.clone())),
        Box::new(ResetLeaderboardHandler::new(leaderboard, admin)),
        Box::new(HelpHandler::new()),
    ])
    .with_bot_username("RoastifyBot")
}

/// Router over a fresh in-memory store, returned alongside the store.
pub fn memory_router() -> (CommandRouter, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let router = router_with(store.clone(), store.clone());
    (router, store)
}
