//! Add roast command - admin-only, appends a roast to a level.

use crate::auth::AdminPolicy;
use crate::commands::{split_args, CommandHandler, Reply, UNAUTHORIZED_REPLY};
use crate::error::AppResult;
use async_trait::async_trait;
use roast_store::RoastStore;
use std::sync::Arc;
use telegram_client::BotMessage;
use tracing::warn;

pub const USAGE: &str = "Usage: /addroast level roast_text";

pub struct AddRoastHandler {
    roasts: Arc<RoastStore>,
    admin: Arc<dyn AdminPolicy>,
}

impl AddRoastHandler {
    pub fn new(roasts: Arc<RoastStore>, admin: Arc<dyn AdminPolicy>) -> Self {
        Self { roasts, admin }
    }
}

#[async_trait]
impl CommandHandler for AddRoastHandler {
    fn commands(&self) -> &'static [&'static str] {
        &["addroast"]
    }

    async fn execute(&self, message: &BotMessage) -> AppResult<Reply> {
        if !self.admin.is_admin(message) {
            warn!("Rejected /addroast from user {}", message.user_id);
            return Ok(Reply::text(UNAUTHORIZED_REPLY));
        }

        // Level is stored as given; it is not checked against the roast categories.
        let args = split_args(&message.text, 3);
        let [_, level, text] = args.as_slice() else {
            return Ok(Reply::text(USAGE));
        };

        self.roasts.add_roast(level, text).await?;
        Ok(Reply::text(format!("✅ Roast added to {} category!", level)))
    }
}
