//! Telegram Bot API types.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every Bot API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

/// Incoming update from `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

/// Request body for `getUpdates`.
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: Vec<String>,
}

/// Formatting mode for outgoing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    Markdown,
}

/// Request body for `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
}

/// Parsed message for bot processing.
#[derive(Debug, Clone)]
pub struct BotMessage {
    /// Chat the message was posted in.
    pub chat_id: i64,
    /// Message ID within the chat, used to thread replies.
    pub message_id: i64,
    /// Sender's numeric Telegram ID.
    pub user_id: i64,
    /// Sender's `@username`, if they have one.
    pub username: Option<String>,
    pub first_name: String,
    /// The message text.
    pub text: String,
}

impl BotMessage {
    /// Extract a bot message from an update. Non-text messages, messages
    /// without a sender, and messages sent by other bots are skipped.
    pub fn from_update(update: &Update) -> Option<Self> {
        let message = update.message.as_ref()?;
        let text = message.text.clone()?;
        let from = message.from.as_ref().filter(|from| !from.is_bot)?;

        Some(Self {
            chat_id: message.chat.id,
            message_id: message.message_id,
            user_id: from.id,
            username: from.username.clone(),
            first_name: from.first_name.clone(),
            text,
        })
    }

    /// Username when set, otherwise the first name.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.first_name)
    }
}
