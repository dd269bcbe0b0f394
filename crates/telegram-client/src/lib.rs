//! Telegram Bot API client.

mod client;
mod error;
mod receiver;
mod types;

pub use client::TelegramClient;
pub use error::TelegramError;
pub use receiver::MessageReceiver;
pub use types::*;
