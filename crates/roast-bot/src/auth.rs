//! Admin authorization for privileged commands.

use telegram_client::BotMessage;

/// Decides whether the sender of a message may run admin commands.
pub trait AdminPolicy: Send + Sync {
    fn is_admin(&self, message: &BotMessage) -> bool;
}

/// Grants admin rights to a single Telegram username.
///
/// Exact, case-sensitive match. Senders without a username never match.
pub struct UsernameAdmin {
    username: String,
}

impl UsernameAdmin {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl AdminPolicy for UsernameAdmin {
    fn is_admin(&self, message: &BotMessage) -> bool {
        message.username.as_deref() == Some(self.username.as_str())
    }
}
