//! Bot command handlers.

mod add_roast;
mod help;
mod leaderboard;
mod reset;
mod roast;

pub use add_roast::AddRoastHandler;
pub use help::HelpHandler;
pub use leaderboard::LeaderboardHandler;
pub use reset::ResetLeaderboardHandler;
pub use roast::RoastHandler;

use crate::error::AppResult;
use async_trait::async_trait;
use telegram_client::{BotMessage, ParseMode};
use tracing::{debug, error};

/// Sent when a handler fails, e.g. the store is unreachable.
pub const FAILURE_REPLY: &str = "Sorry, something went wrong.";

/// Sent when a non-admin runs an admin command.
pub const UNAUTHORIZED_REPLY: &str = "🚫 You are not authorized to use this command.";

/// Text to send back for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
}

impl Reply {
    /// Plain-text reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
        }
    }

    /// Reply rendered with Telegram's legacy Markdown.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: Some(ParseMode::Markdown),
        }
    }
}

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command names this handler answers, without the slash (e.g., "roast").
    fn commands(&self) -> &'static [&'static str];

    /// Check if this handler answers the parsed command name.
    fn matches(&self, command: &str) -> bool {
        self.commands().contains(&command)
    }

    /// Execute the command.
    async fn execute(&self, message: &BotMessage) -> AppResult<Reply>;
}

/// Extract the command name from message text.
///
/// `/roast@RoastifyBot @bob mild` yields `roast`. Names are lowercased, so
/// `/Roast` matches too. A suffix naming another bot yields `None`; with no
/// known bot username any suffix is accepted.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<String> {
    let token = text.split_whitespace().next()?;
    let command = token.strip_prefix('/')?;

    let name = match command.split_once('@') {
        Some((name, target)) => {
            if let Some(me) = bot_username {
                if !target.eq_ignore_ascii_case(me) {
                    return None;
                }
            }
            name
        }
        None => command,
    };

    (!name.is_empty()).then(|| name.to_lowercase())
}

/// Split on whitespace into at most `max` tokens.
///
/// The last token keeps the rest of the text, internal whitespace included.
pub fn split_args(text: &str, max: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() && max > 0 {
        if parts.len() + 1 == max {
            parts.push(rest);
            break;
        }

        match rest.find(char::is_whitespace) {
            Some(idx) => {
                parts.push(&rest[..idx]);
                rest = rest[idx..].trim_start();
            }
            None => {
                parts.push(rest);
                break;
            }
        }
    }

    parts
}

/// Routes incoming messages to the matching command handler.
pub struct CommandRouter {
    handlers: Vec<Box<dyn CommandHandler>>,
    bot_username: Option<String>,
}

impl CommandRouter {
    pub fn new(handlers: Vec<Box<dyn CommandHandler>>) -> Self {
        Self {
            handlers,
            bot_username: None,
        }
    }

    /// Only accept `/command@suffix` forms addressed to this bot.
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handle a message, returning the reply to send.
    ///
    /// Non-commands and unknown commands return `None`. Handler errors are
    /// logged and answered with [`FAILURE_REPLY`].
    pub async fn dispatch(&self, message: &BotMessage) -> Option<Reply> {
        let command = parse_command(&message.text, self.bot_username.as_deref())?;

        let Some(handler) = self.handlers.iter().find(|h| h.matches(&command)) else {
            debug!("Ignoring unknown command /{}", command);
            return None;
        };

        match handler.execute(message).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!("Handler error for /{}: {}", command, e);
                Some(Reply::text(FAILURE_REPLY))
            }
        }
    }
}
