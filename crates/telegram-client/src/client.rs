//! Telegram Bot API HTTP client.

use crate::error::TelegramError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Telegram Bot API client.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl TelegramClient {
    /// Create a new Telegram client.
    ///
    /// `timeout` must exceed the long-polling timeout passed to
    /// [`TelegramClient::get_updates`].
    pub fn new(
        base_url: impl Into<String>,
        token: SecretString,
        timeout: Duration,
    ) -> Result<Self, TelegramError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token.expose_secret(), method)
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, TelegramError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // Request URLs embed the bot token; strip them from transport errors.
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let text = response.text().await.map_err(reqwest::Error::without_url)?;

        let envelope: ApiResponse<T> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => return Err(TelegramError::Api(format!("{}: {}", status, text))),
        };

        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| status.to_string());
            return Err(TelegramError::Api(description));
        }

        envelope
            .result
            .ok_or_else(|| TelegramError::Api(format!("{} returned no result", method)))
    }

    /// Get the bot's own user. Doubles as the startup health check.
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// Long-poll for updates starting at `offset`.
    #[instrument(skip(self))]
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<Update>, TelegramError> {
        let request = GetUpdatesRequest {
            offset,
            timeout: timeout.as_secs(),
            allowed_updates: vec!["message".into()],
        };

        let updates: Vec<Update> = self.call("getUpdates", &request).await?;
        debug!("Received {} updates", updates.len());
        Ok(updates)
    }

    /// Send a message to a chat.
    #[instrument(skip(self, text))]
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to_message_id: Option<i64>,
        parse_mode: Option<ParseMode>,
    ) -> Result<(), TelegramError> {
        let request = SendMessageRequest {
            chat_id,
            text: text.to_string(),
            reply_to_message_id,
            parse_mode,
        };

        match self
            .call::<_, serde_json::Value>("sendMessage", &request)
            .await
        {
            Ok(_) => {
                debug!("Sent message to {}", chat_id);
                Ok(())
            }
            Err(TelegramError::Api(msg)) => {
                warn!("Send failed: {}", msg);
                Err(TelegramError::SendFailed(msg))
            }
            Err(e) => Err(e),
        }
    }

    /// Reply to a message in the chat it came from.
    pub async fn reply(
        &self,
        original: &BotMessage,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<(), TelegramError> {
        self.send_message(original.chat_id, text, Some(original.message_id), parse_mode)
            .await
    }
}
