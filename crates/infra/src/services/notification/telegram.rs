use super::INotificationChannel;
use anyhow::anyhow;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::error;

/// Delivers messages with the Telegram bot api. The recipient is the chat id.
pub struct TelegramChannel {
    client: Client,
    api_url: String,
    bot_token: String,
}

impl TelegramChannel {
    /// `timeout` bounds the whole request so an unresponsive api can not stall delivery
    pub fn new(api_url: String, bot_token: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            bot_token,
        })
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[async_trait::async_trait]
impl INotificationChannel for TelegramChannel {
    async fn send(&self, recipient: &str, text: &str) -> anyhow::Result<()> {
        let res = self
            .client
            .post(&format!("{}/bot{}/sendMessage", self.api_url, self.bot_token))
            .json(&SendMessageRequest {
                chat_id: recipient,
                text,
            })
            .send()
            .await
            // The url contains the bot token
            .map_err(|e| {
                let e = e.without_url();
                error!(
                    "[Network Error] Telegram sendMessage error. Error message: {:?}",
                    e
                );
                anyhow::Error::new(e)
            })?;

        let status = res.status();
        let body = res.json::<TelegramResponse>().await.map_err(|e| {
            let e = e.without_url();
            error!(
                "[Unexpected Response] Telegram sendMessage error. Error message: {:?}",
                e
            );
            anyhow::Error::new(e)
        })?;

        if !status.is_success() || !body.ok {
            return Err(anyhow!(
                "Telegram rejected the message with status {}: {}",
                status,
                body.description.unwrap_or_default()
            ));
        }
        Ok(())
    }
}
