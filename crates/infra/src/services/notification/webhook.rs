use super::INotificationChannel;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::error;

const WEBHOOK_KEY_HEADER: &str = "nudge-webhook-key";

/// Posts every message as json to a fixed url
pub struct WebhookChannel {
    client: Client,
    url: String,
    key: Option<String>,
}

impl WebhookChannel {
    pub fn new(url: String, key: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, key })
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    recipient: &'a str,
    message: &'a str,
}

#[async_trait::async_trait]
impl INotificationChannel for WebhookChannel {
    async fn send(&self, recipient: &str, text: &str) -> anyhow::Result<()> {
        let mut req = self.client.post(&self.url).json(&WebhookPayload {
            recipient,
            message: text,
        });
        if let Some(key) = &self.key {
            req = req.header(WEBHOOK_KEY_HEADER, key);
        }

        match req.send().await.and_then(|res| res.error_for_status()) {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Error informing webhook of reminder: {:?}", e);
                Err(anyhow::Error::new(e))
            }
        }
    }
}
