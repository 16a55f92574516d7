mod inmemory;
mod telegram;
mod webhook;

use crate::config::NotificationConfig;
use anyhow::anyhow;
pub use inmemory::{InMemoryNotificationChannel, Notification};
use std::{sync::Arc, time::Duration};
pub use telegram::TelegramChannel;
pub use webhook::WebhookChannel;

/// Delivers a text message to a recipient.
///
/// Implementations give no retry guarantees, an `Err` simply means that
/// the message was not delivered.
#[async_trait::async_trait]
pub trait INotificationChannel: Send + Sync {
    async fn send(&self, recipient: &str, text: &str) -> anyhow::Result<()>;
}

/// Used when no channel is configured. Every delivery fails so that
/// reminders are kept pending.
pub struct DisabledChannel {}

#[async_trait::async_trait]
impl INotificationChannel for DisabledChannel {
    async fn send(&self, _recipient: &str, _text: &str) -> anyhow::Result<()> {
        Err(anyhow!("No notification channel is configured"))
    }
}

pub fn create_notification_channel(
    config: &NotificationConfig,
    timeout: Duration,
) -> anyhow::Result<Arc<dyn INotificationChannel>> {
    let channel: Arc<dyn INotificationChannel> = match config {
        NotificationConfig::Telegram { api_url, bot_token } => Arc::new(TelegramChannel::new(
            api_url.clone(),
            bot_token.clone(),
            timeout,
        )?),
        NotificationConfig::Webhook { url, key } => {
            Arc::new(WebhookChannel::new(url.clone(), key.clone(), timeout)?)
        }
        NotificationConfig::Disabled => Arc::new(DisabledChannel {}),
    };
    Ok(channel)
}
