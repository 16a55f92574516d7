use super::INotificationChannel;
use anyhow::anyhow;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub recipient: String,
    pub text: String,
}

/// Channel that keeps every message in memory. Used for testing.
#[derive(Default)]
pub struct InMemoryNotificationChannel {
    attempts: Mutex<Vec<Notification>>,
    delivered: Mutex<Vec<Notification>>,
    failing_recipients: Mutex<Vec<String>>,
}

impl InMemoryNotificationChannel {
    pub fn new() -> Self {
        Default::default()
    }

    /// Makes every following delivery to `recipient` fail
    pub fn fail_for(&self, recipient: &str) {
        if let Ok(mut failing) = self.failing_recipients.lock() {
            failing.push(recipient.to_string());
        }
    }

    pub fn recover(&self, recipient: &str) {
        if let Ok(mut failing) = self.failing_recipients.lock() {
            failing.retain(|r| r != recipient);
        }
    }

    /// Every call to `send`, including the failed ones
    pub fn attempts(&self) -> Vec<Notification> {
        self.attempts.lock().map(|a| a.clone()).unwrap_or_default()
    }

    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl INotificationChannel for InMemoryNotificationChannel {
    async fn send(&self, recipient: &str, text: &str) -> anyhow::Result<()> {
        let notification = Notification {
            recipient: recipient.to_string(),
            text: text.to_string(),
        };
        self.attempts
            .lock()
            .map_err(|_| anyhow!("Lock poisoned"))?
            .push(notification.clone());

        let should_fail = self
            .failing_recipients
            .lock()
            .map_err(|_| anyhow!("Lock poisoned"))?
            .iter()
            .any(|r| r == recipient);
        if should_fail {
            return Err(anyhow!("Delivery to {} failed", recipient));
        }

        self.delivered
            .lock()
            .map_err(|_| anyhow!("Lock poisoned"))?
            .push(notification);
        Ok(())
    }
}
