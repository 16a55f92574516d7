use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_PORT: usize = 5000;
const DEFAULT_SEND_REMINDERS_INTERVAL_SECS: u64 = 60;
const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// How long the send reminders job sleeps after each delivery cycle
    /// before it looks for due reminders again.
    pub send_reminders_interval: Duration,
    /// Where due reminders are delivered to
    pub notification: NotificationConfig,
    /// Upper bound for a single delivery request
    pub notification_timeout: Duration,
}

#[derive(Clone, PartialEq)]
pub enum NotificationConfig {
    Telegram { api_url: String, bot_token: String },
    Webhook { url: String, key: Option<String> },
    /// No channel configured. Reminders stay pending until one is.
    Disabled,
}

impl NotificationConfig {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    fn from_env() -> Self {
        if let Some(bot_token) = non_empty_var("TELEGRAM_BOT_TOKEN") {
            let api_url = non_empty_var("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.into())
                .trim_end_matches('/')
                .to_string();
            info!("Reminders will be delivered through the Telegram bot api");
            return Self::Telegram { api_url, bot_token };
        }

        if let Some(url) = non_empty_var("NUDGE_WEBHOOK_URL") {
            match url::Url::parse(&url) {
                Ok(parsed) if ["http", "https"].contains(&parsed.scheme()) => {
                    info!("Reminders will be delivered to the webhook: {}", url);
                    return Self::Webhook {
                        url,
                        key: non_empty_var("NUDGE_WEBHOOK_KEY"),
                    };
                }
                _ => warn!(
                    "The given NUDGE_WEBHOOK_URL: {} is not a valid http(s) url, ignoring it.",
                    url
                ),
            }
        }

        warn!("Neither TELEGRAM_BOT_TOKEN nor NUDGE_WEBHOOK_URL is set. Reminders will not be delivered.");
        Self::Disabled
    }
}

// Keeps the bot token and webhook key out of the logs
impl std::fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Telegram { api_url, .. } => f
                .debug_struct("Telegram")
                .field("api_url", api_url)
                .finish_non_exhaustive(),
            Self::Webhook { url, .. } => f
                .debug_struct("Webhook")
                .field("url", url)
                .finish_non_exhaustive(),
            Self::Disabled => write!(f, "Disabled"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.trim().is_empty())
}

fn positive_secs_var(key: &str, default: u64) -> u64 {
    match non_empty_var(key) {
        Some(secs) => match secs.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, secs, default
                );
                default
            }
        },
        None => default,
    }
}

impl Config {
    pub fn new() -> Self {
        let port = match non_empty_var("PORT") {
            Some(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        let interval_secs = positive_secs_var(
            "SEND_REMINDERS_INTERVAL_SECS",
            DEFAULT_SEND_REMINDERS_INTERVAL_SECS,
        );
        let timeout_secs =
            positive_secs_var("NOTIFICATION_TIMEOUT_SECS", DEFAULT_NOTIFICATION_TIMEOUT_SECS);

        Self {
            port,
            send_reminders_interval: Duration::from_secs(interval_secs),
            notification: NotificationConfig::from_env(),
            notification_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
