mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, NotificationConfig};
pub use repos::{IReminderRepo, ReminderQuery, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};
use tracing::warn;

#[derive(Clone)]
pub struct NudgeContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotificationChannel>,
}

impl NudgeContext {
    fn create(repos: Repos, config: Config) -> anyhow::Result<Self> {
        let notifier =
            create_notification_channel(&config.notification, config.notification_timeout)?;
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier,
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<NudgeContext> {
    let config = Config::new();
    let repos = match get_psql_connection_string() {
        Some(connection_string) => Repos::create_postgres(&connection_string).await?,
        None => {
            warn!("DATABASE_URL env var is not set. Reminders will only be kept in memory.");
            Repos::create_inmemory()
        }
    };

    NudgeContext::create(repos, config)
}

/// Context backed by in-memory repos, regardless of the environment
pub fn setup_inmemory_context() -> anyhow::Result<NudgeContext> {
    NudgeContext::create(Repos::create_inmemory(), Config::new())
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .ok()
        .filter(|url| !url.is_empty())
}
