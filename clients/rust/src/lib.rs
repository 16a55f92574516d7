mod base;
mod reminder;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use nudge_api_structs::dtos::*;
use nudge_api_structs::get_service_health;
pub use nudge_domain::ID;
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
use reqwest::StatusCode;
use std::sync::Arc;

// Domain
pub use nudge_api_structs::dtos::ReminderDTO as Reminder;

/// Nudge Server SDK
///
/// The SDK contains methods for interacting with the Nudge server
/// API.
#[derive(Clone)]
pub struct NudgeSDK {
    base: Arc<BaseClient>,
    pub reminder: ReminderClient,
}

impl NudgeSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());

        Self { base, reminder }
    }

    pub async fn check_health(&self) -> APIResponse<get_service_health::APIResponse> {
        self.base.get("".into(), StatusCode::OK).await
    }
}
