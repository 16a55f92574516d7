use crate::dtos::ReminderDTO;
use nudge_domain::Reminder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemindersResponse {
    pub reminders: Vec<ReminderDTO>,
}

impl RemindersResponse {
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderBody {
    pub owner_id: String,
    pub message: String,
    /// Timestamp in millis
    pub send_at: i64,
}

/// Omitted fields keep their current value
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderBody {
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub send_at: Option<i64>,
}

pub mod create_reminder {
    use super::*;

    pub type RequestBody = CreateReminderBody;

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminders_by_owner {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub owner_id: String,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod update_reminder {
    use super::*;

    /// Path ids are parsed by the handler so that malformed ids give a 400
    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: String,
    }

    pub type RequestBody = UpdateReminderBody;

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: String,
    }

    pub type APIResponse = ReminderResponse;
}
