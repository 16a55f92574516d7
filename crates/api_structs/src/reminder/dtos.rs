use nudge_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    #[schema(value_type = String)]
    pub id: ID,
    pub owner_id: String,
    pub message: String,
    /// Timestamp in millis
    pub send_at: i64,
    pub sent: bool,
    pub created: i64,
    pub updated: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            owner_id: reminder.owner_id,
            message: reminder.message,
            send_at: reminder.send_at,
            sent: reminder.sent,
            created: reminder.created,
            updated: reminder.updated,
        }
    }
}
