/// Filter used when looking up `Reminder`s. Every field that is `None`
/// matches all reminders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderQuery {
    pub owner_id: Option<String>,
    pub sent: Option<bool>,
    /// Only reminders with `send_at` less than or equal to this timestamp
    pub send_at_before: Option<i64>,
}

impl ReminderQuery {
    pub fn all() -> Self {
        Default::default()
    }

    pub fn by_owner(owner_id: &str) -> Self {
        Self {
            owner_id: Some(owner_id.to_string()),
            ..Default::default()
        }
    }

    /// Reminders that have not been sent and whose send time has passed
    pub fn due(now: i64) -> Self {
        Self {
            owner_id: None,
            sent: Some(false),
            send_at_before: Some(now),
        }
    }
}
