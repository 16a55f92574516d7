use chrono::Utc;
use nudge_sdk::{CreateReminderInput, NudgeSDK, Reminder};

pub const MINUTE: i64 = 1000 * 60;

pub fn now() -> i64 {
    Utc::now().timestamp_millis()
}

pub async fn create_reminder(sdk: &NudgeSDK, owner_id: &str, send_at: i64) -> Reminder {
    sdk.reminder
        .create(CreateReminderInput {
            owner_id: owner_id.into(),
            message: format!("Reminder for {}", owner_id),
            send_at,
        })
        .await
        .expect("Expected to create reminder")
        .reminder
}

pub async fn get_reminder(sdk: &NudgeSDK, reminder: &Reminder) -> Reminder {
    sdk.reminder
        .get_by_owner(&reminder.owner_id)
        .await
        .expect("Expected to list reminders")
        .reminders
        .into_iter()
        .find(|r| r.id == reminder.id)
        .expect("Expected reminder to exist")
}
