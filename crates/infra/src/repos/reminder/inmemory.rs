use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::ReminderQuery};
use nudge_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders)
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        update(&reminder.id, &self.reminders, |stored| {
            stored.owner_id = reminder.owner_id.clone();
            stored.message = reminder.message.clone();
            stored.send_at = reminder.send_at;
            stored.updated = reminder.updated;
        })?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by(&self, query: ReminderQuery) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| {
            query.owner_id.as_ref().map_or(true, |owner| r.owner_id == *owner)
                && query.sent.map_or(true, |sent| r.sent == sent)
                && query.send_at_before.map_or(true, |ts| r.send_at <= ts)
        })?;
        reminders.sort_by_key(|r| r.send_at);
        Ok(reminders)
    }

    async fn mark_sent(&self, reminder_id: &ID, updated: i64) -> anyhow::Result<bool> {
        update(reminder_id, &self.reminders, |stored| stored.mark_sent(updated))
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        delete(reminder_id, &self.reminders)
    }
}
