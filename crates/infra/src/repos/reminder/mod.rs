mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::ReminderQuery;
pub use inmemory::InMemoryReminderRepo;
use nudge_domain::{Reminder, ID};
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// Persists the editable fields of the `Reminder`. Never touches `sent`.
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    /// Matching `Reminder`s ordered by `send_at`
    async fn find_by(&self, query: ReminderQuery) -> anyhow::Result<Vec<Reminder>>;
    /// The only write of the `sent` flag. Returns false if the `Reminder` does not exist.
    async fn mark_sent(&self, reminder_id: &ID, updated: i64) -> anyhow::Result<bool>;
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Repos;

    fn reminder(owner_id: &str, send_at: i64) -> Reminder {
        Reminder::new(owner_id.into(), "Stand up".into(), send_at, 0)
    }

    #[tokio::test]
    async fn create_and_delete() {
        let repos = Repos::create_inmemory();
        let reminder = reminder("1", 100);

        // Insert
        assert!(repos.reminders.insert(&reminder).await.is_ok());

        // Find
        let res = repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(res, Some(reminder.clone()));

        // Delete
        let res = repos.reminders.delete(&reminder.id).await.unwrap();
        assert_eq!(res, Some(reminder.clone()));

        // Find after delete
        assert!(repos.reminders.find(&reminder.id).await.unwrap().is_none());
        assert!(repos.reminders.delete(&reminder.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_does_not_touch_sent_flag() {
        let repos = Repos::create_inmemory();
        let mut stale = reminder("1", 100);
        repos.reminders.insert(&stale).await.unwrap();

        assert!(repos.reminders.mark_sent(&stale.id, 200).await.unwrap());

        stale.message = "Sit down".into();
        repos.reminders.save(&stale).await.unwrap();

        let res = repos.reminders.find(&stale.id).await.unwrap().unwrap();
        assert!(res.sent);
        assert_eq!(res.message, "Sit down");
    }

    #[tokio::test]
    async fn mark_sent_is_idempotent() {
        let repos = Repos::create_inmemory();
        let reminder = reminder("1", 100);
        repos.reminders.insert(&reminder).await.unwrap();

        assert!(repos.reminders.mark_sent(&reminder.id, 200).await.unwrap());
        assert!(repos.reminders.mark_sent(&reminder.id, 300).await.unwrap());
        let res = repos.reminders.find(&reminder.id).await.unwrap().unwrap();
        assert!(res.sent);
        assert_eq!(res.updated, 200);

        assert!(!repos.reminders.mark_sent(&ID::new(), 300).await.unwrap());
    }

    #[tokio::test]
    async fn find_by_query() {
        let repos = Repos::create_inmemory();
        let late = reminder("1", 300);
        let early = reminder("1", 100);
        let other_owner = reminder("2", 200);
        let sent = reminder("2", 50);
        for r in [&late, &early, &other_owner, &sent].iter() {
            repos.reminders.insert(r).await.unwrap();
        }
        repos.reminders.mark_sent(&sent.id, 60).await.unwrap();

        let all = repos.reminders.find_by(ReminderQuery::all()).await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, sent.id);

        let by_owner = repos
            .reminders
            .find_by(ReminderQuery::by_owner("1"))
            .await
            .unwrap();
        let ids = by_owner.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![early.id.clone(), late.id.clone()]);

        let due = repos.reminders.find_by(ReminderQuery::due(200)).await.unwrap();
        let ids = due.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![early.id, other_owner.id]);
    }
}
