use nudge_domain::{Reminder, ID};
use nudge_infra::{
    setup_inmemory_context, FixedSys, IReminderRepo, InMemoryNotificationChannel, NudgeContext,
    ReminderQuery, Repos,
};
use std::sync::Arc;

/// In-memory context frozen at `now` with a recording notification channel
pub fn setup_test_context(now: i64) -> (NudgeContext, Arc<InMemoryNotificationChannel>) {
    let mut ctx = setup_inmemory_context().expect("To build in-memory context");
    let notifier = Arc::new(InMemoryNotificationChannel::new());
    ctx.sys = Arc::new(FixedSys::new(now));
    ctx.notifier = notifier.clone();
    (ctx, notifier)
}

pub async fn insert_reminder(ctx: &NudgeContext, owner_id: &str, send_at: i64) -> Reminder {
    let reminder = Reminder::new(owner_id.into(), format!("Ping {}", owner_id), send_at, 0);
    ctx.repos
        .reminders
        .insert(&reminder)
        .await
        .expect("To insert reminder");
    reminder
}

pub async fn find_reminder(ctx: &NudgeContext, reminder_id: &ID) -> Option<Reminder> {
    ctx.repos
        .reminders
        .find(reminder_id)
        .await
        .expect("To query reminder")
}

/// Reminder repo where chosen operations always fail
pub struct FlakyReminderRepo {
    inner: Arc<dyn IReminderRepo>,
    pub fail_find_by: bool,
    pub fail_mark_sent: bool,
    pub fail_writes: bool,
    /// Removes the reminder right before it would be marked as sent
    pub delete_before_mark_sent: bool,
}

impl FlakyReminderRepo {
    pub fn new() -> Self {
        Self {
            inner: Repos::create_inmemory().reminders,
            fail_find_by: false,
            fail_mark_sent: false,
            fail_writes: false,
            delete_before_mark_sent: false,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for FlakyReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("insert failed");
        }
        self.inner.insert(reminder).await
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("save failed");
        }
        self.inner.save(reminder).await
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        self.inner.find(reminder_id).await
    }

    async fn find_by(&self, query: ReminderQuery) -> anyhow::Result<Vec<Reminder>> {
        if self.fail_find_by {
            anyhow::bail!("find_by failed");
        }
        self.inner.find_by(query).await
    }

    async fn mark_sent(&self, reminder_id: &ID, updated: i64) -> anyhow::Result<bool> {
        if self.fail_mark_sent {
            anyhow::bail!("mark_sent failed");
        }
        if self.delete_before_mark_sent {
            self.inner.delete(reminder_id).await?;
        }
        self.inner.mark_sent(reminder_id, updated).await
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        if self.fail_writes {
            anyhow::bail!("delete failed");
        }
        self.inner.delete(reminder_id).await
    }
}
