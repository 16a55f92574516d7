use super::mark_reminder_sent::{MarkReminderSentUseCase, UseCaseError as MarkSentError};
use crate::shared::usecase::{execute, UseCase};
use nudge_infra::{NudgeContext, ReminderQuery};
use tracing::{error, info, warn};

/// One delivery cycle: sends every due `Reminder` and marks the delivered
/// ones as sent.
///
/// A failed delivery leaves the `Reminder` pending so it is retried in the
/// next cycle. If the delivery succeeds but marking it as sent fails, it is
/// delivered again in the next cycle as well.
#[derive(Debug)]
pub struct SendDueRemindersUseCase {}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeliveryReport {
    /// Reminders that were due in this cycle
    pub due: usize,
    pub delivered: usize,
    pub failed: usize,
    /// Delivered, but still stored as pending
    pub unmarked: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = DeliveryReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueReminders";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let reminders = match ctx.repos.reminders.find_by(ReminderQuery::due(now)).await {
            Ok(reminders) => reminders,
            Err(e) => {
                error!("Unable to fetch due reminders: {:?}", e);
                return Err(UseCaseError::StorageError);
            }
        };
        let reminders = reminders
            .into_iter()
            .filter(|r| r.is_due(now))
            .collect::<Vec<_>>();

        let mut report = DeliveryReport {
            due: reminders.len(),
            ..Default::default()
        };

        for reminder in reminders {
            if let Err(e) = ctx
                .notifier
                .send(&reminder.owner_id, &reminder.message)
                .await
            {
                warn!(reminder_id = %reminder.id, "Unable to deliver reminder: {:?}", e);
                report.failed += 1;
                continue;
            }
            info!(reminder_id = %reminder.id, "Reminder delivered");
            report.delivered += 1;

            let usecase = MarkReminderSentUseCase {
                reminder_id: reminder.id.clone(),
            };
            match execute(usecase, ctx).await {
                Ok(()) => (),
                // Deleted after it was picked up, nothing left to mark
                Err(MarkSentError::NotFound(_)) => {
                    info!(reminder_id = %reminder.id, "Delivered reminder was deleted before it could be marked as sent");
                }
                Err(MarkSentError::StorageError) => {
                    warn!(reminder_id = %reminder.id, "Delivered reminder is still pending and will be sent again");
                    report.unmarked += 1;
                }
            }
        }

        Ok(report)
    }
}
