use crate::shared::usecase::UseCase;
use nudge_domain::ID;
use nudge_infra::NudgeContext;

/// Flips the `sent` flag of a delivered `Reminder`. This is the only
/// place the flag is written, and running it twice is harmless.
#[derive(Debug)]
pub struct MarkReminderSentUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkReminderSentUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "MarkReminderSent";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        match ctx.repos.reminders.mark_sent(&self.reminder_id, now).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(UseCaseError::NotFound(self.reminder_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::*;

    #[actix_web::main]
    #[test]
    async fn marks_sent_once() {
        let (ctx, _) = setup_test_context(1000);
        let reminder = insert_reminder(&ctx, "1", 500).await;

        let mut usecase = MarkReminderSentUseCase {
            reminder_id: reminder.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(usecase.execute(&ctx).await.is_ok());

        let sent = find_reminder(&ctx, &reminder.id).await.unwrap();
        assert!(sent.sent);
        assert_eq!(sent.updated, 1000);
    }

    #[actix_web::main]
    #[test]
    async fn unknown_reminder() {
        let (ctx, _) = setup_test_context(1000);
        let reminder_id = ID::new();
        let mut usecase = MarkReminderSentUseCase {
            reminder_id: reminder_id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(reminder_id)
        );
    }
}
