use crate::{
    error::NudgeError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use nudge_api_structs::{delete_reminder::*, ReminderResponse};
use nudge_domain::{Reminder, ID};
use nudge_infra::NudgeContext;

#[utoipa::path(
    delete,
    path = "/reminders/{reminder_id}",
    tag = "reminders",
    params(
        ("reminder_id" = String, Path, description = "Id of the reminder")
    ),
    responses(
        (status = 200, description = "The deleted reminder", body = ReminderResponse),
        (status = 400, description = "Malformed id, or the reminder has already been sent"),
        (status = 404, description = "The reminder was not found"),
        (status = 500, description = "The reminder store failed")
    )
)]
pub async fn delete_reminder_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<NudgeContext>,
) -> Result<HttpResponse, NudgeError> {
    let reminder_id = Guard::against_malformed_id(&path.reminder_id)?;
    let usecase = DeleteReminderUseCase { reminder_id };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(NudgeError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    AlreadySent(ID),
    StorageError,
}

impl From<UseCaseError> for NudgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::AlreadySent(reminder_id) => Self::BadClientData(format!(
                "Cannot delete reminder that has already been sent. Reminder id: {}",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        let reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };
        if reminder.ensure_deletable().is_err() {
            return Err(UseCaseError::AlreadySent(reminder.id));
        }

        match ctx.repos.reminders.delete(&reminder.id).await {
            Ok(Some(deleted)) => Ok(deleted),
            // Deleted by someone else in the meantime
            Ok(None) => Err(UseCaseError::NotFound(reminder.id)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
