use crate::{
    error::NudgeError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use nudge_api_structs::{update_reminder::*, ReminderResponse, UpdateReminderBody};
use nudge_domain::{LifecycleError, Reminder, ReminderUpdate, ID};
use nudge_infra::NudgeContext;

#[utoipa::path(
    put,
    path = "/reminders/{reminder_id}",
    tag = "reminders",
    params(
        ("reminder_id" = String, Path, description = "Id of the reminder")
    ),
    request_body = UpdateReminderBody,
    responses(
        (status = 200, description = "The updated reminder", body = ReminderResponse),
        (status = 400, description = "Malformed id, invalid fields, or the reminder has already been sent"),
        (status = 404, description = "The reminder was not found"),
        (status = 500, description = "The reminder store failed")
    )
)]
pub async fn update_reminder_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<NudgeContext>,
) -> Result<HttpResponse, NudgeError> {
    let reminder_id = Guard::against_malformed_id(&path.reminder_id)?;

    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id,
        update: ReminderUpdate {
            owner_id: body.owner_id,
            message: body.message,
            send_at: body.send_at,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(NudgeError::from)
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub update: ReminderUpdate,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    AlreadySent(ID),
    InvalidReminder(LifecycleError),
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
                "Cannot update reminder that has already been sent. Reminder id: {}",
                reminder_id
            )),
            UseCaseError::InvalidReminder(err) => err.into(),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let now = ctx.sys.get_timestamp_millis();
        reminder
            .apply_update(self.update.clone(), now)
            .map_err(|e| match e {
                LifecycleError::AlreadySent => {
                    UseCaseError::AlreadySent(self.reminder_id.clone())
                }
                e => UseCaseError::InvalidReminder(e),
            })?;

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
