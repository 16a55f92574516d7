use crate::{
    error::NudgeError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use nudge_api_structs::{create_reminder::*, CreateReminderBody, ReminderResponse};
use nudge_domain::{LifecycleError, Reminder};
use nudge_infra::NudgeContext;

#[utoipa::path(
    post,
    path = "/reminders",
    tag = "reminders",
    request_body = CreateReminderBody,
    responses(
        (status = 201, description = "The created reminder", body = ReminderResponse),
        (status = 400, description = "Empty owner id or message, or a malformed body"),
        (status = 500, description = "The reminder store failed")
    )
)]
pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<NudgeContext>,
) -> Result<HttpResponse, NudgeError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        owner_id: body.owner_id,
        message: body.message,
        send_at: body.send_at,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(NudgeError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub owner_id: String,
    pub message: String,
    pub send_at: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidReminder(LifecycleError),
    StorageError,
}

impl From<UseCaseError> for NudgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidReminder(err) => err.into(),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        let reminder = Reminder::new(
            self.owner_id.clone(),
            self.message.clone(),
            self.send_at,
            ctx.sys.get_timestamp_millis(),
        );
        reminder.validate().map_err(UseCaseError::InvalidReminder)?;

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
