use crate::{
    error::NudgeError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use nudge_api_structs::{get_reminders::*, RemindersResponse};
use nudge_domain::Reminder;
use nudge_infra::{NudgeContext, ReminderQuery};

#[utoipa::path(
    get,
    path = "/reminders",
    tag = "reminders",
    responses(
        (status = 200, description = "Every reminder ordered by send time", body = RemindersResponse),
        (status = 404, description = "There are no reminders"),
        (status = 500, description = "The reminder store failed")
    )
)]
pub async fn get_reminders_controller(
    ctx: web::Data<NudgeContext>,
) -> Result<HttpResponse, NudgeError> {
    let usecase = GetRemindersUseCase {
        query: ReminderQuery::all(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(NudgeError::from)
}

/// Lists the `Reminder`s matching the query, both pending and sent.
/// Finding none at all is reported as `NotFound`.
#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub query: ReminderQuery,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    StorageError,
}

impl From<UseCaseError> for NudgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("No reminders were found.".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .repos
            .reminders
            .find_by(self.query.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        if reminders.is_empty() {
            return Err(UseCaseError::NotFound);
        }
        Ok(reminders)
    }
}
