use super::get_reminders::GetRemindersUseCase;
use crate::{error::NudgeError, shared::usecase::execute};
use actix_web::{web, HttpResponse};
use nudge_api_structs::{get_reminders_by_owner::*, RemindersResponse};
use nudge_infra::{NudgeContext, ReminderQuery};

#[utoipa::path(
    get,
    path = "/reminders/{owner_id}",
    tag = "reminders",
    params(
        ("owner_id" = String, Path, description = "Owner of the reminders")
    ),
    responses(
        (status = 200, description = "Reminders of the owner ordered by send time", body = RemindersResponse),
        (status = 404, description = "The owner has no reminders"),
        (status = 500, description = "The reminder store failed")
    )
)]
pub async fn get_reminders_by_owner_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<NudgeContext>,
) -> Result<HttpResponse, NudgeError> {
    let usecase = GetRemindersUseCase {
        query: ReminderQuery::by_owner(&path.owner_id),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(NudgeError::from)
}
