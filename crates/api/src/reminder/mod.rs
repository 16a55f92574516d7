mod create_reminder;
mod delete_reminder;
mod get_reminders;
mod get_reminders_by_owner;
mod mark_reminder_sent;
mod send_due_reminders;
mod update_reminder;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_reminders::get_reminders_controller;
use get_reminders_by_owner::get_reminders_by_owner_controller;
use nudge_api_structs::{
    dtos::ReminderDTO, CreateReminderBody, ReminderResponse, RemindersResponse,
    UpdateReminderBody,
};
pub use send_due_reminders::{DeliveryReport, SendDueRemindersUseCase};
use update_reminder::update_reminder_controller;
use utoipa::OpenApi;

/// OpenAPI document of the reminder routes
#[derive(OpenApi)]
#[openapi(
    paths(
        create_reminder::create_reminder_controller,
        get_reminders::get_reminders_controller,
        get_reminders_by_owner::get_reminders_by_owner_controller,
        update_reminder::update_reminder_controller,
        delete_reminder::delete_reminder_controller
    ),
    components(schemas(
        ReminderDTO,
        ReminderResponse,
        RemindersResponse,
        CreateReminderBody,
        UpdateReminderBody
    )),
    tags((name = "reminders", description = "Reminder lifecycle"))
)]
pub struct ReminderApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route("/reminders", web::get().to(get_reminders_controller));

    cfg.route(
        "/reminders/{owner_id}",
        web::get().to(get_reminders_by_owner_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
}
