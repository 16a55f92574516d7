use crate::{APIResponse, BaseClient, ID};
use nudge_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub owner_id: String,
    pub message: String,
    /// Timestamp in millis
    pub send_at: i64,
}

pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub owner_id: Option<String>,
    pub message: Option<String>,
    pub send_at: Option<i64>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            owner_id: input.owner_id,
            message: input.message,
            send_at: input.send_at,
        };

        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn get_by_owner(
        &self,
        owner_id: &str,
    ) -> APIResponse<get_reminders_by_owner::APIResponse> {
        let url = self.base.segments_url(&["reminders", owner_id])?;
        self.base.get_url(url, StatusCode::OK).await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            owner_id: input.owner_id,
            message: input.message,
            send_at: input.send_at,
        };

        self.base
            .put(
                body,
                format!("reminders/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }
}
