mod helpers;

use helpers::setup::spawn_app;
use helpers::utils::*;
use nudge_domain::ID;
use nudge_sdk::{APIErrorVariant, CreateReminderInput, UpdateReminderInput};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_create_reminder() {
    let (_, sdk, _) = spawn_app().await;
    let send_at = now() + MINUTE;
    let reminder = create_reminder(&sdk, "1", send_at).await;
    assert_eq!(reminder.owner_id, "1");
    assert_eq!(reminder.send_at, send_at);
    assert!(!reminder.sent);
    assert_eq!(reminder.created, reminder.updated);
}

#[actix_web::main]
#[test]
async fn test_create_invalid_reminder() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .reminder
        .create(CreateReminderInput {
            owner_id: "1".into(),
            message: "".into(),
            send_at: now(),
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_list_reminders() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk.reminder.get_all().await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);

    let first = create_reminder(&sdk, "1", now() + MINUTE).await;
    let second = create_reminder(&sdk, "1", now() + 2 * MINUTE).await;
    let other = create_reminder(&sdk, "2", now()).await;

    let all = sdk.reminder.get_all().await.unwrap().reminders;
    assert_eq!(all.len(), 3);

    let by_owner = sdk.reminder.get_by_owner("1").await.unwrap().reminders;
    assert_eq!(by_owner, vec![first, second]);

    let by_owner = sdk.reminder.get_by_owner("2").await.unwrap().reminders;
    assert_eq!(by_owner, vec![other]);

    let res = sdk.reminder.get_by_owner("3").await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_crud_reminder() {
    let (_, sdk, _) = spawn_app().await;
    let reminder = create_reminder(&sdk, "1", now() + MINUTE).await;

    let updated = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id.clone(),
            owner_id: Some("2".into()),
            message: Some("Changed".into()),
            send_at: None,
        })
        .await
        .expect("Expected to update reminder")
        .reminder;
    assert_eq!(updated.id, reminder.id);
    assert_eq!(updated.owner_id, "2");
    assert_eq!(updated.message, "Changed");
    assert_eq!(updated.send_at, reminder.send_at);
    assert_eq!(get_reminder(&sdk, &updated).await, updated);

    let deleted = sdk
        .reminder
        .delete(reminder.id.clone())
        .await
        .expect("Expected to delete reminder")
        .reminder;
    assert_eq!(deleted, updated);

    // Everything after delete should be not found
    let res = sdk.reminder.delete(reminder.id.clone()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
    let res = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id,
            owner_id: None,
            message: Some("Again".into()),
            send_at: None,
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_unknown_and_malformed_ids() {
    let (_, sdk, address) = spawn_app().await;
    let res = sdk.reminder.delete(ID::new()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);

    let res = reqwest::Client::new()
        .delete(&format!("{}/reminders/not-an-id", address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[actix_web::main]
#[test]
async fn test_list_reminders_of_owner_with_reserved_characters() {
    let (_, sdk, _) = spawn_app().await;
    let owner_id = "ops/night shift?#1";
    let reminder = create_reminder(&sdk, owner_id, now() + MINUTE).await;
    create_reminder(&sdk, "ops", now() + MINUTE).await;

    let reminders = sdk.reminder.get_by_owner(owner_id).await.unwrap().reminders;
    assert_eq!(reminders, vec![reminder]);
}
