use nudge_api::Application;
use nudge_infra::{
    setup_inmemory_context, InMemoryNotificationChannel, NotificationConfig, NudgeContext,
};
use nudge_sdk::NudgeSDK;
use std::sync::Arc;

pub struct TestApp {
    /// Shares the repos with the running server
    pub ctx: NudgeContext,
    pub notifier: Arc<InMemoryNotificationChannel>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, NudgeSDK, String) {
    let mut ctx = setup_inmemory_context().expect("To build in-memory context");
    ctx.config.port = 0; // Random port
    // Delivery cycles are triggered by the tests themselves
    ctx.config.notification = NotificationConfig::Disabled;
    let notifier = Arc::new(InMemoryNotificationChannel::new());
    ctx.notifier = notifier.clone();

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx, notifier };
    let sdk = NudgeSDK::new(address.clone());
    (app, sdk, address)
}
