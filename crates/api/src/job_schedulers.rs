use crate::{
    reminder::{DeliveryReport, SendDueRemindersUseCase},
    shared::usecase::execute,
};
use actix_web::rt::time::sleep;
use nudge_infra::NudgeContext;
use tracing::{info, warn};

/// Runs a delivery cycle, then sleeps for the full interval, forever.
///
/// Cycles are awaited inline so two of them never run at the same time.
pub fn start_send_reminders_job(ctx: NudgeContext) {
    if ctx.config.notification.is_disabled() {
        warn!("No notification channel is configured, the send reminders job will not be started.");
        return;
    }

    actix_web::rt::spawn(async move {
        loop {
            send_reminders(&ctx).await;
            sleep(ctx.config.send_reminders_interval).await;
        }
    });
}

/// A single delivery cycle. Returns `None` if the due reminders could not be fetched.
pub async fn send_reminders(ctx: &NudgeContext) -> Option<DeliveryReport> {
    let usecase = SendDueRemindersUseCase {};
    // Errors are logged by `execute`
    let report = execute(usecase, ctx).await.ok()?;

    if report.due > 0 {
        info!(
            due = report.due,
            delivered = report.delivered,
            failed = report.failed,
            unmarked = report.unmarked,
            "Delivery cycle finished"
        );
    }
    Some(report)
}
