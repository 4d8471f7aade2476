use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::services::notifier::NotificationSender;
use crate::store::{Reminder, ReminderStore};

/// Drives the reminder sweep on a fixed cadence, independent of request
/// traffic. The interval starts at process boot and is not aligned to
/// wall-clock minute boundaries.
pub struct ReminderScheduler {
    store: Arc<ReminderStore>,
    sender: Arc<dyn NotificationSender>,
    interval: Duration,
    scheduler: JobScheduler,
}

impl ReminderScheduler {
    pub async fn new(
        store: Arc<ReminderStore>,
        sender: Arc<dyn NotificationSender>,
        interval: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            store,
            sender,
            interval,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = self.store.clone();
        let sender = self.sender.clone();

        let sweep_job = Job::new_repeated_async(self.interval, move |_uuid, _l| {
            let store = store.clone();
            let sender = sender.clone();
            Box::pin(async move {
                sweep_and_deliver(&store, sender.as_ref(), Utc::now()).await;
            })
        })?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Reminder scheduler started - sweeping every {}s",
            self.interval.as_secs()
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn sweep_now(&self) {
        sweep_and_deliver(&self.store, self.sender.as_ref(), Utc::now()).await;
    }
}

/// One sweep tick: remove every reminder due at `now` and attempt delivery of
/// each. Reminders are consumed by the sweep regardless of delivery outcome
/// (at-most-once); a failed send never blocks the remaining due reminders.
pub async fn sweep_and_deliver(
    store: &ReminderStore,
    sender: &dyn NotificationSender,
    now: chrono::DateTime<Utc>,
) {
    let due = store.sweep(now).await;
    if due.is_empty() {
        return;
    }

    tracing::info!("Sweep at {} found {} due reminder(s)", now, due.len());

    for reminder in due {
        if send_reminder(sender, &reminder).await {
            tracing::info!(
                "Delivered reminder to {} scheduled for {}",
                reminder.recipient_id,
                reminder.scheduled_time
            );
        }
    }
}

/// Formats the notification text delivered for a reminder.
pub fn format_reminder_text(reminder: &Reminder) -> String {
    format!("⏰ Reminder: {}", reminder.message)
}

async fn send_reminder(sender: &dyn NotificationSender, reminder: &Reminder) -> bool {
    let text = format_reminder_text(reminder);

    match sender.send(&reminder.recipient_id, &text).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(
                "Failed to send reminder to {}: {}",
                reminder.recipient_id,
                e
            );
            false
        }
    }
}
