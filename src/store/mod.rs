//! In-memory store of pending reminders.
//!
//! The store holds only reminders that have not yet fired. Delivered reminders
//! are removed by the sweep and never kept as history. The mapping sits behind
//! an async mutex so the webhook handler's inserts and the scheduler's sweeps
//! are mutually exclusive.

mod reminder;

pub use reminder::{InvalidReminderError, Reminder, ReminderKey};

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::utils::datetime::truncate_to_minute;

/// Owned, injectable store of pending reminders keyed by
/// `(recipient_id, scheduled_minute)`.
#[derive(Debug, Default)]
pub struct ReminderStore {
    reminders: Mutex<HashMap<ReminderKey, Reminder>>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a reminder, silently overwriting any existing entry at the same
    /// key. Returns the key the reminder was stored under.
    pub async fn add(&self, reminder: Reminder) -> ReminderKey {
        let key = reminder.key();
        let mut reminders = self.reminders.lock().await;
        if let Some(previous) = reminders.insert(key.clone(), reminder) {
            debug!(
                "Overwrote reminder for recipient {} at {}: '{}' replaced",
                previous.recipient_id, previous.scheduled_time, previous.message
            );
        }
        key
    }

    /// Atomically removes and returns every reminder due at `now` (truncated to
    /// the minute). A second sweep at the same minute returns nothing.
    pub async fn sweep(&self, now: DateTime<Utc>) -> Vec<Reminder> {
        let minute = truncate_to_minute(now);
        let mut reminders = self.reminders.lock().await;

        let due_keys: Vec<ReminderKey> = reminders
            .keys()
            .filter(|key| key.scheduled_minute == minute)
            .cloned()
            .collect();

        due_keys
            .into_iter()
            .filter_map(|key| reminders.remove(&key))
            .collect()
    }

    /// Removes a pending reminder. Returns `false` if no reminder was stored
    /// under the key (already delivered, cancelled, or never set).
    pub async fn cancel(&self, key: &ReminderKey) -> bool {
        self.reminders.lock().await.remove(key).is_some()
    }

    /// Pending reminders for one recipient, soonest first.
    pub async fn list(&self, recipient_id: &str) -> Vec<Reminder> {
        let reminders = self.reminders.lock().await;
        let mut pending: Vec<Reminder> = reminders
            .values()
            .filter(|r| r.recipient_id == recipient_id)
            .cloned()
            .collect();
        pending.sort_by_key(|r| r.scheduled_time);
        pending
    }

    /// Number of pending reminders across all recipients.
    pub async fn pending_count(&self) -> usize {
        self.reminders.lock().await.len()
    }
}
