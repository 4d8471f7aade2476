use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::datetime::truncate_to_minute;
use crate::utils::validation::{validate_message, validate_recipient_id};

/// Rejection reasons for malformed reminder input. Surfaced synchronously to
/// the caller; nothing invalid ever reaches the store.
#[derive(Debug, Error)]
pub enum InvalidReminderError {
    #[error("recipient id is invalid: {0}")]
    Recipient(String),
    #[error("reminder message is invalid: {0}")]
    Message(String),
    #[error("scheduled time is invalid: {0}")]
    ScheduledTime(String),
}

/// Composite key identifying a pending reminder: one slot per recipient per
/// minute. Inserting at an occupied key overwrites the previous entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderKey {
    pub recipient_id: String,
    pub scheduled_minute: DateTime<Utc>,
}

/// A scheduled text notification for a recipient at a specific minute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub recipient_id: String,
    pub scheduled_time: DateTime<Utc>,
    pub message: String,
}

impl Reminder {
    /// Builds a validated reminder. The scheduled time is truncated to minute
    /// resolution, which is the granularity the sweep matches at.
    pub fn new(
        recipient_id: impl Into<String>,
        scheduled_time: DateTime<Utc>,
        message: impl Into<String>,
    ) -> Result<Self, InvalidReminderError> {
        let recipient_id = recipient_id.into();
        let message = message.into();

        validate_recipient_id(&recipient_id)
            .map_err(|e| InvalidReminderError::Recipient(e.to_string()))?;
        validate_message(&message).map_err(|e| InvalidReminderError::Message(e.to_string()))?;

        Ok(Reminder {
            recipient_id: recipient_id.trim().to_string(),
            scheduled_time: truncate_to_minute(scheduled_time),
            message: message.trim().to_string(),
        })
    }

    /// The store key for this reminder.
    pub fn key(&self) -> ReminderKey {
        ReminderKey {
            recipient_id: self.recipient_id.clone(),
            scheduled_minute: self.scheduled_time,
        }
    }
}
