//! HTTP boundary: the webhook that creates reminders and the per-recipient
//! management endpoints. Everything else in the service is driven by the
//! background sweep, not by requests.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::store::{InvalidReminderError, Reminder, ReminderKey, ReminderStore};
use crate::utils::datetime::{format_datetime, parse_datetime, truncate_to_minute};

#[derive(Debug, Deserialize)]
pub struct SetReminderRequest {
    pub recipient_id: String,
    pub scheduled_time: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetReminderResponse {
    pub confirmation: String,
    pub recipient_id: String,
    pub scheduled_time: chrono::DateTime<chrono::Utc>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct WebState {
    pub store: Arc<ReminderStore>,
}

/// Builds the webhook router over a shared store.
pub fn router(store: Arc<ReminderStore>) -> Router {
    let state = WebState { store };

    Router::new()
        .route("/webhook", post(set_reminder))
        .route("/reminders/:recipient_id", get(list_reminders))
        .route("/reminders/:recipient_id/:scheduled_time", delete(cancel_reminder))
        .with_state(state)
}

async fn set_reminder(
    State(state): State<WebState>,
    Json(request): Json<SetReminderRequest>,
) -> Result<(StatusCode, Json<SetReminderResponse>), (StatusCode, Json<ErrorResponse>)> {
    let scheduled_time = parse_datetime(&request.scheduled_time)
        .map_err(|e| InvalidReminderError::ScheduledTime(e.to_string()))
        .map_err(bad_request)?;

    let reminder = Reminder::new(request.recipient_id, scheduled_time, request.message)
        .map_err(bad_request)?;

    let confirmation = format!(
        "Reminder set for {}: {}",
        format_datetime(&reminder.scheduled_time),
        reminder.message
    );

    info!(
        "Reminder set for recipient {} at {}",
        reminder.recipient_id, reminder.scheduled_time
    );

    let response = SetReminderResponse {
        confirmation,
        recipient_id: reminder.recipient_id.clone(),
        scheduled_time: reminder.scheduled_time,
        message: reminder.message.clone(),
    };
    state.store.add(reminder).await;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_reminders(
    State(state): State<WebState>,
    Path(recipient_id): Path<String>,
) -> Json<Vec<Reminder>> {
    Json(state.store.list(&recipient_id).await)
}

async fn cancel_reminder(
    State(state): State<WebState>,
    Path((recipient_id, scheduled_time)): Path<(String, String)>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let scheduled_time = parse_datetime(&scheduled_time)
        .map_err(|e| InvalidReminderError::ScheduledTime(e.to_string()))
        .map_err(bad_request)?;

    let key = ReminderKey {
        recipient_id,
        scheduled_minute: truncate_to_minute(scheduled_time),
    };

    if state.store.cancel(&key).await {
        info!(
            "Cancelled reminder for recipient {} at {}",
            key.recipient_id, key.scheduled_minute
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No pending reminder at that time".to_string(),
            }),
        ))
    }
}

fn bad_request(e: InvalidReminderError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
