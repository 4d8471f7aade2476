#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use reminder_bot::store::{Reminder, ReminderStore};

fn reminder(recipient: &str, y: i32, mo: u32, d: u32, h: u32, mi: u32, message: &str) -> Reminder {
    let scheduled = Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
    Reminder::new(recipient, scheduled, message).unwrap()
}

#[tokio::test]
async fn test_add_and_sweep_single_reminder() {
    let store = ReminderStore::new();
    store.add(reminder("42", 2024, 1, 1, 9, 0, "stand up")).await;

    let due = store
        .sweep(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
        .await;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].recipient_id, "42");
    assert_eq!(due[0].message, "stand up");
    assert_eq!(store.pending_count().await, 0);
}

#[tokio::test]
async fn test_same_key_overwrites() {
    let store = ReminderStore::new();
    store.add(reminder("42", 2024, 1, 1, 9, 0, "first")).await;
    store.add(reminder("42", 2024, 1, 1, 9, 0, "second")).await;

    assert_eq!(store.pending_count().await, 1);

    let due = store
        .sweep(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
        .await;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].message, "second");
}

#[tokio::test]
async fn test_sweep_matches_exact_minute_only() {
    let store = ReminderStore::new();
    store.add(reminder("42", 2024, 1, 1, 8, 59, "early")).await;
    store.add(reminder("42", 2024, 1, 1, 9, 0, "on time")).await;
    store.add(reminder("42", 2024, 1, 1, 9, 1, "late")).await;

    let due = store
        .sweep(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
        .await;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].message, "on time");
    // Earlier and later reminders remain pending
    assert_eq!(store.pending_count().await, 2);
}

#[tokio::test]
async fn test_sweep_ignores_seconds_in_now() {
    let store = ReminderStore::new();
    store.add(reminder("42", 2024, 1, 1, 9, 0, "stand up")).await;

    // A sweep partway through the minute still matches
    let due = store
        .sweep(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 37).unwrap())
        .await;

    assert_eq!(due.len(), 1);
}

#[tokio::test]
async fn test_second_sweep_at_same_minute_returns_empty() {
    let store = ReminderStore::new();
    store.add(reminder("42", 2024, 1, 1, 9, 0, "stand up")).await;

    let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let first = store.sweep(now).await;
    let second = store.sweep(now).await;

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[tokio::test]
async fn test_sweep_returns_all_recipients_due_that_minute() {
    let store = ReminderStore::new();
    store.add(reminder("42", 2024, 1, 1, 9, 0, "stand up")).await;
    store.add(reminder("43", 2024, 1, 1, 9, 0, "sit down")).await;
    store.add(reminder("44", 2024, 1, 1, 10, 0, "lunch")).await;

    let due = store
        .sweep(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
        .await;

    assert_eq!(due.len(), 2);
    let mut recipients: Vec<&str> = due.iter().map(|r| r.recipient_id.as_str()).collect();
    recipients.sort_unstable();
    assert_eq!(recipients, vec!["42", "43"]);
    assert_eq!(store.pending_count().await, 1);
}

#[tokio::test]
async fn test_same_recipient_adjacent_minutes() {
    let store = ReminderStore::new();
    store.add(reminder("42", 2024, 1, 1, 9, 0, "first")).await;
    store.add(reminder("42", 2024, 1, 1, 9, 1, "second")).await;

    let at_nine = store
        .sweep(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
        .await;
    assert_eq!(at_nine.len(), 1);
    assert_eq!(at_nine[0].message, "first");

    let at_nine_oh_one = store
        .sweep(Utc.with_ymd_and_hms(2024, 1, 1, 9, 1, 0).unwrap())
        .await;
    assert_eq!(at_nine_oh_one.len(), 1);
    assert_eq!(at_nine_oh_one[0].message, "second");

    assert_eq!(store.pending_count().await, 0);
}

#[tokio::test]
async fn test_cancel_pending_reminder() {
    let store = ReminderStore::new();
    let r = reminder("42", 2024, 1, 1, 9, 0, "stand up");
    let key = r.key();
    store.add(r).await;

    assert!(store.cancel(&key).await);
    assert_eq!(store.pending_count().await, 0);

    // Cancelling again is a no-op
    assert!(!store.cancel(&key).await);
}

#[tokio::test]
async fn test_list_is_sorted_and_scoped_to_recipient() {
    let store = ReminderStore::new();
    store.add(reminder("42", 2024, 1, 1, 12, 0, "later")).await;
    store.add(reminder("42", 2024, 1, 1, 9, 0, "sooner")).await;
    store.add(reminder("99", 2024, 1, 1, 9, 0, "other")).await;

    let pending = store.list("42").await;

    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].message, "sooner");
    assert_eq!(pending[1].message, "later");
}

#[tokio::test]
async fn test_reminder_time_truncated_on_construction() {
    let scheduled = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 42).unwrap();
    let r = Reminder::new("42", scheduled, "stand up").unwrap();

    assert_eq!(
        r.scheduled_time,
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_recipient_id_trimmed_on_construction() {
    let scheduled = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let r = Reminder::new(" 42 ", scheduled, "stand up").unwrap();

    // A padded id must normalize to the same key other paths look up
    assert_eq!(r.recipient_id, "42");

    let store = ReminderStore::new();
    store.add(r).await;

    let pending = store.list("42").await;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].message, "stand up");
}

#[tokio::test]
async fn test_invalid_reminders_rejected() {
    let scheduled = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();

    assert!(Reminder::new("42", scheduled, "").is_err());
    assert!(Reminder::new("42", scheduled, "   ").is_err());
    assert!(Reminder::new("", scheduled, "stand up").is_err());
    assert!(Reminder::new("not-a-chat-id", scheduled, "stand up").is_err());
    assert!(Reminder::new("0", scheduled, "stand up").is_err());
}
