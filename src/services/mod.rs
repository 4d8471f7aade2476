/// Health check endpoints for monitoring
pub mod health;
/// The notification sender abstraction and its Telegram implementation
pub mod notifier;
/// The background sweep that delivers due reminders
pub mod scheduler;
