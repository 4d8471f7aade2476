//! # Reminder Bot
//!
//! A Telegram reminder service driven by webhook events: inbound events create
//! pending reminders, and a background sweep delivers them when their minute
//! comes up.
//!
//! ## Features
//! - Set reminders via an HTTP webhook
//! - Minute-resolution scheduling with a fixed-interval background sweep
//! - Best-effort, at-most-once delivery through Telegram
//! - List and cancel pending reminders per recipient
//! - Health endpoints for liveness and readiness probes

/// Configuration management and environment variables
pub mod config;
/// Background services: the reminder sweep, delivery, and health checks
pub mod services;
/// The in-memory reminder store and its entity types
pub mod store;
/// Utility functions for datetime handling and validation
pub mod utils;
/// HTTP webhook and reminder management endpoints
pub mod web;
