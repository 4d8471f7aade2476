/// Datetime parsing, truncation, and formatting helpers
pub mod datetime;
/// Input validation for reminder fields and configuration values
pub mod validation;
