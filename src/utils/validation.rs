use anyhow::{anyhow, Result};

pub fn validate_message(message: &str) -> Result<()> {
    let message = message.trim();

    if message.is_empty() {
        return Err(anyhow!("Reminder message cannot be empty"));
    }

    if message.len() > 500 {
        return Err(anyhow!("Reminder message cannot be longer than 500 characters"));
    }

    Ok(())
}

pub fn validate_recipient_id(recipient_id: &str) -> Result<()> {
    let recipient_id = recipient_id.trim();

    if recipient_id.is_empty() {
        return Err(anyhow!("Recipient id cannot be empty"));
    }

    let chat_id: i64 = recipient_id
        .parse()
        .map_err(|_| anyhow!("Recipient id must be a numeric chat id"))?;

    validate_telegram_chat_id(chat_id)
}

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Positive IDs should be within reasonable range for user chats (up to 2^31-1)
    if chat_id > 2147483647 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Negative IDs can be:
    // - Group chats: small negative numbers like -12345 (up to around -2^31)
    // - Supergroups: very large negative numbers starting around -1000000000000
    // Reject extremely large negative numbers beyond Telegram's known ranges
    if chat_id < -2000000000000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

pub fn validate_sweep_interval(interval_secs: u64) -> Result<()> {
    if interval_secs == 0 {
        return Err(anyhow!("Sweep interval must be at least 1 second"));
    }

    // Sweeps match on the exact minute, so a gap longer than a minute
    // between ticks would skip due reminders entirely
    if interval_secs > 60 {
        return Err(anyhow!("Sweep interval cannot be longer than 60 seconds"));
    }

    Ok(())
}
