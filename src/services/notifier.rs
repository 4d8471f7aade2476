use anyhow::{anyhow, Result};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;

/// Abstraction for delivering a message to a recipient. Implementations map to
/// a transport (e.g. Telegram). Delivery is best-effort: callers do not retry
/// and do not consume any confirmation beyond the returned `Result`.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Sends `text` to the recipient identified by the opaque `recipient_id`.
    async fn send(&self, recipient_id: &str, text: &str) -> Result<()>;
}

/// Teloxide-based implementation of [`NotificationSender`]. The opaque
/// recipient id is parsed into a numeric Telegram chat id at this edge.
pub struct TelegramSender {
    bot: Bot,
}

impl TelegramSender {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl NotificationSender for TelegramSender {
    async fn send(&self, recipient_id: &str, text: &str) -> Result<()> {
        let chat_id: i64 = recipient_id
            .parse()
            .map_err(|_| anyhow!("Recipient id '{}' is not a Telegram chat id", recipient_id))?;

        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map_err(|e| anyhow!("Failed to send to chat {}: {}", chat_id, e))?;

        Ok(())
    }
}
