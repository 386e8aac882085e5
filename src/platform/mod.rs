pub mod telegram;

use anyhow::Result;
use async_trait::async_trait;

/// A user message as seen by the relay, independent of the bot platform.
#[derive(Debug, Clone, Default)]
pub struct IncomingMessage {
    /// Platform-specific chat ID
    pub chat_id: i64,
    /// Message text, or the media caption; empty when neither is present
    pub text: String,
    /// Platform file reference of the attached photo (largest size)
    pub photo: Option<String>,
    pub has_video: bool,
}

/// A reply that was sent and can later be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    pub message_id: i32,
}

/// Outbound side of one conversation, already formatted for the platform.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn reply(&self, text: &str) -> Result<SentMessage>;

    async fn edit_text(&self, sent: &SentMessage, text: &str) -> Result<()>;

    /// Replace `sent` with `photo` carrying `caption`.
    async fn edit_photo(&self, sent: &SentMessage, photo: &str, caption: &str) -> Result<()>;
}
