use tracing::info;

use crate::config::CredentialConfig;
use crate::http::{self, FetchError};

/// The bot token, fetched once at startup.
#[derive(Clone)]
pub struct BotCredential(String);

impl BotCredential {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BotCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BotCredential(<redacted>)")
    }
}

/// Fetch the bot token from the configured credential source.
pub async fn fetch_credential(
    client: &reqwest::Client,
    config: &CredentialConfig,
) -> Result<BotCredential, FetchError> {
    let token = http::get_text(client, &config.url, &[], config.timeout()).await?;
    info!("Fetched bot credential from {}", config.url);
    Ok(BotCredential(token))
}
