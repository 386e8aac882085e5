use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::markup::Markup;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub credential: CredentialConfig,
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub liveness: LivenessConfig,
    #[serde(default)]
    pub reply: ReplyConfig,
}

/// Where the bot token is fetched from at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct CredentialConfig {
    #[serde(default = "default_credential_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConverterConfig {
    #[serde(default = "default_converter_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LivenessConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_liveness_bind")]
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReplyConfig {
    #[serde(default)]
    pub markup: Markup,
}

fn default_credential_url() -> String {
    "https://teradisk.xyz/admin/python/token.txt".to_string()
}

fn default_converter_endpoint() -> String {
    "https://teradisk.xyz/admin/gen.php".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_liveness_bind() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            url: default_credential_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_converter_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            bind: default_liveness_bind(),
        }
    }
}

impl CredentialConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ConverterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load the configuration file at `path`.
    ///
    /// A missing file is only tolerated when `required` is false, in which
    /// case every default applies.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;

        if config.credential.timeout_secs == 0 {
            anyhow::bail!("credential.timeout_secs must be greater than zero");
        }
        if config.converter.timeout_secs == 0 {
            anyhow::bail!("converter.timeout_secs must be greater than zero");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(
            config.credential.url,
            "https://teradisk.xyz/admin/python/token.txt"
        );
        assert_eq!(config.converter.endpoint, "https://teradisk.xyz/admin/gen.php");
        assert_eq!(config.converter.timeout(), Duration::from_secs(10));
        assert!(config.liveness.enabled);
        assert_eq!(config.liveness.bind, "127.0.0.1:5000");
        assert_eq!(config.reply.markup, Markup::Html);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
[converter]
endpoint = "http://localhost:9000/gen"

[liveness]
enabled = false

[reply]
markup = "markdown"
"#,
        )
        .unwrap();
        assert_eq!(config.converter.endpoint, "http://localhost:9000/gen");
        assert_eq!(config.converter.timeout_secs, 10);
        assert!(!config.liveness.enabled);
        assert_eq!(config.liveness.bind, "127.0.0.1:5000");
        assert_eq!(config.reply.markup, Markup::Markdown);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::parse("[credential]\ntimeout_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("credential.timeout_secs"));
    }

    #[test]
    fn test_missing_optional_file_falls_back() {
        let config = Config::load(Path::new("/nonexistent/terarelay.toml"), false).unwrap();
        assert_eq!(config.credential.timeout_secs, 10);
    }

    #[test]
    fn test_missing_required_file_errors() {
        assert!(Config::load(Path::new("/nonexistent/terarelay.toml"), true).is_err());
    }
}
