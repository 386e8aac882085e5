use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ConverterConfig;
use crate::http::{self, FetchError};

/// Maps one convertible link to its streamable replacement.
#[async_trait]
pub trait LinkConverter: Send + Sync {
    async fn convert(&self, link: &str) -> Result<String, FetchError>;
}

/// Converter backed by the remote `gen_url` endpoint.
pub struct HttpConverter {
    client: reqwest::Client,
    config: ConverterConfig,
}

impl HttpConverter {
    pub fn new(client: reqwest::Client, config: ConverterConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl LinkConverter for HttpConverter {
    async fn convert(&self, link: &str) -> Result<String, FetchError> {
        debug!("Converting {} via {}", link, self.config.endpoint);
        http::get_text(
            &self.client,
            &self.config.endpoint,
            &[("gen_url", "true"), ("terabox_url", link)],
            self.config.timeout(),
        )
        .await
    }
}

/// Original link to converted link, in insertion order, keys unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkMap {
    entries: Vec<(String, String)>,
}

impl LinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair. Returns false and keeps the existing value if
    /// `original` is already mapped.
    pub fn insert(&mut self, original: String, converted: String) -> bool {
        if self.contains(&original) {
            return false;
        }
        self.entries.push((original, converted));
        true
    }

    pub fn contains(&self, original: &str) -> bool {
        self.get(original).is_some()
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(o, _)| o == original)
            .map(|(_, c)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(o, c)| (o.as_str(), c.as_str()))
    }
}

/// Convert every link one at a time. Failed links are logged and left out.
///
/// A link that repeats one already converted is not requested again; the
/// first converted value is kept. A repeat of a failed link is retried.
pub async fn convert_all(converter: &dyn LinkConverter, links: &[String]) -> LinkMap {
    let mut map = LinkMap::new();

    for link in links {
        if map.contains(link) {
            continue;
        }
        match converter.convert(link).await {
            Ok(converted) => {
                map.insert(link.clone(), converted);
            }
            Err(e) => {
                warn!("Error converting link {}: {}", link, e);
            }
        }
    }

    debug!("Converted {}/{} link(s)", map.len(), links.len());
    map
}
