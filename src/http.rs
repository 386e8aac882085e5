use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single plain-text GET against a remote endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("empty response body")]
    EmptyBody,
}

/// GET `url` and return its trimmed body.
///
/// Only a 200 response with a non-blank body counts as success.
pub async fn get_text(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
    timeout: Duration,
) -> Result<String, FetchError> {
    let response = client.get(url).query(query).timeout(timeout).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;
    let body = body.trim();
    if body.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    Ok(body.to_string())
}
