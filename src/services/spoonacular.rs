use crate::config::{SearchSettings, UpstreamSettings};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the upstream recipe API
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status}")]
    ApiError { status: StatusCode, body: Value },
}

impl UpstreamError {
    /// Status the upstream answered with, if it answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::ApiError { status, .. } => Some(*status),
            UpstreamError::RequestError(e) => e.status(),
        }
    }

    /// Upstream error body, or the transport error message
    pub fn details(&self) -> Value {
        match self {
            UpstreamError::ApiError { body, .. } => body.clone(),
            UpstreamError::RequestError(e) => Value::String(e.to_string()),
        }
    }
}

/// Spoonacular recipes API client
///
/// Holds the secret API key and attaches it to every call as the `apiKey`
/// query parameter. Payloads are returned as raw JSON so the gateway can
/// relay them verbatim.
pub struct SpoonacularClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl SpoonacularClient {
    /// Create a new client from the upstream settings
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            client,
        })
    }

    /// Search recipes that use the given comma-separated ingredients
    pub async fn find_by_ingredients(
        &self,
        ingredients: &str,
        search: &SearchSettings,
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}/findByIngredients", self.base_url);

        tracing::debug!("Forwarding ingredient search to: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str()), ("ingredients", ingredients)])
            .query(&[("number", search.number)])
            .query(&[("ranking", search.ranking)])
            .query(&[("ignorePantry", search.ignore_pantry)])
            .send()
            .await?;

        read_json(response).await
    }

    /// Fetch full information for one recipe
    ///
    /// `id` is forwarded as given; it is only percent-encoded to stay a
    /// single path segment.
    pub async fn recipe_information(&self, id: &str) -> Result<Value, UpstreamError> {
        let url = format!(
            "{}/{}/information",
            self.base_url,
            urlencoding::encode(id)
        );

        tracing::debug!("Fetching recipe information from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        read_json(response).await
    }
}

/// Read a response body, turning non-2xx answers into `ApiError`
async fn read_json(response: Response) -> Result<Value, UpstreamError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let body = parse_body(&bytes);

    if !status.is_success() {
        return Err(UpstreamError::ApiError { status, body });
    }

    Ok(body)
}

/// Empty body is `Null`; non-JSON text is kept as a string
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
