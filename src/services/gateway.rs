use crate::models::{RecipeDetails, RecipeSummary};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Where the gateway listens unless told otherwise
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000/api";

/// A failed gateway call, already normalized to one readable message
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Error Code: {status}\nMessage: {message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Gateway operations the search UI depends on
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Recipes using the given comma-separated ingredients; empty when none match
    async fn search_recipes_by_ingredients(
        &self,
        ingredients: &str,
    ) -> Result<Vec<RecipeSummary>, ClientError>;

    async fn get_recipe_details(&self, id: i64) -> Result<RecipeDetails, ClientError>;
}

/// HTTP client for the Recipe Finder gateway
pub struct RecipeService {
    api_url: String,
    client: Client,
}

impl RecipeService {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl Default for RecipeService {
    fn default() -> Self {
        Self::new(DEFAULT_GATEWAY_URL)
    }
}

#[async_trait]
impl RecipeApi for RecipeService {
    async fn search_recipes_by_ingredients(
        &self,
        ingredients: &str,
    ) -> Result<Vec<RecipeSummary>, ClientError> {
        let url = format!("{}/recipes/findByIngredients", self.api_url);

        let response = self
            .client
            .get(&url)
            .query(&[("ingredients", ingredients)])
            .send()
            .await
            .map_err(|e| logged(e.into()))?;

        let status = response.status();
        if status != StatusCode::NOT_FOUND {
            return decode(response).await;
        }

        // A 404 is "nothing found" only when it is the gateway's own
        // `{message}` answer; a relayed upstream 404 carries `error`.
        let body: Option<Value> = response.json().await.ok();
        if body.as_ref().is_some_and(is_no_results_body) {
            tracing::debug!("No recipes found for: {}", ingredients);
            return Ok(Vec::new());
        }

        Err(logged(ClientError::Http {
            status: status.as_u16(),
            message: failure_message(status, body.as_ref()),
        }))
    }

    async fn get_recipe_details(&self, id: i64) -> Result<RecipeDetails, ClientError> {
        let url = format!("{}/recipes/{}/information", self.api_url, id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| logged(e.into()))?;

        decode(response).await
    }
}

async fn decode<T>(response: Response) -> Result<T, ClientError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();

    if !status.is_success() {
        let body: Option<Value> = response.json().await.ok();
        return Err(logged(ClientError::Http {
            status: status.as_u16(),
            message: failure_message(status, body.as_ref()),
        }));
    }

    response.json::<T>().await.map_err(|e| logged(e.into()))
}

/// Prefer the gateway's own `error`/`message` label over the status reason
fn failure_message(status: StatusCode, body: Option<&Value>) -> String {
    body.and_then(|b| b.get("error").or_else(|| b.get("message")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "An error occurred".to_string())
}

fn is_no_results_body(body: &Value) -> bool {
    body.get("message").is_some() && body.get("error").is_none()
}

fn logged(err: ClientError) -> ClientError {
    tracing::error!("{}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_message_prefers_error_label() {
        let body = json!({"error": "Error fetching recipes", "details": {"code": 402}});
        assert_eq!(
            failure_message(StatusCode::PAYMENT_REQUIRED, Some(&body)),
            "Error fetching recipes"
        );
    }

    #[test]
    fn test_failure_message_falls_back_to_reason() {
        assert_eq!(failure_message(StatusCode::BAD_GATEWAY, None), "Bad Gateway");
        assert_eq!(
            failure_message(StatusCode::NOT_FOUND, Some(&json!({"message": "Recipe not found"}))),
            "Recipe not found"
        );
    }

    #[test]
    fn test_no_results_body() {
        assert!(is_no_results_body(&json!({"message": "No recipes found for these ingredients"})));
        assert!(!is_no_results_body(&json!({"error": "Error fetching recipes", "details": {"code": 404}})));
        assert!(!is_no_results_body(&json!("Not Found")));
    }

    #[test]
    fn test_http_error_display() {
        let err = ClientError::Http { status: 500, message: "Error fetching recipes".to_string() };
        assert_eq!(err.to_string(), "Error Code: 500\nMessage: Error fetching recipes");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let service = RecipeService::new("http://localhost:3000/api/");
        assert_eq!(service.api_url, "http://localhost:3000/api");
    }
}
