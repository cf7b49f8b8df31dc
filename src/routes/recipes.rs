use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde_json::Value;
use validator::Validate;
use crate::config::{EmptyResultsPolicy, SearchSettings};
use crate::models::{ErrorResponse, FindByIngredientsQuery, HealthResponse, MessageResponse};
use crate::services::{SpoonacularClient, UpstreamError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<SpoonacularClient>,
    pub search: SearchSettings,
}

/// Configure all recipe-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recipes/findByIngredients", web::get().to(find_by_ingredients))
        .route("/recipes/{id}/information", web::get().to(recipe_information));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search recipes by ingredients
///
/// GET /api/recipes/findByIngredients?ingredients=tomato,basil
///
/// Relays the upstream JSON array unchanged. An empty upstream result is
/// answered according to `search.empty_results`.
async fn find_by_ingredients(
    state: web::Data<AppState>,
    query: web::Query<FindByIngredientsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Rejected ingredient search: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new("Ingredients are required"));
    }

    let ingredients = query.ingredients.as_deref().unwrap_or_default();

    tracing::info!("Searching for ingredients: {}", ingredients);

    match state.upstream.find_by_ingredients(ingredients, &state.search).await {
        Ok(body) if is_empty_listing(&body) => match state.search.empty_results {
            EmptyResultsPolicy::NotFound => HttpResponse::NotFound()
                .json(MessageResponse::new("No recipes found for these ingredients")),
            EmptyResultsPolicy::EmptyList => HttpResponse::Ok().json(Vec::<Value>::new()),
        },
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => upstream_failure("Error fetching recipes", &e),
    }
}

/// Get recipe details
///
/// GET /api/recipes/{id}/information
async fn recipe_information(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    tracing::info!("Fetching details for recipe: {}", id);

    match state.upstream.recipe_information(&id).await {
        Ok(Value::Null) => HttpResponse::NotFound().json(MessageResponse::new("Recipe not found")),
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => upstream_failure("Error fetching recipe details", &e),
    }
}

fn is_empty_listing(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Mirror the upstream status when there is one, 500 otherwise
fn upstream_failure(label: &str, err: &UpstreamError) -> HttpResponse {
    let details = err.details();

    tracing::error!("{}: {} - {}", label, err, details);

    let status = err
        .status()
        .and_then(|s| StatusCode::from_u16(s.as_u16()).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse::with_details(label, details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_listing() {
        assert!(is_empty_listing(&Value::Null));
        assert!(is_empty_listing(&json!([])));
        assert!(!is_empty_listing(&json!([{"id": 1}])));
        assert!(!is_empty_listing(&json!({"id": 1})));
    }

    #[test]
    fn test_upstream_failure_mirrors_status() {
        let err = UpstreamError::ApiError {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: json!({"message": "invalid key"}),
        };

        let response = upstream_failure("Error fetching recipes", &err);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
