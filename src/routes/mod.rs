// Route exports
pub mod recipes;

use actix_web::{error, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;

pub use recipes::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(recipes::configure),
    );
}

/// Query extractor config that reports malformed query strings as JSON
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(handle_query_payload_error)
}

fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    let body = ErrorResponse::with_details("Invalid query", serde_json::Value::String(err.to_string()));
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
