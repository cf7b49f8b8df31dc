use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use recipe_finder::config::{Settings, SettingsError};
use recipe_finder::logging;
use recipe_finder::routes::{self, AppState};
use recipe_finder::services::SpoonacularClient;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    logging::init();

    info!("Starting Recipe Finder gateway...");

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(SettingsError::MissingApiKey) => {
            eprintln!("ERROR: Spoonacular API key is not set (SPOONACULAR_API_KEY)");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("Configuration loaded successfully");

    let upstream = SpoonacularClient::new(&settings.upstream).map_err(|e| {
        error!("Failed to create upstream client: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("Upstream client initialized for {}", settings.upstream.base_url);

    let app_state = AppState {
        upstream: Arc::new(upstream),
        search: settings.search.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    let server = match settings.server.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    let server = server.bind((host.as_str(), port))?;

    info!("Server is running on port {}", port);
    info!("API Key: {}", settings.masked_api_key());

    server.run().await
}
