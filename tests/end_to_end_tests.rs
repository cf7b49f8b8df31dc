// Search screen -> gateway -> mocked upstream, over real sockets

use actix_web::{web, App, HttpServer};
use mockito::Matcher;
use recipe_finder::config::Settings;
use recipe_finder::routes::{self, AppState};
use recipe_finder::services::{RecipeService, SpoonacularClient};
use recipe_finder::ui::{render, RecipeSearch, SearchState};
use std::process::Command;
use std::sync::Arc;

const API_KEY: &str = "e2e-secret-key";

/// Start a gateway on an ephemeral port; returns its API base URL
fn start_gateway(upstream_url: &str) -> (String, actix_web::dev::ServerHandle) {
    let settings = Settings::for_upstream(upstream_url, API_KEY);
    let state = AppState {
        upstream: Arc::new(SpoonacularClient::new(&settings.upstream).unwrap()),
        search: settings.search,
    };

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(routes::query_config())
            .configure(routes::configure_routes)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    (format!("http://{}/api", addr), handle)
}

#[actix_web::test]
async fn test_tomato_basil_shows_two_cards() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("GET", "/findByIngredients")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apiKey".into(), API_KEY.into()),
            Matcher::UrlEncoded("ingredients".into(), "tomato, basil".into()),
            Matcher::UrlEncoded("number".into(), "12".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"id": 1, "title": "Caprese Salad", "image": "https://img.test/1.jpg",
                 "usedIngredientCount": 2, "missedIngredientCount": 1, "likes": 0},
                {"id": 2, "title": "Tomato Basil Soup", "image": "https://img.test/2.jpg",
                 "usedIngredientCount": 2, "missedIngredientCount": 3, "likes": 5}
            ]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let (gateway_url, handle) = start_gateway(&upstream.url());

    let mut search = RecipeSearch::new(RecipeService::new(gateway_url));
    search.set_ingredients("tomato, basil");
    search.search_recipes().await;

    assert_eq!(search.recipes().len(), 2);
    let view = render(&search);
    assert!(view.contains("Caprese Salad"));
    assert!(view.contains("Tomato Basil Soup"));
    assert!(view.contains("Used Ingredients: 2"));
    assert!(view.contains("Missing Ingredients: 1"));
    assert!(view.contains("Missing Ingredients: 3"));

    mock.assert_async().await;
    handle.stop(true).await;
}

#[actix_web::test]
async fn test_no_matches_shows_empty_state() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("GET", "/findByIngredients")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let (gateway_url, handle) = start_gateway(&upstream.url());

    let mut search = RecipeSearch::new(RecipeService::new(gateway_url));
    search.set_ingredients("gravel");
    search.search_recipes().await;

    assert_eq!(search.state(), &SearchState::Empty);
    assert!(render(&search).contains("No recipes found. Try different ingredients!"));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_upstream_404_shows_fetch_error() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("GET", "/findByIngredients")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "failure", "code": 404, "message": "Not found"}"#)
        .create_async()
        .await;

    let (gateway_url, handle) = start_gateway(&upstream.url());

    let mut search = RecipeSearch::new(RecipeService::new(gateway_url));
    search.set_ingredients("egg");
    search.search_recipes().await;

    assert_eq!(
        search.state(),
        &SearchState::Error("Error fetching recipes. Please try again.".to_string())
    );

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_empty_input_never_reaches_gateway() {
    // Nothing listens here; a network call would turn into a fetch error
    let mut search = RecipeSearch::new(RecipeService::new("http://127.0.0.1:9/api"));
    search.set_ingredients("");
    search.search_recipes().await;

    assert_eq!(
        search.state(),
        &SearchState::Error("Please enter at least one ingredient".to_string())
    );
}

#[test]
fn test_missing_api_key_exits_before_binding() {
    let workdir = std::env::temp_dir();
    let output = Command::new(env!("CARGO_BIN_EXE_recipe-finder"))
        .current_dir(&workdir)
        .env_remove("SPOONACULAR_API_KEY")
        .env_remove("RECIPE__UPSTREAM__API_KEY")
        .env("PORT", "0")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Spoonacular API key is not set"), "stderr: {}", stderr);
}
