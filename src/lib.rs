//! Recipe Finder - ingredient-based recipe search
//!
//! The gateway half (`routes`, `services::spoonacular`) hides the Spoonacular
//! API key behind two read-only endpoints. The client half
//! (`services::gateway`, `ui`) calls those endpoints and drives the search
//! screen.

pub mod config;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use config::Settings;
pub use models::{RecipeSummary, RecipeDetails};
pub use services::{RecipeApi, RecipeService, SpoonacularClient};
pub use ui::{RecipeSearch, SearchState};
