//! Plain-text rendering of the search screen.

use super::search::{RecipeSearch, SearchState};
use crate::models::{RecipeDetails, RecipeSummary};
use crate::services::RecipeApi;
use scraper::Html;

pub const TITLE: &str = "Recipe Finder 🍽️";
pub const SEARCHING_MESSAGE: &str = "Searching for recipes... 🔍";
pub const NO_RESULTS_MESSAGE: &str = "No recipes found. Try different ingredients! 🌿";
const PROMPT_MESSAGE: &str = "Enter ingredients (comma separated)";

/// Render the whole screen for the current state
pub fn render<A: RecipeApi>(search: &RecipeSearch<A>) -> String {
    let button = if search.is_busy() { "Searching..." } else { "Search Recipes" };
    let input = if search.ingredients().is_empty() { PROMPT_MESSAGE } else { search.ingredients() };

    let mut out = format!("{}\n> {}  [{}]\n\n", TITLE, input, button);

    match search.state() {
        SearchState::Idle => {}
        SearchState::Searching => out.push_str(&format!("{}\n", SEARCHING_MESSAGE)),
        SearchState::Results(recipes) => {
            for recipe in recipes {
                out.push_str(&render_card(recipe));
                out.push('\n');
            }
        }
        SearchState::Empty => out.push_str(&format!("{}\n", NO_RESULTS_MESSAGE)),
        SearchState::Error(message) => out.push_str(&format!("{}\n", message)),
    }

    if let Some(message) = search.details_error() {
        out.push_str(&format!("{}\n", message));
    }

    out
}

/// One result card
pub fn render_card(recipe: &RecipeSummary) -> String {
    let mut out = format!("[{}] {}\n", recipe.id, recipe.title);
    if !recipe.image.is_empty() {
        out.push_str(&format!("    {}\n", recipe.image));
    }
    out.push_str(&format!("    Used Ingredients: {}\n", recipe.used_ingredient_count));
    out.push_str(&format!("    Missing Ingredients: {}\n", recipe.missed_ingredient_count));
    out.push_str(&format!("    View Details: details {}\n", recipe.id));
    out
}

/// Full details view for one recipe
pub fn render_details(details: &RecipeDetails) -> String {
    let mut out = format!("{}\n", details.recipe.title);

    if let Some(minutes) = details.ready_in_minutes {
        out.push_str(&format!("Ready in {} minutes\n", minutes));
    }
    if let Some(servings) = details.servings {
        out.push_str(&format!("Servings: {}\n", servings));
    }
    if let Some(url) = &details.source_url {
        out.push_str(&format!("Source: {}\n", url));
    }
    if let Some(summary) = details.summary.as_deref().map(html_to_text).filter(|s| !s.is_empty()) {
        out.push_str(&format!("\n{}\n", summary));
    }
    if let Some(instructions) = details.instructions.as_deref().map(html_to_text).filter(|s| !s.is_empty()) {
        out.push_str(&format!("\nInstructions:\n{}\n", instructions));
    }

    out
}

/// Upstream summaries and instructions arrive as HTML fragments
fn html_to_text(html: &str) -> String {
    Html::parse_fragment(html)
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}
