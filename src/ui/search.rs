use crate::models::{RecipeDetails, RecipeSummary};
use crate::services::{ClientError, RecipeApi};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter at least one ingredient";
pub const SEARCH_FAILED_MESSAGE: &str = "Error fetching recipes. Please try again.";
pub const DETAILS_FAILED_MESSAGE: &str = "Error fetching recipe details.";

/// What the search view is currently showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// Nothing searched yet
    #[default]
    Idle,
    Searching,
    Results(Vec<RecipeSummary>),
    /// A search completed and matched nothing
    Empty,
    Error(String),
}

/// Handle for one issued search
///
/// Only the ticket of the most recently issued search may change the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    ingredients: String,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The input text this search was issued for
    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }
}

/// Ingredient search screen: input binding, search lifecycle, details lookup
pub struct RecipeSearch<A> {
    api: A,
    ingredients: String,
    state: SearchState,
    details_error: Option<String>,
    generation: u64,
}

impl<A: RecipeApi> RecipeSearch<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            ingredients: String::new(),
            state: SearchState::Idle,
            details_error: None,
            generation: 0,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn set_ingredients(&mut self, text: impl Into<String>) {
        self.ingredients = text.into();
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Message from the last failed details lookup, shown under the results
    pub fn details_error(&self) -> Option<&str> {
        self.details_error.as_deref()
    }

    /// True while a search is outstanding; the search action is disabled then
    pub fn is_busy(&self) -> bool {
        matches!(self.state, SearchState::Searching)
    }

    /// Recipes currently displayed
    pub fn recipes(&self) -> &[RecipeSummary] {
        match &self.state {
            SearchState::Results(recipes) => recipes.as_slice(),
            _ => &[],
        }
    }

    /// Start a search for the current input
    ///
    /// Returns `None` without touching the network when the input is blank.
    /// Either way every earlier outstanding search becomes stale.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        self.generation += 1;
        self.details_error = None;

        if self.ingredients.trim().is_empty() {
            self.state = SearchState::Error(EMPTY_INPUT_MESSAGE.to_string());
            return None;
        }

        self.state = SearchState::Searching;

        Some(SearchTicket {
            generation: self.generation,
            ingredients: self.ingredients.clone(),
        })
    }

    /// Apply the outcome of a search; returns false if it was stale and dropped
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<RecipeSummary>, ClientError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping stale search #{} (latest is #{})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(recipes) if recipes.is_empty() => SearchState::Empty,
            Ok(recipes) => SearchState::Results(recipes),
            Err(e) => {
                tracing::error!("Error fetching recipes: {}", e);
                SearchState::Error(SEARCH_FAILED_MESSAGE.to_string())
            }
        };

        true
    }

    /// Search for the current input and wait for the answer
    pub async fn search_recipes(&mut self) {
        let Some(ticket) = self.begin_search() else {
            return;
        };

        let outcome = self.api.search_recipes_by_ingredients(ticket.ingredients()).await;
        self.complete_search(ticket, outcome);
    }

    /// Fetch full information for one recipe
    ///
    /// The search state is never changed; a failure is kept in
    /// [`details_error`](Self::details_error) next to the displayed results.
    pub async fn view_recipe_details(&mut self, id: i64) -> Option<RecipeDetails> {
        match self.api.get_recipe_details(id).await {
            Ok(details) => {
                tracing::info!("Recipe details: {:?}", details);
                self.details_error = None;
                Some(details)
            }
            Err(e) => {
                tracing::error!("Error fetching recipe details: {}", e);
                self.details_error = Some(DETAILS_FAILED_MESSAGE.to_string());
                None
            }
        }
    }
}
