// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{RecipeSummary, RecipeDetails};
pub use requests::FindByIngredientsQuery;
pub use responses::{ErrorResponse, MessageResponse, HealthResponse};
