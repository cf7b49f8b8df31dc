use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /api/recipes/findByIngredients`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindByIngredientsQuery {
    /// Comma-separated ingredient names, forwarded as-is
    #[validate(required, length(min = 1))]
    pub ingredients: Option<String>,
}
