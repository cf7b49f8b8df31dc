use serde::{Deserialize, Serialize};

/// One search hit from the upstream find-by-ingredients endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "usedIngredientCount", default)]
    pub used_ingredient_count: u32,
    #[serde(rename = "missedIngredientCount", default)]
    pub missed_ingredient_count: u32,
    #[serde(default)]
    pub likes: u32,
}

/// Full recipe information, fetched on demand per recipe id
///
/// The upstream information payload carries many more fields; only the ones
/// the client shows are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetails {
    #[serde(flatten)]
    pub recipe: RecipeSummary,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(rename = "readyInMinutes", default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(rename = "sourceUrl", default)]
    pub source_url: Option<String>,
}
