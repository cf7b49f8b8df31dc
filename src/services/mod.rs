// Service exports
pub mod gateway;
pub mod spoonacular;

pub use gateway::{ClientError, RecipeApi, RecipeService, DEFAULT_GATEWAY_URL};
pub use spoonacular::{SpoonacularClient, UpstreamError};
