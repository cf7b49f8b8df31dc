//! Ingredient search screen
//!
//! [`RecipeSearch`] owns the input text and a single [`SearchState`]; the
//! [`view`] functions turn it into text for the terminal front end.

pub mod search;
pub mod view;

pub use search::{RecipeSearch, SearchState, SearchTicket};
pub use view::{render, render_card, render_details};
