//! UI Components
//!
//! Leptos components for the two-pane layout.

mod ingredient_input;
mod ingredient_badge;
mod pantry_sidebar;
mod recipe_panel;

pub use ingredient_input::IngredientInput;
pub use ingredient_badge::IngredientBadge;
pub use pantry_sidebar::PantrySidebar;
pub use recipe_panel::RecipePanel;
