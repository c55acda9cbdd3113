//! Recipe Panel Component
//!
//! Main area with the summon button. Recipe generation is not wired to
//! any backend: summoning only sets the busy flag.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_begin_summon, store_can_summon, PantryStateStoreFields};

/// Split recipe text into its first non-blank line (title) and the rest
fn split_recipe(text: &str) -> (String, String) {
    let text = text.trim_start();
    match text.split_once('\n') {
        Some((title, body)) => (title.trim().to_string(), body.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}

#[component]
fn RecipeCard(text: String) -> impl IntoView {
    let (title, body) = split_recipe(&text);

    view! {
        <article class="recipe-card">
            <header class="recipe-card-header">
                <span class="recipe-found">"Recipe Found"</span>
                <h3 class="recipe-title">{title}</h3>
            </header>
            <div class="recipe-body">{body}</div>
            <footer class="recipe-card-footer">"Generated recipe • PantryGhost"</footer>
        </article>
    }
}

#[component]
pub fn RecipePanel() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <main class="kitchen">
            <div class="kitchen-header">
                <div>
                    <h2>"The Recipe Generator"</h2>
                    <p class="subtitle">"What shall we make today?"</p>
                </div>
                <button
                    class="summon-btn"
                    disabled=move || !store_can_summon(&store)
                    on:click=move |_| {
                        store_begin_summon(&store);
                    }
                >
                    {move || if store.is_summoning().get() { "Summoning..." } else { "Summon Recipe" }}
                </button>
            </div>

            {move || match store.recipe().get() {
                Some(text) => view! { <RecipeCard text=text /> }.into_any(),
                None => view! {
                    <div class="recipe-placeholder">
                        <p>"Waiting for ingredients..."</p>
                    </div>
                }.into_any(),
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_recipe_title_and_body() {
        let (title, body) = split_recipe("\n  Fried Rice\nFry the rice.\nAdd garlic.\n");
        assert_eq!(title, "Fried Rice");
        assert_eq!(body, "Fry the rice.\nAdd garlic.");
    }

    #[test]
    fn test_split_recipe_single_line() {
        let (title, body) = split_recipe("Toast");
        assert_eq!(title, "Toast");
        assert!(body.is_empty());
    }
}
