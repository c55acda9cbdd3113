//! Pantry Sidebar Component
//!
//! Left column: add input and the live ingredient list.

use leptos::prelude::*;

use crate::components::{IngredientBadge, IngredientInput};
use crate::context::use_app_context;
use crate::store::PantryStateStoreFields;

#[component]
pub fn PantrySidebar() -> impl IntoView {
    let store = use_app_context().store;

    // Index is part of the key: duplicates are allowed and removal is positional
    let entries = move || {
        store
            .ingredients()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="pantry-sidebar">
            <div class="sidebar-title">"Recipe Generator"</div>

            <section class="add-section">
                <h3 class="section-label">"Add Ingredient"</h3>
                <IngredientInput />
            </section>

            <div class="pantry-list">
                <For
                    each=entries
                    key=|(index, name)| (*index, name.clone())
                    children=move |(index, name)| {
                        view! { <IngredientBadge name=name index=index /> }
                    }
                />
                <Show when=move || store.ingredients().read().is_empty()>
                    <p class="pantry-empty">"Your pantry is empty..."</p>
                </Show>
            </div>
        </aside>
    }
}
