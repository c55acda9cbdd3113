//! Ingredient Badge Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_remove_local;

/// One pantry entry with a remove button.
///
/// Removal is local only; the remote document is not deleted.
#[component]
pub fn IngredientBadge(name: String, index: usize) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <span class="badge">
            <span class="badge-name">{name}</span>
            <button
                class="badge-remove"
                title="Remove"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_remove_local(&ctx.store, index);
                }
            >
                "×"
            </button>
        </span>
    }
}
