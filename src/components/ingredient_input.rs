//! Ingredient Input Component
//!
//! Text field plus add button. Enter submits too.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;

use crate::context::use_app_context;
use crate::controller::submit_ingredient;
use crate::remote::FirestoreCollection;

#[component]
pub fn IngredientInput() -> impl IntoView {
    let ctx = use_app_context();

    let (draft, set_draft) = signal(String::new());

    let add_ingredient = move || {
        let raw = draft.get_untracked();
        let collection = ctx.collection();

        spawn_local(async move {
            match submit_ingredient(&FirestoreCollection, &collection, &raw).await {
                Ok(outcome) => {
                    if outcome.clears_input() {
                        set_draft.set(String::new());
                    }
                }
                // Text stays in the field so the user can retry
                Err(e) => error!("[PANTRY] Error adding ingredient: {}", e),
            }
        });
    };

    view! {
        <div class="ingredient-input-row">
            <input
                type="text"
                placeholder="e.g. Garlic"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add_ingredient();
                    }
                }
            />
            <button class="icon-btn" title="Add ingredient" on:click=move |_| add_ingredient()>
                "+"
            </button>
        </div>
    }
}
