//! PantryGhost Frontend App
//!
//! Two-pane layout: pantry sidebar and recipe panel.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::{error, info};

use crate::components::{PantrySidebar, RecipePanel};
use crate::config::PantryConfig;
use crate::context::AppContext;
use crate::controller::open_pantry_subscription;
use crate::remote::FirestoreCollection;
use crate::store::store_replace_ingredients;

#[component]
pub fn App(config: PantryConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);
    let store = ctx.store;

    // Listener lives as long as the app; released once on cleanup
    match open_pantry_subscription(&FirestoreCollection, &ctx.config(), move |names| {
        store_replace_ingredients(&store, names);
    }) {
        Ok(sub) => {
            let sub = SendWrapper::new(sub);
            on_cleanup(move || {
                sub.take().unsubscribe();
                info!("[SUBSCRIBE] Pantry listener closed");
            });
        }
        Err(e) => error!("[SUBSCRIBE] Could not open pantry listener: {}", e),
    }

    view! {
        <div class="app-layout">
            <PantrySidebar />
            <RecipePanel />
        </div>
    }
}
