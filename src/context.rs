//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::PantryConfig;
use crate::store::{PantryState, PantryStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Pantry list and recipe state
    pub store: PantryStore,
    config: StoredValue<PantryConfig>,
}

impl AppContext {
    pub fn new(config: PantryConfig) -> Self {
        Self {
            store: Store::new(PantryState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> PantryConfig {
        self.config.get_value()
    }

    /// Remote collection ingredients are written to
    pub fn collection(&self) -> String {
        self.config.with_value(|c| c.collection.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
