//! Pantry State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

use crate::pantry;

/// UI state mirrored from the remote `pantry` collection
#[derive(Clone, Debug, Default, Store)]
pub struct PantryState {
    /// Ingredient names, newest first, as of the last snapshot
    pub ingredients: Vec<String>,
    /// Generated recipe text (nothing produces one yet)
    pub recipe: Option<String>,
    /// Summon in flight
    pub is_summoning: bool,
}

/// Type alias for the store
pub type PantryStore = Store<PantryState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list with the latest snapshot
pub fn store_replace_ingredients(store: &PantryStore, names: Vec<String>) {
    *store.ingredients().write() = names;
}

/// Hide an ingredient locally (restored by the next snapshot)
pub fn store_remove_local(store: &PantryStore, index: usize) {
    if let Some(name) = pantry::remove_at(&mut store.ingredients().write(), index) {
        debug!("[PANTRY] Hid {:?} locally; remote document untouched", name);
    }
}

pub fn store_can_summon(store: &PantryStore) -> bool {
    pantry::can_summon(store.ingredients().read().len(), store.is_summoning().get())
}

/// Mark a summon as started
pub fn store_begin_summon(store: &PantryStore) -> bool {
    let count = store.ingredients().read_untracked().len();
    let mut busy = store.is_summoning().get_untracked();
    let started = pantry::begin_summon(count, &mut busy);
    if started {
        *store.is_summoning().write() = busy;
        debug!("[RECIPE] Summoning with {} ingredients", count);
    }
    started
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_local_removal_restored_by_snapshot() {
        Owner::new().with(|| {
            let store = Store::new(PantryState::default());

            store_replace_ingredients(&store, names(&["Garlic", "Onion", "Rice"]));
            store_remove_local(&store, 1);
            assert_eq!(store.ingredients().get(), vec!["Garlic", "Rice"]);

            store_remove_local(&store, 5);
            assert_eq!(store.ingredients().get().len(), 2);

            store_replace_ingredients(&store, names(&["Garlic", "Onion", "Rice"]));
            assert_eq!(store.ingredients().get(), vec!["Garlic", "Onion", "Rice"]);
        });
    }

    #[test]
    fn test_summon_gated_on_empty_list() {
        Owner::new().with(|| {
            let store = Store::new(PantryState::default());

            assert!(!store_can_summon(&store));
            assert!(!store_begin_summon(&store));
            assert!(!store.is_summoning().get());
        });
    }

    #[test]
    fn test_begin_summon_once_and_stays_busy() {
        Owner::new().with(|| {
            let store = Store::new(PantryState::default());
            store_replace_ingredients(&store, names(&["Garlic"]));
            assert!(store_can_summon(&store));

            assert!(store_begin_summon(&store));
            assert!(store.is_summoning().get());
            assert!(!store_can_summon(&store));

            assert!(!store_begin_summon(&store));
            assert!(store.is_summoning().get());
            assert!(store.recipe().get().is_none());
        });
    }
}
