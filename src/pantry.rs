//! Pantry Rules
//!
//! Pure list and summon-flag transitions shared by the store helpers.

use crate::models::Ingredient;

/// Names in snapshot order; the list shown is always a full replacement
pub fn snapshot_names(snapshot: &[Ingredient]) -> Vec<String> {
    snapshot.iter().map(|doc| doc.name.clone()).collect()
}

/// Hide the entry at `index` locally.
///
/// Nothing is deleted remotely, so the next snapshot brings it back.
/// Out-of-range indexes are ignored.
pub fn remove_at(list: &mut Vec<String>, index: usize) -> Option<String> {
    if index < list.len() {
        Some(list.remove(index))
    } else {
        None
    }
}

/// Summon needs at least one ingredient and no summon in flight
pub fn can_summon(ingredient_count: usize, is_summoning: bool) -> bool {
    ingredient_count > 0 && !is_summoning
}

/// Flip the busy flag if allowed. There is no transition back to idle yet.
pub fn begin_summon(ingredient_count: usize, is_summoning: &mut bool) -> bool {
    if !can_summon(ingredient_count, *is_summoning) {
        return false;
    }
    *is_summoning = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(names: &[&str]) -> Vec<Ingredient> {
        names
            .iter()
            .map(|name| Ingredient { name: name.to_string() })
            .collect()
    }

    #[test]
    fn test_snapshot_replaces_list() {
        let mut list = vec!["Salt".to_string()];
        assert_eq!(list.len(), 1);
        list = snapshot_names(&snapshot(&["Garlic", "Onion"]));
        assert_eq!(list, vec!["Garlic", "Onion"]);
    }

    #[test]
    fn test_local_removal_is_undone_by_next_snapshot() {
        let docs = snapshot(&["Garlic", "Onion", "Rice"]);
        let mut list = snapshot_names(&docs);

        assert_eq!(remove_at(&mut list, 1).as_deref(), Some("Onion"));
        assert_eq!(list, vec!["Garlic", "Rice"]);

        list = snapshot_names(&docs);
        assert_eq!(list, vec!["Garlic", "Onion", "Rice"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = vec!["Garlic".to_string()];
        assert!(remove_at(&mut list, 3).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_summon_gating() {
        assert!(!can_summon(0, false));
        assert!(can_summon(2, false));
        assert!(!can_summon(2, true));
    }

    #[test]
    fn test_begin_summon_stays_busy() {
        let mut busy = false;
        assert!(!begin_summon(0, &mut busy));
        assert!(!busy);

        assert!(begin_summon(1, &mut busy));
        assert!(busy);
        assert!(!can_summon(1, busy));
        assert!(!begin_summon(1, &mut busy));
        assert!(busy);
    }
}
