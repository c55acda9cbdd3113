//! Pantry Controller
//!
//! Ingredient submission and the live pantry subscription, written
//! against `RemoteCollection` so components stay thin.

use tracing::{debug, info};

use crate::config::PantryConfig;
use crate::models::{NewIngredient, Snapshot};
use crate::pantry::snapshot_names;
use crate::remote::{RemoteCollection, RemoteResult, Subscription};

/// Result of a submit that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was sent
    Skipped,
    /// One document was written with this name
    Added(String),
}

impl SubmitOutcome {
    /// Only a successful write clears the input field
    pub fn clears_input(&self) -> bool {
        matches!(self, SubmitOutcome::Added(_))
    }
}

/// Trimmed document for `raw`, or None when blank
pub fn prepare_ingredient(raw: &str) -> Option<NewIngredient> {
    let name = raw.trim();
    if name.is_empty() {
        return None;
    }
    Some(NewIngredient::new(name))
}

/// Write `raw` as a new ingredient document.
///
/// On error the caller keeps the input text as is.
pub async fn submit_ingredient<R: RemoteCollection + ?Sized>(
    remote: &R,
    collection: &str,
    raw: &str,
) -> RemoteResult<SubmitOutcome> {
    let Some(record) = prepare_ingredient(raw) else {
        return Ok(SubmitOutcome::Skipped);
    };
    remote.add_document(collection, &record).await?;
    info!("[PANTRY] Added ingredient {:?}", record.name);
    Ok(SubmitOutcome::Added(record.name))
}

/// Subscribe to the pantry query; `on_names` receives every snapshot as a full list
pub fn open_pantry_subscription<R, F>(
    remote: &R,
    config: &PantryConfig,
    on_names: F,
) -> RemoteResult<Subscription>
where
    R: RemoteCollection + ?Sized,
    F: Fn(Vec<String>) + 'static,
{
    let sub = remote.subscribe_ordered(
        &config.collection,
        &config.order_field,
        config.direction,
        Box::new(move |snapshot: Snapshot| {
            debug!("[SUBSCRIBE] Snapshot with {} documents", snapshot.len());
            on_names(snapshot_names(&snapshot));
        }),
    )?;
    info!(
        "[SUBSCRIBE] Listening on {} ordered by {} {}",
        config.collection,
        config.order_field,
        config.direction.as_str()
    );
    Ok(sub)
}
