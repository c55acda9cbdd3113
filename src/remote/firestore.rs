//! Firestore Bridge
//!
//! Bindings to `window.pantryGhost`, a small JS module that owns the
//! Firebase app and exposes `addDocument` and `subscribeOrdered`.
//! Timestamps cross the boundary as epoch milliseconds.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{RemoteCollection, RemoteError, RemoteResult, SnapshotHandler, Subscription};
use crate::config::SortDirection;
use crate::models::{NewIngredient, Snapshot};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "pantryGhost"], js_name = addDocument, catch)]
    async fn bridge_add_document(collection: &str, record: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "pantryGhost"], js_name = subscribeOrdered, catch)]
    fn bridge_subscribe_ordered(
        collection: &str,
        order_field: &str,
        direction: &str,
        on_snapshot: &Closure<dyn FnMut(JsValue)>,
        on_error: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<js_sys::Function, JsValue>;
}

/// Best-effort message out of a thrown JS value
fn js_error_message(err: &JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => format!("{:?}", err),
    }
}

/// Remote collection backed by the Firestore JS SDK
#[derive(Debug, Clone, Copy, Default)]
pub struct FirestoreCollection;

#[async_trait(?Send)]
impl RemoteCollection for FirestoreCollection {
    async fn add_document(&self, collection: &str, record: &NewIngredient) -> RemoteResult<()> {
        let js_record = serde_wasm_bindgen::to_value(record)
            .map_err(|e| RemoteError::Encode(e.to_string()))?;
        bridge_add_document(collection, js_record)
            .await
            .map_err(|e| RemoteError::Rejected(js_error_message(&e)))?;
        Ok(())
    }

    fn subscribe_ordered(
        &self,
        collection: &str,
        order_field: &str,
        direction: SortDirection,
        on_snapshot: SnapshotHandler,
    ) -> RemoteResult<Subscription> {
        let snapshot_cb = Closure::<dyn FnMut(JsValue)>::new(move |docs: JsValue| {
            match serde_wasm_bindgen::from_value::<Snapshot>(docs) {
                Ok(snapshot) => on_snapshot(snapshot),
                // Keep the last good list on screen
                Err(e) => tracing::error!("{}", RemoteError::Decode(e.to_string())),
            }
        });

        let name = collection.to_string();
        let error_cb = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            tracing::error!("[SUBSCRIBE] {} listener error: {}", name, js_error_message(&err));
        });

        let unsubscribe = bridge_subscribe_ordered(
            collection,
            order_field,
            direction.as_str(),
            &snapshot_cb,
            &error_cb,
        )
        .map_err(|e| RemoteError::Unavailable(js_error_message(&e)))?;

        Ok(Subscription::new(move || {
            if let Err(e) = unsubscribe.call0(&JsValue::NULL) {
                tracing::error!("[SUBSCRIBE] unsubscribe failed: {}", js_error_message(&e));
            }
            // Callbacks must outlive the listener
            drop(snapshot_cb);
            drop(error_cb);
        }))
    }
}
