//! Remote Collection Client
//!
//! Seam between the UI and the hosted document store.
//! `FirestoreCollection` talks to the JS bridge; tests use an in-memory fake.

mod firestore;
mod subscription;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::SortDirection;
use crate::models::{NewIngredient, Snapshot};

pub use firestore::FirestoreCollection;
pub use subscription::Subscription;

/// Common result type for remote operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote store errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteError {
    /// Bridge object missing or threw before the call was made
    #[error("remote store unavailable: {0}")]
    Unavailable(String),
    /// Store rejected the request
    #[error("remote store rejected request: {0}")]
    Rejected(String),
    #[error("failed to encode document: {0}")]
    Encode(String),
    #[error("failed to decode snapshot: {0}")]
    Decode(String),
}

/// Called once per delivered snapshot, in query order
pub type SnapshotHandler = Box<dyn Fn(Snapshot)>;

/// Document collection with append and ordered live queries
#[async_trait(?Send)]
pub trait RemoteCollection {
    /// Append a document to `collection`
    async fn add_document(&self, collection: &str, record: &NewIngredient) -> RemoteResult<()>;

    /// Open a standing query ordered by `order_field`.
    ///
    /// The returned handle owns the subscription; releasing it stops delivery.
    fn subscribe_ordered(
        &self,
        collection: &str,
        order_field: &str,
        direction: SortDirection,
        on_snapshot: SnapshotHandler,
    ) -> RemoteResult<Subscription>;
}
