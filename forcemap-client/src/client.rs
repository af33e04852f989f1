//! Remote record store abstraction.
//!
//! Defines the interface the record-mapping core calls; implementations own
//! transport, retries and pagination.

use async_trait::async_trait;
use forcemap_model::{Attributes, Record};

use crate::error::ClientResult;

/// Abstract interface to a remote record store.
///
/// Every operation is a single outbound call; callers await it to
/// completion before issuing another. Write operations report failure
/// through errors — the boolean policy lives a layer up, in the entity
/// operations.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Fetches one record by id.
    async fn find(&self, entity: &str, id: &str) -> ClientResult<Record>;

    /// Runs a query in the store's query language. Rows come back in
    /// response order.
    async fn query(&self, query: &str) -> ClientResult<Vec<Record>>;

    /// Creates a record and returns the id the store assigned.
    async fn create(&self, entity: &str, attrs: Attributes) -> ClientResult<String>;

    /// Updates an existing record. `attrs` must include the `Id` field.
    async fn update(&self, entity: &str, attrs: Attributes) -> ClientResult<()>;

    /// Deletes a record by id.
    async fn destroy(&self, entity: &str, id: &str) -> ClientResult<()>;
}
