//! Typed CRUD operations over a remote client.

use async_trait::async_trait;
use tracing::warn;

use forcemap_client::RemoteClient;
use forcemap_model::{Attributes, ID_FIELD, MappedEntity, Value, decode};

use crate::error::Error;

/// Find/query/create/update/destroy/save for a mapped entity type.
///
/// Operations take the remote client explicitly; construct one from a
/// validated [`Config`](forcemap_client::Config) and pass it to every call.
/// Read operations propagate failures as [`Error`]; write operations
/// swallow them into a `false` return, so callers can tell "give me the
/// record or blow up" apart from "try to persist and tell me if it worked".
#[async_trait]
pub trait EntityOps: MappedEntity + Send + Sync {
    /// Fetches one record by id and decodes it into a typed instance.
    async fn find(client: &dyn RemoteClient, id: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let record = client.find(Self::descriptor().entity_name(), id).await?;
        Ok(decode(&record)?)
    }

    /// Runs a query and decodes every row, preserving the response order.
    ///
    /// Only declared fields are decoded, so the query should select each of
    /// them. A row that cannot be reconciled with the field declarations
    /// aborts the whole call.
    async fn query(client: &dyn RemoteClient, query: &str) -> Result<Vec<Self>, Error>
    where
        Self: Sized,
    {
        let records = client.query(query).await?;

        let mut entities = Vec::with_capacity(records.len());
        for record in &records {
            entities.push(decode(record)?);
        }

        Ok(entities)
    }

    /// Creates a record from a raw attribute map, keyed by remote field
    /// names. Returns `false` on any failure.
    async fn create(client: &dyn RemoteClient, attrs: Attributes) -> bool {
        let entity_name = Self::descriptor().entity_name();
        match client.create(entity_name, attrs).await {
            Ok(_) => true,
            Err(err) => {
                warn!("create failed for {}: {}", entity_name, err);
                false
            }
        }
    }

    /// Updates the record `id` from a raw attribute map; the identity is
    /// merged into the attributes before the call. Returns `false` on any
    /// failure.
    async fn update(client: &dyn RemoteClient, id: &str, attrs: Attributes) -> bool {
        let entity_name = Self::descriptor().entity_name();
        let mut attrs = attrs;
        attrs.insert(ID_FIELD.to_string(), Value::String(id.to_string()));

        match client.update(entity_name, attrs).await {
            Ok(()) => true,
            Err(err) => {
                warn!("update failed for {} {}: {}", entity_name, id, err);
                false
            }
        }
    }

    /// Deletes the record `id`. Returns `false` on any failure; the remote
    /// row is gone on success, in-memory instances are untouched either
    /// way.
    async fn destroy(client: &dyn RemoteClient, id: &str) -> bool {
        let entity_name = Self::descriptor().entity_name();
        match client.destroy(entity_name, id).await {
            Ok(()) => true,
            Err(err) => {
                warn!("destroy failed for {} {}: {}", entity_name, id, err);
                false
            }
        }
    }

    /// Persists this instance with its encoded attributes: a create when it
    /// has no identity yet, an update otherwise. Returns the delegated
    /// call's result.
    async fn save(&self, client: &dyn RemoteClient) -> bool
    where
        Self: Sized,
    {
        if self.new_record() {
            Self::create(client, self.attrs()).await
        } else {
            let id = self.id().unwrap_or("").to_string();
            Self::update(client, &id, self.attrs()).await
        }
    }
}

impl<T: MappedEntity + Send + Sync> EntityOps for T {}
