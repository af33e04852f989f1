//! The trait implemented by every declared entity type.

use serde_json::Value;

use crate::descriptor::EntityDescriptor;
use crate::error::ModelResult;
use crate::mapping;
use crate::record::{Attributes, Record};

/// A typed entity backed by a remote record store.
///
/// Implementations are normally generated by the [`map_entity!`] macro: a
/// fixed struct with one member per declared field, an identity member, and
/// match-based field dispatch. Field access goes through local names — the
/// declaration's alias when present, the remote name otherwise.
///
/// [`map_entity!`]: crate::map_entity
pub trait MappedEntity: Default {
    /// The type's descriptor: remote entity name plus field registry,
    /// materialized once at declaration time.
    fn descriptor() -> &'static EntityDescriptor;

    /// The instance's identity, when set.
    fn id(&self) -> Option<&str>;

    /// Sets the instance's identity.
    fn set_id(&mut self, id: String);

    /// Reads the local field named `local`. `None` when the field is unset
    /// or unknown.
    fn field(&self, local: &str) -> Option<&Value>;

    /// Writes the local field named `local`. Fails with
    /// [`ModelError::UnknownField`] when no declaration produced it.
    ///
    /// [`ModelError::UnknownField`]: crate::ModelError::UnknownField
    fn set_field(&mut self, local: &str, value: Value) -> ModelResult<()>;

    /// True when the instance has not been persisted yet: no identity, or
    /// an empty one.
    fn new_record(&self) -> bool {
        self.id().map_or(true, str::is_empty)
    }

    /// The encoded attribute map for create/update calls. See
    /// [`encode`](crate::encode) for the sparse-update policy.
    fn attrs(&self) -> Attributes
    where
        Self: Sized,
    {
        mapping::encode(self)
    }

    /// Decodes one remote result into a typed instance. See
    /// [`decode`](crate::decode) for the failure policy.
    fn from_record(record: &Record) -> ModelResult<Self>
    where
        Self: Sized,
    {
        mapping::decode(record)
    }
}
