//! Conversions between remote records and typed entities.

use serde_json::Value;

use crate::entity::MappedEntity;
use crate::error::{ModelError, ModelResult};
use crate::record::{Attributes, ID_FIELD, Record};

/// Decodes one remote result into a fresh instance of `T`.
///
/// The identity is read from the record's `Id` property; a `null` or absent
/// identity leaves the instance's id unset. Every declared field is then
/// read by remote name and written under its local name.
///
/// Any failure along the way — a declared field missing from the record, a
/// non-string identity, a local name the entity does not dispatch — aborts
/// the decode and is re-signaled as [`ModelError::InvalidFieldMapping`]. No
/// partially populated instance is returned.
pub fn decode<T: MappedEntity>(record: &Record) -> ModelResult<T> {
    let descriptor = T::descriptor();
    let mut entity = T::default();

    match record.get(ID_FIELD) {
        Some(Value::String(id)) => entity.set_id(id.clone()),
        Some(Value::Null) | None => {}
        Some(other) => {
            return Err(invalid_mapping::<T>(format!(
                "identity field `{ID_FIELD}` is not a string: {other}"
            )));
        }
    }

    for def in descriptor.registry() {
        let value = record.get(&def.remote_name).cloned().ok_or_else(|| {
            invalid_mapping::<T>(format!("result has no field `{}`", def.remote_name))
        })?;

        entity
            .set_field(def.local_name(), value)
            .map_err(|err| invalid_mapping::<T>(err.to_string()))?;
    }

    Ok(entity)
}

/// Encodes an entity into a remote-keyed attribute map for create/update
/// calls.
///
/// Unset and falsy (`null`, `false`) fields are omitted so a sparse write
/// does not clobber remote state; a value the caller explicitly set,
/// including an empty string, is kept. Callers that need to clear a remote
/// field pass it through the raw attribute map instead.
pub fn encode<T: MappedEntity>(entity: &T) -> Attributes {
    let mut attrs = Attributes::new();

    for def in T::descriptor().registry() {
        if let Some(value) = entity.field(def.local_name()) {
            if !is_falsy(value) {
                attrs.insert(def.remote_name.clone(), value.clone());
            }
        }
    }

    attrs
}

fn is_falsy(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Bool(false))
}

fn invalid_mapping<T: MappedEntity>(detail: String) -> ModelError {
    ModelError::InvalidFieldMapping {
        entity: T::descriptor().entity_name().to_string(),
        detail,
    }
}
