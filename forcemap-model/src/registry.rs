//! Per-entity-type field registries.
//!
//! A registry maps remote field names to local aliases. It is built once at
//! declaration time through [`FieldRegistryBuilder`] and immutable after
//! that; a subtype seeds its builder from the parent's registry and then
//! adds or shadows entries.

use serde::{Deserialize, Serialize};

/// A single field declaration: the remote name plus an optional local alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name as the remote store knows it (e.g. `LastName`).
    pub remote_name: String,
    /// Local accessor name. Falls back to the remote name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_alias: Option<String>,
}

impl FieldDef {
    /// A declaration without an alias.
    pub fn new(remote_name: impl Into<String>) -> Self {
        Self {
            remote_name: remote_name.into(),
            local_alias: None,
        }
    }

    /// A declaration with a local alias.
    pub fn with_alias(remote_name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            remote_name: remote_name.into(),
            local_alias: Some(alias.into()),
        }
    }

    /// The name the entity exposes this field under.
    pub fn local_name(&self) -> &str {
        self.local_alias.as_deref().unwrap_or(&self.remote_name)
    }
}

/// Immutable, insertion-ordered set of field declarations, unique by remote
/// name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRegistry {
    fields: Vec<FieldDef>,
}

impl FieldRegistry {
    /// Starts an empty registry builder.
    pub fn builder() -> FieldRegistryBuilder {
        FieldRegistryBuilder::default()
    }

    /// Looks a declaration up by remote field name.
    pub fn get(&self, remote_name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|def| def.remote_name == remote_name)
    }

    /// Looks a declaration up by its local name.
    pub fn by_local(&self, local_name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|def| def.local_name() == local_name)
    }

    /// Iterates declarations in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDef> {
        self.fields.iter()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldRegistry {
    type Item = &'a FieldDef;
    type IntoIter = std::slice::Iter<'a, FieldDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Builder for [`FieldRegistry`], used once per entity type at declaration
/// time.
#[derive(Debug, Default)]
pub struct FieldRegistryBuilder {
    fields: Vec<FieldDef>,
}

impl FieldRegistryBuilder {
    /// Seeds the builder with a copy of a parent registry. The copy is
    /// independent: entries declared afterwards shadow the inherited ones
    /// without touching the parent.
    pub fn inherit(mut self, parent: &FieldRegistry) -> Self {
        for def in parent {
            self.insert(def.clone());
        }
        self
    }

    /// Declares a field without an alias.
    pub fn field(mut self, remote_name: impl Into<String>) -> Self {
        self.insert(FieldDef::new(remote_name));
        self
    }

    /// Declares a field with a local alias.
    pub fn field_as(mut self, remote_name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.insert(FieldDef::with_alias(remote_name, alias));
        self
    }

    /// Finishes the registry.
    pub fn build(self) -> FieldRegistry {
        FieldRegistry {
            fields: self.fields,
        }
    }

    // A re-declared remote name overwrites in place, keeping its original
    // position so iteration order stays the declaration order.
    fn insert(&mut self, def: FieldDef) {
        match self
            .fields
            .iter_mut()
            .find(|existing| existing.remote_name == def.remote_name)
        {
            Some(existing) => *existing = def,
            None => self.fields.push(def),
        }
    }
}
