//! Entity type descriptors.
//!
//! A descriptor pairs the remote entity name with the type's field
//! registry. Each entity type materializes exactly one descriptor, at
//! declaration time; the name resolves once at `build()` and never changes
//! afterwards.

use crate::registry::{FieldRegistry, FieldRegistryBuilder};

/// Type-level metadata for a mapped entity: the resolved remote entity name
/// plus the field registry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDescriptor {
    entity_name: String,
    registry: FieldRegistry,
}

impl EntityDescriptor {
    /// Starts a descriptor builder for `T`. The short type name of `T` is
    /// captured as the default entity name, used unless
    /// [`EntityDescriptorBuilder::entity_name`] overrides it.
    pub fn builder<T>() -> EntityDescriptorBuilder {
        EntityDescriptorBuilder::new(short_type_name::<T>())
    }

    /// Remote name of the entity type.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// The type's effective field registry.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }
}

/// Builder for [`EntityDescriptor`], used once per entity type.
#[derive(Debug)]
pub struct EntityDescriptorBuilder {
    default_name: &'static str,
    entity_name: Option<String>,
    registry: FieldRegistryBuilder,
}

impl EntityDescriptorBuilder {
    fn new(default_name: &'static str) -> Self {
        Self {
            default_name,
            entity_name: None,
            registry: FieldRegistry::builder(),
        }
    }

    /// Sets the remote entity name explicitly, taking precedence over the
    /// type-name default.
    pub fn entity_name(mut self, name: impl Into<String>) -> Self {
        self.entity_name = Some(name.into());
        self
    }

    /// Seeds the field registry with a copy of a parent descriptor's
    /// registry.
    pub fn inherit(mut self, parent: &EntityDescriptor) -> Self {
        self.registry = self.registry.inherit(parent.registry());
        self
    }

    /// Declares a field without an alias.
    pub fn field(mut self, remote_name: impl Into<String>) -> Self {
        self.registry = self.registry.field(remote_name);
        self
    }

    /// Declares a field with a local alias.
    pub fn field_as(mut self, remote_name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.registry = self.registry.field_as(remote_name, alias);
        self
    }

    /// Resolves the entity name and finishes the descriptor.
    pub fn build(self) -> EntityDescriptor {
        EntityDescriptor {
            entity_name: self
                .entity_name
                .unwrap_or_else(|| self.default_name.to_string()),
            registry: self.registry.build(),
        }
    }
}

// `type_name` yields a module-qualified path; the entity name default is
// just the final segment.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
