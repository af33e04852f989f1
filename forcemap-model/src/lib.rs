//! Core mapping model for forcemap.
//!
//! Defines the types that turn a declared entity into something the remote
//! record store understands:
//! - [`FieldRegistry`] — per-entity-type map from remote field name to local
//!   alias, built once at declaration time and inheritable between types
//! - [`EntityDescriptor`] — the resolved remote entity name plus the field
//!   registry, owned by the entity type
//! - [`Record`] — one row as returned by the remote store
//! - [`MappedEntity`] — the trait every declared entity implements, usually
//!   through the [`map_entity!`] declaration macro
//! - [`decode`] / [`encode`] — the conversions between records and typed
//!   instances
//!
//! These types are consumed by the client and façade crates; they carry no
//! transport concerns of their own.

mod descriptor;
mod entity;
mod error;
mod macros;
mod mapping;
mod record;
mod registry;

pub use descriptor::{EntityDescriptor, EntityDescriptorBuilder};
pub use entity::MappedEntity;
pub use error::{ModelError, ModelResult};
pub use mapping::{decode, encode};
pub use record::{Attributes, ID_FIELD, Record};
pub use registry::{FieldDef, FieldRegistry, FieldRegistryBuilder};

pub use serde_json::Value;
