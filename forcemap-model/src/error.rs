//! Error types for the mapping model.

use thiserror::Error;

/// Result type for mapping operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while mapping records to entities.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A remote result could not be reconciled with the declared fields.
    #[error(
        "invalid field mapping for `{entity}` ({detail}); check your query and entity field declarations"
    )]
    InvalidFieldMapping { entity: String, detail: String },

    /// A local field name no declaration produced.
    #[error("`{entity}` has no field named `{name}`")]
    UnknownField { entity: String, name: String },
}
