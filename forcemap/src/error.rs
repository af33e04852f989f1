//! Error type for the read-path operations.

use thiserror::Error;

use forcemap_client::ClientError;
use forcemap_model::ModelError;

/// Errors surfaced by `find` and `query`.
///
/// Write operations never return this — their failures collapse into a
/// boolean at the entity-operations layer.
#[derive(Debug, Error)]
pub enum Error {
    /// A remote result did not line up with the entity's field
    /// declarations.
    #[error(transparent)]
    Mapping(#[from] ModelError),

    /// The remote client call itself failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}
