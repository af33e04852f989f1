//! Typed entity mapping for Salesforce-style record stores.
//!
//! Declare an entity once, then run CRUD operations through the typed
//! struct instead of raw field maps:
//!
//! ```ignore
//! use forcemap::{Config, EntityOps, MappedEntity, map_entity};
//!
//! map_entity! {
//!     pub struct Contact ("Contact") {
//!         "Name" => name,
//!         "Email" => email,
//!     }
//! }
//!
//! let client = Config::configure(|c| {
//!     c.oauth_token = oauth_token;
//!     c.refresh_token = refresh_token;
//!     c.instance_url = instance_url;
//!     c.client_id = client_id;
//!     c.client_secret = client_secret;
//! })
//! .client()?;
//!
//! let contact = Contact::find(&client, "0031t00000XyZzAAA").await?;
//! let recent = Contact::query(&client, "SELECT Id, Name, Email FROM Contact LIMIT 10").await?;
//!
//! let mut fresh = Contact::default();
//! fresh.name = Some("John Doe".into());
//! let saved = fresh.save(&client).await;
//! ```
//!
//! Read operations (`find`, `query`) fail loudly with [`Error`]; write
//! operations (`create`, `update`, `destroy`, `save`) report success as a
//! boolean and swallow remote failures.

mod error;
mod ops;

pub use error::Error;
pub use ops::EntityOps;

pub use forcemap_client::{ClientError, ClientResult, Config, RemoteClient, RestClient};
pub use forcemap_model::{
    Attributes, EntityDescriptor, EntityDescriptorBuilder, FieldDef, FieldRegistry,
    FieldRegistryBuilder, ID_FIELD, MappedEntity, ModelError, ModelResult, Record, Value, decode,
    encode, map_entity,
};
