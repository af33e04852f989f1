//! Remote record store clients for forcemap.
//!
//! The record-mapping core talks to the store through the [`RemoteClient`]
//! trait; [`RestClient`] is the bundled Salesforce-style REST
//! implementation, constructed from a validated [`Config`].

mod client;
mod config;
mod error;
mod rest;

pub use client::RemoteClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use rest::RestClient;
