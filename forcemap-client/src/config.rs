//! OAuth credential and endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::rest::RestClient;

/// Connection settings for a remote record store.
///
/// The five credential attributes (`oauth_token`, `refresh_token`,
/// `instance_url`, `client_id`, `client_secret`) are required before a
/// client can be constructed; `login_url` and `api_version` default to the
/// production endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OAuth access token.
    pub oauth_token: String,
    /// OAuth refresh token.
    pub refresh_token: String,
    /// Instance URL of the record store (e.g. `https://na1.salesforce.com`).
    pub instance_url: String,
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Base URL for token refresh.
    pub login_url: String,
    /// REST API version used in request paths.
    pub api_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            oauth_token: String::new(),
            refresh_token: String::new(),
            instance_url: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            login_url: "https://login.salesforce.com".to_string(),
            api_version: "v59.0".to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration through a mutation closure:
    ///
    /// ```ignore
    /// let config = Config::configure(|c| {
    ///     c.oauth_token = token;
    ///     c.instance_url = url;
    /// });
    /// ```
    pub fn configure(apply: impl FnOnce(&mut Self)) -> Self {
        let mut config = Self::default();
        apply(&mut config);
        config
    }

    /// True when every required credential attribute is non-empty.
    pub fn valid_environment(&self) -> bool {
        [
            &self.oauth_token,
            &self.refresh_token,
            &self.instance_url,
            &self.client_id,
            &self.client_secret,
        ]
        .iter()
        .all(|attribute| !attribute.is_empty())
    }

    /// Constructs a REST client from this configuration. Fails with
    /// [`ClientError::InvalidEnvironment`] when a required attribute is
    /// missing.
    pub fn client(&self) -> ClientResult<RestClient> {
        if !self.valid_environment() {
            return Err(ClientError::InvalidEnvironment);
        }
        Ok(RestClient::new(self.clone()))
    }
}
