//! Salesforce-style REST implementation of the remote record client.
//!
//! Endpoints follow the `services/data/{version}` layout: sobject paths for
//! single-record operations and the `query` resource for SOQL, with
//! `nextRecordsUrl` pagination folded into one ordered result set.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use forcemap_model::{Attributes, ID_FIELD, Record, Value};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::client::RemoteClient;
use crate::config::Config;
use crate::error::{ClientError, ClientResult};

/// REST API response structures.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    records: Vec<Record>,
    #[serde(rename = "nextRecordsUrl")]
    next_records_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(rename = "errorCode")]
    #[allow(dead_code)]
    error_code: Option<String>,
}

/// REST implementation of [`RemoteClient`].
pub struct RestClient {
    config: Config,
    http: Client,
    access_token: Arc<RwLock<String>>,
}

impl RestClient {
    /// Creates a client from an already-validated configuration.
    pub fn new(config: Config) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create HTTP client");
        let access_token = Arc::new(RwLock::new(config.oauth_token.clone()));

        Self {
            config,
            http,
            access_token,
        }
    }

    fn data_url(&self, tail: &str) -> String {
        format!(
            "{}/services/data/{}/{}",
            self.config.instance_url, self.config.api_version, tail
        )
    }

    /// Exchanges the refresh token for a new access token.
    async fn refresh_access_token(&self) -> ClientResult<String> {
        debug!("refreshing access token");

        let response = self
            .http
            .post(format!("{}/services/oauth2/token", self.config.login_url))
            .form(&[
                ("grant_type", "refresh_token"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("refresh_token", self.config.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("token refresh failed: {e}")))?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(ClientError::Auth(format!("token refresh failed: {error}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Auth(format!("failed to parse token response: {e}")))?;

        *self.access_token.write().await = token.access_token.clone();

        Ok(token.access_token)
    }

    /// Sends the built request with bearer auth, refreshing the token and
    /// retrying once on 401.
    async fn send(&self, build: impl Fn(&str) -> RequestBuilder) -> ClientResult<Response> {
        let token = self.access_token.read().await.clone();
        let response = build(&token)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let token = self.refresh_access_token().await?;
            let response = build(&token)
                .send()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            return Self::check(response).await;
        }

        Self::check(response).await
    }

    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        Err(ClientError::Api {
            status: status.as_u16(),
            message: Self::error_message(response).await,
        })
    }

    // Error bodies come back as a JSON array of {message, errorCode}; fall
    // back to the raw body when they don't.
    async fn error_message(response: Response) -> String {
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<Vec<ApiErrorBody>>(&body) {
            Ok(errors) if !errors.is_empty() => errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; "),
            _ => body,
        }
    }
}

#[async_trait]
impl RemoteClient for RestClient {
    async fn find(&self, entity: &str, id: &str) -> ClientResult<Record> {
        debug!("find {} {}", entity, id);
        let url = self.data_url(&format!("sobjects/{entity}/{id}"));
        let response = self
            .send(|token| self.http.get(&url).bearer_auth(token))
            .await?;

        response
            .json::<Record>()
            .await
            .map_err(|e| ClientError::Network(format!("failed to parse find response: {e}")))
    }

    async fn query(&self, query: &str) -> ClientResult<Vec<Record>> {
        debug!("query {}", query);
        let mut url = format!("{}?q={}", self.data_url("query"), urlencoding::encode(query));
        let mut records = Vec::new();

        loop {
            let response = self
                .send(|token| self.http.get(&url).bearer_auth(token))
                .await?;
            let page: QueryResponse = response
                .json()
                .await
                .map_err(|e| ClientError::Network(format!("failed to parse query response: {e}")))?;

            records.extend(page.records);

            match page.next_records_url {
                Some(next) => url = format!("{}{next}", self.config.instance_url),
                None => break,
            }
        }

        Ok(records)
    }

    async fn create(&self, entity: &str, attrs: Attributes) -> ClientResult<String> {
        debug!("create {}", entity);
        let url = self.data_url(&format!("sobjects/{entity}"));
        let body = Value::Object(attrs);
        let response = self
            .send(|token| self.http.post(&url).bearer_auth(token).json(&body))
            .await?;

        let created: CreateResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Network(format!("failed to parse create response: {e}")))?;

        Ok(created.id)
    }

    async fn update(&self, entity: &str, attrs: Attributes) -> ClientResult<()> {
        let mut attrs = attrs;
        let id = attrs
            .remove(ID_FIELD)
            .and_then(|value| value.as_str().map(str::to_string))
            .ok_or(ClientError::MissingId)?;

        debug!("update {} {}", entity, id);
        let url = self.data_url(&format!("sobjects/{entity}/{id}"));
        let body = Value::Object(attrs);
        self.send(|token| self.http.patch(&url).bearer_auth(token).json(&body))
            .await?;

        Ok(())
    }

    async fn destroy(&self, entity: &str, id: &str) -> ClientResult<()> {
        debug!("destroy {} {}", entity, id);
        let url = self.data_url(&format!("sobjects/{entity}/{id}"));
        self.send(|token| self.http.delete(&url).bearer_auth(token))
            .await?;

        Ok(())
    }
}
