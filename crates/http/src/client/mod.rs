//! ParkSpot HTTP client

pub mod error;
pub mod lot;
pub mod user;

use crate::types::ErrorBody;
use error::ClientError;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;

const USER_AGENT: &str = concat!("parkspot-client/", env!("CARGO_PKG_VERSION"));

/// ParkSpot API client
///
/// Every request is credentialed: natively all requests share one cookie jar,
/// on wasm the browser attaches its cookies. Requests are never retried.
#[derive(Clone)]
pub struct ParkingClient {
    client: Client,
    base_url: String,
}

impl ParkingClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ParkingClientBuilder {
        ParkingClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a credentialed request builder
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.request(method, url);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    /// Execute a request and decode a JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            Err(Self::rejection(status, response).await)
        }
    }

    /// Execute a request whose body is irrelevant
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(Self::rejection(status, response).await)
        }
    }

    async fn rejection(status: StatusCode, response: reqwest::Response) -> ClientError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.msg)
            .filter(|msg| !msg.trim().is_empty());
        tracing::debug!(status = status.as_u16(), ?message, "request rejected");
        ClientError::from_status(status, message)
    }
}

/// Builder for ParkingClient
#[derive(Default)]
pub struct ParkingClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ParkingClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout. Without one a hung request waits forever.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ParkingClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        url::Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url {base_url}: {e}")))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            client_builder = client_builder.cookie_store(true);
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
        }

        client_builder =
            client_builder.user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));

        let client = client_builder.build()?;

        Ok(ParkingClient { client, base_url })
    }
}
