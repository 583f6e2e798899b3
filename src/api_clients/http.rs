//! Shared HTTP plumbing for the service clients.
//!
//! Wraps a `reqwest::Client` with the service name for error attribution,
//! URL construction against the configured base, and uniform JSON
//! send/decode with structured logging. Non-2xx responses become
//! `ClientError::ApiError` carrying the status and body text, except on the
//! lenient path used by endpoints whose status the flow deliberately does
//! not check.

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::ApiEndpointConfig;
use crate::error::{ClientError, ClientResult};

#[derive(Clone)]
pub(crate) struct ServiceHttp {
    service: &'static str,
    client: Client,
    base_url: Url,
}

impl ServiceHttp {
    pub(crate) fn new(service: &'static str, config: &ApiEndpointConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::config_error(format!("Invalid {service} base URL: {e}"))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(format!("medflow-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ClientError::config_error(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            service,
            client,
            base_url,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        self.base_url.join(path).map_err(|e| {
            ClientError::config_error(format!("Failed to construct URL for {path}: {e}"))
        })
    }

    /// GET `path`, expect 2xx, decode JSON
    pub(crate) async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        let url = self.url(path)?;
        debug!(service = self.service, url = %url, "GET");
        let response = self.client.get(url).send().await?;
        self.decode(response).await
    }

    /// GET `path` with query parameters, expect 2xx, decode JSON
    pub(crate) async fn get_json_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<R> {
        let url = self.url(path)?;
        debug!(service = self.service, url = %url, ?query, "GET");
        let response = self.client.get(url).query(query).send().await?;
        self.decode(response).await
    }

    /// POST JSON body to `path`, expect 2xx, decode JSON
    pub(crate) async fn post_json<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ClientResult<R> {
        let url = self.url(path)?;
        debug!(service = self.service, url = %url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        self.decode(response).await
    }

    /// POST JSON body to `path` and decode the response without checking the
    /// status code. Used where the flow tolerates error bodies. An explicit
    /// per-request timeout overrides the client default when given.
    pub(crate) async fn post_json_lenient<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
        timeout: Option<Duration>,
    ) -> ClientResult<R> {
        let url = self.url(path)?;
        debug!(service = self.service, url = %url, "POST (lenient)");
        let mut request = self.client.post(url).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        Ok(response.json::<R>().await?)
    }

    /// POST with no body to `path`, expect 2xx, decode JSON
    pub(crate) async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        let url = self.url(path)?;
        debug!(service = self.service, url = %url, "POST (no body)");
        let response = self.client.post(url).send().await?;
        self.decode(response).await
    }

    /// PUT JSON body to `path`, expect 2xx, decode JSON
    pub(crate) async fn put_json<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ClientResult<R> {
        let url = self.url(path)?;
        debug!(service = self.service, url = %url, "PUT");
        let response = self.client.put(url).json(body).send().await?;
        self.decode(response).await
    }

    async fn decode<R: DeserializeOwned>(&self, response: Response) -> ClientResult<R> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<R>().await?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ApiError {
                service: self.service,
                status: status.as_u16(),
                message,
            })
        }
    }
}
