//! The HTTP client used to talk to the REST API.

use std::future::Future;

use reqwest::{Client as HttpClient, Url};
use serde::{Serialize, de::DeserializeOwned};

use crate::{client::ClientError, error::ErrorDetail};

/// Sends requests to the REST API and decodes the JSON responses.
///
/// Paths are relative to the API's base URL, e.g. "/transactions".
pub trait ApiClient: Send + Sync {
    /// Send a GET request for `path` with `query` as the query string.
    ///
    /// An empty `query` sends no query string at all.
    fn get<T>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> impl Future<Output = Result<T, ClientError>> + Send
    where
        T: DeserializeOwned + Send;

    /// Send a POST request for `path` with `body` encoded as JSON.
    fn post<B, T>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<T, ClientError>> + Send
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

/// An [ApiClient] that makes real HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for the API served at `base_url`, e.g. "http://127.0.0.1:8000".
    ///
    /// # Errors
    /// Returns [ClientError::InvalidBaseUrl] if `base_url` is not an absolute
    /// "http" or "https" URL. A URL missing its scheme, e.g. "localhost:8000",
    /// is rejected too.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_owned()))?;

        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_owned()));
        }

        Ok(Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The URL the client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> Result<String, ClientError> {
        let mut url = format!("{}{}", self.base_url, path);

        if !query.is_empty() {
            let query_string = serde_urlencoded::to_string(query)
                .map_err(|error| ClientError::Encode(error.to_string()))?;
            url.push('?');
            url.push_str(&query_string);
        }

        Ok(url)
    }

    async fn decode_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<ErrorDetail>(&body_text) {
                Ok(error_detail) => error_detail.detail,
                Err(_) => body_text,
            };
            tracing::warn!("API responded with {status}: {detail}");

            return Err(ClientError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|error| ClientError::Decode(error.to_string()))
    }
}

impl ApiClient for HttpApiClient {
    async fn get<T>(&self, path: &str, query: &[(String, String)]) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.url(path, query)?;
        tracing::debug!("GET {url}");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|error| ClientError::Request(error.to_string()))?;

        Self::decode_response(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = self.url(path, &[])?;
        tracing::debug!("POST {url}");

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|error| ClientError::Request(error.to_string()))?;

        Self::decode_response(response).await
    }
}
