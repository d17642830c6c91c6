//! Backend API Bindings
//!
//! REST bindings to the task board backend, organized by domain.
//! Controllers only ever see the [`ApiClient`] trait.

mod board;
mod error;
mod project;
mod task;

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;

// Re-export all public items
pub use board::*;
pub use error::{error_detail, ApiError, ApiResult};
pub use project::*;
pub use task::*;

/// Everything a controller may ask of the backend
pub trait ApiClient: BoardApi + ProjectApi + TaskApi {}

impl<T: BoardApi + ProjectApi + TaskApi + ?Sized> ApiClient for T {}

/// HTTP implementation backed by `fetch` in the browser
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!(%method, %url, "api request");
        let include_credentials = self.config.credentials.applies_to(&method);
        let builder = self.client.request(method, url).header(ACCEPT, "application/json");
        with_credentials(builder, include_credentials)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> ApiResult<T> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        decode(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(method, path).json(body).send().await?;
        decode(response).await
    }

    /// Send a request whose response body is not needed
    pub(crate) async fn send_unit<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        ensure_success(builder.send().await?).await?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder, include: bool) -> RequestBuilder {
    if include {
        builder.fetch_credentials_include()
    } else {
        builder
    }
}

// Cookies are only meaningful for the browser fetch backend
#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder, _include: bool) -> RequestBuilder {
    builder
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        detail: error_detail(&body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = ensure_success(response).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(ApiError::Decode)
}
