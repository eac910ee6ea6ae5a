//! Transport seam and per-service request clients.
//!
//! Client-side (csr): requests go out through `gloo-net` fetch.
//! Native builds: `OfflineTransport` fails every request, since the
//! endpoints are only meaningful from the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `ServiceClient` is bound to one service base address. Before each
//! request it reads the persisted token and, when one exists, sends it as
//! `Authorization: Bearer <token>`. There is no retry, timeout, or response
//! rewriting; non-2xx statuses become `ApiError`s.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::util::storage::TokenStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully built outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Value for the `Authorization` header, if any.
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Raw status and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests. Futures are `!Send`; everything runs on the browser
/// event loop.
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>>;
}

/// Browser fetch transport.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "csr")]
impl Transport for FetchTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        Box::pin(async move {
            let transport_err = |e: gloo_net::Error| ApiError::Transport(e.to_string());
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
            };
            if let Some(value) = &request.authorization {
                builder = builder.header("Authorization", value);
            }
            let resp = match &request.body {
                Some(body) => builder.json(body).map_err(transport_err)?.send().await,
                None => builder.send().await,
            }
            .map_err(transport_err)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport_err)?;
            Ok(ApiResponse { status, body })
        })
    }
}

/// Transport for native builds: every request fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        let _ = request;
        Box::pin(async { Err(ApiError::Transport("not available outside the browser".to_owned())) })
    }
}

/// The transport the app should use for the current build target.
pub fn default_transport() -> Arc<dyn Transport> {
    #[cfg(feature = "csr")]
    {
        Arc::new(FetchTransport)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(OfflineTransport)
    }
}

/// Format a bearer credential for the `Authorization` header.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Request client bound to one service base address.
#[derive(Clone)]
pub struct ServiceClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    storage: Arc<dyn TokenStorage>,
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>, storage: Arc<dyn TokenStorage>) -> Self {
        Self { base_url: base_url.into(), transport, storage }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path`, attaching the currently persisted token.
    pub fn build_request(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> ApiRequest {
        ApiRequest {
            method,
            url: format!("{}{path}", self.base_url),
            authorization: self.storage.load().map(|token| bearer_header(&token)),
            body,
        }
    }

    /// Send a request and turn non-2xx statuses into errors.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when the request never completes, or the
    /// status-derived variant for non-success responses.
    pub async fn execute(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(method, path, body);
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(ApiError::from_status(resp.status, &resp.body));
        }
        Ok(resp)
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::execute`]; additionally `ApiError::Decode` when the
    /// body does not match `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.execute(Method::Get, path, None).await?;
        decode_json(&resp)
    }

    /// `POST path` with an optional JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::get`].
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Option<serde_json::Value>) -> Result<T, ApiError> {
        let resp = self.execute(Method::Post, path, body).await?;
        decode_json(&resp)
    }

    /// `POST path` when only success matters; the response body is ignored.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::execute`].
    pub async fn post_unit(&self, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        self.execute(Method::Post, path, body).await.map(|_| ())
    }
}

/// Serialize a request payload, mapping failures into `ApiError::Encode`.
///
/// # Errors
///
/// Returns `ApiError::Encode` if `value` cannot be represented as JSON.
pub fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode_json<T: DeserializeOwned>(resp: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}
