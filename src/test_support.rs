//! Shared fixtures for unit tests: scripted transport, tokens, owners.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use futures::future::LocalBoxFuture;
use leptos::reactive::owner::Owner;

use crate::net::error::ApiError;
use crate::net::http::{ApiRequest, ApiResponse, ServiceClient, Transport};
use crate::util::storage::{MemoryTokenStorage, TokenStorage};

/// Transport that replays queued responses in order and records requests.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(Ok(ApiResponse { status, body: body.to_string() }));
    }

    pub fn push_error(&self, err: ApiError) {
        self.push(Err(err));
    }

    pub fn push(&self, resp: Result<ApiResponse, ApiError>) {
        self.responses.lock().unwrap().push_back(resp);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())));
        Box::pin(async move { next })
    }
}

pub fn client(base_url: &str, transport: &Arc<FakeTransport>, storage: &Arc<MemoryTokenStorage>) -> ServiceClient {
    let transport: Arc<dyn Transport> = transport.clone();
    let storage: Arc<dyn TokenStorage> = storage.clone();
    ServiceClient::new(base_url, transport, storage)
}

pub fn token_from_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

pub fn token_with_exp(exp: i64) -> String {
    token_from_payload(&serde_json::json!({ "exp": exp, "sub": "1" }))
}

/// Token expiring an hour from the real clock.
pub fn fresh_token() -> String {
    token_with_exp(crate::util::time::now_millis() / 1000 + 3600)
}

/// Token that expired an hour ago on the real clock.
pub fn stale_token() -> String {
    token_with_exp(crate::util::time::now_millis() / 1000 - 3600)
}

/// Reactive owner so signals created by a test are scoped and disposed.
pub fn owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}
