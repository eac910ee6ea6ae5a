use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::test_support::{FakeTransport, client};
use crate::util::storage::MemoryTokenStorage;

#[test]
fn bearer_header_formats_credential() {
    assert_eq!(bearer_header("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn build_request_attaches_persisted_token() {
    let transport = FakeTransport::new();
    let storage = Arc::new(MemoryTokenStorage::with_token("tok"));
    let api = client("http://subs", &transport, &storage);

    let req = api.build_request(Method::Get, "/sub/user", None);
    assert_eq!(req.url, "http://subs/sub/user");
    assert_eq!(req.authorization.as_deref(), Some("Bearer tok"));
}

#[test]
fn build_request_omits_header_without_token() {
    let transport = FakeTransport::new();
    let storage = Arc::new(MemoryTokenStorage::default());
    let api = client("http://users", &transport, &storage);

    let req = api.build_request(Method::Post, "/users/login", Some(serde_json::json!({"email": "a"})));
    assert_eq!(req.authorization, None);
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, Some(serde_json::json!({"email": "a"})));
}

#[test]
fn token_is_read_per_request() {
    let transport = FakeTransport::new();
    let storage = Arc::new(MemoryTokenStorage::default());
    let api = client("http://subs", &transport, &storage);
    transport.push_json(200, serde_json::json!([]));
    transport.push_json(200, serde_json::json!([]));

    block_on(api.get::<Vec<serde_json::Value>>("/sub/user")).unwrap();
    storage.store("later");
    block_on(api.get::<Vec<serde_json::Value>>("/sub/user")).unwrap();

    let auth: Vec<_> = transport.requests().into_iter().map(|r| r.authorization).collect();
    assert_eq!(auth, vec![None, Some("Bearer later".to_owned())]);
}

#[test]
fn get_decodes_json_body() {
    let transport = FakeTransport::new();
    let storage = Arc::new(MemoryTokenStorage::default());
    let api = client("http://subs", &transport, &storage);
    transport.push_json(200, serde_json::json!({"value": 3}));

    let body: serde_json::Value = block_on(api.get("/x")).unwrap();
    assert_eq!(body["value"], 3);
}

#[test]
fn non_success_status_becomes_error() {
    let transport = FakeTransport::new();
    let storage = Arc::new(MemoryTokenStorage::default());
    let api = client("http://users", &transport, &storage);
    transport.push_json(401, serde_json::json!({"error": "Token has expired."}));

    let err = block_on(api.get::<serde_json::Value>("/users/me")).unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn undecodable_body_is_decode_error() {
    let transport = FakeTransport::new();
    let storage = Arc::new(MemoryTokenStorage::default());
    let api = client("http://users", &transport, &storage);
    transport.push_json(200, serde_json::json!("not a list"));

    let err = block_on(api.get::<Vec<u32>>("/x")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn post_unit_ignores_empty_body() {
    let transport = FakeTransport::new();
    let storage = Arc::new(MemoryTokenStorage::default());
    let api = client("http://subs", &transport, &storage);
    transport.push(Ok(ApiResponse { status: 204, body: String::new() }));

    assert!(block_on(api.post_unit("/sub/1/cancel", None)).is_ok());
}

#[test]
fn offline_transport_always_fails() {
    let transport: Arc<dyn Transport> = Arc::new(OfflineTransport);
    let storage: Arc<dyn TokenStorage> = Arc::new(MemoryTokenStorage::default());
    let api = ServiceClient::new("http://users", transport, storage);

    let err = block_on(api.get::<serde_json::Value>("/users/me")).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn response_success_range() {
    assert!(ApiResponse { status: 200, body: String::new() }.is_success());
    assert!(ApiResponse { status: 201, body: String::new() }.is_success());
    assert!(!ApiResponse { status: 302, body: String::new() }.is_success());
    assert!(!ApiResponse { status: 500, body: String::new() }.is_success());
}
