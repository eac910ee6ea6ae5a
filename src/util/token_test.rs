use super::*;
use crate::test_support::{token_from_payload, token_with_exp};

const NOW_MS: i64 = 1_700_000_000_000;

#[test]
fn decode_claims_reads_exp_and_extra_fields() {
    let token = token_from_payload(&serde_json::json!({"exp": 1_700_000_600, "sub": "42", "email": "a@b.com"}));
    let claims = decode_claims(&token).unwrap();
    assert!((claims.exp - 1_700_000_600.0).abs() < f64::EPSILON);
    assert_eq!(claims.extra.get("sub"), Some(&serde_json::json!("42")));
    assert_eq!(claims.extra.get("email"), Some(&serde_json::json!("a@b.com")));
}

#[test]
fn decode_claims_accepts_fractional_exp() {
    let token = token_from_payload(&serde_json::json!({"exp": 1_700_000_600.5}));
    assert!((decode_claims(&token).unwrap().exp - 1_700_000_600.5).abs() < 1e-3);
}

#[test]
fn decode_claims_tolerates_padded_payload() {
    let payload = format!("{}==", URL_SAFE_NO_PAD.encode(br#"{"exp":1}"#));
    let token = format!("h.{payload}.s");
    assert!((decode_claims(&token).unwrap().exp - 1.0).abs() < f64::EPSILON);
}

#[test]
fn decode_claims_rejects_wrong_segment_count() {
    assert_eq!(decode_claims("only-one"), Err(TokenError::Segments));
    assert_eq!(decode_claims("a.b"), Err(TokenError::Segments));
    assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Segments));
}

#[test]
fn decode_claims_rejects_non_base64_payload() {
    assert!(matches!(decode_claims("h.!!!.s"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_claims_rejects_payload_without_exp() {
    let token = token_from_payload(&serde_json::json!({"sub": "42"}));
    assert!(matches!(decode_claims(&token), Err(TokenError::Json(_))));
}

#[test]
fn decode_claims_rejects_string_exp() {
    let token = token_from_payload(&serde_json::json!({"exp": "soon"}));
    assert!(matches!(decode_claims(&token), Err(TokenError::Json(_))));
}

#[test]
fn expired_when_exp_in_past() {
    let token = token_with_exp(NOW_MS / 1000 - 60);
    assert!(is_expired_at(Some(&token), NOW_MS));
}

#[test]
fn not_expired_when_exp_in_future() {
    let token = token_with_exp(NOW_MS / 1000 + 60);
    assert!(!is_expired_at(Some(&token), NOW_MS));
}

#[test]
fn expired_exactly_at_exp_boundary() {
    let token = token_with_exp(NOW_MS / 1000);
    assert!(is_expired_at(Some(&token), NOW_MS));
    assert!(!is_expired_at(Some(&token), NOW_MS - 1));
}

#[test]
fn expired_when_absent_or_malformed() {
    assert!(is_expired_at(None, NOW_MS));
    assert!(is_expired_at(Some(""), NOW_MS));
    assert!(is_expired_at(Some("not-a-token"), NOW_MS));
    assert!(is_expired_at(Some("h.e30.s"), NOW_MS));
}

#[test]
fn not_expired_when_fractional_exp_in_future() {
    let token = token_from_payload(&serde_json::json!({"exp": 1_700_003_600.5}));
    assert!(!is_expired_at(Some(&token), NOW_MS));
}

#[test]
fn fractional_exp_compares_at_millisecond_precision() {
    let token = token_from_payload(&serde_json::json!({"exp": 1_700_000_000.5}));
    assert!(!is_expired_at(Some(&token), NOW_MS + 499));
    assert!(is_expired_at(Some(&token), NOW_MS + 500));
}

#[test]
fn huge_exp_is_not_expired() {
    let token = token_with_exp(i64::MAX);
    assert!(!is_expired_at(Some(&token), NOW_MS));
    let token = token_from_payload(&serde_json::json!({"exp": u64::MAX}));
    assert!(!is_expired_at(Some(&token), NOW_MS));
}
