//! Bearer token payload decoding and expiry evaluation.
//!
//! DESIGN
//! ======
//! Tokens are three dot-separated segments; only the middle one is read. It
//! is base64url JSON carrying at least `exp` in Unix seconds. The signature is
//! never checked here: the services do that, the client only needs to know
//! when to stop sending a token.
//!
//! ERROR HANDLING
//! ==============
//! `decode_claims` returns a typed `TokenError`; `is_expired_at` folds every
//! failure into "expired" so callers never see a decode error.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims carried in the token payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry in Unix seconds; issuers may send fractions.
    pub exp: f64,
    /// Everything else the issuer put in the payload (`sub`, `email`, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TokenClaims {
    pub fn expires_at_millis(&self) -> f64 {
        self.exp * 1000.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token must have three dot-separated segments")]
    Segments,
    #[error("token payload is not base64url: {0}")]
    Base64(String),
    #[error("token payload is not a claims object: {0}")]
    Json(String),
}

/// Decode the payload segment of `token` into typed claims.
///
/// # Errors
///
/// Returns `TokenError` when the token is not three segments, the payload is
/// not base64url, or the decoded JSON has no numeric `exp`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Segments);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))
}

/// True when `token` is absent, undecodable, or `exp * 1000 <= now_ms`.
pub fn is_expired_at(token: Option<&str>, now_ms: i64) -> bool {
    let Some(token) = token else {
        return true;
    };
    match decode_claims(token) {
        #[allow(clippy::cast_precision_loss)]
        Ok(claims) => claims.expires_at_millis() <= now_ms as f64,
        Err(_) => true,
    }
}
