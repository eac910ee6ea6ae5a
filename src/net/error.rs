//! Failure taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Stores match on these variants only to single out `Unauthorized`; every
//! other failure is logged and reported to views as a plain boolean.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("request rejected ({status}): {message}")]
    Client { status: u16, message: String },
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("invalid request body: {0}")]
    Encode(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status and raw body to an error variant.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            400..=499 => Self::Client { status, message: error_message(body, status) },
            _ => Self::Server { status, message: error_message(body, status) },
        }
    }

    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Transport(_) | Self::Encode(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Prefer the services' `{"error": ...}` / `{"message": ...}` body, then the
/// raw text, then a generic status line.
fn error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value
            .get("error")
            .or_else(|| value.get("message"))
            .and_then(serde_json::Value::as_str)
        {
            return msg.to_owned();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { format!("status {status}") } else { trimmed.to_owned() }
}
