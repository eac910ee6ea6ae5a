//! Networking modules for the REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the transport seam and per-service clients, `api` binds them
//! to the user/subscription/recommendation endpoints, `error` classifies
//! failures, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
