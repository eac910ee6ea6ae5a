//! Route-level pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are thin bindings over the stores in `state`; access control is
//! handled by `RouteGuard` before any page mounts.

pub mod home;
pub mod login;
pub mod payments;
pub mod plans;
