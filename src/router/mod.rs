//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` holds the pure decision logic; the `RouteGuard` component in
//! `components` runs it on every location change and performs redirects.

pub mod guard;
