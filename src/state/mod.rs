//! Client-side state stores.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `subscriptions`, `plans`, ...) so
//! pages can depend on small focused stores. Each store owns an `RwSignal`
//! with its plain-data state plus the service client its actions call; views
//! read the signal, actions write it in short `update` closures and never
//! hold it across an await. Stores holding per-user data are grouped in
//! `user_scope` and emptied whenever the session loses its token.

pub mod payments;
pub mod plans;
pub mod recommendations;
pub mod session;
pub mod subscriptions;
pub mod user_scope;
