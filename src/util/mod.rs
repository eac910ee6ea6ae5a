//! Utility helpers shared across stores, pages and the HTTP layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! token payload decoding) from store and page logic.

pub mod storage;
pub mod time;
pub mod token;
