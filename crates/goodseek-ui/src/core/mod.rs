//! Pure, DOM-free building blocks shared across the UI.

pub mod auth;
pub mod format;
pub mod query;
pub mod remote;
pub mod storage;
pub mod store;
