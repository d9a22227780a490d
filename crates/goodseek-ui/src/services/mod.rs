//! Backend access: typed errors natively, the HTTP client on wasm32.

pub mod error;

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
