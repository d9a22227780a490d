//! Popular-organizations spotlight.
//!
//! # Design
//! - One tracked list, fetched when the spotlight tab mounts.
//! - No parameters beyond a fixed window; the backend owns the ranking.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod actions;
