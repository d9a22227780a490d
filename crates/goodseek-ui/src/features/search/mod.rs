//! Charity search: query, filters, and paged results.
//!
//! # Design
//! - Keep API calls in the feature layer.
//! - Debounce keystrokes in the input; the guard on short queries lives in
//!   the state layer so every caller gets it.
//! - Results are generation-tracked so a slow response for an old query
//!   never overwrites a newer one.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod view;
