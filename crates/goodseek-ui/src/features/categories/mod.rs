//! NTEE category browsing: the catalog grid and per-category listings.
//!
//! # Design
//! - The catalog is fetched once and shared; the search page reuses it for
//!   its category filter options.
//! - Catalog filtering is client-side over name and description.
//! - The member listing is generation-tracked per selected code.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod view;
