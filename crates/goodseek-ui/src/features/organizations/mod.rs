//! Single-organization inspection: detail record and IRS verification.
//!
//! # Design
//! - Selection is explicit store state; changing the EIN resets both the
//!   detail and verification trackers, which also cancels stale fetches.
//! - A loaded record for the same EIN is reused instead of refetched.
//! - Favorites are toggled here and mirrored into the records slice.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod view;
