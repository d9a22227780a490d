//! Sign-in lifecycle: token intake, profile probe, and sign-out.
//!
//! # Design
//! - The OAuth redirect lands with tokens in the URL; boot persists them
//!   and strips the query before anything else renders.
//! - Presence of a token is never trusted. The profile probe decides the
//!   phase, and probe failures are surfaced with a retry instead of being
//!   swallowed into a signed-out state.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod view;
