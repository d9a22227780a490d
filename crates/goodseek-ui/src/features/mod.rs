//! Feature slices: state, actions, and views per domain area.

pub mod categories;
pub mod organizations;
pub mod popular;
pub mod search;
pub mod session;
