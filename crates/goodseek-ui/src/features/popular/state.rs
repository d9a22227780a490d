//! Pure state for the popular-organizations spotlight.

use goodseek_api_models::Organization;

use crate::core::remote::{Ticket, Tracked};

/// How many spotlight organizations to request.
pub const POPULAR_LIMIT: u32 = 12;

/// Store slice for the spotlight tab.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PopularState {
    /// Ranked organizations, most searched first.
    pub spotlight: Tracked<Vec<Organization>>,
}

/// Mark a spotlight fetch in flight.
pub fn begin_popular(state: &mut PopularState) -> Ticket {
    state.spotlight.begin()
}

/// Apply a spotlight completion; stale tickets are dropped.
pub fn resolve_popular(
    state: &mut PopularState,
    ticket: Ticket,
    outcome: Result<Vec<Organization>, String>,
) -> bool {
    state.spotlight.resolve(ticket, outcome)
}
