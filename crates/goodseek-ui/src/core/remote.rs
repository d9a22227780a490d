//! Remote-data lifecycle shared by every fetching feature.
//!
//! # Design
//! - One state machine for idle/loading/ready/failed, no booleans.
//! - Requests carry a generation ticket; completions for a superseded
//!   generation are dropped so out-of-order responses can never overwrite
//!   newer state.

/// Lifecycle of one remotely fetched value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Remote<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The most recent request succeeded.
    Ready(T),
    /// The most recent request failed; holds the display message.
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Remote<T> {
    /// Whether a request is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The ready value, if any.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Ticket identifying one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A remote value paired with the generation of its latest request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tracked<T> {
    /// Current lifecycle state.
    pub state: Remote<T>,
    generation: u64,
}

impl<T> Default for Tracked<T> {
    fn default() -> Self {
        Self {
            state: Remote::Idle,
            generation: 0,
        }
    }
}

impl<T> Tracked<T> {
    /// Mark a new request in flight and return its ticket.
    ///
    /// Any outstanding request becomes stale immediately.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = Remote::Loading;
        Ticket(self.generation)
    }

    /// Apply a completion if `ticket` is still current.
    ///
    /// Returns `false` (without touching state) when a newer request was
    /// issued after the ticket, which is how late responses get dropped.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        if self.generation != ticket.0 {
            return false;
        }
        self.state = match outcome {
            Ok(value) => Remote::Ready(value),
            Err(message) => Remote::Failed(message),
        };
        true
    }

    /// Return to idle and invalidate any outstanding request.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = Remote::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_marks_loading() {
        let mut tracked = Tracked::<u32>::default();
        assert_eq!(tracked.state, Remote::Idle);
        tracked.begin();
        assert!(tracked.state.is_loading());
    }

    #[test]
    fn resolve_applies_the_current_ticket() {
        let mut tracked = Tracked::<u32>::default();
        let ticket = tracked.begin();
        assert!(tracked.resolve(ticket, Ok(7)));
        assert_eq!(tracked.state.ready(), Some(&7));
    }

    #[test]
    fn resolve_drops_stale_tickets() {
        let mut tracked = Tracked::<u32>::default();
        let first = tracked.begin();
        let second = tracked.begin();
        assert!(!tracked.resolve(first, Ok(1)));
        assert!(tracked.state.is_loading());
        assert!(tracked.resolve(second, Ok(2)));
        assert_eq!(tracked.state.ready(), Some(&2));
    }

    #[test]
    fn late_response_cannot_overwrite_newer_result() {
        let mut tracked = Tracked::<u32>::default();
        let first = tracked.begin();
        let second = tracked.begin();
        assert!(tracked.resolve(second, Ok(2)));
        assert!(!tracked.resolve(first, Ok(1)));
        assert_eq!(tracked.state.ready(), Some(&2));
    }

    #[test]
    fn failure_records_the_message() {
        let mut tracked = Tracked::<u32>::default();
        let ticket = tracked.begin();
        assert!(tracked.resolve(ticket, Err("boom".to_string())));
        assert_eq!(tracked.state.error(), Some("boom"));
        assert_eq!(tracked.state.ready(), None);
    }

    #[test]
    fn reset_invalidates_outstanding_requests() {
        let mut tracked = Tracked::<u32>::default();
        let ticket = tracked.begin();
        tracked.reset();
        assert!(!tracked.resolve(ticket, Ok(9)));
        assert_eq!(tracked.state, Remote::Idle);
    }
}
