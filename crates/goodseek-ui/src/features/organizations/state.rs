//! Pure state for the organization detail page.

use goodseek_api_models::{Organization, VerificationReport};

use crate::core::format::normalize_ein;
use crate::core::remote::{Ticket, Tracked};

/// Store slice for the detail page.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct OrganizationsState {
    /// Normalized EIN under inspection, if any.
    pub selected_ein: Option<String>,
    /// The full organization record.
    pub detail: Tracked<Organization>,
    /// IRS verification outcome for the selected EIN.
    pub verification: Tracked<VerificationReport>,
}

/// Point the slice at an EIN.
///
/// The EIN is normalized first. Reselecting the current one is a no-op so
/// loaded data survives route round-trips; switching resets both trackers.
pub fn select_organization(state: &mut OrganizationsState, ein: &str) {
    let normalized = normalize_ein(ein);
    if state.selected_ein.as_deref() == Some(normalized.as_str()) {
        return;
    }
    state.selected_ein = Some(normalized);
    state.detail.reset();
    state.verification.reset();
}

/// Mark a detail fetch in flight.
///
/// Returns `None` when nothing is selected or the record is already
/// loaded for the current selection.
pub fn begin_detail(state: &mut OrganizationsState) -> Option<(Ticket, String)> {
    let ein = state.selected_ein.clone()?;
    if state.detail.state.ready().is_some() {
        return None;
    }
    Some((state.detail.begin(), ein))
}

/// Apply a detail completion; stale tickets are dropped.
pub fn resolve_detail(
    state: &mut OrganizationsState,
    ticket: Ticket,
    outcome: Result<Organization, String>,
) -> bool {
    state.detail.resolve(ticket, outcome)
}

/// Mark a verification fetch in flight, under the same rules as
/// [`begin_detail`].
pub fn begin_verification(state: &mut OrganizationsState) -> Option<(Ticket, String)> {
    let ein = state.selected_ein.clone()?;
    if state.verification.state.ready().is_some() {
        return None;
    }
    Some((state.verification.begin(), ein))
}

/// Apply a verification completion; stale tickets are dropped.
pub fn resolve_verification(
    state: &mut OrganizationsState,
    ticket: Ticket,
    outcome: Result<VerificationReport, String>,
) -> bool {
    state.verification.resolve(ticket, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::remote::Remote;

    fn org(ein: &str) -> Organization {
        Organization {
            ein: ein.to_string(),
            name: "Example Charity".to_string(),
            ..Organization::default()
        }
    }

    #[test]
    fn selection_normalizes_the_ein() {
        let mut state = OrganizationsState::default();
        select_organization(&mut state, "53-0196605");
        assert_eq!(state.selected_ein.as_deref(), Some("530196605"));
    }

    #[test]
    fn reselecting_the_same_ein_keeps_loaded_data() {
        let mut state = OrganizationsState::default();
        select_organization(&mut state, "530196605");
        let (ticket, _) = begin_detail(&mut state).expect("selection issues a ticket");
        assert!(resolve_detail(&mut state, ticket, Ok(org("530196605"))));

        select_organization(&mut state, "53-0196605");
        assert!(state.detail.state.ready().is_some());
        assert!(begin_detail(&mut state).is_none());
    }

    #[test]
    fn switching_eins_resets_and_invalidates() {
        let mut state = OrganizationsState::default();
        select_organization(&mut state, "530196605");
        let (ticket, ein) = begin_detail(&mut state).expect("selection issues a ticket");
        assert_eq!(ein, "530196605");

        select_organization(&mut state, "131624102");
        assert!(!resolve_detail(&mut state, ticket, Ok(org("530196605"))));
        assert_eq!(state.detail.state, Remote::Idle);
        assert_eq!(state.selected_ein.as_deref(), Some("131624102"));
    }

    #[test]
    fn detail_failure_keeps_the_message() {
        let mut state = OrganizationsState::default();
        select_organization(&mut state, "000000000");
        let (ticket, _) = begin_detail(&mut state).expect("selection issues a ticket");
        assert!(resolve_detail(
            &mut state,
            ticket,
            Err("Organization not found".to_string())
        ));
        assert_eq!(state.detail.state.error(), Some("Organization not found"));
        // A failed lookup may be retried.
        assert!(begin_detail(&mut state).is_some());
    }

    #[test]
    fn verification_tracks_independently_of_detail() {
        let mut state = OrganizationsState::default();
        select_organization(&mut state, "530196605");
        let (detail_ticket, _) = begin_detail(&mut state).expect("detail ticket");
        let (verify_ticket, _) = begin_verification(&mut state).expect("verification ticket");

        let report = VerificationReport {
            verified: true,
            exists: true,
            ..VerificationReport::default()
        };
        assert!(resolve_verification(&mut state, verify_ticket, Ok(report)));
        assert!(state.detail.state.is_loading());
        assert!(resolve_detail(&mut state, detail_ticket, Ok(org("530196605"))));
    }

    #[test]
    fn begin_requires_a_selection() {
        let mut state = OrganizationsState::default();
        assert!(begin_detail(&mut state).is_none());
        assert!(begin_verification(&mut state).is_none());
    }
}
