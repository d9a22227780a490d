//! Pure session state transitions.

use goodseek_api_models::UserProfile;

use crate::core::auth::SessionPhase;
use crate::services::error::ApiError;

/// Store slice for the sign-in lifecycle.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    /// Current phase; starts at [`SessionPhase::Probing`].
    pub phase: SessionPhase,
}

/// What a profile probe concluded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The token is good; here is who it belongs to.
    Profile(UserProfile),
    /// The backend answered and turned the token down.
    Rejected(String),
    /// The backend could not be consulted at all.
    Unreachable(String),
}

/// Sort a probe error into rejected-versus-unreachable.
///
/// Any HTTP response counts as an answer, so it rejects the session;
/// transport and decode failures leave the session undecided.
#[must_use]
pub fn classify_probe_error(error: &ApiError) -> ProbeOutcome {
    if error.is_rejection() {
        ProbeOutcome::Rejected(error.to_string())
    } else {
        ProbeOutcome::Unreachable(error.to_string())
    }
}

/// Mark the probe in flight.
pub fn start_probe(state: &mut SessionState) {
    state.phase = SessionPhase::Probing;
}

/// Apply a probe conclusion.
///
/// Returns `true` when the caller should discard stored tokens, which is
/// exactly the rejected case.
pub fn apply_probe(state: &mut SessionState, outcome: ProbeOutcome) -> bool {
    match outcome {
        ProbeOutcome::Profile(profile) => {
            state.phase = SessionPhase::SignedIn(profile);
            false
        }
        ProbeOutcome::Rejected(_) => {
            state.phase = SessionPhase::SignedOut;
            true
        }
        ProbeOutcome::Unreachable(message) => {
            state.phase = SessionPhase::Failed(message);
            false
        }
    }
}

/// There is no token to probe; settle immediately.
pub fn settle_signed_out(state: &mut SessionState) {
    state.phase = SessionPhase::SignedOut;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: Some("7".to_string()),
            email: Some("donor@example.org".to_string()),
            name: Some("Dana Donor".to_string()),
            picture: None,
        }
    }

    #[test]
    fn profile_outcome_signs_in() {
        let mut state = SessionState::default();
        start_probe(&mut state);
        assert!(!apply_probe(&mut state, ProbeOutcome::Profile(profile())));
        assert!(state.phase.is_signed_in());
        assert_eq!(
            state.phase.profile().and_then(|p| p.name.as_deref()),
            Some("Dana Donor")
        );
    }

    #[test]
    fn rejection_signs_out_and_discards_tokens() {
        let mut state = SessionState::default();
        start_probe(&mut state);
        assert!(apply_probe(
            &mut state,
            ProbeOutcome::Rejected("request failed with status 401".to_string())
        ));
        assert_eq!(state.phase, SessionPhase::SignedOut);
    }

    #[test]
    fn unreachable_backend_is_surfaced_not_swallowed() {
        let mut state = SessionState::default();
        start_probe(&mut state);
        assert!(!apply_probe(
            &mut state,
            ProbeOutcome::Unreachable("network error: offline".to_string())
        ));
        assert_eq!(state.phase.error(), Some("network error: offline"));
    }

    #[test]
    fn http_errors_classify_as_rejection() {
        let unauthorized = ApiError::from_status(401, None);
        assert!(matches!(
            classify_probe_error(&unauthorized),
            ProbeOutcome::Rejected(message) if message == "request failed with status 401"
        ));
    }

    #[test]
    fn transport_errors_classify_as_unreachable() {
        let offline = ApiError::Transport("offline".to_string());
        assert!(matches!(
            classify_probe_error(&offline),
            ProbeOutcome::Unreachable(message) if message == "network error: offline"
        ));
    }

    #[test]
    fn no_token_settles_signed_out() {
        let mut state = SessionState::default();
        assert_eq!(state.phase, SessionPhase::Probing);
        settle_signed_out(&mut state);
        assert_eq!(state.phase, SessionPhase::SignedOut);
    }
}
