//! Session phases and OAuth callback parsing.
//!
//! The backend finishes its OAuth dance by redirecting to the app with
//! `access_token` and `refresh_token` in the query string. Parsing that
//! query is pure string work and lives here; persisting tokens and probing
//! the profile endpoint belong to the session feature.

use goodseek_api_models::UserProfile;

/// Where the sign-in lifecycle currently stands.
///
/// The app boots in [`SessionPhase::Probing`] and settles into one of the
/// other phases once stored credentials have been checked against the
/// backend. [`SessionPhase::Failed`] means the probe could not complete;
/// the stored tokens are kept so a retry can succeed without a fresh
/// sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Credentials are being checked against the profile endpoint.
    #[default]
    Probing,
    /// No usable credentials; the visitor browses anonymously.
    SignedOut,
    /// Credentials were accepted and the profile is known.
    SignedIn(UserProfile),
    /// The probe failed for reasons other than rejection, with a message.
    Failed(String),
}

impl SessionPhase {
    /// Whether a profile has been confirmed.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    /// The confirmed profile, when signed in.
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::SignedIn(profile) => Some(profile),
            _ => None,
        }
    }

    /// The probe failure message, when the session is in the failed phase.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Token pair delivered by the OAuth redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackTokens {
    /// Bearer token sent on authenticated requests.
    pub access: String,
    /// Token the backend accepts for refreshing the access token.
    pub refresh: String,
}

/// Extract the token pair from a redirect query string.
///
/// Accepts the query with or without its leading `?`. Returns tokens only
/// when both `access_token` and `refresh_token` are present and non-empty;
/// a partial pair is treated as no callback at all. For repeated keys the
/// first occurrence wins.
#[must_use]
pub fn parse_callback_tokens(query: &str) -> Option<CallbackTokens> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut access = None;
    let mut refresh = None;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match decode_component(key).as_str() {
            "access_token" if access.is_none() => access = Some(decode_component(value)),
            "refresh_token" if refresh.is_none() => refresh = Some(decode_component(value)),
            _ => {}
        }
    }
    let access = access.filter(|token| !token.is_empty())?;
    let refresh = refresh.filter(|token| !token.is_empty())?;
    Some(CallbackTokens { access, refresh })
}

/// Decode one `application/x-www-form-urlencoded` component, falling back
/// to the raw text when the percent-escapes are not valid UTF-8.
fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
