//! Error taxonomy for backend requests.
//!
//! Requests fail in one of four ways and views phrase each differently,
//! so the client maps every failure into [`ApiError`] before it reaches a
//! store slice. The display strings are the exact texts views render.

use goodseek_api_models::ApiErrorBody;
use thiserror::Error;

/// Failure modes of a backend request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The looked-up organization does not exist.
    #[error("Organization not found")]
    NotFound,
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Best available detail, from the response body when it carried one.
        message: String,
    },
    /// The request never completed (offline, DNS, CORS).
    #[error("network error: {0}")]
    Transport(String),
    /// The response arrived but its body was not the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-success response.
    ///
    /// Prefers the detail carried in the response body over a generic
    /// status line. No status gets special treatment here; per-entity 404
    /// mapping is opted into with [`Self::for_entity_lookup`].
    #[must_use]
    pub fn from_status(status: u16, body: Option<&ApiErrorBody>) -> Self {
        let message = body
            .and_then(ApiErrorBody::detail)
            .map_or_else(|| format!("request failed with status {status}"), str::to_string);
        Self::Status { status, message }
    }

    /// Re-map a 404 into [`Self::NotFound`] for single-entity lookups.
    ///
    /// Listing endpoints return empty data rather than 404, so only the
    /// lookup paths use this.
    #[must_use]
    pub fn for_entity_lookup(self) -> Self {
        match self {
            Self::Status { status: 404, .. } => Self::NotFound,
            other => other,
        }
    }

    /// Whether the failure was rejected credentials or a bad request, as
    /// opposed to the backend being unreachable.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::NotFound | Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_detail_wins_over_the_generic_status_line() {
        let body = ApiErrorBody {
            error: Some("invalid_filter".to_string()),
            message: Some("state filter must be a two-letter code".to_string()),
        };
        let err = ApiError::from_status(400, Some(&body));
        assert_eq!(
            err.to_string(),
            "state filter must be a two-letter code"
        );
    }

    #[test]
    fn missing_body_falls_back_to_the_status_line() {
        let err = ApiError::from_status(502, None);
        assert_eq!(err.to_string(), "request failed with status 502");
    }

    #[test]
    fn entity_lookup_maps_404_to_not_found() {
        let err = ApiError::from_status(404, None).for_entity_lookup();
        assert_eq!(err, ApiError::NotFound);
        assert_eq!(err.to_string(), "Organization not found");
    }

    #[test]
    fn entity_lookup_leaves_other_statuses_alone() {
        let err = ApiError::from_status(500, None).for_entity_lookup();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "request failed with status 500".to_string()
            }
        );
    }

    #[test]
    fn transport_and_decode_render_with_their_prefixes() {
        assert_eq!(
            ApiError::Transport("Failed to fetch".to_string()).to_string(),
            "network error: Failed to fetch"
        );
        assert_eq!(
            ApiError::Decode("missing field `data`".to_string()).to_string(),
            "unexpected response: missing field `data`"
        );
    }

    #[test]
    fn rejection_excludes_transport_failures() {
        assert!(ApiError::NotFound.is_rejection());
        assert!(ApiError::from_status(401, None).is_rejection());
        assert!(!ApiError::Transport("offline".to_string()).is_rejection());
        assert!(!ApiError::Decode("bad json".to_string()).is_rejection());
    }
}
