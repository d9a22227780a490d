//! Compile-time configuration.

/// Deployed backend; builds can override it with `GOODSEEK_API_BASE`.
const DEFAULT_API_BASE: &str = "https://goodseek-backend.onrender.com/api";

/// API base URL the client is constructed with.
#[must_use]
pub(crate) fn api_base_url() -> &'static str {
    option_env!("GOODSEEK_API_BASE").unwrap_or(DEFAULT_API_BASE)
}
