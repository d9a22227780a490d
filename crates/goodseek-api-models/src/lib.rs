#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Goodseek charity API.
//!
//! These types mirror the backend's JSON contract field for field so the
//! UI and any future tooling decode the same payloads the same way. List
//! envelopes default their `data` member to empty rather than failing on
//! absent or null fields, which is how the backend behaves under sparse
//! upstream records.
use serde::{Deserialize, Serialize};

/// A charitable organization as returned by the directory endpoints.
///
/// Optional fields reflect the sparseness of the upstream IRS extracts:
/// everything beyond the EIN and name can be missing. Display shaping
/// (dashed EIN, abbreviated currency, joined address) happens at read time
/// in the UI, never on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Organization {
    /// Employer Identification Number, the primary key. Normalized (no
    /// dashes) on the wire.
    pub ein: String,
    /// Registered organization name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// City of the registered address.
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Two-letter state code of the registered address.
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// ZIP code of the registered address.
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Street line of the registered address.
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Full NTEE classification code (first letter is the major group).
    pub ntee_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Human-readable NTEE major-group name, resolved server-side.
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// IRS classification code (1000 marks a 501(c)(3) public charity).
    pub classification: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// IRS deductibility code (1 means donations are tax-deductible).
    pub deductibility: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// IRS status code from the exempt-organization master file.
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Most recent reported revenue in whole dollars.
    pub revenue_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Most recent reported assets in whole dollars.
    pub asset_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// IRS ruling date, `YYYYMM` as issued.
    pub ruling_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Server-computed revenue bracket label.
    pub revenue_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Timestamp of the backend's last refresh of this record.
    pub last_updated: Option<String>,
    #[serde(default)]
    /// True when the IRS classifies this as a 501(c)(3) public charity.
    pub is_public_charity: bool,
    #[serde(default)]
    /// True when donations to this organization are tax-deductible.
    pub is_tax_deductible: bool,
}

impl Organization {
    /// Whether the verified badge applies: a public charity whose
    /// donations are deductible.
    #[must_use]
    pub const fn verified_badge(&self) -> bool {
        self.is_public_charity && self.is_tax_deductible
    }

    /// "City, ST" with missing parts skipped; empty when neither is set.
    #[must_use]
    pub fn display_location(&self) -> String {
        join_present(&[self.city.as_deref(), self.state.as_deref()])
    }

    /// Street, city, state, and ZIP joined with ", ", skipping empty
    /// parts. Empty string when no address component is present.
    #[must_use]
    pub fn full_address(&self) -> String {
        join_present(&[
            self.street.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zip_code.as_deref(),
        ])
    }

    /// Uppercased NTEE major group (first letter of the code), if any.
    #[must_use]
    pub fn major_group(&self) -> Option<char> {
        self.ntee_code
            .as_deref()
            .and_then(|code| code.chars().next())
            .map(|letter| letter.to_ascii_uppercase())
    }
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .filter_map(|part| part.map(str::trim).filter(|part| !part.is_empty()))
        .collect::<Vec<_>>()
        .join(", ")
}

// The backend emits `"data": null` for empty result sets under some code
// paths. Treat null the same as an absent field.
fn null_to_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope for `GET /organizations/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchEnvelope {
    #[serde(default, deserialize_with = "null_to_empty")]
    /// Matching organizations; empty when the field is absent or null.
    pub data: Vec<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Total match count as reported by the backend.
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// The query string the backend evaluated.
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Echo of the filters the backend applied.
    pub filters: Option<serde_json::Value>,
}

/// Envelope wrapping a single-organization lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganizationEnvelope {
    /// The organization record.
    pub data: Organization,
}

/// One NTEE major-group category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Single-letter NTEE major-group code (A through Z).
    pub code: String,
    /// Human-readable category name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Longer description of the category's focus.
    pub description: Option<String>,
}

/// Envelope for `GET /organizations/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CategoriesEnvelope {
    #[serde(default, deserialize_with = "null_to_empty")]
    /// Available categories; empty when the field is absent or null.
    pub data: Vec<Category>,
}

/// Envelope for `GET /organizations/categories/{code}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CategoryOrganizationsEnvelope {
    #[serde(default, deserialize_with = "null_to_empty")]
    /// Organizations in the category; empty when absent or null.
    pub data: Vec<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Total count within the category.
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Echo of the requested category code.
    pub category: Option<String>,
}

/// Result of `GET /organizations/verify/{ein}`. Not data-wrapped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct VerificationReport {
    #[serde(default)]
    /// True when the organization passed verification.
    pub verified: bool,
    #[serde(default)]
    /// True when the EIN exists in the IRS database at all.
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Normalized EIN of the verified organization.
    pub ein: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Registered name of the verified organization.
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Public-charity determination, when the lookup succeeded.
    pub is_public_charity: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Deductibility determination, when the lookup succeeded.
    pub is_tax_deductible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// IRS status code.
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// IRS classification code.
    pub classification: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// IRS deductibility code.
    pub deductibility: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Human-readable verification outcome.
    pub message: Option<String>,
}

/// Result of `GET /organizations/test`. Not data-wrapped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConnectionReport {
    #[serde(default)]
    /// True when the backend reached its upstream charity registry.
    pub connected: bool,
    #[serde(default)]
    /// True when the backend holds a valid upstream API key.
    pub api_key_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Upstream rate-limit details, shape left to the backend.
    pub rate_limit: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Server timestamp of the probe.
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Probe failure detail, when the test failed.
    pub error: Option<String>,
}

/// Authenticated user profile from `GET /user/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Backend-assigned user id.
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Primary email address.
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Display name.
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Avatar URL.
    pub picture: Option<String>,
}

impl UserProfile {
    /// Preferred label for the session badge: name, else email, else a
    /// neutral placeholder.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Signed in")
    }
}

/// Error body some non-2xx responses carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Machine-oriented error label.
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Human-readable error message.
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Best human-readable detail: `message` wins over `error`.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(ein: &str) -> Organization {
        Organization {
            ein: ein.to_string(),
            name: "Example Charity".to_string(),
            ..Organization::default()
        }
    }

    #[test]
    fn search_envelope_defaults_missing_data_to_empty() {
        let envelope: SearchEnvelope = serde_json::from_str("{}").expect("decode");
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.count, None);
    }

    #[test]
    fn search_envelope_treats_null_data_as_empty() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"data": null, "count": 0, "query": "red cross"}"#)
                .expect("decode");
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.query.as_deref(), Some("red cross"));
    }

    #[test]
    fn categories_envelope_defaults_missing_data_to_empty() {
        let envelope: CategoriesEnvelope = serde_json::from_str("{}").expect("decode");
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn organization_decodes_sparse_record() {
        let decoded: Organization =
            serde_json::from_str(r#"{"ein": "530196605", "name": "American Red Cross"}"#)
                .expect("decode");
        assert_eq!(decoded.ein, "530196605");
        assert!(!decoded.is_public_charity);
        assert_eq!(decoded.revenue_amount, None);
    }

    #[test]
    fn organization_decodes_full_record() {
        let payload = r#"{
            "ein": "530196605",
            "name": "American Red Cross",
            "city": "Washington",
            "state": "DC",
            "zip_code": "20006",
            "street": "431 18th St NW",
            "ntee_code": "P12",
            "category_name": "Human Services",
            "classification": 1000,
            "deductibility": 1,
            "status": 1,
            "revenue_amount": 2500000000,
            "asset_amount": 3100000000,
            "ruling_date": "191707",
            "is_public_charity": true,
            "is_tax_deductible": true
        }"#;
        let decoded: Organization = serde_json::from_str(payload).expect("decode");
        assert!(decoded.verified_badge());
        assert_eq!(decoded.major_group(), Some('P'));
        assert_eq!(decoded.revenue_amount, Some(2_500_000_000));
    }

    #[test]
    fn verified_badge_requires_both_flags() {
        let mut record = org("530196605");
        record.is_public_charity = true;
        assert!(!record.verified_badge());
        record.is_tax_deductible = true;
        assert!(record.verified_badge());
    }

    #[test]
    fn display_location_skips_missing_parts() {
        let mut record = org("530196605");
        assert_eq!(record.display_location(), "");
        record.state = Some("DC".to_string());
        assert_eq!(record.display_location(), "DC");
        record.city = Some("Washington".to_string());
        assert_eq!(record.display_location(), "Washington, DC");
    }

    #[test]
    fn full_address_joins_present_parts_in_order() {
        let mut record = org("530196605");
        record.street = Some("431 18th St NW".to_string());
        record.city = Some("Washington".to_string());
        record.state = Some("DC".to_string());
        record.zip_code = Some("20006".to_string());
        assert_eq!(record.full_address(), "431 18th St NW, Washington, DC, 20006");

        record.street = None;
        record.zip_code = None;
        assert_eq!(record.full_address(), "Washington, DC");
    }

    #[test]
    fn full_address_trims_blank_components() {
        let mut record = org("530196605");
        record.street = Some("  ".to_string());
        record.city = Some("Washington".to_string());
        assert_eq!(record.full_address(), "Washington");
    }

    #[test]
    fn major_group_uppercases_the_code() {
        let mut record = org("530196605");
        record.ntee_code = Some("p20".to_string());
        assert_eq!(record.major_group(), Some('P'));
        record.ntee_code = None;
        assert_eq!(record.major_group(), None);
    }

    #[test]
    fn category_organizations_envelope_carries_echo() {
        let payload = r#"{"data": [], "count": 12, "category": "B"}"#;
        let envelope: CategoryOrganizationsEnvelope =
            serde_json::from_str(payload).expect("decode");
        assert_eq!(envelope.category.as_deref(), Some("B"));
        assert_eq!(envelope.count, Some(12));
    }

    #[test]
    fn verification_report_decodes_negative_result() {
        let payload = r#"{
            "verified": false,
            "exists": false,
            "message": "Organization not found in IRS database"
        }"#;
        let report: VerificationReport = serde_json::from_str(payload).expect("decode");
        assert!(!report.verified);
        assert!(!report.exists);
        assert_eq!(
            report.message.as_deref(),
            Some("Organization not found in IRS database")
        );
    }

    #[test]
    fn connection_report_tolerates_arbitrary_rate_limit_shape() {
        let payload = r#"{
            "connected": true,
            "api_key_valid": true,
            "rate_limit": {"remaining": 97, "reset": "2026-01-01T00:00:00Z"},
            "timestamp": "2026-01-01T00:00:00Z"
        }"#;
        let report: ConnectionReport = serde_json::from_str(payload).expect("decode");
        assert!(report.connected);
        assert!(report.rate_limit.is_some());
    }

    #[test]
    fn user_profile_display_name_prefers_name_then_email() {
        let mut profile = UserProfile::default();
        assert_eq!(profile.display_name(), "Signed in");
        profile.email = Some("donor@example.org".to_string());
        assert_eq!(profile.display_name(), "donor@example.org");
        profile.name = Some("Dana Donor".to_string());
        assert_eq!(profile.display_name(), "Dana Donor");
    }

    #[test]
    fn api_error_body_detail_prefers_message() {
        let body = ApiErrorBody {
            error: Some("bad_request".to_string()),
            message: Some("Query must be at least 2 characters".to_string()),
        };
        assert_eq!(body.detail(), Some("Query must be at least 2 characters"));

        let label_only = ApiErrorBody {
            error: Some("bad_request".to_string()),
            message: None,
        };
        assert_eq!(label_only.detail(), Some("bad_request"));
    }

    #[test]
    fn organization_round_trips_through_json() {
        let mut record = org("530196605");
        record.city = Some("Washington".to_string());
        record.is_public_charity = true;
        let encoded = serde_json::to_string(&record).expect("encode");
        let decoded: Organization = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, record);
    }
}
