//! HTTP client for the charity API (REST).
//!
//! Futures here run on the single-threaded wasm executor and are not Send.
#![allow(clippy::future_not_send)]

use crate::core::query::{self, SearchParams};
use crate::services::error::ApiError;
use gloo_net::http::Request;
use goodseek_api_models::{
    ApiErrorBody, CategoriesEnvelope, Category, CategoryOrganizationsEnvelope, ConnectionReport,
    Organization, OrganizationEnvelope, SearchEnvelope, UserProfile, VerificationReport,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL the browser should navigate to for Google sign-in.
    pub(crate) fn login_url(&self) -> String {
        format!("{}{}", self.base_url, query::LOGIN_PATH)
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
        bearer: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut req = Request::get(&format!("{}{path}", self.base_url));
        if let Some(token) = bearer {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let response = req
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        if !response.ok() {
            let body = response.json::<ApiErrorBody>().await.ok();
            return Err(ApiError::from_status(response.status(), body.as_ref()));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn search_organizations(
        &self,
        params: &SearchParams,
    ) -> Result<SearchEnvelope, ApiError> {
        self.get_json(&query::build_search_path(params), None).await
    }

    pub(crate) async fn fetch_organization(&self, ein: &str) -> Result<Organization, ApiError> {
        let envelope: OrganizationEnvelope = self
            .get_json(&query::build_organization_path(ein), None)
            .await
            .map_err(ApiError::for_entity_lookup)?;
        Ok(envelope.data)
    }

    pub(crate) async fn verify_organization(
        &self,
        ein: &str,
    ) -> Result<VerificationReport, ApiError> {
        self.get_json(&query::build_verify_path(ein), None).await
    }

    pub(crate) async fn fetch_popular(&self, limit: u32) -> Result<Vec<Organization>, ApiError> {
        let envelope: SearchEnvelope = self
            .get_json(&query::build_popular_path(limit), None)
            .await?;
        Ok(envelope.data)
    }

    pub(crate) async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let envelope: CategoriesEnvelope = self.get_json(query::CATEGORIES_PATH, None).await?;
        Ok(envelope.data)
    }

    pub(crate) async fn fetch_category_organizations(
        &self,
        code: &str,
        limit: u32,
    ) -> Result<CategoryOrganizationsEnvelope, ApiError> {
        self.get_json(&query::build_category_path(code, limit), None)
            .await
    }

    pub(crate) async fn test_connection(&self) -> Result<ConnectionReport, ApiError> {
        self.get_json(query::CONNECTION_TEST_PATH, None).await
    }

    pub(crate) async fn fetch_profile(&self, bearer: &str) -> Result<UserProfile, ApiError> {
        self.get_json(query::PROFILE_PATH, Some(bearer)).await
    }
}
