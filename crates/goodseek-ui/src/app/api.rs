//! API client context shared across the component tree.
//!
//! # Design
//! - Create exactly one client per app boot; pages pull it from context.
//! - Equality is pointer identity so context updates never cascade.

use std::rc::Rc;

use crate::services::api::ApiClient;

/// Shared API client handle.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton client, cheap to clone into async tasks.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
