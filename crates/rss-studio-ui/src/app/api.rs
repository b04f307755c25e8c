//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Swap the localized fallback message via interior mutability instead of
//!   rebuilding the client on locale changes.

use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client context for feature views.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a context for `base_url` with the initial fallback error text.
    pub(crate) fn new(base_url: impl Into<String>, generic_error: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url, generic_error)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
