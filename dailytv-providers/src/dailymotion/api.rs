//! External API-caller seam.

use async_trait::async_trait;
use serde_json::Value;

use dailytv_core::models::{Filters, QueryConfig};

use crate::error::Result;

/// Raw response from the REST layer.
///
/// `json` is forwarded to callers unchanged; paged endpoints carry
/// `has_more` and `page` fields inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub json: Value,
}

impl ApiResponse {
    #[must_use]
    pub const fn new(json: Value) -> Self {
        Self { json }
    }
}

/// Transport seam for REST queries.
///
/// An implementation performs the actual HTTP call (and whatever caching
/// `config.disable_cache` controls) and resolves with exactly one success
/// or error per call. This crate ships no transport; the host application
/// provides one.
#[async_trait]
pub trait ApiCaller: Send + Sync {
    async fn call(
        &self,
        path: &str,
        fields: &[&str],
        filters: &Filters,
        config: &QueryConfig,
    ) -> Result<ApiResponse>;
}
