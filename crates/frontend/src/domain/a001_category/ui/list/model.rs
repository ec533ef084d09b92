//! Category API collaborator
//!
//! `CategoryApi` is the seam the list view-model talks to; `HttpCategoryApi`
//! is the browser implementation over `gloo_net`.

use crate::shared::api_utils::api_base;
use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::CategoryRecord;
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_envelope::ApiEnvelope;
use gloo_net::http::{Request, Response};
use serde_json::{Map, Value};
use thiserror::Error;

/// Transport-level failure of an API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Remote operations on the category collection.
///
/// Futures are `?Send`: in the browser every call runs on the single
/// event loop.
#[async_trait(?Send)]
pub trait CategoryApi: Send + Sync {
    /// Full category list; `data` of the envelope is an array of entries
    async fn get_categories(&self) -> Result<ApiEnvelope, ApiError>;

    /// Create a category from its serialized form
    async fn add_category(&self, category: Map<String, Value>) -> Result<ApiEnvelope, ApiError>;

    /// Overwrite the category with the given id
    async fn mod_category(&self, category: Map<String, Value>, id: String) -> Result<(), ApiError>;

    /// Delete the category with the given id
    async fn del_category(&self, id: String) -> Result<ApiEnvelope, ApiError>;
}

/// `CategoryApi` over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpCategoryApi {
    base_url: String,
}

impl HttpCategoryApi {
    /// API on the backend next to the current page (see [`api_base`])
    pub fn new() -> Self {
        Self::with_base(api_base())
    }

    pub fn with_base(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/api/{}", self.base_url, CategoryRecord::collection_name())
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

impl Default for HttpCategoryApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl CategoryApi for HttpCategoryApi {
    async fn get_categories(&self) -> Result<ApiEnvelope, ApiError> {
        let response = Request::get(&self.collection_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        read_envelope(response).await
    }

    async fn add_category(&self, category: Map<String, Value>) -> Result<ApiEnvelope, ApiError> {
        let response = Request::post(&self.collection_url())
            .json(&category)
            .map_err(|e| ApiError::Request(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        read_envelope(response).await
    }

    async fn mod_category(&self, category: Map<String, Value>, id: String) -> Result<(), ApiError> {
        let response = Request::put(&self.item_url(&id))
            .json(&category)
            .map_err(|e| ApiError::Request(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    async fn del_category(&self, id: String) -> Result<ApiEnvelope, ApiError> {
        let response = Request::delete(&self.item_url(&id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        read_envelope(response).await
    }
}

/// Decode the envelope of a successful response.
///
/// Past the status check the server has applied the request, so an empty
/// body (204) or one that is not an envelope reads as an empty envelope.
async fn read_envelope(response: Response) -> Result<ApiEnvelope, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    Ok(envelope_from_body(&text))
}

fn envelope_from_body(text: &str) -> ApiEnvelope {
    if text.trim().is_empty() {
        return ApiEnvelope::default();
    }

    serde_json::from_str(text).unwrap_or_else(|e| {
        log::warn!("Undecodable API response body ignored: {}", e);
        ApiEnvelope::default()
    })
}
