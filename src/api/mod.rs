//! Backend API
//!
//! Typed bindings to the travel planner REST backend, organized by resource.
//! Requests go through a [`Transport`], so the browser `fetch` can be swapped out.

mod fetch;
mod place;
mod project;

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::ErrorDetail;

pub use fetch::FetchTransport;

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A request relative to the configured origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    pub fn with_json(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a 2xx body, or turn the response into a status error
    pub fn json<T: DeserializeOwned>(self) -> ApiResult<T> {
        let this = self.error_for_status()?;
        serde_json::from_str(&this.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn error_for_status(self) -> ApiResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        // Missing or non-JSON error bodies just mean no detail
        let detail = serde_json::from_str::<ErrorDetail>(&self.body)
            .ok()
            .and_then(ErrorDetail::message);
        Err(ApiError::Status { status: self.status, detail })
    }
}

// ========================
// Transport
// ========================

#[async_trait(?Send)]
pub trait Transport {
    /// Resolves with any HTTP response; `Err` only when no response arrived
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        (**self).send(request).await
    }
}

/// Client for the four backend operations
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        log::debug!("{} {}", request.method.as_str(), request.path);
        let result = self.transport.send(request).await;
        if let Err(e) = &result {
            log::error!("request failed: {}", e);
        }
        result
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(199, "").is_success());
        assert!(!ApiResponse::new(404, "").is_success());
    }

    #[test]
    fn test_error_for_status_reads_detail() {
        let err = ApiResponse::new(400, r#"{"detail":"Cannot delete project with visited places"}"#)
            .error_for_status()
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                detail: Some("Cannot delete project with visited places".into())
            }
        );
    }

    #[test]
    fn test_error_for_status_tolerates_plain_body() {
        let err = ApiResponse::new(502, "Bad Gateway").error_for_status().unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502, detail: None });
    }

    #[test]
    fn test_json_decode_error() {
        let err = ApiResponse::new(200, "<html>").json::<Vec<u32>>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
