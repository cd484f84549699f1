//! GitHub API client
//!
//! Services format endpoint paths and decode typed results; a [`Transport`]
//! turns those paths into HTTP requests and executes them.

use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod orgs;

pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockTransport;
pub use models::{Organization, Team, User};
pub use orgs::OrganizationsService;

/// A request ready to be executed by a [`Transport`]
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,

    /// Path relative to the API base URL, exactly as the service formatted it
    pub path: String,

    /// Resolved absolute URL
    pub url: Url,

    /// Serialized JSON body
    pub body: Option<Vec<u8>>,
}

/// A successful response returned by a [`Transport`]
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Success status as received (200, 201, 204). Informational only:
    /// services never branch on it, errors are already raised by `execute`.
    pub status: StatusCode,

    /// Raw body, empty for `204 No Content`
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Decode the response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}

/// HTTP transport used by the API services
///
/// `execute` must return an error for any non-success status, so services
/// only ever see bodies worth decoding.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Base URL that relative request paths are resolved against
    fn base_url(&self) -> &Url;

    /// Build a request for `path`, serializing `body` as JSON when present
    fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ApiRequest>
    where
        B: Serialize + ?Sized,
    {
        let url = self
            .base_url()
            .join(path)
            .map_err(|e| ApiError::InvalidRequest(format!("{}: {}", path, e)))?;

        let body = body.map(serde_json::to_vec).transpose()?;

        Ok(ApiRequest {
            method,
            path: path.to_string(),
            url,
            body,
        })
    }

    /// Send a request and return the response if its status is a success
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}
