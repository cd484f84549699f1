//! GitHub API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::Deserialize;

use super::{ApiRequest, ApiResponse, OrganizationsService, Transport};
use crate::error::{ApiError, ConfigError, Result};

/// GitHub API base URL
pub const API_BASE_URL: &str = "https://api.github.com/";

/// Media type for the v3 REST API
const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";

const USER_AGENT: &str = concat!("ghorgs/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub API client
///
/// Immutable after construction; share it freely across tasks.
pub struct GitHubClient {
    http: HttpClient,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a new client against the public GitHub API
    pub fn new(token: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: Url::parse(API_BASE_URL)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?,
            token,
        })
    }

    /// Point the client at a different API root (GitHub Enterprise, test servers)
    ///
    /// A trailing slash is appended when missing so relative paths resolve
    /// beneath the given root instead of replacing its last segment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let url = Url::parse(&normalized)
            .map_err(|e| ConfigError::Invalid(format!("API URL '{}': {}", base_url, e)))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "API URL '{}' must be an http(s) URL",
                base_url
            ))
            .into());
        }

        self.base_url = url;
        Ok(self)
    }

    /// Organization, team and membership endpoints
    pub fn organizations(&self) -> OrganizationsService<'_, Self> {
        OrganizationsService::new(self)
    }
}

#[async_trait]
impl Transport for GitHubClient {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .http
            .request(request.method.clone(), request.url.clone())
            .header(ACCEPT, MEDIA_TYPE_V3);

        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, format!("token {}", token));
        }

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(ApiError::from)?;
            return Ok(ApiResponse {
                status,
                body: body.to_vec(),
            });
        }

        debug!("{} {} failed with {}", request.method, request.url, status);
        Err(error_for_status(response).await.into())
    }
}

/// Map a non-success response to an [`ApiError`]
async fn error_for_status(response: reqwest::Response) -> ApiError {
    let status = response.status();

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60);

    let text = response.text().await.unwrap_or_default();
    let message = error_message(&text).unwrap_or_else(|| {
        if text.is_empty() {
            status.to_string()
        } else {
            text
        }
    });

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(message)
        }
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(Duration::from_secs(retry_after)),
        status if status.is_server_error() => ApiError::ServerError(message),
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

/// Extract the `message` field of a GitHub error body
fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|e| e.message)
}
