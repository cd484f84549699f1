//! Mock transport for testing
//!
//! Records every request it executes and replays queued responses, so
//! services can be tested without making real API calls.

use std::collections::VecDeque;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Serialize;
use tokio::sync::Mutex;

use super::{ApiRequest, ApiResponse, Transport};
use crate::error::{ApiError, Result};

/// Mock transport for testing.
///
/// Queue responses via builder methods; each `execute` pops the next one.
/// When the queue is empty a `204 No Content` response is returned.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new().with_json(&json!({ "login": "acme" }));
/// let org = OrganizationsService::new(&mock).get("acme").await?;
/// assert_eq!(mock.requests().await[0].path, "orgs/acme");
/// ```
pub struct MockTransport {
    base_url: Url,
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    captured_requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::with_base_url("https://api.github.test/")
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: Url::parse(base_url).expect("valid mock base URL"),
            responses: Mutex::new(VecDeque::new()),
            captured_requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a `200 OK` response with `value` as its JSON body
    pub fn with_json<T: Serialize>(self, value: &T) -> Self {
        let body = serde_json::to_vec(value).expect("serializable mock body");
        self.with_response(StatusCode::OK, body)
    }

    /// Queue a raw response
    pub fn with_response(mut self, status: StatusCode, body: Vec<u8>) -> Self {
        self.responses
            .get_mut()
            .push_back(Ok(ApiResponse { status, body }));
        self
    }

    /// Queue an error
    pub fn with_error(mut self, error: ApiError) -> Self {
        self.responses.get_mut().push_back(Err(error.into()));
        self
    }

    /// All requests executed so far, in order
    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// The most recently executed request
    pub async fn last_request(&self) -> ApiRequest {
        self.captured_requests
            .lock()
            .await
            .last()
            .cloned()
            .expect("at least one request executed")
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.captured_requests.lock().await.push(request);

        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or(Ok(ApiResponse {
                status: StatusCode::NO_CONTENT,
                body: Vec::new(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[tokio::test]
    async fn test_mock_captures_requests_in_order() {
        let mock = MockTransport::new();

        for path in ["orgs/a", "orgs/b"] {
            let req = mock.new_request::<()>(Method::GET, path, None).unwrap();
            mock.execute(req).await.unwrap();
        }

        let paths: Vec<String> = mock.requests().await.into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["orgs/a", "orgs/b"]);
    }

    #[tokio::test]
    async fn test_mock_replays_queue_then_no_content() {
        let mock = MockTransport::new()
            .with_json(&serde_json::json!({ "login": "acme" }))
            .with_error(ApiError::Unauthorized);

        let req = mock.new_request::<()>(Method::GET, "orgs/acme", None).unwrap();
        assert_eq!(mock.execute(req.clone()).await.unwrap().status, StatusCode::OK);
        assert!(mock.execute(req.clone()).await.is_err());
        assert_eq!(
            mock.execute(req).await.unwrap().status,
            StatusCode::NO_CONTENT
        );
    }
}
