//! HTTP-level tests for `GitHubClient` against a local mock server

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use ghorgs::client::{GitHubClient, Organization, Transport};
use reqwest::{Method, StatusCode};
use ghorgs::error::{ApiError, Error};

fn client(server: &mockito::Server, token: Option<&str>) -> GitHubClient {
    GitHubClient::new(token.map(str::to_string))
        .unwrap()
        .with_base_url(&server.url())
        .unwrap()
}

#[tokio::test]
async fn list_orgs_sends_token_and_media_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octocat/orgs")
        .match_header("authorization", "token s3cret")
        .match_header("accept", "application/vnd.github.v3+json")
        .match_header("user-agent", Matcher::Regex("^ghorgs/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{ "login": "acme", "id": 1 }, { "login": "globex", "id": 2 }]"#)
        .create_async()
        .await;

    let orgs = client(&server, Some("s3cret"))
        .organizations()
        .list("octocat")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[1].login.as_deref(), Some("globex"));
}

#[tokio::test]
async fn anonymous_requests_carry_no_authorization() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/user/orgs")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let orgs = client(&server, None).organizations().list("").await.unwrap();

    mock.assert_async().await;
    assert!(orgs.is_empty());
}

#[tokio::test]
async fn edit_patches_only_set_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/orgs/acme")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "location": "Lisbon" })))
        .with_status(200)
        .with_body(r#"{ "login": "acme", "id": 7, "location": "Lisbon" }"#)
        .create_async()
        .await;

    let edit = Organization {
        location: Some("Lisbon".to_string()),
        ..Default::default()
    };
    let updated = client(&server, Some("t"))
        .organizations()
        .edit("acme", &edit)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(updated.id, Some(7));
    assert_eq!(updated.location.as_deref(), Some("Lisbon"));
}

#[tokio::test]
async fn membership_changes_accept_no_content() {
    let mut server = mockito::Server::new_async().await;
    let put = server
        .mock("PUT", "/teams/42/members/bob")
        .with_status(204)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/orgs/acme/public_members/bob")
        .with_status(204)
        .create_async()
        .await;

    let client = client(&server, Some("t"));
    let orgs = client.organizations();
    orgs.add_team_member(42, "bob").await.unwrap();
    orgs.conceal_membership("acme", "bob").await.unwrap();

    put.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn execute_reports_success_status_and_raw_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", "/orgs/acme/public_members/bob")
        .with_status(204)
        .create_async()
        .await;
    server
        .mock("GET", "/orgs/acme")
        .with_status(200)
        .with_body(r#"{ "login": "acme" }"#)
        .create_async()
        .await;

    let client = client(&server, None);

    let req = client
        .new_request::<()>(Method::PUT, "orgs/acme/public_members/bob", None)
        .unwrap();
    let response = client.execute(req).await.unwrap();
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    let req = client
        .new_request::<()>(Method::GET, "orgs/acme", None)
        .unwrap();
    let response = client.execute(req).await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, br#"{ "login": "acme" }"#.to_vec());
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/orgs/acme/teams")
        .with_status(200)
        .with_body(r#"[{ "id": 1, "name": "Owners", "members_count": 2 }]"#)
        .create_async()
        .await;

    let client = GitHubClient::new(None)
        .unwrap()
        .with_base_url(&format!("{}/api/v3", server.url()))
        .unwrap();
    let teams = client.organizations().list_teams("acme").await.unwrap();

    mock.assert_async().await;
    assert_eq!(teams[0].members_count, Some(2));
}

#[tokio::test]
async fn not_found_uses_github_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/orgs/ghost")
        .with_status(404)
        .with_body(r#"{ "message": "Not Found", "documentation_url": "https://docs.github.com" }"#)
        .create_async()
        .await;

    let err = client(&server, None)
        .organizations()
        .get("ghost")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::NotFound(msg)) if msg == "Not Found"));
}

#[tokio::test]
async fn status_codes_map_to_api_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/orgs/a")
        .with_status(401)
        .with_body(r#"{ "message": "Bad credentials" }"#)
        .create_async()
        .await;
    server
        .mock("GET", "/orgs/b")
        .with_status(403)
        .with_body(r#"{ "message": "Must have admin rights" }"#)
        .create_async()
        .await;
    server
        .mock("PATCH", "/orgs/c")
        .with_status(422)
        .with_body(r#"{ "message": "Validation Failed" }"#)
        .create_async()
        .await;
    server
        .mock("GET", "/orgs/d")
        .with_status(429)
        .with_header("retry-after", "30")
        .create_async()
        .await;
    server
        .mock("GET", "/orgs/e")
        .with_status(502)
        .with_body("<html>bad gateway</html>")
        .create_async()
        .await;

    let client = client(&server, Some("t"));
    let orgs = client.organizations();

    assert!(matches!(
        orgs.get("a").await,
        Err(Error::Api(ApiError::Unauthorized))
    ));
    assert!(matches!(
        orgs.get("b").await,
        Err(Error::Api(ApiError::Forbidden(msg))) if msg == "Must have admin rights"
    ));
    assert!(matches!(
        orgs.edit("c", &Organization::default()).await,
        Err(Error::Api(ApiError::BadRequest(msg))) if msg == "Validation Failed"
    ));
    assert!(matches!(
        orgs.get("d").await,
        Err(Error::Api(ApiError::RateLimit(d))) if d == Duration::from_secs(30)
    ));
    assert!(matches!(
        orgs.get("e").await,
        Err(Error::Api(ApiError::ServerError(msg))) if msg == "<html>bad gateway</html>"
    ));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/orgs/acme/members")
        .with_status(200)
        .with_body("{ not json")
        .create_async()
        .await;

    let err = client(&server, None)
        .organizations()
        .list_members("acme")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let client = GitHubClient::new(None)
        .unwrap()
        .with_base_url("http://127.0.0.1:1")
        .unwrap();
    let err = client.organizations().get("acme").await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Network(_))));
}
