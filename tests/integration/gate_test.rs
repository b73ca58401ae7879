//! Integration tests for the gate at the HTTP boundary.

mod helpers;

use http::StatusCode;
use http::header::WWW_AUTHENTICATE;

use assetgate_auth::{JwtEncoder, Role};
use assetgate_core::config::AuthConfig;

#[tokio::test]
async fn test_missing_credential_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/me", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("MISSING_CREDENTIAL"));
    assert_eq!(response.headers[WWW_AUTHENTICATE], "Bearer");
}

#[tokio::test]
async fn test_non_bearer_scheme_is_invalid() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("/api/me", &[("authorization", "Basic dXNlcjpwYXNz".to_string())])
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("INVALID_CREDENTIAL"));
}

#[tokio::test]
async fn test_bad_signature_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    let forger = JwtEncoder::new(&AuthConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..AuthConfig::default()
    });
    let token = forger
        .issue("u1", "s1", Some(&Role::Admin), assetgate_auth::TokenKind::Access)
        .unwrap();

    let response = app.get("/api/me", Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("INVALID_CREDENTIAL"));
}

#[tokio::test]
async fn test_staff_forbidden_on_admin_route() {
    let app = helpers::TestApp::new().await;
    let token = app.token("u1", "s1", Some(Role::Staff));

    let response = app.get("/api/admin/overview", Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), Some("FORBIDDEN"));
    assert!(!response.headers.contains_key(WWW_AUTHENTICATE));
}

#[tokio::test]
async fn test_spoofed_role_header_does_not_elevate() {
    let app = helpers::TestApp::new().await;
    let token = app.token("u1", "s1", Some(Role::Staff));

    let response = app
        .request(
            "/api/admin/overview",
            &[
                ("authorization", format!("Bearer {token}")),
                ("x-user-role", "Admin".to_string()),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_accepted_with_identity_forwarded() {
    let app = helpers::TestApp::new().await;
    let token = app.token("admin-1", "sess-1", Some(Role::Admin));

    let response = app.get("/api/admin/overview", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["requested_by"], "admin-1");
    assert_eq!(response.body["token_kind"], "access");
}

#[tokio::test]
async fn test_identity_headers_replace_client_values() {
    let app = helpers::TestApp::new().await;
    let token = app.token("u1", "s1", Some(Role::Staff));

    let response = app
        .request(
            "/api/me",
            &[
                ("authorization", format!("Bearer {token}")),
                ("x-subject-id", "someone-else".to_string()),
                ("x-session-id", "stolen".to_string()),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["subject_id"], "u1");
    assert_eq!(response.body["session_id"], "s1");
    assert_eq!(response.body["role"], "Staff");
}

#[tokio::test]
async fn test_non_ascii_subject_is_admitted() {
    let app = helpers::TestApp::new().await;
    let token = app.token("josé", "s1", Some(Role::Staff));

    let response = app.get("/api/me", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["subject_id"], "josé");
    assert_eq!(response.body["role"], "Staff");
}

#[tokio::test]
async fn test_roleless_token_allowed_on_unrestricted_route() {
    let app = helpers::TestApp::new().await;
    let token = app.token("u1", "s1", None);

    let me = app.get("/api/me", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert!(me.body["role"].is_null());

    let admin = app.get("/api/admin/overview", Some(&token)).await;
    assert_eq!(admin.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_refresh_token_rejected_on_api_routes() {
    let app = helpers::TestApp::new().await;
    let token = app
        .encoder
        .issue("u1", "s1", Some(&Role::Admin), assetgate_auth::TokenKind::Refresh)
        .unwrap();

    let response = app.get("/api/me", Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("INVALID_CREDENTIAL"));
}
