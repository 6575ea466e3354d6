use super::*;
use crate::state::test_helpers::{test_app_state, test_app_state_with, test_config};
use axum::http::header::LOCATION;

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_and_scoped_to_root() {
    let cookie = session_cookie("abc".to_owned(), false);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(false));
    assert_eq!(cookie.max_age(), Some(Duration::days(30)));
}

#[test]
fn session_cookie_honors_secure_flag() {
    assert_eq!(session_cookie("abc".to_owned(), true).secure(), Some(true));
}

#[test]
fn cleared_session_cookie_expires_immediately() {
    let cookie = cleared_session_cookie(false);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// sign_in
// =============================================================================

#[tokio::test]
async fn sign_in_unconfigured_is_service_unavailable() {
    let response = sign_in(State(test_app_state())).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn sign_in_redirects_to_configured_url() {
    let config = crate::config::ServerConfig {
        sign_in_url: Some("https://auth.test/login".to_owned()),
        ..test_config()
    };
    let response = sign_in(State(test_app_state_with(config))).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "https://auth.test/login");
}

// =============================================================================
// dev_session
// =============================================================================

#[tokio::test]
async fn dev_session_disabled_is_not_found() {
    let body = DevSessionBody { name: "Ada".to_owned(), image: None };
    let result = dev_session(State(test_app_state()), Json(body)).await;
    assert_eq!(result.err(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn dev_session_blank_name_is_bad_request() {
    let config = crate::config::ServerConfig { dev_auth_bypass: true, ..test_config() };
    let body = DevSessionBody { name: "  ".to_owned(), image: None };
    let result = dev_session(State(test_app_state_with(config)), Json(body)).await;
    assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
}

#[test]
fn dev_session_body_image_is_optional() {
    let body: DevSessionBody = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
    assert_eq!(body.name, "Ada");
    assert!(body.image.is_none());
}

// =============================================================================
// AuthUser
// =============================================================================

#[tokio::test]
async fn auth_user_without_cookie_is_unauthorized() {
    use axum::extract::FromRequestParts;

    let (mut parts, ()) = axum::http::Request::builder()
        .uri("/api/auth/me")
        .body(())
        .unwrap()
        .into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &test_app_state()).await;
    assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
}
