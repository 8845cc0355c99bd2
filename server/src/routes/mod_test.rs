use super::*;
use crate::state::test_helpers;
use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

async fn send(request: Request<Body>) -> (StatusCode, String) {
    let app = api_routes(test_helpers::test_app_state());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = send(get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_route_is_not_found() {
    let (status, _) = send(get("/api/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_post_slug_is_not_found() {
    let (status, _) = send(get("/api/posts/Not_A_Slug")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn session_probe_without_cookie_is_unauthenticated() {
    let (status, body) = send(get("/api/admin/session")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"authenticated":false}"#);
}

#[tokio::test]
async fn media_routes_require_admin_cookie() {
    let delete = Request::builder()
        .method(Method::DELETE)
        .uri("/api/admin/media")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"url":"https://res.cloudinary.com/x/image/upload/v1/a.jpg"}"#))
        .unwrap();
    let (status, _) = send(delete).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let upload = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/media")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(upload).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_contact_is_rejected_before_storage() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"Ayşe","email":"not-an-email","message":"Merhaba"}"#))
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn contact_with_missing_fields_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"Ayşe"}"#))
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
