//! End-to-end tests against the assembled router, request in, response out.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use bloglist_server::build_router;

fn router() -> Router {
    build_router(&SecretString::from("api-test-secret"))
}

fn json_request(method: &str, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Register a user and log in, returning the bearer token.
async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let (status, _) = send(
        app,
        json_request(
            "POST",
            "/api/users",
            &json!({"username": username, "name": "Test User", "password": password}),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/login",
            &json!({"username": username, "password": password}),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_owned()
}

async fn create_blog(app: &Router, token: &str, title: &str) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/blogs",
            &json!({
                "title": title,
                "author": "Edsger W. Dijkstra",
                "url": "https://example.com/goto",
                "likes": 5,
            }),
            Some(token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn registration_response_never_contains_password_material() {
    let app = router();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/users",
            &json!({"username": "root", "password": "sekret"}),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "root");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn registration_rejects_short_password() {
    let app = router();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/users",
            &json!({"username": "root", "password": "pw"}),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn login_failures_are_generic_401s() {
    let app = router();
    register_and_login(&app, "root", "sekret").await;

    for body in [
        json!({"username": "root", "password": "wrongpassword"}),
        json!({"username": "nobody", "password": "sekret"}),
    ] {
        let (status, response) = send(&app, json_request("POST", "/api/login", &body, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(response["message"].as_str().unwrap().contains("invalid"));
    }
}

#[tokio::test]
async fn blog_crud_round_trip() {
    let app = router();
    let token = register_and_login(&app, "root", "sekret").await;

    let blog = create_blog(&app, &token, "Go To Statement Considered Harmful").await;
    assert_eq!(blog["likes"], 5);
    let id = blog["id"].as_str().unwrap().to_owned();

    let (status, listed) = send(&app, get_request("/api/blogs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/blogs/{id}"),
            &json!({"likes": 42}),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["likes"], 42);
    assert_eq!(updated["title"], "Go To Statement Considered Harmful");

    let (status, body) = send(
        &app,
        json_request("DELETE", &format!("/api/blogs/{id}"), &json!({}), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, get_request(&format!("/api/blogs/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn creating_a_blog_without_a_token_is_denied() {
    let app = router();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/blogs",
            &json!({"title": "t", "url": "http://u"}),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid token");
}

#[tokio::test]
async fn bearer_scheme_is_case_insensitive() {
    let app = router();
    let token = register_and_login(&app, "root", "sekret").await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/blogs")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("BEARER {token}"))
        .body(Body::from(
            json!({"title": "t", "url": "http://u"}).to_string(),
        ))
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn another_users_token_cannot_mutate_and_leaves_the_blog_alone() {
    let app = router();
    let owner_token = register_and_login(&app, "root", "sekret").await;
    let other_token = register_and_login(&app, "otheruser", "hunter2").await;

    let blog = create_blog(&app, &owner_token, "First class tests").await;
    let id = blog["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        json_request("DELETE", &format!("/api/blogs/{id}"), &json!({}), Some(&other_token)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid token");

    let (status, _) = send(&app, get_request(&format!("/api/blogs/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_id_is_a_bad_request() {
    let app = router();

    let (status, body) = send(&app, get_request("/api/blogs/not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "malformed id");
}

#[tokio::test]
async fn missing_blog_is_a_bare_404() {
    let app = router();

    let (status, body) = send(
        &app,
        get_request(&format!("/api/blogs/{}", uuid::Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn unknown_endpoint_is_reported_as_such() {
    let app = router();

    let (status, body) = send(&app, get_request("/api/nonsense")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "unknown endpoint");
}

#[tokio::test]
async fn structurally_wrong_body_is_a_malformed_request() {
    let app = router();

    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "malformed request");

    // Valid JSON of the wrong shape gets the same answer.
    let (status, body) = send(
        &app,
        json_request("POST", "/api/users", &json!({"username": 7}), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "malformed request");
}

#[tokio::test]
async fn user_listing_populates_owned_blogs() {
    let app = router();
    let token = register_and_login(&app, "root", "sekret").await;
    create_blog(&app, &token, "Canonical string reduction").await;

    let (status, users) = send(&app, get_request("/api/users")).await;

    assert_eq!(status, StatusCode::OK);
    let root = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "root")
        .unwrap();
    assert_eq!(root["blogs"][0]["title"], "Canonical string reduction");
    assert!(root.get("password_hash").is_none());
}

#[tokio::test]
async fn healthz_answers_ok() {
    let app = router();

    let (status, _) = send(&app, get_request("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
}
