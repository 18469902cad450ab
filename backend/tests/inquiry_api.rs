use std::{fs, path::Path, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use pathway_backend::{build_pool, build_router, config::AppConfig, run_migrations, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const ADMIN_TOKEN: &str = "test-admin-token";

fn test_app(admin_token: Option<&str>) -> Router {
    app_with(admin_token, None)
}

fn app_with(admin_token: Option<&str>, static_dir: Option<&Path>) -> Router {
    let token = admin_token.map(str::to_string);
    let static_dir = static_dir.map(|dir| dir.display().to_string());
    let config = AppConfig::from_lookup(|key| match key {
        "ADMIN_TOKEN" => token.clone(),
        "STATIC_DIR" => static_dir.clone(),
        _ => None,
    })
    .expect("test config is valid");

    // One connection so every request sees the same in-memory database.
    let pool = build_pool(":memory:", 1).expect("in-memory pool");
    run_migrations(&pool).expect("migrations apply");
    build_router(Arc::new(AppState::new(pool, &config)), &config)
}

fn jane() -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "phone": "9999999999",
        "educationLevel": "gnm-graduate",
        "interestedIn": ["placement"],
        "message": ""
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body reads");
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
    });
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_check_answers_ok() {
    let app = test_app(None);
    let (status, body) = send(&app, admin("GET", "/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".into()));
}

#[tokio::test]
async fn valid_inquiry_is_acknowledged_and_stored_unread() {
    let app = test_app(Some(ADMIN_TOKEN));

    let (status, body) = send(&app, post_json("/api/inquiries", &jane())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Thank you for your inquiry! We will contact you soon.");

    let (status, list) = send(&app, admin("GET", "/api/admin/inquiries", Some(ADMIN_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    let stored = list.as_array().expect("array of inquiries");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["firstName"], "Jane");
    assert_eq!(stored[0]["educationLevel"], "gnm-graduate");
    assert_eq!(stored[0]["interestedIn"], json!(["placement"]));
    assert_eq!(stored[0]["isRead"], false);
    assert!(stored[0]["message"].is_null());
}

#[tokio::test]
async fn invalid_inquiry_returns_field_errors_and_stores_nothing() {
    let app = test_app(Some(ADMIN_TOKEN));
    let mut draft = jane();
    draft["email"] = json!("not-an-email");
    draft["phone"] = json!("12345");
    draft["interestedIn"] = json!([]);

    let (status, body) = send(&app, post_json("/api/inquiries", &draft)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"]["email"], "Please enter a valid email address");
    assert_eq!(body["fields"]["phone"], "Please enter a valid phone number");
    assert_eq!(body["fields"]["interestedIn"], "Please select at least one area of interest");
    assert!(body["fields"].get("firstName").is_none());

    let (_, count) = send(
        &app,
        admin("GET", "/api/admin/inquiries/unread-count", Some(ADMIN_TOKEN)),
    )
    .await;
    assert_eq!(count["unread"], 0);
}

#[tokio::test]
async fn admin_routes_check_the_bearer_token() {
    let app = test_app(Some(ADMIN_TOKEN));

    let (status, body) = send(&app, admin("GET", "/api/admin/inquiries", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No authorization token provided");

    let (status, body) = send(&app, admin("GET", "/api/admin/inquiries", Some("guess"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");

    let disabled = test_app(None);
    let (status, _) = send(&disabled, admin("GET", "/api/admin/inquiries", Some(ADMIN_TOKEN))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // Submitting stays public either way.
    let (status, _) = send(&disabled, post_json("/api/inquiries", &jane())).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn marking_read_removes_it_from_the_unread_list() {
    let app = test_app(Some(ADMIN_TOKEN));
    send(&app, post_json("/api/inquiries", &jane())).await;

    let (_, list) = send(&app, admin("GET", "/api/admin/inquiries?unread=true", Some(ADMIN_TOKEN))).await;
    let id = list[0]["id"].as_str().expect("id is a string").to_string();

    let (status, body) = send(
        &app,
        admin("POST", &format!("/api/admin/inquiries/{}/read", id), Some(ADMIN_TOKEN)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Inquiry marked as read");

    let (_, unread) = send(&app, admin("GET", "/api/admin/inquiries?unread=true", Some(ADMIN_TOKEN))).await;
    assert_eq!(unread, json!([]));
    let (_, all) = send(&app, admin("GET", "/api/admin/inquiries", Some(ADMIN_TOKEN))).await;
    assert_eq!(all[0]["isRead"], true);

    let (status, body) = send(
        &app,
        admin("POST", "/api/admin/inquiries/missing/read", Some(ADMIN_TOKEN)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Inquiry not found");
}

#[tokio::test]
async fn malformed_body_gets_a_json_error() {
    let app = test_app(None);

    let request = Request::post("/api/inquiries")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{firstName: Jane"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error is a string");
    assert!(message.starts_with("Invalid request body"), "{}", message);

    let request = Request::post("/api/inquiries")
        .body(Body::from(jane().to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn admin_can_fetch_a_single_inquiry() {
    let app = test_app(Some(ADMIN_TOKEN));
    send(&app, post_json("/api/inquiries", &jane())).await;
    let (_, list) = send(&app, admin("GET", "/api/admin/inquiries", Some(ADMIN_TOKEN))).await;
    let id = list[0]["id"].as_str().expect("id is a string").to_string();

    let (status, body) = send(
        &app,
        admin("GET", &format!("/api/admin/inquiries/{}", id), Some(ADMIN_TOKEN)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["id"], id);

    let (status, _) = send(&app, admin("GET", &format!("/api/admin/inquiries/{}", id), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        admin("GET", "/api/admin/inquiries/missing", Some(ADMIN_TOKEN)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Inquiry not found");
}

#[tokio::test]
async fn site_routes_serve_index_but_unknown_api_paths_do_not() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<html>INDEX</html>").unwrap();
    let app = app_with(None, Some(dir.path()));

    for path in ["/", "/some/route"] {
        let (status, body) = send(&app, admin("GET", path, None)).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert_eq!(body, Value::String("<html>INDEX</html>".into()), "{}", path);
    }

    for path in ["/api/nope", "/api/admin/nope/deeper"] {
        let (status, body) = send(&app, admin("GET", path, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", path);
        assert_eq!(body["error"], "No such API route", "{}", path);
    }

    let (status, body) = send(&app, admin("GET", "/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".into()));
}

#[tokio::test]
async fn unknown_api_paths_are_json_without_a_static_dir() {
    let app = test_app(None);
    let (status, body) = send(&app, admin("GET", "/api/nope", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No such API route");
}
