use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use contactd::db::{relationship_repo, schema};
use contactd::http::{router, AppState};

fn app() -> axum::Router {
    let conn = schema::test_connection();
    relationship_repo::insert(&conn, "Work").unwrap();
    relationship_repo::insert(&conn, "Family").unwrap();
    router(AppState::new(conn))
}

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn create_then_fetch_contact() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({
            "name": "Ann",
            "email": "ann@example.com",
            "relationship": "Work"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Ann");
    assert_eq!(created["email"], "ann@example.com");
    assert_eq!(created["relationship"], "Work");

    let (status, fetched) = send(&app, Method::GET, "/contacts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Ann");
    assert_eq!(fetched["relationship"], "Work");
}

#[tokio::test]
async fn create_with_blank_name_is_400() {
    let app = app();

    for name in ["", " "] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/contacts",
            Some(json!({ "name": name, "relationship": "Work" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name is required");
    }

    let (status, body) = send(&app, Method::GET, "/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_unknown_relationship_is_400() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({ "name": "Ann", "relationship": "Nonexistent" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid relationship"));

    let (_, list) = send(&app, Method::GET, "/contacts", None).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_supports_search_and_relationship_filters() {
    let app = app();

    for (name, email, relationship) in [
        ("Xavier", Value::Null, "Work"),
        ("Bea", json!("a@x.com"), "Family"),
        ("Cal", Value::Null, "Work"),
    ] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/contacts",
            Some(json!({ "name": name, "email": email, "relationship": relationship })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/contacts?search=x", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Xavier", "Bea"]);

    let (_, body) = send(&app, Method::GET, "/contacts?relationship=Work", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(
        &app,
        Method::GET,
        "/contacts?search=x&relationship=Family",
        None,
    )
    .await;
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "Bea");

    // Empty query values mean "no filter", as in browsers submitting blank
    // search boxes.
    let (_, body) = send(&app, Method::GET, "/contacts?search=&relationship=", None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn update_replaces_contact() {
    let app = app();

    send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({ "name": "Ann", "email": "ann@example.com", "relationship": "Work" })),
    )
    .await;

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/contacts/1",
        Some(json!({ "name": "Ann", "relationship": "Family" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["relationship"], "Family");

    // Full-row replacement: the omitted email was cleared.
    let (_, fetched) = send(&app, Method::GET, "/contacts/1", None).await;
    assert_eq!(fetched["relationship"], "Family");
    assert_eq!(fetched["email"], Value::Null);
}

#[tokio::test]
async fn update_missing_contact_is_404() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::PUT,
        "/contacts/42",
        Some(json!({ "name": "Ann", "relationship": "Work" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_unknown_relationship_is_400() {
    let app = app();

    send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({ "name": "Ann", "relationship": "Work" })),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/contacts/1",
        Some(json!({ "name": "Ann", "relationship": "Enemy" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_always_reports_success() {
    let app = app();

    send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({ "name": "Ann", "relationship": "Work" })),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, "/contacts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    // Second delete of the same id, and a delete of an id that never
    // existed, both still succeed.
    let (status, body) = send(&app, Method::DELETE, "/contacts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, _) = send(&app, Method::DELETE, "/contacts/42", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/contacts/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn relationships_endpoint_lists_names() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/relationships", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Work", "Family"]));
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
