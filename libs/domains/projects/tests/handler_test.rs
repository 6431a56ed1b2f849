//! Handler tests for the Projects domain
//!
//! These tests exercise the full HTTP surface against the in-memory
//! repository:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization, including output sanitization
//! - HTTP status codes and error bodies
//!
//! Unlike E2E tests, these test ONLY the projects domain router, not the
//! full application with nesting, tracing middleware, etc.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_projects::{InMemoryProjectRepository, ProjectService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn test_app() -> Router {
    let repo = InMemoryProjectRepository::new();
    let service = ProjectService::new(repo);
    handlers::router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn empty_body_len(body: Body) -> usize {
    body.collect().await.unwrap().to_bytes().len()
}

#[tokio::test]
async fn test_list_projects_empty() {
    let app = test_app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_create_project_returns_201_with_location() {
    let app = test_app();

    let request = json_request(
        "POST",
        "/",
        json!({
            "name": "Project Finder",
            "description": "Find projects to contribute to",
            "topic": "open source",
            "date_created": "2029-01-22T16:28:32.615Z"
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();

    let project = json_body(response.into_body()).await;
    assert_eq!(project["name"], "Project Finder");
    assert_eq!(project["description"], "Find projects to contribute to");
    assert_eq!(project["topic"], "open source");
    assert_eq!(project["author"], Value::Null);
    assert_eq!(project["date_created"], "2029-01-22T16:28:32.615Z");

    let id = project["id"].as_i64().unwrap();
    assert_eq!(location, format!("/{id}"));
}

#[tokio::test]
async fn test_create_project_missing_name_returns_400() {
    let app = test_app();

    let request = json_request("POST", "/", json!({ "description": "no name here" }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "error": { "message": "Missing 'name' in request body" } })
    );
}

#[tokio::test]
async fn test_create_project_missing_description_returns_400() {
    let app = test_app();

    let request = json_request("POST", "/", json!({ "name": "only a name" }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "error": { "message": "Missing 'description' in request body" } })
    );
}

#[tokio::test]
async fn test_create_project_missing_both_reports_name_first() {
    let app = test_app();

    let request = json_request("POST", "/", json!({ "topic": "neither required field" }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "error": { "message": "Missing 'name' in request body" } })
    );
}

#[tokio::test]
async fn test_get_project_by_id() {
    let app = test_app();

    let create = json_request(
        "POST",
        "/",
        json!({ "name": "Lookup", "description": "fetch me back" }),
    );
    let created = json_body(app.clone().oneshot(create).await.unwrap().into_body()).await;
    let id = created["id"].as_i64().unwrap();

    let request = Request::builder()
        .uri(format!("/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let project = json_body(response.into_body()).await;
    assert_eq!(project["id"], id);
    assert_eq!(project["name"], "Lookup");
}

#[tokio::test]
async fn test_get_missing_project_returns_404() {
    let app = test_app();

    let request = Request::builder().uri("/999").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "error": { "message": "project doesn't exist" } })
    );
}

#[tokio::test]
async fn test_responses_escape_markup_in_string_fields() {
    let app = test_app();

    let create = json_request(
        "POST",
        "/",
        json!({
            "name": "Naughty naughty very naughty <script>alert(\"xss\");</script>",
            "description": "Bad image <img src=\"https://url.to.file.which/does-not.exist\" onerror=\"alert(document.cookie);\">",
            "date_created": "2029-01-22T16:28:32.615Z"
        }),
    );
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response.into_body()).await;

    let name = created["name"].as_str().unwrap();
    let description = created["description"].as_str().unwrap();
    assert!(!name.contains("<script>"));
    assert!(name.contains("&lt;script&gt;"));
    assert!(!description.contains("<img"));

    // Stored content is escaped on every read, not just creation
    let id = created["id"].as_i64().unwrap();
    let request = Request::builder()
        .uri(format!("/{id}"))
        .body(Body::empty())
        .unwrap();
    let fetched = json_body(app.oneshot(request).await.unwrap().into_body()).await;
    assert!(!fetched["name"].as_str().unwrap().contains("<script>"));
    // Non-string fields pass through untouched
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["date_created"], "2029-01-22T16:28:32.615Z");
}

#[tokio::test]
async fn test_update_project_returns_204_and_persists() {
    let app = test_app();

    let create = json_request(
        "POST",
        "/",
        json!({ "name": "before", "description": "unchanged" }),
    );
    let created = json_body(app.clone().oneshot(create).await.unwrap().into_body()).await;
    let id = created["id"].as_i64().unwrap();

    let update = json_request("PATCH", &format!("/{id}"), json!({ "name": "after" }));
    let response = app.clone().oneshot(update).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(empty_body_len(response.into_body()).await, 0);

    // The untouched field keeps its previous value
    let request = Request::builder()
        .uri(format!("/{id}"))
        .body(Body::empty())
        .unwrap();
    let fetched = json_body(app.oneshot(request).await.unwrap().into_body()).await;
    assert_eq!(fetched["name"], "after");
    assert_eq!(fetched["description"], "unchanged");
}

#[tokio::test]
async fn test_update_with_no_relevant_fields_returns_400() {
    let app = test_app();

    let create = json_request(
        "POST",
        "/",
        json!({ "name": "target", "description": "d" }),
    );
    let created = json_body(app.clone().oneshot(create).await.unwrap().into_body()).await;
    let id = created["id"].as_i64().unwrap();

    let update = json_request("PATCH", &format!("/{id}"), json!({ "irrelevant": "field" }));
    let response = app.oneshot(update).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({
            "error": {
                "message": "Request body must contain either 'name', 'description', or 'date_created'"
            }
        })
    );
}

#[tokio::test]
async fn test_update_with_empty_strings_counts_as_no_fields() {
    let app = test_app();

    let create = json_request("POST", "/", json!({ "name": "n", "description": "d" }));
    let created = json_body(app.clone().oneshot(create).await.unwrap().into_body()).await;
    let id = created["id"].as_i64().unwrap();

    let update = json_request(
        "PATCH",
        &format!("/{id}"),
        json!({ "name": "", "description": "" }),
    );
    let response = app.oneshot(update).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_project_returns_404() {
    let app = test_app();

    let update = json_request("PATCH", "/999", json!({ "name": "anything" }));
    let response = app.oneshot(update).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "error": { "message": "project doesn't exist" } })
    );
}

#[tokio::test]
async fn test_delete_project_returns_204_then_404() {
    let app = test_app();

    let create = json_request("POST", "/", json!({ "name": "doomed", "description": "d" }));
    let created = json_body(app.clone().oneshot(create).await.unwrap().into_body()).await;
    let id = created["id"].as_i64().unwrap();

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(empty_body_len(response.into_body()).await, 0);

    // Deleting again reports the project gone
    let delete_again = Request::builder()
        .method("DELETE")
        .uri(format!("/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete_again).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // And so does a GET
    let get = Request::builder()
        .uri(format!("/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(get).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_crud_sequence_end_to_end() {
    let app = test_app();

    // Create two projects
    for name in ["one", "two"] {
        let create = json_request(
            "POST",
            "/",
            json!({ "name": name, "description": format!("project {name}") }),
        );
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // List shows both
    let list = Request::builder().uri("/").body(Body::empty()).unwrap();
    let projects = json_body(app.clone().oneshot(list).await.unwrap().into_body()).await;
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), 2);
    let first_id = projects[0]["id"].as_i64().unwrap();

    // Update the first, delete it, then confirm the list shrinks
    let update = json_request(
        "PATCH",
        &format!("/{first_id}"),
        json!({ "description": "updated" }),
    );
    assert_eq!(
        app.clone().oneshot(update).await.unwrap().status(),
        StatusCode::NO_CONTENT
    );

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/{first_id}"))
        .body(Body::empty())
        .unwrap();
    assert_eq!(
        app.clone().oneshot(delete).await.unwrap().status(),
        StatusCode::NO_CONTENT
    );

    let list = Request::builder().uri("/").body(Body::empty()).unwrap();
    let projects = json_body(app.oneshot(list).await.unwrap().into_body()).await;
    assert_eq!(projects.as_array().unwrap().len(), 1);
    assert_eq!(projects[0]["name"], "two");
}
