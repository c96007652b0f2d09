//! Integration tests for the response envelope, request ids and routing.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["storage"], "memory");
    assert!(response.body["data"]["version"].is_string());
}

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/properties", None).await;
    let header = response
        .headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("missing x-request-id")
        .to_string();
    assert_eq!(header.len(), 36);
    assert_eq!(response.body["meta"]["requestId"], header);

    let response = app
        .send("GET", "/api/properties", "", &[("x-request-id", "trace-42")])
        .await;
    assert_eq!(response.headers["x-request-id"], "trace-42");
    assert_eq!(response.body["meta"]["requestId"], "trace-42");
}

#[tokio::test]
async fn test_invalid_ids_are_rejected_for_every_resource() {
    let app = helpers::TestApp::new();

    for resource in ["properties", "clients", "documents", "users"] {
        for id in ["abc", "-1", "0", "1.5"] {
            let response = app
                .request("GET", &format!("/api/{resource}/{id}"), None)
                .await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST, "{resource}/{id}");
            assert_eq!(response.error_code(), 1001);
            assert_eq!(response.body["success"], false);
        }
    }
}

#[tokio::test]
async fn test_error_envelope_omits_absent_details() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/clients/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({
            "success": false,
            "error": {"message": "Client with id 42 not found", "code": 3001}
        })
    );
}

#[tokio::test]
async fn test_validation_error_details() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/properties",
            Some(json!({"property_type": "land", "price": 5000.0, "city": "Evora"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), 1002);
    assert_eq!(
        response.body["error"]["details"],
        json!({"field": "title", "message": "title is required"})
    );
    assert_eq!(app.request("GET", "/api/properties", None).await.body["meta"]["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_type_errors_name_the_field() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/properties",
            Some(json!({"title": "Plot", "property_type": "land", "price": "abc", "city": "Evora"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), 1002);
    assert_eq!(response.body["error"]["details"]["field"], "price");

    let response = app
        .request(
            "POST",
            "/api/properties",
            Some(json!({"title": "Plot", "property_type": "castle", "price": 1.0, "city": "Evora"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["details"]["field"], "property_type");
}

#[tokio::test]
async fn test_malformed_and_empty_bodies() {
    let app = helpers::TestApp::new();

    let response = app.send("POST", "/api/clients", "{\"first_name\": ", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), 1001);

    let response = app.send("POST", "/api/clients", "", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["message"], "Request body is required");
}

#[tokio::test]
async fn test_unknown_route_uses_envelope() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/listings", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.error_code(), 3001);
}
