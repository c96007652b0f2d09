//! Integration tests for the client, document and user endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_client_email_is_normalized_and_filterable() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/clients",
            Some(json!({
                "first_name": "Marta",
                "last_name": "Silva",
                "email": "  Marta.Silva@Example.COM ",
                "client_type": "buyer",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
    assert_eq!(response.body["error"]["details"]["field"], "email");

    let response = app
        .request(
            "POST",
            "/api/clients",
            Some(json!({
                "first_name": "Marta",
                "last_name": "Silva",
                "email": "Marta.Silva@Example.COM",
                "client_type": "buyer",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["email"], "marta.silva@example.com");

    let response = app
        .request("GET", "/api/clients?search=SILV&client_type=buyer", None)
        .await;
    assert_eq!(response.body["meta"]["pagination"]["total"], 1);

    let response = app
        .request("GET", "/api/clients?client_type=seller", None)
        .await;
    assert_eq!(response.body["meta"]["pagination"]["total"], 0);
    assert_eq!(response.body["meta"]["pagination"]["pages"], 0);
}

#[tokio::test]
async fn test_document_hard_delete() {
    let app = helpers::TestApp::new();
    let property_id = app.create_property("Deeded House", "Porto", 300000.0).await;

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({
                "title": "Purchase deed",
                "document_type": "deed",
                "file_url": "https://files.example.com/deed.pdf",
                "property_id": property_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let id = response.id();

    let response = app
        .request("GET", &format!("/api/documents?property_id={property_id}"), None)
        .await;
    assert_eq!(response.body["meta"]["pagination"]["total"], 1);

    let response = app.request("DELETE", &format!("/api/documents/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.raw_row("documents", id).await.is_none());

    let response = app.request("GET", &format!("/api/documents/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_document_rejects_bad_url() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({
                "title": "Scan",
                "document_type": "other",
                "file_url": "not a url",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), 1002);
    assert_eq!(response.body["error"]["details"]["field"], "file_url");
}

#[tokio::test]
async fn test_user_password_is_hashed_and_hidden() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "email": "Agent@Realty.test",
                "password": "correct horse",
                "full_name": "Rui Costa",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["role"], "agent");
    assert_eq!(response.body["data"]["is_active"], true);
    assert!(response.body["data"].get("password").is_none());
    assert!(response.body["data"].get("password_hash").is_none());
    let id = response.id();

    let row = app.raw_row("users", id).await.unwrap();
    let first_hash = row["password_hash"].as_str().unwrap().to_string();
    assert!(first_hash.starts_with("$argon2id$"));

    let response = app
        .request(
            "PATCH",
            &format!("/api/users/{id}"),
            Some(json!({"password": "battery staple"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let row = app.raw_row("users", id).await.unwrap();
    assert_ne!(row["password_hash"].as_str().unwrap(), first_hash);

    let response = app
        .request("GET", "/api/users?is_active=true&role=agent", None)
        .await;
    assert_eq!(response.body["meta"]["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_user_short_password_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "email": "short@realty.test",
                "password": "short",
                "full_name": "Short Pass",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"]["details"]["message"],
        "password must be 8-128 characters"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_unique_ids() {
    let app = helpers::TestApp::new();

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..20 {
        let app = app.clone();
        tasks.spawn(async move {
            app.request(
                "POST",
                "/api/clients",
                Some(json!({
                    "first_name": format!("Client{i}"),
                    "last_name": "Batch",
                    "email": format!("client{i}@realty.test"),
                    "client_type": "tenant",
                })),
            )
            .await
        });
    }

    let mut ids = Vec::new();
    while let Some(response) = tasks.join_next().await {
        let response = response.expect("request task panicked");
        assert_eq!(response.status, StatusCode::CREATED);
        ids.push(response.id());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);

    let response = app.request("GET", "/api/clients?limit=100", None).await;
    assert_eq!(response.body["meta"]["pagination"]["total"], 20);
}
