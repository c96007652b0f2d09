//! Integration tests for the property endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_get_property() {
    let app = helpers::TestApp::new();
    let id = app.create_property("  Harbour View ", "Porto", 320000.0).await;

    let response = app.request("GET", &format!("/api/properties/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["title"], "Harbour View");
    assert_eq!(response.body["data"]["status"], "available");
    assert_eq!(response.body["data"]["deleted_at"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_list_pagination_over_23_properties() {
    let app = helpers::TestApp::new();
    for i in 0..23 {
        app.create_property(&format!("Listing {i:02}"), "Lisbon", 100000.0 + i as f64)
            .await;
    }

    let response = app.request("GET", "/api/properties?page=1&limit=10", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let pagination = &response.body["meta"]["pagination"];
    assert_eq!(pagination["total"], 23);
    assert_eq!(pagination["pages"], 3);
    assert_eq!(pagination["hasNext"], true);
    assert_eq!(pagination["hasPrev"], false);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 10);

    let response = app.request("GET", "/api/properties?page=3&limit=10", None).await;
    let data = response.body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["title"], "Listing 20");
    assert_eq!(response.body["meta"]["pagination"]["hasNext"], false);
    assert_eq!(response.body["meta"]["pagination"]["hasPrev"], true);

    let response = app.request("GET", "/api/properties?page=9", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_pagination_falls_back_to_defaults() {
    let app = helpers::TestApp::new();
    app.create_property("Garden Flat", "Braga", 90000.0).await;

    let response = app
        .request("GET", "/api/properties?page=-2&limit=abc", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["pagination"]["page"], 1);
    assert_eq!(response.body["meta"]["pagination"]["limit"], 10);

    let response = app.request("GET", "/api/properties?limit=500", None).await;
    assert_eq!(response.body["meta"]["pagination"]["limit"], 100);
}

#[tokio::test]
async fn test_huge_page_returns_empty_page() {
    let app = helpers::TestApp::new();
    app.create_property("Garden Flat", "Braga", 90000.0).await;

    let response = app
        .request("GET", "/api/properties?page=18446744073709551615&limit=10", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].as_array().unwrap().is_empty());
    assert_eq!(response.body["meta"]["pagination"]["total"], 1);
    assert_eq!(response.body["meta"]["pagination"]["hasNext"], false);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let app = helpers::TestApp::new();
    app.create_property("Sunny Loft", "Porto", 200000.0).await;
    app.create_property("Quiet Cottage", "Braga", 150000.0).await;

    for needle in ["%25", "_"] {
        let response = app
            .request("GET", &format!("/api/properties?search={needle}"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["meta"]["pagination"]["total"], 0);
    }

    let response = app.request("GET", "/api/properties?search=loft", None).await;
    assert_eq!(response.body["meta"]["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_filters_and_unknown_keys() {
    let app = helpers::TestApp::new();
    app.create_property("Cheap Studio", "Porto", 80000.0).await;
    app.create_property("Big House", "Porto", 650000.0).await;
    app.create_property("Lisbon Loft", "Lisbon", 400000.0).await;

    let response = app
        .request("GET", "/api/properties?city=Porto&min_price=100000", None)
        .await;
    assert_eq!(response.body["meta"]["pagination"]["total"], 1);
    assert_eq!(response.body["data"][0]["title"], "Big House");

    let response = app
        .request("GET", "/api/properties?search=loft&unknown=1", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["pagination"]["total"], 1);

    // An inverted price range is dropped rather than matching nothing.
    let response = app
        .request("GET", "/api/properties?min_price=500000&max_price=100", None)
        .await;
    assert_eq!(response.body["meta"]["pagination"]["total"], 3);
}

#[tokio::test]
async fn test_soft_delete_hides_but_keeps_row() {
    let app = helpers::TestApp::new();
    let keep = app.create_property("Keeper", "Faro", 150000.0).await;
    let gone = app.create_property("Goner", "Faro", 150000.0).await;

    let response = app
        .request("DELETE", &format!("/api/properties/{gone}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!({"id": gone, "deleted": true}));

    let response = app.request("GET", &format!("/api/properties/{gone}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), 3001);

    let response = app.request("GET", "/api/properties", None).await;
    assert_eq!(response.body["meta"]["pagination"]["total"], 1);
    assert_eq!(response.body["data"][0]["id"], keep);

    let row = app.raw_row("properties", gone).await.expect("row was removed");
    assert!(row["deleted_at"].is_string());

    let response = app
        .request("DELETE", &format!("/api/properties/{gone}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_and_patch_update() {
    let app = helpers::TestApp::new();
    let id = app.create_property("Old Title", "Porto", 200000.0).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/properties/{id}"),
            Some(json!({"title": "New Title"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "New Title");
    assert_eq!(response.body["data"]["price"], 200000.0);

    let response = app
        .request(
            "PATCH",
            &format!("/api/properties/{id}"),
            Some(json!({"status": "sold"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "sold");

    let response = app
        .request(
            "PATCH",
            &format!("/api/properties/{id}"),
            Some(json!({"status": "available"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), 3002);
}

#[tokio::test]
async fn test_patch_null_clears_optional_column() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/properties",
            Some(json!({
                "title": "Corner Shop",
                "property_type": "commercial",
                "price": 120000.0,
                "city": "Faro",
                "address": "Rua Nova 5",
                "description": "Ground floor"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.id();

    let response = app
        .request(
            "PATCH",
            &format!("/api/properties/{id}"),
            Some(json!({"address": null})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["address"], serde_json::Value::Null);
    assert_eq!(response.body["data"]["description"], "Ground floor");
}

#[tokio::test]
async fn test_update_missing_property() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/properties/999999", Some(json!({"price": 1.0})))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["error"]["message"],
        "Property with id 999999 not found"
    );
}
