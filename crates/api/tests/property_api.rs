//! HTTP-level integration tests for the `/properties` endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router without a TCP listener, over in-memory stores.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, delete, get, patch_json, post_json, put_json};
use serde_json::json;

async fn create_owner(app: Router) -> String {
    let created = body_json(
        post_json(
            app,
            "/api/v1/owners",
            json!({
                "name": "Dueña de Prueba",
                "address": "Cl 52 # 47-42, Medellín",
                "photo": "https://example.com/owner.jpg",
                "birthdate": "1970-01-15"
            }),
        )
        .await,
    )
    .await;
    created["data"]["id"].as_str().unwrap().to_string()
}

fn property_payload(owner_id: &str, name: &str, code: &str, price: f64) -> serde_json::Value {
    json!({
        "owner_id": owner_id,
        "name": name,
        "address": "Cra 43A # 1-50, Medellín",
        "price": price,
        "code_internal": code,
        "year": 2016
    })
}

#[tokio::test]
async fn test_create_property_returns_201_envelope() {
    let app = build_test_app();
    let owner_id = create_owner(app.clone()).await;

    let response = post_json(
        app,
        "/api/v1/properties",
        property_payload(&owner_id, "Edificio Altavista", "ALT-01", 520_000_000.0),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["result"], "created");
    assert_eq!(json["data"]["owner_id"], owner_id);
    assert_eq!(json["data"]["code_internal"], "ALT-01");
    assert!(!json["data"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_property_with_unknown_owner_is_invalid() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/properties",
        property_payload("no-such-owner", "Sin Dueño", "SD-01", 100.0),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["result"], "invalid");
    let errors = json["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "owner_id"));
}

#[tokio::test]
async fn test_create_property_with_negative_price_is_invalid() {
    let app = build_test_app();
    let owner_id = create_owner(app.clone()).await;
    let response = post_json(
        app,
        "/api/v1/properties",
        property_payload(&owner_id, "Regalada", "NEG-01", -1.0),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "price"));
}

#[tokio::test]
async fn test_duplicate_code_internal_is_invalid() {
    let app = build_test_app();
    let owner_id = create_owner(app.clone()).await;

    let first = post_json(
        app.clone(),
        "/api/v1/properties",
        property_payload(&owner_id, "Primera", "DUP-01", 100.0),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        app,
        "/api/v1/properties",
        property_payload(&owner_id, "Segunda", "DUP-01", 200.0),
    )
    .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let json = body_json(second).await;
    assert_eq!(json["result"], "invalid");
    let errors = json["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "code_internal"));
}

#[tokio::test]
async fn test_search_filters_by_name() {
    let app = build_test_app();
    let owner_id = create_owner(app.clone()).await;
    post_json(
        app.clone(),
        "/api/v1/properties",
        property_payload(&owner_id, "Casa del Río", "CR-01", 300.0),
    )
    .await;
    post_json(
        app.clone(),
        "/api/v1/properties",
        property_payload(&owner_id, "Apartaestudio Centro", "AC-01", 150.0),
    )
    .await;

    let response = get(app, "/api/v1/properties?name=r%C3%ADo").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Casa del Río");
}

#[tokio::test]
async fn test_search_filters_by_price_range() {
    let app = build_test_app();
    let owner_id = create_owner(app.clone()).await;
    for (name, code, price) in [
        ("Barata", "PR-01", 100.0),
        ("Media", "PR-02", 300.0),
        ("Cara", "PR-03", 900.0),
    ] {
        post_json(
            app.clone(),
            "/api/v1/properties",
            property_payload(&owner_id, name, code, price),
        )
        .await;
    }

    let response = get(app, "/api/v1/properties?min_price=150&max_price=500").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Media");
}

#[tokio::test]
async fn test_truncated_search_returns_206_partial() {
    let app = build_test_app();
    let owner_id = create_owner(app.clone()).await;
    for code in ["PG-01", "PG-02", "PG-03"] {
        post_json(
            app.clone(),
            "/api/v1/properties",
            property_payload(&owner_id, "Paginada", code, 100.0),
        )
        .await;
    }

    let response = get(app.clone(), "/api/v1/properties?limit=2").await;
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    let json = body_json(response).await;
    assert_eq!(json["result"], "partial_ok");
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // The last page is a plain Ok.
    let response = get(app, "/api/v1/properties?limit=2&offset=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"], "ok");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_with_inverted_price_range_is_invalid() {
    let app = build_test_app();
    let response = get(app, "/api/v1/properties?min_price=500&max_price=100").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["result"], "invalid");
    let errors = json["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "min_price"));
}

#[tokio::test]
async fn test_change_price_updates_only_price() {
    let app = build_test_app();
    let owner_id = create_owner(app.clone()).await;
    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/properties",
            property_payload(&owner_id, "Revaluada", "CHP-01", 100.0),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = patch_json(
        app.clone(),
        "/api/v1/properties/price",
        json!({ "id": id, "price": 777.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["result"], "ok");
    assert_eq!(json["data"]["price"], 777.0);
    assert_eq!(json["data"]["name"], "Revaluada");
}

#[tokio::test]
async fn test_change_price_without_id_fails_on_id() {
    let app = build_test_app();
    let response = patch_json(app, "/api/v1/properties/price", json!({ "price": 10.0 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    let id_violation = errors.iter().find(|e| e["field"] == "id").unwrap();
    assert_eq!(id_violation["message"], "Id is required");
}

#[tokio::test]
async fn test_update_property_applies_partial_changes() {
    let app = build_test_app();
    let owner_id = create_owner(app.clone()).await;
    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/properties",
            property_payload(&owner_id, "Antigua", "UPD-01", 400.0),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = put_json(
        app,
        "/api/v1/properties",
        json!({ "id": id, "name": "Restaurada", "year": 2021 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Restaurada");
    assert_eq!(json["data"]["year"], 2021);
    // Untouched fields survive.
    assert_eq!(json["data"]["price"], 400.0);
    assert_eq!(json["data"]["code_internal"], "UPD-01");
}

#[tokio::test]
async fn test_delete_property_then_get_returns_404() {
    let app = build_test_app();
    let owner_id = create_owner(app.clone()).await;
    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/properties",
            property_payload(&owner_id, "Pasajera", "DEL-01", 50.0),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = delete(app.clone(), &format!("/api/v1/properties/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/api/v1/properties/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["result"], "not_found");
}
