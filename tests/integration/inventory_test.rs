//! Integration tests for storage and item CRUD, search, and export.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_storage_returns_dashboard_with_notice() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/storages",
            Some(json!({
                "name": "Drawer A1",
                "type": "drawer",
                "location": "Room 101",
                "description": "Chemicals",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.header("location").starts_with("/?storage=drawer_drawer_a1_"));
    assert_eq!(response.screen(), "dashboard");
    assert_eq!(response.view()["stats"]["total_storages"], 1);
    assert_eq!(response.view()["storages"][0]["type"], "drawer");
    assert_eq!(response.view()["storages"][0]["type_label"], "Drawer");
    assert_eq!(
        response.notices(),
        vec!["Storage 'Drawer A1' added successfully!"]
    );
}

#[tokio::test]
async fn test_create_storage_requires_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/storages",
            Some(json!({ "name": "Drawer A1", "type": "drawer", "location": "  " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(
        response.body["message"],
        "Please fill in all required fields (Name, Type, Location)"
    );

    let dashboard = app.get("/").await;
    assert_eq!(dashboard.view()["stats"]["total_storages"], 0);
}

#[tokio::test]
async fn test_failed_first_request_still_sets_session_cookie() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/storages", Some(json!({ "name": "Drawer A1" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let issued = app.cookie();
    assert!(issued.is_some());

    app.get("/").await;
    assert_eq!(app.cookie(), issued);
    assert_eq!(app.state.sessions.len(), 1);
}

#[tokio::test]
async fn test_create_storage_rejects_unknown_type() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/storages",
            Some(json!({ "name": "Box", "type": "box", "location": "Lab" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_storage_keeps_id_and_items() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Drawer A1", "drawer", "Room 101").await;
    app.add_item(&id, "NaCl", "500 g", "Free").await;

    let response = app
        .request(
            "PUT",
            &format!("/storages/{id}"),
            Some(json!({ "name": "Drawer B2", "type": "cabinet", "location": "Room 102" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.screen(), "storage_detail");
    let storage = &response.view()["storage"];
    assert_eq!(storage["id"], id.as_str());
    assert_eq!(storage["name"], "Drawer B2");
    assert_eq!(storage["type"], "cabinet");
    assert_eq!(storage["items"][0]["name"], "NaCl");
    assert!(
        response
            .notices()
            .contains(&"Storage 'Drawer B2' updated successfully!".to_string())
    );
}

#[tokio::test]
async fn test_delete_storage_from_confirmation() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Freezer Z", "freezer", "Cold room").await;
    app.post(&format!("/nav/storages/{id}")).await;
    app.post(&format!("/nav/storages/{id}/delete")).await;

    let response = app.request("DELETE", &format!("/storages/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.screen(), "dashboard");
    assert_eq!(response.view()["stats"]["total_storages"], 0);

    let again = app.request("DELETE", &format!("/storages/{id}"), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_item_lifecycle() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Drawer A1", "drawer", "Room 101").await;

    let added = app
        .request(
            "POST",
            &format!("/storages/{id}/items"),
            Some(json!({
                "name": "NaCl",
                "quantity": "500 g",
                "category": "Chemical",
                "status": "Free",
                "expiry": "2026-01-01",
            })),
        )
        .await;
    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(added.screen(), "storage_detail");
    let item = &added.view()["storage"]["items"][0];
    assert_eq!(item["id"], "item_001");
    assert_eq!(item["status"], "Free");
    assert_eq!(item["expiry"], "2026-01-01");

    let updated = app
        .request(
            "PUT",
            &format!("/storages/{id}/items/0"),
            Some(json!({ "name": "NaCl", "quantity": "250 g", "status": "Occupied" })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    let item = &updated.view()["storage"]["items"][0];
    assert_eq!(item["id"], "item_001");
    assert_eq!(item["quantity"], "250 g");
    assert_eq!(item["status"], "Occupied");

    let dashboard = app.post("/nav/dashboard").await;
    assert_eq!(dashboard.view()["stats"]["occupied_items"], 1);

    let deleted = app
        .request("DELETE", &format!("/storages/{id}/items/0"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.view()["storage"]["items"].as_array().map(Vec::len),
        Some(0)
    );
    assert!(
        deleted
            .notices()
            .contains(&"Item 'NaCl' deleted successfully!".to_string())
    );
}

#[tokio::test]
async fn test_item_ids_are_not_reused_after_delete() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Rack R", "rack", "Basement").await;
    app.add_item(&id, "A", "1", "Free").await;
    app.add_item(&id, "B", "1", "Free").await;
    app.request("DELETE", &format!("/storages/{id}/items/1"), None)
        .await;

    app.add_item(&id, "C", "1", "Free").await;

    let detail = app.get(&format!("/?storage={id}")).await;
    let items = &detail.view()["storage"]["items"];
    assert_eq!(items[0]["id"], "item_001");
    assert_eq!(items[1]["id"], "item_003");
}

#[tokio::test]
async fn test_add_item_requires_status() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Rack R", "rack", "Basement").await;

    let response = app
        .request(
            "POST",
            &format!("/storages/{id}/items"),
            Some(json!({ "name": "Beaker", "quantity": "4" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Please fill in all required fields (Name, Quantity, Status)"
    );
}

#[tokio::test]
async fn test_item_on_unknown_storage_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/storages/ghost/items",
            Some(json!({ "name": "Beaker", "quantity": "4", "status": "Free" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_matches_name_category_and_id() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Drawer A1", "drawer", "Room 101").await;
    app.add_item(&id, "Sodium Chloride", "500 g", "Free").await;
    app.add_item(&id, "Pipette", "3", "Broken").await;

    let by_name = app.get("/search?q=sodium").await;
    assert_eq!(by_name.status, StatusCode::OK);
    assert_eq!(by_name.body["data"]["total"], 1);
    assert_eq!(by_name.body["data"]["hits"][0]["storage_name"], "Drawer A1");
    assert_eq!(by_name.body["data"]["hits"][0]["index"], 0);

    let by_id = app.get("/search?q=ITEM_002").await;
    assert_eq!(by_id.body["data"]["total"], 1);
    assert_eq!(by_id.body["data"]["hits"][0]["item"]["name"], "Pipette");

    let blank = app.get("/search?q=%20").await;
    assert_eq!(blank.body["data"]["total"], 0);
}

#[tokio::test]
async fn test_export_downloads_inventory_json() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Drawer A1", "drawer", "Room 101").await;
    app.add_item(&id, "NaCl", "500 g", "Free").await;

    let response = app.get("/export").await;

    assert_eq!(response.status, StatusCode::OK);
    let disposition = response.header("content-disposition");
    assert!(disposition.starts_with("attachment; filename=\"lab_inventory_"));
    assert!(disposition.ends_with(".json\""));
    assert_eq!(response.body["storages"][0]["name"], "Drawer A1");
    assert_eq!(response.body["storages"][0]["items"][0]["name"], "NaCl");
    assert_eq!(response.body["status_options"][4], "Broken");
    assert_eq!(response.body["storage_types"].as_array().map(Vec::len), Some(8));
}
