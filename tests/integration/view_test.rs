//! Integration tests for view selection and navigation.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_fresh_session_renders_empty_dashboard() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.screen(), "dashboard");
    assert_eq!(response.view()["stats"]["total_storages"], 0);
    assert_eq!(response.view()["stats"]["total_items"], 0);
    assert_eq!(response.view()["link_code"]["url"], helpers::PUBLIC_URL);
    assert_eq!(
        response.view()["link_code"]["download_path"],
        "/codes/dashboard"
    );
    assert!(response.view()["link_code"]["png_base64"].is_string());
    assert!(app.cookie().is_some());
}

#[tokio::test]
async fn test_session_cookie_is_reused() {
    let app = helpers::TestApp::new().await;
    app.get("/").await;
    let first = app.cookie();

    app.get("/").await;

    assert_eq!(app.cookie(), first);
    assert_eq!(app.state.sessions.len(), 1);
}

#[tokio::test]
async fn test_query_renders_storage_without_moving_session() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Drawer A1", "drawer", "Room 101").await;

    let detail = app.get(&format!("/?storage={id}")).await;
    assert_eq!(detail.screen(), "storage_detail");
    assert_eq!(detail.view()["storage"]["name"], "Drawer A1");
    assert_eq!(
        detail.view()["link_code"]["url"],
        format!("{}?storage={id}", helpers::PUBLIC_URL)
    );

    let plain = app.get("/").await;
    assert_eq!(plain.screen(), "dashboard");
}

#[tokio::test]
async fn test_unknown_query_storage_warns_and_shows_dashboard() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/?storage=ghost").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.screen(), "dashboard");
    assert_eq!(response.notices(), vec!["Storage 'ghost' not found"]);
}

#[tokio::test]
async fn test_repeated_storage_query_uses_first_value() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Drawer A1", "drawer", "Room 101").await;

    let response = app.get(&format!("/?storage={id}&storage=ghost")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.screen(), "storage_detail");
    assert_eq!(response.view()["storage"]["name"], "Drawer A1");
    assert!(response.notices().is_empty());
}

#[tokio::test]
async fn test_open_storage_then_back_to_dashboard() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Rack R", "rack", "Basement").await;

    let opened = app.post(&format!("/nav/storages/{id}")).await;
    assert_eq!(opened.screen(), "storage_detail");

    let again = app.get("/").await;
    assert_eq!(again.screen(), "storage_detail");

    let back = app.post("/nav/dashboard").await;
    assert_eq!(back.screen(), "dashboard");
}

#[tokio::test]
async fn test_open_unknown_storage_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.post("/nav/storages/ghost").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_confirm_delete_takes_precedence_over_add_form() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Shelf S", "shelf", "Lab 2").await;

    app.post("/nav/add-storage").await;
    let response = app.post(&format!("/nav/storages/{id}/delete")).await;

    assert_eq!(response.screen(), "confirm_delete");
    assert_eq!(response.view()["name"], "Shelf S");
    assert_eq!(response.view()["item_count"], 0);
}

#[tokio::test]
async fn test_cancel_returns_to_current_storage() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Fridge F", "fridge", "Cold room").await;

    app.post(&format!("/nav/storages/{id}")).await;
    let editing = app.post(&format!("/nav/storages/{id}/edit")).await;
    assert_eq!(editing.screen(), "edit_storage");
    assert_eq!(editing.view()["storage"]["name"], "Fridge F");

    let cancelled = app.post("/nav/cancel").await;
    assert_eq!(cancelled.screen(), "storage_detail");
}

#[tokio::test]
async fn test_add_storage_form_lists_types() {
    let app = helpers::TestApp::new().await;

    let response = app.post("/nav/add-storage").await;

    assert_eq!(response.screen(), "add_storage");
    assert!(response.view()["storage"].is_null());
    assert_eq!(response.view()["storage_types"].as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn test_edit_item_screen_and_missing_index() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Cabinet C", "cabinet", "Hall").await;
    app.add_item(&id, "Pipette", "3", "Free").await;

    let editing = app.post(&format!("/nav/storages/{id}/items/0/edit")).await;
    assert_eq!(editing.screen(), "edit_item");
    assert_eq!(editing.view()["item"]["name"], "Pipette");

    let missing = app.post(&format!("/nav/storages/{id}/items/7/edit")).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_live_sessions() {
    let app = helpers::TestApp::new().await;
    app.get("/").await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["sessions"], 1);
}

#[tokio::test]
async fn test_health_does_not_open_a_session() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(app.cookie().is_none());
    assert!(app.state.sessions.is_empty());
}
