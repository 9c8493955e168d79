//! Integration tests for session snapshots and restoration.

mod helpers;

use std::time::Duration;

use axum::http::StatusCode;

#[tokio::test]
async fn test_reaped_session_is_restored_from_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = helpers::TestApp::with_snapshot_dir(dir.path()).await;
    let id = app.create_storage("Drawer A1", "drawer", "Room 101").await;
    app.add_item(&id, "NaCl", "500 g", "Free").await;

    let reaped = app.state.sessions.reap_idle(Duration::ZERO).await;
    assert_eq!(reaped, 1);
    assert!(app.state.sessions.is_empty());

    let response = app.get(&format!("/?storage={id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.screen(), "storage_detail");
    assert_eq!(response.view()["storage"]["items"][0]["name"], "NaCl");
}

#[tokio::test]
async fn test_reaped_memory_session_starts_over() {
    let app = helpers::TestApp::new().await;
    app.create_storage("Drawer A1", "drawer", "Room 101").await;
    let cookie = app.cookie();

    assert_eq!(app.state.sessions.reap_idle(Duration::ZERO).await, 1);

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.screen(), "dashboard");
    assert_eq!(response.view()["stats"]["total_storages"], 0);
    assert_ne!(app.cookie(), cookie);
}

#[tokio::test]
async fn test_file_snapshots_survive_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let first = helpers::TestApp::with_snapshot_dir(dir.path()).await;
    let id = first.create_storage("Fridge F", "fridge", "Cold room").await;
    first.add_item(&id, "Enzyme", "2 vials", "Ordered").await;
    let cookie = first.cookie();
    drop(first);

    let second = helpers::TestApp::with_snapshot_dir(dir.path()).await;
    second.set_cookie(cookie.clone());
    let response = second.get("/").await;

    assert_eq!(second.cookie(), cookie);
    assert_eq!(response.screen(), "dashboard");
    assert_eq!(response.view()["stats"]["total_storages"], 1);
    assert_eq!(response.view()["stats"]["total_items"], 1);
    assert_eq!(response.view()["storages"][0]["preview"][0]["name"], "Enzyme");
}

#[tokio::test]
async fn test_unknown_cookie_starts_fresh_session() {
    let app = helpers::TestApp::new().await;
    let stale = format!(
        "{}=00000000-0000-4000-8000-000000000000",
        app.config.session.cookie_name
    );
    app.set_cookie(Some(stale.clone()));

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.view()["stats"]["total_storages"], 0);
    assert_ne!(app.cookie(), Some(stale));
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let app = helpers::TestApp::new().await;
    app.create_storage("Drawer A1", "drawer", "Room 101").await;

    let other = app.cookie();
    app.set_cookie(None);
    let fresh = app.get("/").await;

    assert_eq!(fresh.view()["stats"]["total_storages"], 0);
    assert_ne!(app.cookie(), other);
    assert_eq!(app.state.sessions.len(), 2);
}
