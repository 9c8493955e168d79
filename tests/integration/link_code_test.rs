//! Integration tests for link-code downloads and inline payloads.

mod helpers;

use axum::http::StatusCode;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

#[tokio::test]
async fn test_dashboard_code_downloads_png() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/codes/dashboard").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"qr_central_dashboard.png\""
    );
    assert!(response.raw.starts_with(PNG_MAGIC));
}

#[tokio::test]
async fn test_storage_code_is_memoized_per_session() {
    let app = helpers::TestApp::new().await;
    let id = app.create_storage("Drawer A1", "drawer", "Room 101").await;

    let first = app.get(&format!("/codes/storages/{id}")).await;
    let second = app.get(&format!("/codes/storages/{id}")).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(
        first.header("content-disposition"),
        format!("attachment; filename=\"qr_{id}.png\"")
    );
    assert!(first.raw.starts_with(PNG_MAGIC));
    assert_eq!(first.raw, second.raw);
}

#[tokio::test]
async fn test_storage_code_for_unknown_storage_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/codes/storages/ghost").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_embeds_codes_for_every_storage() {
    let app = helpers::TestApp::new().await;
    let a = app.create_storage("Drawer A1", "drawer", "Room 101").await;
    let b = app.create_storage("Rack R", "rack", "Basement").await;

    let response = app.get("/").await;

    let storages = response.view()["storages"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    assert_eq!(storages.len(), 2);
    for summary in &storages {
        let id = summary["id"].as_str().unwrap_or_default();
        assert!(id == a || id == b);
        assert_eq!(
            summary["link_code"]["url"],
            format!("{}?storage={id}", helpers::PUBLIC_URL)
        );
        assert_eq!(
            summary["link_code"]["download_path"],
            format!("/codes/storages/{id}")
        );
        assert!(summary["link_code"]["png_base64"].is_string());
    }
    assert!(response.notices().is_empty());
}

#[tokio::test]
async fn test_bounded_cache_provider_serves_codes() {
    let mut config = helpers::test_config();
    config.link_code.cache.provider = "bounded".to_string();
    config.link_code.cache.max_capacity = 2;
    let app = helpers::TestApp::with_config(config).await;

    let response = app.get("/codes/dashboard").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.raw.starts_with(PNG_MAGIC));
}
