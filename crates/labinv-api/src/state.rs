//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use labinv_cache::QrPngEncoder;
use labinv_core::config::AppConfig;
use labinv_core::result::AppResult;
use labinv_core::traits::{Clock, SystemClock};
use labinv_service::{
    ExportService, ItemService, NavigationService, Rendered, RouteQuery, SearchService,
    StorageService, ViewRouter,
};
use labinv_store::StoreManager;

use crate::session::{Session, SessionRegistry};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Sessions ─────────────────────────────────────────────
    /// Live sessions and their persistence
    pub sessions: Arc<SessionRegistry>,

    // ── Services ─────────────────────────────────────────────
    /// View router
    pub router: Arc<ViewRouter>,
    /// Screen navigation
    pub navigation: Arc<NavigationService>,
    /// Storage CRUD
    pub storage_service: Arc<StorageService>,
    /// Item CRUD
    pub item_service: Arc<ItemService>,
    /// Item search
    pub search_service: Arc<SearchService>,
    /// JSON export
    pub export_service: Arc<ExportService>,
}

impl AppState {
    /// Wire every service from configuration.
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let encoder = Arc::new(QrPngEncoder::from_config(&config.link_code)?);
        let store = Arc::new(StoreManager::new(&config.persistence).await?);
        let sessions = Arc::new(SessionRegistry::new(
            store,
            encoder,
            config.link_code.cache.clone(),
        )?);

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        Ok(Self {
            router: Arc::new(ViewRouter::new(config.server.public_url.clone())),
            navigation: Arc::new(NavigationService::new()),
            storage_service: Arc::new(StorageService::new(Arc::clone(&clock))),
            item_service: Arc::new(ItemService::new(Arc::clone(&clock))),
            search_service: Arc::new(SearchService::new()),
            export_service: Arc::new(ExportService::new(clock)),
            sessions,
            config: Arc::new(config),
        })
    }

    /// Run one router cycle against `session`.
    pub fn render(&self, session: &mut Session, query: &RouteQuery) -> Rendered {
        self.router
            .resolve(&mut session.workspace, &session.codes, query)
    }
}
