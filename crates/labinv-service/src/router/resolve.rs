//! Screen precedence and fallbacks.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use labinv_core::result::AppResult;
use labinv_core::traits::LinkCodeCache;
use labinv_core::types::Notice;
use labinv_entity::StorageId;

use super::link_code::LinkCodes;
use super::view::{
    ConfirmDeleteView, DashboardStats, DashboardView, EditItemView, StorageDetailView,
    StorageFormView, StorageSummary, View,
};
use crate::ui::Screen;
use crate::workspace::Workspace;

/// Query parameters of the view route. Only `storage` is recognised.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteQuery {
    /// Storage to show, typically from a scanned link code.
    #[serde(default)]
    pub storage: Option<String>,
}

impl RouteQuery {
    /// Query naming `id`.
    pub fn storage(id: impl Into<String>) -> Self {
        Self {
            storage: Some(id.into()),
        }
    }

    /// Query from raw `key=value` pairs. Only the first `storage` value
    /// counts; any other key is ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            storage: pairs
                .into_iter()
                .find(|(key, _)| key == "storage")
                .map(|(_, value)| value),
        }
    }

    fn storage_id(&self) -> Option<StorageId> {
        self.storage
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(StorageId::from)
    }
}

/// The outcome of one request cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Rendered {
    /// The selected view.
    pub view: View,
    /// Notices to show with it.
    pub notices: Vec<Notice>,
}

/// Chooses the view of a request cycle.
///
/// Precedence, first match wins:
///
/// 1. delete confirmation
/// 2. add storage
/// 3. edit storage
/// 4. edit item
/// 5. storage detail from the `storage` query parameter
/// 6. storage detail from the session's current storage
/// 7. dashboard
#[derive(Debug, Clone)]
pub struct ViewRouter {
    /// Base URL encoded into link codes.
    public_url: String,
}

impl ViewRouter {
    /// Creates a router whose link codes point at `public_url`.
    pub fn new(public_url: impl Into<String>) -> Self {
        Self {
            public_url: public_url.into(),
        }
    }

    /// Base URL encoded into link codes.
    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    /// Run one request cycle. Never fails: any error is turned into a
    /// dashboard with an error notice.
    pub fn resolve(
        &self,
        ws: &mut Workspace,
        codes: &dyn LinkCodeCache,
        query: &RouteQuery,
    ) -> Rendered {
        let selected = self.select(ws, codes, query);
        self.settle(ws, codes, selected)
    }

    /// Turn the outcome of view selection into the rendered cycle.
    fn settle(
        &self,
        ws: &mut Workspace,
        codes: &dyn LinkCodeCache,
        selected: AppResult<View>,
    ) -> Rendered {
        let view = match selected {
            Ok(view) => view,
            Err(e) => {
                warn!(error = %e, "View selection failed, showing dashboard");
                ws.ui.back_to_dashboard();
                ws.notify(Notice::error(format!("An error occurred: {}", e.message)));
                self.dashboard(ws, codes)
            }
        };
        debug!(view = view.name(), "Resolved view");
        Rendered {
            view,
            notices: ws.take_notices(),
        }
    }

    fn select(
        &self,
        ws: &mut Workspace,
        codes: &dyn LinkCodeCache,
        query: &RouteQuery,
    ) -> AppResult<View> {
        match ws.ui.screen.clone() {
            Screen::ConfirmDelete { storage_id } => {
                return Ok(match ws.inventory.get(&storage_id) {
                    Some(storage) => View::ConfirmDelete(ConfirmDeleteView {
                        storage_id: storage.id.clone(),
                        name: storage.name.clone(),
                        item_count: storage.items.len(),
                    }),
                    None => self.stale(ws, codes, format!("Storage '{storage_id}' not found")),
                });
            }
            Screen::AddStorage => return Ok(View::AddStorage(StorageFormView::new(None))),
            Screen::EditStorage { storage_id } => {
                return Ok(match ws.inventory.get(&storage_id) {
                    Some(storage) => View::EditStorage(StorageFormView::new(Some(storage))),
                    None => self.stale(ws, codes, format!("Storage '{storage_id}' not found")),
                });
            }
            Screen::EditItem { storage_id, index } => {
                let found = ws
                    .inventory
                    .get(&storage_id)
                    .and_then(|s| s.item(index).map(|item| (s, item)));
                return Ok(match found {
                    Some((storage, item)) => View::EditItem(EditItemView {
                        storage_id: storage.id.clone(),
                        storage_name: storage.name.clone(),
                        index,
                        item: item.clone(),
                        categories: labinv_entity::Category::ALL,
                        statuses: labinv_entity::ItemStatus::ALL,
                    }),
                    None => self.stale(
                        ws,
                        codes,
                        format!("Item {index} not found in storage '{storage_id}'"),
                    ),
                });
            }
            Screen::Browse => {}
        }

        if let Some(id) = query.storage_id() {
            if ws.inventory.contains(&id) {
                return self.storage_detail(ws, codes, &id);
            }
            warn!(storage_id = %id, "Query names an unknown storage");
            ws.notify(Notice::warning(format!("Storage '{id}' not found")));
        }

        if let Some(id) = ws.ui.current_storage.clone() {
            if ws.inventory.contains(&id) {
                return self.storage_detail(ws, codes, &id);
            }
            warn!(storage_id = %id, "Current storage no longer exists");
            ws.ui.current_storage = None;
            ws.notify(Notice::warning(format!("Storage '{id}' not found")));
        }

        Ok(self.dashboard(ws, codes))
    }

    /// Clear stale UI state and fall back to the dashboard.
    fn stale(&self, ws: &mut Workspace, codes: &dyn LinkCodeCache, message: String) -> View {
        warn!(%message, "UI state refers to missing data");
        ws.ui.back_to_dashboard();
        ws.notify(Notice::warning(message));
        self.dashboard(ws, codes)
    }

    fn storage_detail(
        &self,
        ws: &mut Workspace,
        codes: &dyn LinkCodeCache,
        id: &StorageId,
    ) -> AppResult<View> {
        let mut links = LinkCodes::new(&self.public_url, codes);
        let storage = ws.inventory.require(id)?;
        let view = StorageDetailView::of(storage, links.storage(&storage.id, &storage.name));
        ws.notices.extend(links.into_failures());
        Ok(View::StorageDetail(view))
    }

    fn dashboard(&self, ws: &mut Workspace, codes: &dyn LinkCodeCache) -> View {
        let mut links = LinkCodes::new(&self.public_url, codes);
        let view = DashboardView {
            stats: DashboardStats::of(&ws.inventory),
            link_code: links.dashboard(),
            storages: ws
                .inventory
                .iter()
                .map(|s| StorageSummary::of(s, links.storage(&s.id, &s.name)))
                .collect(),
        };
        ws.notices.extend(links.into_failures());
        View::Dashboard(view)
    }
}
