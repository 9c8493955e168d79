//! One live session and its lock.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, MutexGuard};

use labinv_cache::LinkCodeCacheManager;
use labinv_core::types::SessionId;
use labinv_service::Workspace;

/// State owned by one client session.
#[derive(Debug)]
pub struct Session {
    /// Session identifier, also the persistence key.
    pub id: SessionId,
    /// Inventory, UI state, and pending notices.
    pub workspace: Workspace,
    /// Link codes generated for this session.
    pub codes: LinkCodeCacheManager,
}

/// A registered session.
///
/// Requests lock the session for their whole cycle, so cycles of one
/// session never interleave.
#[derive(Debug)]
pub struct SessionEntry {
    id: SessionId,
    session: Mutex<Session>,
    /// Unix milliseconds of the last request.
    last_seen: AtomicI64,
}

impl SessionEntry {
    /// Wrap a session.
    pub fn new(session: Session) -> Self {
        Self {
            id: session.id,
            session: Mutex::new(session),
            last_seen: AtomicI64::new(Utc::now().timestamp_millis()),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Lock the session for one request cycle.
    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.touch();
        self.session.lock().await
    }

    /// Record activity now.
    pub fn touch(&self) {
        self.last_seen
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }

    /// Time since the last recorded activity.
    pub fn idle_for(&self) -> Duration {
        let elapsed = Utc::now().timestamp_millis() - self.last_seen.load(Ordering::Relaxed);
        Duration::from_millis(u64::try_from(elapsed).unwrap_or(0))
    }
}
