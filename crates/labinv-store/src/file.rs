//! JSON file snapshot store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use labinv_core::error::{AppError, ErrorKind};
use labinv_core::result::AppResult;
use labinv_core::types::SessionId;
use labinv_entity::Inventory;

use crate::InventoryStore;
use crate::snapshot::{Snapshot, SnapshotInfo, newest_first};

const EXTENSION: &str = "json";

/// Snapshot store writing one `<session-id>.json` document per session.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never observes a half-written snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Directory holding the snapshot documents.
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `directory`, creating it if needed.
    pub async fn new(directory: impl AsRef<Path>) -> AppResult<Self> {
        let root = directory.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to create snapshot directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Directory holding the snapshot documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the snapshot document of `session`.
    pub fn path_for(&self, session: SessionId) -> PathBuf {
        self.root.join(format!("{session}.{EXTENSION}"))
    }

    async fn read_snapshot(path: &Path) -> AppResult<Option<Snapshot>> {
        let data = match fs::read(path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Persistence,
                    format!("Failed to read snapshot: {}", path.display()),
                    e,
                ));
            }
        };
        let snapshot = serde_json::from_slice(&data)?;
        Ok(Some(snapshot))
    }
}

#[async_trait]
impl InventoryStore for JsonFileStore {
    async fn load(&self, session: SessionId) -> AppResult<Option<Snapshot>> {
        Self::read_snapshot(&self.path_for(session)).await
    }

    async fn save(&self, session: SessionId, inventory: &Inventory) -> AppResult<()> {
        let path = self.path_for(session);
        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));
        let data = serde_json::to_vec_pretty(&Snapshot::capture(session, inventory))?;

        fs::write(&tmp, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to write snapshot: {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to move snapshot into place: {}", path.display()),
                e,
            )
        })?;

        debug!(%session, bytes = data.len(), "Saved inventory snapshot");
        Ok(())
    }

    async fn delete(&self, session: SessionId) -> AppResult<()> {
        match fs::remove_file(self.path_for(session)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to delete snapshot of session {session}"),
                e,
            )),
        }
    }

    async fn list(&self) -> AppResult<Vec<SnapshotInfo>> {
        let mut infos = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            match Self::read_snapshot(&path).await {
                Ok(Some(snapshot)) => infos.push(snapshot.info()),
                Ok(None) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable snapshot"),
            }
        }
        newest_first(&mut infos);
        Ok(infos)
    }
}
