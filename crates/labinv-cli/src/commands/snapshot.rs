//! Persisted snapshot inspection.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use labinv_core::error::AppError;
use labinv_core::types::SessionId;
use labinv_store::{InventoryStore, JsonFileStore, SnapshotInfo};

/// Arguments for snapshot commands
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Snapshot subcommand
    #[command(subcommand)]
    pub command: SnapshotCommand,

    /// Snapshot directory (defaults to `persistence.directory`)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,
}

/// Snapshot subcommands
#[derive(Debug, Subcommand)]
pub enum SnapshotCommand {
    /// List saved snapshots, newest first
    List,
    /// Print the inventory of one snapshot as JSON
    Show {
        /// Session id
        session: String,
    },
    /// Delete a snapshot
    Delete {
        /// Session id
        session: String,
    },
}

/// Table row for snapshot listings
#[derive(Debug, Serialize, Tabled)]
struct SnapshotRow {
    #[tabled(rename = "Session")]
    session: String,
    #[tabled(rename = "Saved")]
    saved_at: String,
    #[tabled(rename = "Storages")]
    storages: usize,
    #[tabled(rename = "Items")]
    items: usize,
}

impl From<SnapshotInfo> for SnapshotRow {
    fn from(info: SnapshotInfo) -> Self {
        Self {
            session: info.session_id.to_string(),
            saved_at: info.saved_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            storages: info.storages,
            items: info.items,
        }
    }
}

/// Execute snapshot commands
pub async fn execute(
    args: &SnapshotArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => PathBuf::from(super::load_config(config_path)?.persistence.directory),
    };
    let store = JsonFileStore::new(&dir).await?;

    match &args.command {
        SnapshotCommand::List => {
            let rows: Vec<SnapshotRow> = store.list().await?.into_iter().map(Into::into).collect();
            output::print_list(&rows, format);
        }
        SnapshotCommand::Show { session } => {
            let id = parse_session(session)?;
            let snapshot = store
                .load(id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("No snapshot for session {id}")))?;
            output::print_json(&snapshot);
        }
        SnapshotCommand::Delete { session } => {
            let id = parse_session(session)?;
            store.delete(id).await?;
            output::print_success(&format!("Snapshot for session {id} deleted"));
        }
    }

    Ok(())
}

fn parse_session(raw: &str) -> Result<SessionId, AppError> {
    raw.parse()
        .map_err(|e| AppError::validation(format!("Invalid session id '{raw}': {e}")))
}
