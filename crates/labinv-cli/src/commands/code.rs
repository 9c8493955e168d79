//! Link-code image generation.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::output;
use labinv_cache::QrPngEncoder;
use labinv_cache::links;
use labinv_core::error::AppError;
use labinv_core::traits::LinkEncoder;

/// Arguments for link-code commands
#[derive(Debug, Args)]
pub struct CodeArgs {
    /// What the code should point at
    #[command(subcommand)]
    pub target: CodeTarget,

    /// Output file (defaults to the download name the server uses)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

/// Link-code targets
#[derive(Debug, Subcommand)]
pub enum CodeTarget {
    /// The dashboard (the configured public URL)
    Dashboard,
    /// A storage detail view
    Storage {
        /// Storage id
        id: String,
    },
    /// An arbitrary URL or text
    Url {
        /// Content to encode
        content: String,
    },
}

impl CodeTarget {
    /// Content to encode and default file name.
    fn resolve(&self, public_url: &str) -> (String, String) {
        match self {
            Self::Dashboard => (
                links::dashboard_url(public_url),
                links::DASHBOARD_FILE_NAME.to_string(),
            ),
            Self::Storage { id } => (links::storage_url(public_url, id), links::storage_file_name(id)),
            Self::Url { content } => (content.clone(), "qr_code.png".to_string()),
        }
    }
}

/// Execute the code command
pub async fn execute(args: &CodeArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let encoder = QrPngEncoder::from_config(&config.link_code)?;

    let (content, file_name) = args.target.resolve(&config.server.public_url);
    let png = encoder.encode(&content)?;

    let path = args.output.clone().unwrap_or_else(|| PathBuf::from(file_name));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, &png).await?;

    output::print_success(&format!(
        "Link code for '{}' written to '{}' ({} bytes)",
        content,
        path.display(),
        png.len()
    ));
    Ok(())
}
