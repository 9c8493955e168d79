//! Link-code payloads embedded in views.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tracing::warn;

use labinv_cache::links;
use labinv_core::traits::LinkCodeCache;
use labinv_core::types::Notice;
use labinv_entity::StorageId;

/// A link code as shown next to a view.
///
/// When encoding failed the image and the download path are absent and the
/// view shows only the URL.
#[derive(Debug, Clone, Serialize)]
pub struct LinkCodeView {
    /// URL the code points at.
    pub url: String,
    /// Download file name.
    pub file_name: String,
    /// Endpoint serving the PNG, absent when encoding failed.
    pub download_path: Option<String>,
    /// Base64 PNG for inline display, absent when encoding failed.
    pub png_base64: Option<String>,
}

/// Builds link-code payloads for one render, collecting failures as notices.
pub(crate) struct LinkCodes<'a> {
    public_url: &'a str,
    codes: &'a dyn LinkCodeCache,
    failures: Vec<Notice>,
}

impl<'a> LinkCodes<'a> {
    pub(crate) fn new(public_url: &'a str, codes: &'a dyn LinkCodeCache) -> Self {
        Self {
            public_url,
            codes,
            failures: Vec::new(),
        }
    }

    /// Link code of the dashboard.
    pub(crate) fn dashboard(&mut self) -> LinkCodeView {
        self.build(
            links::dashboard_url(self.public_url),
            links::DASHBOARD_FILE_NAME.to_string(),
            "/codes/dashboard".to_string(),
            "the dashboard",
        )
    }

    /// Link code of a storage detail view.
    pub(crate) fn storage(&mut self, id: &StorageId, name: &str) -> LinkCodeView {
        self.build(
            links::storage_url(self.public_url, id.as_str()),
            links::storage_file_name(id.as_str()),
            format!("/codes/storages/{id}"),
            name,
        )
    }

    /// Notices for every code that could not be generated.
    pub(crate) fn into_failures(self) -> Vec<Notice> {
        self.failures
    }

    fn build(&mut self, url: String, file_name: String, path: String, label: &str) -> LinkCodeView {
        match self.codes.get_or_create(&url) {
            Some(png) => LinkCodeView {
                url,
                file_name,
                download_path: Some(path),
                png_base64: Some(STANDARD.encode(&png)),
            },
            None => {
                warn!(url = %url, "Rendering view without link code");
                self.failures.push(Notice::warning(format!(
                    "Link code for {label} could not be generated"
                )));
                LinkCodeView {
                    url,
                    file_name,
                    download_path: None,
                    png_base64: None,
                }
            }
        }
    }
}
