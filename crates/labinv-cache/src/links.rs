//! Link-code targets and download file names.

/// Download name of the dashboard link code.
pub const DASHBOARD_FILE_NAME: &str = "qr_central_dashboard.png";

/// URL encoded by the dashboard link code.
pub fn dashboard_url(public_url: &str) -> String {
    public_url.to_string()
}

/// URL encoded by a storage link code: `{public_url}?storage={id}`.
pub fn storage_url(public_url: &str, storage_id: &str) -> String {
    format!("{public_url}?storage={storage_id}")
}

/// Download name of a storage link code.
pub fn storage_file_name(storage_id: &str) -> String {
    format!("qr_{storage_id}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_url_carries_query() {
        assert_eq!(
            storage_url("http://lab.local/", "drawer_a1_143005"),
            "http://lab.local/?storage=drawer_a1_143005"
        );
    }

    #[test]
    fn test_file_names() {
        assert_eq!(storage_file_name("rack_r_000000"), "qr_rack_r_000000.png");
        assert_eq!(DASHBOARD_FILE_NAME, "qr_central_dashboard.png");
    }
}
