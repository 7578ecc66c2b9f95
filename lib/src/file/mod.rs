//! File transfer endpoints, served by the content host

use chrono::{DateTime, Utc};

pub mod download;
pub mod upload;

/// Metadata of a file after it has been uploaded
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub path_display: Option<String>,
    #[serde(default)]
    pub path_lower: Option<String>,
    pub size: u64,
    #[serde(default)]
    pub server_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content_hash: Option<String>,
}
