use chrono::{DateTime, Utc};
use std::cmp::Ordering;

pub mod delete;
pub mod metadata;
pub mod moving;

/// The kind of an [`Entry`], read from the `.tag` field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Folder,
    File,
    Deleted,
    #[serde(other)]
    Other,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Deleted => "deleted",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file, folder or deletion marker, as returned by a listing or a metadata lookup.
///
/// Deleted entries don't have an `id`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
pub struct Entry {
    #[serde(rename = ".tag")]
    pub tag: Tag,
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub path_display: Option<String>,
    #[serde(default)]
    pub path_lower: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub client_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub server_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content_hash: Option<String>,
}

impl Entry {
    pub fn is_file(&self) -> bool {
        matches!(self.tag, Tag::File)
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self.tag, Tag::Deleted)
    }
}

fn tag_rank(tag: Tag) -> u8 {
    match tag {
        Tag::Folder => 0,
        Tag::File => 1,
        Tag::Deleted => 2,
        Tag::Other => 3,
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// folders first, then by name
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        tag_rank(self.tag)
            .cmp(&tag_rank(other.tag))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}
