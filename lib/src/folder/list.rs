//! Resources needed to list the content of a folder

use crate::entry::Entry;
use crate::request::{read_json, unexpected_status};
use reqwest::StatusCode;

const ENDPOINT: &str = "files/list_folder";

#[derive(Debug, serde::Serialize)]
struct ListFolderParams<'a> {
    path: &'a str,
    include_media_info: bool,
    include_deleted: bool,
    include_has_explicit_shared_members: bool,
}

impl<'a> ListFolderParams<'a> {
    fn new(path: &'a str) -> Self {
        Self {
            path,
            include_media_info: false,
            include_deleted: false,
            include_has_explicit_shared_members: false,
        }
    }
}

/// A single page of a folder listing
#[derive(Debug, serde::Deserialize)]
pub struct ListFolder {
    pub entries: Vec<Entry>,
    /// Opaque token to fetch the following page
    pub cursor: String,
    pub has_more: bool,
}

impl ListFolder {
    /// Returns the entries when the listing fits in this page.
    ///
    /// Fetching the following pages is not supported, so a listing announcing more
    /// results is an [`Error::MoreResults`](crate::Error::MoreResults).
    pub fn into_entries(self) -> crate::Result<Vec<Entry>> {
        if self.has_more {
            Err(crate::Error::MoreResults {
                cursor: self.cursor,
            })
        } else {
            Ok(self.entries)
        }
    }
}

impl crate::Client {
    /// Lists the content of a folder, without its deleted entries.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the server doesn't answer with a success, if the response
    /// cannot be decoded or if the listing doesn't fit in a single page.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropfromshell::Client) -> Result<(), dropfromshell::Error> {
    /// for entry in client.list_folder("/test").await? {
    ///     println!("{} {}", entry.tag, entry.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn list_folder(&self, path: &str) -> crate::Result<Vec<Entry>> {
        self.list_folder_page(path).await?.into_entries()
    }

    /// Fetches the first page of a folder listing.
    pub async fn list_folder_page(&self, path: &str) -> crate::Result<ListFolder> {
        let res = self
            .rpc_request(ENDPOINT, &ListFolderParams::new(path))
            .await?;
        match res.status() {
            StatusCode::OK => read_json(ENDPOINT, res).await,
            _ => Err(unexpected_status(ENDPOINT, res).await),
        }
    }
}
