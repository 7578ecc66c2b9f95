use super::{Entry, Tag};
use crate::request::{read_json, unexpected_status, PathParams};
use reqwest::StatusCode;

const ENDPOINT: &str = "files/get_metadata";

impl crate::Client {
    /// Fetches the metadata of a file or folder.
    ///
    /// # Returns
    ///
    /// `Some(entry)` when the path exists, `None` when the server answers with a conflict,
    /// meaning there is nothing at this path.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] on any other status or if the response cannot be decoded.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropfromshell::Client) -> Result<(), dropfromshell::Error> {
    /// match client.get_metadata("/Homework/math").await? {
    ///     Some(entry) => println!("found a {}", entry.tag),
    ///     None => println!("nothing there"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn get_metadata(&self, path: &str) -> crate::Result<Option<Entry>> {
        let res = self.rpc_request(ENDPOINT, &PathParams::new(path)).await?;
        match res.status() {
            StatusCode::OK => read_json(ENDPOINT, res).await.map(Some),
            StatusCode::CONFLICT => {
                tracing::debug!("nothing found at {path:?}");
                Ok(None)
            }
            _ => Err(unexpected_status(ENDPOINT, res).await),
        }
    }

    /// Same as [`get_metadata`](crate::Client::get_metadata) but only returns the kind of entry.
    pub async fn get_tag(&self, path: &str) -> crate::Result<Option<Tag>> {
        self.get_metadata(path)
            .await
            .map(|entry| entry.map(|item| item.tag))
    }
}
