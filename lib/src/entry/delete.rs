use crate::request::{unexpected_status, PathParams};
use reqwest::StatusCode;

const ENDPOINT: &str = "files/delete";

impl crate::Client {
    /// Deletes a file or a folder, with all its content.
    ///
    /// # Returns
    ///
    /// `true` when the path has been deleted, `false` when the server answers with a
    /// conflict, usually because there was nothing to delete.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] on any other status.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> crate::Result<bool> {
        let res = self.rpc_request(ENDPOINT, &PathParams::new(path)).await?;
        match res.status() {
            StatusCode::OK => Ok(true),
            StatusCode::CONFLICT => {
                tracing::debug!("unable to delete {path:?}");
                Ok(false)
            }
            _ => Err(unexpected_status(ENDPOINT, res).await),
        }
    }
}
