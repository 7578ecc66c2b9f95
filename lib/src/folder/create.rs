use crate::request::{unexpected_status, PathParams};
use reqwest::StatusCode;

const ENDPOINT: &str = "files/create_folder";

impl crate::Client {
    /// Creates a folder
    ///
    /// # Returns
    ///
    /// `true` when the folder has been created, `false` when the server refuses it
    /// because it already exists.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] on any other status.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropfromshell::Client) -> Result<(), dropfromshell::Error> {
    /// let created = client.create_folder("/newdir").await?;
    /// println!("mkdir {}", if created { "successful" } else { "already exists" });
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn create_folder(&self, path: &str) -> crate::Result<bool> {
        let res = self.rpc_request(ENDPOINT, &PathParams::new(path)).await?;
        match res.status() {
            StatusCode::OK => Ok(true),
            StatusCode::FORBIDDEN => {
                tracing::debug!("folder {path:?} already exists");
                Ok(false)
            }
            _ => Err(unexpected_status(ENDPOINT, res).await),
        }
    }
}
