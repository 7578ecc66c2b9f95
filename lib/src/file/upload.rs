//! Resources needed to upload a file in a single request
//!
//! The whole content is sent at once, which the API accepts for files up to 150 MiB.

use super::UploadedFile;
use crate::request::{read_json, unexpected_status};
use crate::Error;
use reqwest::StatusCode;
use std::path::Path;

const ENDPOINT: &str = "files/upload";

/// Argument of the upload, sent in the `Dropbox-API-Arg` header
#[derive(Debug, serde::Serialize)]
struct UploadArg<'a> {
    path: &'a str,
    mode: &'static str,
    autorename: bool,
    mute: bool,
}

impl<'a> UploadArg<'a> {
    fn new(path: &'a str) -> Self {
        Self {
            path,
            mode: "overwrite",
            autorename: true,
            mute: false,
        }
    }
}

impl crate::Client {
    /// Uploads some content to `destination`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the server doesn't answer with a success or if the
    /// response cannot be decoded.
    #[tracing::instrument(skip(self, body))]
    pub async fn upload(
        &self,
        destination: &str,
        body: impl Into<reqwest::Body>,
    ) -> crate::Result<UploadedFile> {
        let res = self
            .content_request(ENDPOINT, &UploadArg::new(destination), body.into())
            .await?;
        match res.status() {
            StatusCode::OK => read_json(ENDPOINT, res).await,
            _ => {
                let err = unexpected_status(ENDPOINT, res).await;
                tracing::warn!("unable to upload to {destination:?}: {err}");
                Err(err)
            }
        }
    }

    /// Uploads a local file to `destination`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upload`] if the local file cannot be read, otherwise behaves like
    /// [`upload`](crate::Client::upload).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropfromshell::Client) -> Result<(), dropfromshell::Error> {
    /// let source = std::path::Path::new("screenshot.png");
    /// let file = client.upload_file(source, "/test/screenshot.png").await?;
    /// println!("uploaded {} bytes", file.size);
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn upload_file(&self, source: &Path, destination: &str) -> crate::Result<UploadedFile> {
        let content = tokio::fs::read(source).await.map_err(Error::Upload)?;
        tracing::debug!("read {} bytes from {source:?}", content.len());
        self.upload(destination, content).await
    }
}
