use crate::entry::Tag;
use crate::request::{unexpected_status, PathParams};
use crate::Error;
use bytes::Bytes;
use reqwest::StatusCode;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

const ENDPOINT: &str = "files/download";

impl crate::Client {
    async fn download_request(&self, path: &str) -> crate::Result<reqwest::Response> {
        let res = self
            .content_request(ENDPOINT, &PathParams::new(path), reqwest::Body::from(Vec::new()))
            .await?;
        match res.status() {
            StatusCode::OK => Ok(res),
            _ => Err(unexpected_status(ENDPOINT, res).await),
        }
    }

    /// Downloads the content of a file in memory.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the server doesn't answer with a success.
    #[tracing::instrument(skip(self))]
    pub async fn download(&self, path: &str) -> crate::Result<Bytes> {
        let res = self.download_request(path).await?;
        Ok(res.bytes().await?)
    }

    /// Downloads a file to `destination`, replacing any existing local file.
    ///
    /// The metadata of the remote path is checked first, so that only files get downloaded.
    ///
    /// # Returns
    ///
    /// The number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when nothing exists at `path`, [`Error::NotAFile`] when
    /// it's a folder or anything but a file and [`Error::Download`] if the local file cannot
    /// be written.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropfromshell::Client) -> Result<(), dropfromshell::Error> {
    /// let size = client
    ///     .download_file("/t1/a.txt", std::path::Path::new("a.txt"))
    ///     .await?;
    /// println!("downloaded {size} bytes");
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn download_file(&self, path: &str, destination: &Path) -> crate::Result<u64> {
        match self.get_tag(path).await? {
            Some(Tag::File) => {}
            Some(tag) => {
                return Err(Error::NotAFile {
                    path: path.to_string(),
                    tag,
                })
            }
            None => return Err(Error::NotFound(path.to_string())),
        }

        let res = self.download_request(path).await?;
        let partial = partial_path(destination)?;
        let size = match write_body(res, &partial).await {
            Ok(size) => size,
            Err(err) => {
                if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                    tracing::debug!("couldn't remove partial download {partial:?}: {cleanup}");
                }
                return Err(err);
            }
        };
        tokio::fs::rename(&partial, destination)
            .await
            .map_err(Error::Download)?;
        tracing::debug!("wrote {size} bytes to {destination:?}");
        Ok(size)
    }
}

// the body is written next to the destination, which only gets replaced once complete
fn partial_path(destination: &Path) -> crate::Result<PathBuf> {
    let name = destination.file_name().ok_or_else(|| {
        Error::Download(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{destination:?} is not a file path"),
        ))
    })?;
    let mut partial = OsString::from(".");
    partial.push(name);
    partial.push(".part");
    Ok(destination.with_file_name(partial))
}

async fn write_body(mut res: reqwest::Response, target: &Path) -> crate::Result<u64> {
    let mut writer = tokio::fs::File::create(target)
        .await
        .map_err(Error::Download)?;
    let mut size: u64 = 0;
    while let Some(chunk) = res.chunk().await? {
        writer.write_all(&chunk).await.map_err(Error::Download)?;
        size += chunk.len() as u64;
    }
    writer.flush().await.map_err(Error::Download)?;
    Ok(size)
}

#[cfg(test)]
mod tests {
    use crate::entry::Tag;
    use crate::{Client, Credentials};
    use mockito::Matcher;
    use std::io::Write;
    use temp_dir::TempDir;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let root = TempDir::new().unwrap();
        let target = root.child("downloaded.txt");

        let mut server = mockito::Server::new_async().await;
        let metadata = server
            .mock("POST", "/files/get_metadata")
            .match_body(Matcher::Json(serde_json::json!({"path": "/t1/a.txt"})))
            .with_status(200)
            .with_body(r#"{".tag": "file", "name": "a.txt", "id": "id:1", "size": 12}"#)
            .create_async()
            .await;
        let download = server
            .mock("POST", "/files/download")
            .match_header("authorization", "Bearer access-token")
            .match_header("dropbox-api-arg", r#"{"path":"/t1/a.txt"}"#)
            .with_status(200)
            .with_header("content-type", "application/octet-stream")
            .with_body("Hello World!")
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::access_token("access-token")).unwrap();
        let size = client.download_file("/t1/a.txt", &target).await.unwrap();
        assert_eq!(size, 12);
        assert_eq!(std::fs::read(&target).unwrap(), b"Hello World!");
        metadata.assert_async().await;
        download.assert_async().await;
    }

    #[tokio::test]
    async fn should_refuse_folders() {
        crate::tests::init();
        let root = TempDir::new().unwrap();

        let mut server = mockito::Server::new_async().await;
        let metadata = server
            .mock("POST", "/files/get_metadata")
            .with_status(200)
            .with_body(r#"{".tag": "folder", "name": "t1", "id": "id:1"}"#)
            .create_async()
            .await;
        let download = server
            .mock("POST", "/files/download")
            .expect(0)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::access_token("access-token")).unwrap();
        let error = client
            .download_file("/t1", &root.child("t1"))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            crate::Error::NotAFile {
                tag: Tag::Folder,
                ..
            }
        ));
        metadata.assert_async().await;
        download.assert_async().await;
    }

    #[tokio::test]
    async fn should_fail_when_missing() {
        crate::tests::init();
        let root = TempDir::new().unwrap();

        let mut server = mockito::Server::new_async().await;
        let metadata = server
            .mock("POST", "/files/get_metadata")
            .with_status(409)
            .with_body(r#"{"error_summary": "path/not_found/.."}"#)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::access_token("access-token")).unwrap();
        let error = client
            .download_file("/t1/a.txt", &root.child("a.txt"))
            .await
            .unwrap_err();
        assert!(matches!(error, crate::Error::NotFound(ref path) if path == "/t1/a.txt"));
        assert!(!root.child("a.txt").exists());
        metadata.assert_async().await;
    }

    #[tokio::test]
    async fn should_keep_previous_file_when_interrupted() {
        crate::tests::init();
        let root = TempDir::new().unwrap();
        let target = root.child("a.txt");
        std::fs::write(&target, "previous").unwrap();

        let mut server = mockito::Server::new_async().await;
        let metadata = server
            .mock("POST", "/files/get_metadata")
            .with_status(200)
            .with_body(r#"{".tag": "file", "name": "a.txt", "id": "id:1", "size": 12}"#)
            .create_async()
            .await;
        let download = server
            .mock("POST", "/files/download")
            .with_status(200)
            .with_chunked_body(|w| {
                w.write_all(b"partial")?;
                Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection lost",
                ))
            })
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::access_token("access-token")).unwrap();
        let error = client.download_file("/t1/a.txt", &target).await.unwrap_err();
        assert!(matches!(error, crate::Error::Reqwest(_)));
        assert_eq!(std::fs::read(&target).unwrap(), b"previous");
        let names: Vec<_> = std::fs::read_dir(root.path())
            .unwrap()
            .map(|item| item.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.txt")]);
        metadata.assert_async().await;
        download.assert_async().await;
    }

    #[tokio::test]
    async fn in_memory() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let download = server
            .mock("POST", "/files/download")
            .match_header("dropbox-api-arg", r#"{"path":"/t1/a.txt"}"#)
            .with_status(200)
            .with_body("Hello World!")
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::access_token("access-token")).unwrap();
        let content = client.download("/t1/a.txt").await.unwrap();
        assert_eq!(content.as_ref(), b"Hello World!");
        download.assert_async().await;
    }

    #[tokio::test]
    async fn server_error() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let download = server
            .mock("POST", "/files/download")
            .with_status(409)
            .with_body(r#"{"error_summary": "path/not_file/.."}"#)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::access_token("access-token")).unwrap();
        let error = client.download("/t1").await.unwrap_err();
        assert!(matches!(
            error,
            crate::Error::UnexpectedStatus { status: 409, .. }
        ));
        download.assert_async().await;
    }
}
