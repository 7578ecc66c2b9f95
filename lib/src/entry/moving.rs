use super::Entry;
use crate::request::{read_json, unexpected_status};
use reqwest::StatusCode;

const ENDPOINT: &str = "files/move_v2";

#[derive(serde::Serialize)]
struct MoveParams<'a> {
    from_path: &'a str,
    to_path: &'a str,
}

#[derive(serde::Deserialize)]
struct MoveResponse {
    metadata: Entry,
}

impl crate::Client {
    /// Moves a file or folder to a different location, which can also be used to rename it.
    ///
    /// # Returns
    ///
    /// On success, returns the [`Entry`] at its new location.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the server doesn't answer with a success.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropfromshell::Client) -> Result<(), dropfromshell::Error> {
    /// let moved = client.move_entry("/t1/a.txt", "/t1/b.txt").await?;
    /// println!("moved to {:?}", moved.path_display);
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn move_entry(&self, from_path: &str, to_path: &str) -> crate::Result<Entry> {
        let params = MoveParams { from_path, to_path };
        let res = self.rpc_request(ENDPOINT, &params).await?;
        match res.status() {
            StatusCode::OK => read_json::<MoveResponse>(ENDPOINT, res)
                .await
                .map(|res| res.metadata),
            _ => Err(unexpected_status(ENDPOINT, res).await),
        }
    }
}
