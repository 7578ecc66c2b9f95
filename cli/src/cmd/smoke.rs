//! Runs every operation against the account, checking each result along the way.

use anyhow::{ensure, Context};
use dropfromshell::entry::Tag;
use dropfromshell::Client;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::path::Path;
use temp_dir::TempDir;

const FILE_NAME: &str = "testfile.txt";
const MOVED_FILE_NAME: &str = "testfile(2).txt";

pub(crate) fn random_name() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub(crate) struct Scenario {
    folder: String,
    content: Vec<u8>,
}

impl Scenario {
    pub(crate) fn new(folder: String, content: Vec<u8>) -> Self {
        Self { folder, content }
    }

    fn random(prefix: &str) -> Self {
        Self::new(
            format!("{prefix}{}", random_name()),
            random_name().into_bytes(),
        )
    }

    /// Creates the remote folder and runs the operations inside it.
    ///
    /// The folder is removed on failure, unless it existed before.
    pub(crate) async fn run(&self, client: &Client, workdir: &Path) -> anyhow::Result<()> {
        ensure!(
            client.create_folder(&self.folder).await?,
            "remote folder {} already exists",
            self.folder
        );
        tracing::info!("created remote folder {}", self.folder);

        let result = self.exercise(client, workdir).await;
        if result.is_err() {
            self.cleanup(client).await;
        }
        result
    }

    async fn cleanup(&self, client: &Client) {
        match client.delete(&self.folder).await {
            Ok(true) => tracing::info!("removed remote folder {}", self.folder),
            Ok(false) => {}
            Err(err) => tracing::warn!(
                "please delete remote folder manually: {} ({err})",
                self.folder
            ),
        }
    }

    async fn exercise(&self, client: &Client, workdir: &Path) -> anyhow::Result<()> {
        let source = workdir.join(random_name());
        std::fs::write(&source, &self.content).context("couldn't write local test file")?;

        let file_path = format!("{}/{FILE_NAME}", self.folder);
        client
            .upload_file(&source, &file_path)
            .await
            .context("error occurred while uploading")?;
        ensure!(
            client.get_tag(&file_path).await? == Some(Tag::File),
            "error occurred in upload, {file_path} is not a file"
        );

        let moved_path = format!("{}/{MOVED_FILE_NAME}", self.folder);
        client
            .move_entry(&file_path, &moved_path)
            .await
            .context("error occurred while moving file")?;
        ensure!(
            client.get_tag(&file_path).await?.is_none(),
            "error occurred while moving file, {file_path} still exists"
        );
        ensure!(
            client.get_tag(&moved_path).await? == Some(Tag::File),
            "error occurred while moving file, {moved_path} is not a file"
        );

        let entries = client.list_folder(&self.folder).await?;
        ensure!(
            matches!(entries.as_slice(), [entry] if entry.name == MOVED_FILE_NAME && entry.is_file()),
            "expected list to return 1 file, got {} entries",
            entries.len()
        );

        let target = workdir.join(random_name());
        client.download_file(&moved_path, &target).await?;
        let downloaded = std::fs::read(&target).context("couldn't read downloaded file")?;
        ensure!(
            downloaded == self.content,
            "downloaded file is not equal to local test file"
        );

        ensure!(
            client.delete(&self.folder).await?,
            "failed to delete remote test folder {}",
            self.folder
        );
        Ok(())
    }
}

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Prefix of the remote folder created for the test
    #[clap(long, default_value = "/testdropfromshell")]
    prefix: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client) -> anyhow::Result<()> {
        let workdir = TempDir::new().context("couldn't create local temporary directory")?;
        let scenario = Scenario::random(&self.prefix);
        tracing::info!("running scenario in {}", scenario.folder);
        scenario.run(client, workdir.path()).await?;
        println!("all operations succeeded");
        Ok(())
    }
}
