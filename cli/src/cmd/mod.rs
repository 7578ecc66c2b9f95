mod delete;
mod download;
mod list;
mod metadata;
mod mkdir;
mod moving;
mod smoke;
mod upload;

use dropfromshell::Client;

#[derive(clap::Subcommand)]
pub(crate) enum Command {
    /// Create a remote folder
    Mkdir(mkdir::Command),
    /// Delete a remote file or folder
    Delete(delete::Command),
    /// List the content of a remote folder
    List(list::Command),
    /// Display the kind of a remote path
    Metadata(metadata::Command),
    /// Upload a local file
    Upload(upload::Command),
    /// Move or rename a remote file or folder
    Move(moving::Command),
    /// Download a remote file
    Download(download::Command),
    /// Run every operation against the account, in a temporary remote folder
    SmokeTest(smoke::Command),
}

impl Command {
    pub(crate) async fn execute(self, client: &Client) -> anyhow::Result<()> {
        match self {
            Self::Mkdir(inner) => inner.execute(client).await,
            Self::Delete(inner) => inner.execute(client).await,
            Self::List(inner) => inner.execute(client).await,
            Self::Metadata(inner) => inner.execute(client).await,
            Self::Upload(inner) => inner.execute(client).await,
            Self::Move(inner) => inner.execute(client).await,
            Self::Download(inner) => inner.execute(client).await,
            Self::SmokeTest(inner) => inner.execute(client).await,
        }
    }
}
