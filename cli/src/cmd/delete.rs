use dropfromshell::Client;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Remote path of the file or folder to delete
    path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client) -> anyhow::Result<()> {
        if client.delete(&self.path).await? {
            println!("deleted {}", self.path);
        } else {
            println!("nothing to delete at {}", self.path);
        }
        Ok(())
    }
}
