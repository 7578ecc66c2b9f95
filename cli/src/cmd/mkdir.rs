use dropfromshell::Client;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Remote path of the folder to create
    path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client) -> anyhow::Result<()> {
        if client.create_folder(&self.path).await? {
            println!("created {}", self.path);
        } else {
            println!("{} already exists", self.path);
        }
        Ok(())
    }
}
