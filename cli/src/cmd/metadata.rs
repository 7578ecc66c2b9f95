use dropfromshell::Client;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Remote path to look up
    path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client) -> anyhow::Result<()> {
        match client.get_metadata(&self.path).await? {
            Some(entry) => {
                match entry.size {
                    Some(size) => println!("{} {} {size}", entry.tag, entry.name),
                    None => println!("{} {}", entry.tag, entry.name),
                }
                Ok(())
            }
            None => Err(dropfromshell::Error::NotFound(self.path).into()),
        }
    }
}
