use dropfromshell::Client;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Remote path of the file or folder to move
    from_path: String,
    /// Remote destination, including the new name
    to_path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client) -> anyhow::Result<()> {
        let moved = client.move_entry(&self.from_path, &self.to_path).await?;
        tracing::info!("{} moved", self.from_path);
        println!(
            "{}",
            moved.path_display.as_deref().unwrap_or(self.to_path.as_str())
        );
        Ok(())
    }
}
