use anyhow::Context;
use dropfromshell::Client;
use std::path::PathBuf;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Local file to upload
    local_path: PathBuf,
    /// Remote destination. When ending with a `/`, the local file name is appended.
    remote_path: String,
}

impl Command {
    fn destination(&self) -> anyhow::Result<String> {
        if self.remote_path.ends_with('/') {
            let name = self
                .local_path
                .file_name()
                .and_then(|name| name.to_str())
                .context("unable to read the name of the local file")?;
            Ok(format!("{}{name}", self.remote_path))
        } else {
            Ok(self.remote_path.clone())
        }
    }

    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client) -> anyhow::Result<()> {
        let destination = self.destination()?;
        tracing::info!("uploading {:?} to {destination}", self.local_path);
        let file = client.upload_file(&self.local_path, &destination).await?;
        println!(
            "uploaded {} bytes to {}",
            file.size,
            file.path_display.as_deref().unwrap_or(destination.as_str())
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Command;
    use clap::Parser;

    #[test]
    fn should_append_file_name() {
        let cmd = Command::parse_from(["upload", "/tmp/screenshot.png", "/test/"]);
        assert_eq!(cmd.destination().unwrap(), "/test/screenshot.png");
    }

    #[test]
    fn should_keep_destination() {
        let cmd = Command::parse_from(["upload", "/tmp/screenshot.png", "/test/shot.png"]);
        assert_eq!(cmd.destination().unwrap(), "/test/shot.png");
    }
}
