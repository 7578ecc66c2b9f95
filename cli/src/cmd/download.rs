use dropfromshell::Client;
use std::path::PathBuf;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Remote path of the file to download
    remote_path: String,
    /// Local path to download the file to. When it's a directory, the remote file name is used.
    local_path: PathBuf,
}

impl Command {
    fn target(&self) -> PathBuf {
        if self.local_path.is_dir() {
            let name = self
                .remote_path
                .rsplit('/')
                .next()
                .filter(|name| !name.is_empty())
                .unwrap_or("download");
            self.local_path.join(name)
        } else {
            self.local_path.clone()
        }
    }

    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: &Client) -> anyhow::Result<()> {
        let target = self.target();
        tracing::info!("downloading {} to {target:?}", self.remote_path);
        let size = client.download_file(&self.remote_path, &target).await?;
        println!("downloaded {size} bytes to {}", target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Command;
    use clap::Parser;
    use temp_dir::TempDir;

    #[test]
    fn should_use_remote_name_in_directory() {
        let root = TempDir::new().unwrap();
        let local = root.path().to_string_lossy().to_string();
        let cmd = Command::parse_from(["download", "/t1/a.txt", local.as_str()]);
        assert_eq!(cmd.target(), root.child("a.txt"));
    }

    #[test]
    fn should_keep_file_target() {
        let root = TempDir::new().unwrap();
        let local = root.child("b.txt").to_string_lossy().to_string();
        let cmd = Command::parse_from(["download", "/t1/a.txt", local.as_str()]);
        assert_eq!(cmd.target(), root.child("b.txt"));
    }
}
