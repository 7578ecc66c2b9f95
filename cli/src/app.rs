use clap::Parser;
use dropfromshell::Client;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(about, version)]
pub struct Command {
    /// Path to load the configuration file. Default to ~/.config/dropfromshell/dropfromshell.json.
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Log what the requests are doing
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: crate::cmd::Command,
}

impl Command {
    pub fn config(&self) -> PathBuf {
        if let Some(ref cfg) = self.config {
            cfg.clone()
        } else if let Some(home) = dirs::home_dir() {
            home.join(".config")
                .join("dropfromshell")
                .join("dropfromshell.json")
        } else {
            PathBuf::from(".dropfromshell.json")
        }
    }

    /// Returns the exit code of the process
    pub async fn execute(self, client: &Client) -> exitcode::ExitCode {
        match self.subcmd.execute(client).await {
            Ok(_) => exitcode::OK,
            Err(err) => {
                tracing::error!("{err:#}");
                exit_code(&err)
            }
        }
    }

    pub fn set_log_level(&self) {
        let default_level = if self.verbose { "info" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("dropfromshell={default_level}")));
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("couldn't init logger: {err:?}");
        }
    }
}

pub(crate) fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    use dropfromshell::Error;

    match err.downcast_ref::<Error>() {
        Some(Error::Reqwest(_)) => exitcode::UNAVAILABLE,
        Some(Error::NotFound(_)) => exitcode::NOINPUT,
        Some(Error::Download(_)) | Some(Error::Upload(_)) => exitcode::IOERR,
        Some(_) => exitcode::DATAERR,
        None if err.downcast_ref::<std::io::Error>().is_some() => exitcode::IOERR,
        None => exitcode::SOFTWARE,
    }
}
