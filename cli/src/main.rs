mod app;
mod cmd;
mod config;

use clap::Parser;

#[tokio::main]
async fn main() {
    let command = app::Command::parse();
    command.set_log_level();

    let config_path = command.config();
    let client = match config::Config::from_path(&config_path).and_then(config::Config::build) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("unable to configure client from {config_path:?}: {err:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    std::process::exit(command.execute(&client).await);
}
