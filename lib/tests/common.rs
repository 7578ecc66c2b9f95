#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::Rng;

pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dropfromshell=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Random alphanumeric suffix, keeps concurrent runs from colliding on the remote side
pub fn random_name() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}
