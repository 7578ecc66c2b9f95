use anyhow::Context;
use dropfromshell::{Client, ClientBuilder, Credentials};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Content of `~/.config/dropfromshell/dropfromshell.json`.
///
/// To create the access token, see <https://www.dropbox.com/developers/reference/oauth-guide>.
#[derive(Deserialize)]
pub struct Config {
    oauth_access_token: String,
    /// Request timeout, in seconds
    timeout: Option<u64>,
    api_url: Option<String>,
    content_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Config))
            .field("oauth_access_token", &"********")
            .field("timeout", &self.timeout)
            .field("api_url", &self.api_url)
            .field("content_url", &self.content_url)
            .finish()
    }
}

impl Config {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let reader = std::fs::File::open(path)
            .with_context(|| format!("couldn't read configuration file {path:?}"))?;
        serde_json::from_reader(std::io::BufReader::new(reader))
            .context("couldn't read configuration with OAuth access token from configuration file")
    }

    pub fn build(self) -> anyhow::Result<Client> {
        let mut builder =
            ClientBuilder::from_env().with_credentials(Credentials::access_token(self.oauth_access_token));
        if let Some(timeout) = self.timeout.map(Duration::from_secs) {
            builder.set_timeout(timeout);
        }
        if let Some(api_url) = self.api_url {
            builder.set_api_url(api_url);
        }
        if let Some(content_url) = self.content_url {
            builder.set_content_url(content_url);
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use temp_dir::TempDir;

    #[test]
    fn should_load_token() {
        let root = TempDir::new().unwrap();
        let path = root.child("dropfromshell.json");
        std::fs::write(&path, r#"{"oauth_access_token": "sl.token"}"#).unwrap();
        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.oauth_access_token, "sl.token");
        assert!(config.timeout.is_none());
        assert!(config.build().is_ok());
    }

    #[test]
    fn should_fail_when_missing() {
        let root = TempDir::new().unwrap();
        let err = Config::from_path(&root.child("nothing.json")).unwrap_err();
        assert!(format!("{err:#}").contains("couldn't read configuration file"));
    }

    #[test]
    fn should_hide_token_when_debugging() {
        let root = TempDir::new().unwrap();
        let path = root.child("dropfromshell.json");
        std::fs::write(&path, r#"{"oauth_access_token": "sl.secret-value"}"#).unwrap();
        let config = Config::from_path(&path).unwrap();
        assert!(!format!("{config:?}").contains("secret-value"));
    }

    #[test]
    fn should_fail_without_token() {
        let root = TempDir::new().unwrap();
        let path = root.child("dropfromshell.json");
        std::fs::write(&path, r#"{"timeout": 10}"#).unwrap();
        assert!(Config::from_path(&path).is_err());
    }

    #[test]
    fn should_refuse_empty_token() {
        let root = TempDir::new().unwrap();
        let path = root.child("dropfromshell.json");
        std::fs::write(&path, r#"{"oauth_access_token": ""}"#).unwrap();
        let err = Config::from_path(&path).unwrap().build().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<dropfromshell::builder::Error>(),
            Some(dropfromshell::builder::Error::MissingCredentials)
        ));
    }
}
