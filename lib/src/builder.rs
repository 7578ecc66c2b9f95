use std::borrow::Cow;
use std::time::Duration;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no access token, or an empty one, was provided.
    #[error("no access token provided")]
    MissingCredentials,
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the base URLs of both hosts, the credentials, a timeout and
/// optionally customizing the inner `reqwest::ClientBuilder`.
///
/// ```
/// use dropfromshell::{ClientBuilder, Credentials};
///
/// let _client = ClientBuilder::default()
///    .with_credentials(Credentials::access_token("my-token"))
///    .build()
///    .expect("unable to build http client");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    api_url: Cow<'static, str>,
    content_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: Option<crate::Credentials>,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Base URLs are set to the Dropbox hosts.
    /// - No credentials are set.
    /// - No timeout, a request waits until the server answers.
    fn default() -> Self {
        Self {
            api_url: Cow::Borrowed(crate::API_URL),
            content_url: Cow::Borrowed(crate::CONTENT_URL),
            client_builder: None,
            credentials: None,
            timeout: None,
        }
    }
}

fn duration_from_env() -> Option<Duration> {
    let value = std::env::var("DROPFROMSHELL_TIMEOUT").ok()?;
    match value.parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("ignoring invalid DROPFROMSHELL_TIMEOUT value {value:?}: {err}");
            None
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `DROPFROMSHELL_API_URL` and `DROPFROMSHELL_CONTENT_URL` for the endpoints.
    /// - Uses `DROPFROMSHELL_ACCESS_TOKEN` for credentials.
    /// - Uses `DROPFROMSHELL_TIMEOUT`, in milliseconds, for the request timeout.
    ///
    /// Falls back to the Dropbox hosts if none is specified.
    pub fn from_env() -> Self {
        let api_url = std::env::var("DROPFROMSHELL_API_URL")
            .ok()
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(crate::API_URL));
        let content_url = std::env::var("DROPFROMSHELL_CONTENT_URL")
            .ok()
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(crate::CONTENT_URL));

        Self {
            api_url,
            content_url,
            client_builder: None,
            credentials: crate::Credentials::from_env(),
            timeout: duration_from_env(),
        }
    }
}

impl ClientBuilder {
    /// Sets the base URL of the RPC host.
    pub fn set_api_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.api_url = value.into();
    }

    /// Sets the base URL of the RPC host and returns the modified builder.
    pub fn with_api_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_api_url(value);
        self
    }

    /// Sets the base URL of the content host.
    pub fn set_content_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.content_url = value.into();
    }

    /// Sets the base URL of the content host and returns the modified builder.
    pub fn with_content_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_content_url(value);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets the credentials for API authentication.
    pub fn set_credentials(&mut self, credentials: crate::Credentials) {
        self.credentials = Some(credentials);
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, credentials: crate::Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Sets the timeout applied to every request.
    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = Some(value);
    }

    /// Sets the timeout applied to every request and returns the modified builder.
    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.set_timeout(value);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no credentials, or empty ones, were set.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let credentials = self
            .credentials
            .filter(|creds| !creds.is_empty())
            .ok_or(Error::MissingCredentials)?;
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        let builder = if let Some(timeout) = self.timeout {
            builder.timeout(timeout)
        } else {
            builder
        };
        Ok(crate::Client {
            api_url: trim_base_url(self.api_url),
            content_url: trim_base_url(self.content_url),
            credentials,
            inner: builder.build()?,
        })
    }
}

fn trim_base_url(value: Cow<'static, str>) -> Cow<'static, str> {
    if value.ends_with('/') {
        Cow::Owned(value.trim_end_matches('/').to_string())
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientBuilder, Error};
    use crate::Credentials;

    #[test]
    fn should_fail_without_credentials() {
        let err = ClientBuilder::default().build().unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn should_fail_with_empty_token() {
        let err = ClientBuilder::default()
            .with_credentials(Credentials::access_token(""))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn should_trim_trailing_slashes() {
        let client = ClientBuilder::default()
            .with_api_url("http://localhost:1234/")
            .with_credentials(Credentials::access_token("token"))
            .build()
            .unwrap();
        assert_eq!(client.api_url, "http://localhost:1234");
        assert_eq!(client.content_url, crate::CONTENT_URL);
    }
}
