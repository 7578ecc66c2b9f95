//! Library for the [Dropbox HTTP API](https://www.dropbox.com/developers/documentation/http/documentation).
//!
//! Every operation is a single request against a single endpoint, awaited until
//! the server answers. Expected alternate outcomes (a folder that already exists,
//! a path that cannot be found) are returned as values, anything else is an
//! [`Error`].
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! let client = dropfromshell::ClientBuilder::from_env()
//!     .build()
//!     .expect("unable to build client");
//! if client.create_folder("/backup").await.unwrap() {
//!     println!("folder created");
//! }
//! # })
//! ```

use std::borrow::Cow;

pub mod builder;
pub mod credentials;
pub mod entry;
pub mod file;
pub mod folder;
mod request;

pub use builder::ClientBuilder;
pub use credentials::Credentials;

/// Base url of the host serving the RPC endpoints
pub const API_URL: &str = "https://api.dropboxapi.com/2";
/// Base url of the host serving uploads and downloads
pub const CONTENT_URL: &str = "https://content.dropboxapi.com/2";

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request couldn't be sent or the response couldn't be read
    #[error("network error")]
    Reqwest(#[from] reqwest::Error),
    /// The server answered with a status the endpoint doesn't expect
    #[error("received {status} from {endpoint}, server response: {body}")]
    UnexpectedStatus {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
    /// Unable to parse a JSON response, or to build a JSON argument
    #[error("unable to handle json payload")]
    SerdeJson(#[from] serde_json::Error),
    /// The listing has more results than a single page, which is not supported
    #[error("the listing has more results, this is not supported")]
    MoreResults { cursor: String },
    /// The remote path doesn't exist
    #[error("remote path {0:?} doesn't exist")]
    NotFound(String),
    /// The remote path exists but is not a file
    #[error("remote path {path:?} is a {tag}, expected a file")]
    NotAFile { path: String, tag: entry::Tag },
    /// Error while writing a downloaded file
    #[error("unable to write downloaded file")]
    Download(#[source] std::io::Error),
    /// Error while reading a file to upload
    #[error("unable to read file to upload")]
    Upload(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Dropbox HTTP API
///
/// The access token is owned by the client and sent with every request.
#[derive(Clone)]
pub struct Client {
    api_url: Cow<'static, str>,
    content_url: Cow<'static, str>,
    credentials: Credentials,
    inner: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Client))
            .field("api_url", &self.api_url)
            .field("content_url", &self.content_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl Client {
    /// Creates a client sending both the RPC and the content requests to `base_url`.
    ///
    /// Mostly useful when talking to a mock server.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
        credentials: Credentials,
    ) -> std::result::Result<Self, builder::Error> {
        let base_url = base_url.into();
        ClientBuilder::default()
            .with_api_url(base_url.clone())
            .with_content_url(base_url)
            .with_credentials(credentials)
            .build()
    }
}
