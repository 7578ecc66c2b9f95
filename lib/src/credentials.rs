//! The bearer token used to authenticate with the API, as described in [the OAuth guide](https://www.dropbox.com/developers/reference/oauth-guide).

/// Name of the environment variable holding the access token
pub const ACCESS_TOKEN_ENV: &str = "DROPFROMSHELL_ACCESS_TOKEN";

/// The OAuth access token sent as `Authorization: Bearer <token>`
#[derive(Clone)]
pub struct Credentials {
    access_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("access_token", &"********")
            .finish()
    }
}

impl Credentials {
    /// Creates a credential based on the environment variables
    ///
    /// When `DROPFROMSHELL_ACCESS_TOKEN` is set, a `Some(Credentials)` will be created.
    ///
    /// ```rust
    /// use dropfromshell::credentials::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_) => println!("uses an access token"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .map(Self::access_token)
    }

    pub fn access_token<S: Into<String>>(access_token: S) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub(crate) fn token(&self) -> &str {
        self.access_token.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.trim().is_empty()
    }
}
