//! This gives the required structure to authenticate with the Yandex.Disk API as specified in [the documentation](https://yandex.com/dev/disk/api/concepts/quickstart.html).

use reqwest::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE};

/// The scheme prefixed to the token in the `Authorization` header
pub const AUTHORIZATION_SCHEME: &str = "OAuth";

/// An OAuth token, sent with every request to the API.
///
/// The token is opaque: it is neither validated nor refreshed by the client.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"********")
            .finish()
    }
}

impl Credentials {
    /// Creates a credential based on the `YANDEX_DISK_TOKEN` environment variable.
    ///
    /// ```rust
    /// use yandex_disk::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_) => println!("uses a token"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("YANDEX_DISK_TOKEN").ok().map(Self::oauth)
    }

    pub fn oauth<S: Into<String>>(token: S) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The two headers attached to every api request.
    pub fn headers(&self) -> [(HeaderName, String); 2] {
        [
            (
                AUTHORIZATION,
                format!("{AUTHORIZATION_SCHEME} {}", self.token),
            ),
            (CONTENT_TYPE, "application/json".to_string()),
        ]
    }
}
