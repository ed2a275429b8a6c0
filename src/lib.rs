//! Minimal client for the [Yandex.Disk REST API](https://yandex.com/dev/disk/api/concepts/about.html).
//!
//! ```rust,no_run
//! # async fn example() -> yandex_disk::Result<()> {
//! use yandex_disk::{Client, Credentials};
//!
//! let client = Client::new(yandex_disk::BASE_URL, Credentials::oauth("my-token"))
//!     .expect("unable to build client");
//! for file in client.get_file_list("disk:/photos", true).await? {
//!     println!("{}", file.path);
//! }
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

pub mod builder;
pub mod credentials;
pub mod error;
pub mod link;
mod request;
pub mod resource;
pub mod retry;

pub use credentials::Credentials;
pub use error::{ApiError, Error};
pub use link::Link;
pub use resource::{Resource, ResourceKind, ResourceList};
pub use retry::RetryPolicy;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Base url of the public api, resources live under `{BASE_URL}/resources`
pub const BASE_URL: &str = "https://cloud-api.yandex.net/v1/disk";

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Yandex.Disk REST API
///
/// The client holds no state besides its configuration and can be cloned freely.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    credentials: Credentials,
    inner: reqwest::Client,
    retry: RetryPolicy,
}

impl Client {
    /// Creates a client with the default configuration for the given base url.
    ///
    /// Use [`ClientBuilder`](crate::builder::ClientBuilder) to tune timeouts or the retry policy.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
        credentials: Credentials,
    ) -> std::result::Result<Self, builder::Error> {
        builder::ClientBuilder::default()
            .with_base_url(base_url)
            .with_credentials(credentials)
            .build()
    }

    pub fn builder() -> builder::ClientBuilder {
        builder::ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}
