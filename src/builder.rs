use std::borrow::Cow;
use std::time::Duration;

use crate::{Credentials, RetryPolicy};

/// Default time allowed to establish a connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no token was provided.
    #[error("no credentials provided")]
    MissingCredentials,
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

fn timeout_from_env() -> Option<Duration> {
    let value = std::env::var("YANDEX_DISK_TIMEOUT").ok()?;
    match value.parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("ignoring invalid YANDEX_DISK_TIMEOUT {value:?}: {err}");
            None
        }
    }
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// ```rust
/// use std::time::Duration;
/// use yandex_disk::builder::ClientBuilder;
/// use yandex_disk::{Credentials, RetryPolicy};
///
/// let _client = ClientBuilder::default()
///     .with_credentials(Credentials::oauth("my-token"))
///     .with_timeout(Duration::from_secs(120))
///     .with_retry(RetryPolicy::new(3))
///     .build()
///     .expect("unable to build client");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: Option<Credentials>,
    connect_timeout: Duration,
    timeout: Option<Duration>,
    retry: RetryPolicy,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Base URL is the public api.
    /// - No credentials are set.
    /// - Connections time out after 30 seconds, requests have no total timeout.
    /// - Listing uses the default [`RetryPolicy`].
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(crate::BASE_URL),
            client_builder: None,
            credentials: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: None,
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `YANDEX_DISK_TOKEN` for credentials.
    /// - Uses `YANDEX_DISK_BASE_URL` for the endpoint, falling back to the public api.
    /// - Uses `YANDEX_DISK_TIMEOUT`, in milliseconds, as the total request timeout.
    ///   An invalid value is ignored.
    pub fn from_env() -> Self {
        let mut builder = Self {
            credentials: Credentials::from_env(),
            timeout: timeout_from_env(),
            ..Default::default()
        };
        if let Ok(base_url) = std::env::var("YANDEX_DISK_BASE_URL") {
            builder.set_base_url(base_url);
        }
        builder
    }
}

impl ClientBuilder {
    /// Sets a custom base URL, trailing slashes are dropped.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = match base_url.into() {
            Cow::Borrowed(value) => Cow::Borrowed(value.trim_end_matches('/')),
            Cow::Owned(value) => Cow::Owned(value.trim_end_matches('/').to_string()),
        };
    }

    /// Sets a custom base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
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
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    pub fn set_connect_timeout(&mut self, value: Duration) {
        self.connect_timeout = value;
    }

    pub fn with_connect_timeout(mut self, value: Duration) -> Self {
        self.set_connect_timeout(value);
        self
    }

    /// Sets the total timeout of a request, body transfer included.
    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = Some(value);
    }

    /// Sets the total timeout of a request and returns the modified builder.
    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.set_timeout(value);
        self
    }

    /// Sets the policy used when a listing page fails.
    pub fn set_retry(&mut self, value: RetryPolicy) {
        self.retry = value;
    }

    pub fn with_retry(mut self, value: RetryPolicy) -> Self {
        self.set_retry(value);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no credentials were set.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let credentials = self.credentials.ok_or(Error::MissingCredentials)?;
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT)
            .connect_timeout(self.connect_timeout);
        let builder = if let Some(timeout) = self.timeout {
            builder.timeout(timeout)
        } else {
            builder
        };
        Ok(crate::Client {
            base_url: self.base_url,
            credentials,
            inner: builder.build()?,
            retry: self.retry,
        })
    }
}
