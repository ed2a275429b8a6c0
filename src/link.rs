//! Short lived urls handed out by the API.
//!
//! Downloading, uploading and most asynchronous operations start by asking the API for a
//! [`Link`], then issue exactly one request against it. A link is consumed when used.

use reqwest::{Method, RequestBuilder};

/// A [link object](https://yandex.com/dev/disk/api/reference/response-objects.html#link)
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default)]
    pub templated: bool,
}

impl Link {
    /// The method advertised by the server, `fallback` when absent or invalid.
    pub fn method_or(&self, fallback: Method) -> Method {
        self.method
            .as_deref()
            .and_then(|value| Method::from_bytes(value.as_bytes()).ok())
            .unwrap_or(fallback)
    }

    pub(crate) fn into_request(self, client: &reqwest::Client, fallback: Method) -> RequestBuilder {
        let method = self.method_or(fallback);
        tracing::debug!("following link {method} {}", self.href);
        client.request(method, self.href)
    }
}

impl crate::Client {
    /// Asks the API for a link, the first half of every two step operation.
    pub(crate) async fn acquire_link<P: serde::Serialize>(
        &self,
        verb: Method,
        method: &str,
        params: P,
    ) -> crate::Result<Link> {
        self.send_request(verb, method, params).await?.json()
    }
}
