//! Sends the requests to the [REST API](https://yandex.com/dev/disk/api/reference/response-objects.html) and classifies the responses

use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::error::{is_truthy, Error};

/// A response accepted as successful, with its parsed body if any
#[derive(Debug)]
pub(crate) struct Reply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Reply {
    pub fn json<T: serde::de::DeserializeOwned>(self) -> crate::Result<T> {
        serde_json::from_value(self.body.unwrap_or(Value::Null)).map_err(Error::from)
    }
}

/// Every response goes through here: a conflict, an error status or an `error` field
/// in the body all become an error, a body that isn't JSON becomes a parsing error.
pub(crate) fn classify(status: StatusCode, body: &[u8]) -> crate::Result<Reply> {
    let parsed = serde_json::from_slice::<Value>(body);
    if !status.is_success() {
        return Err(Error::from_response(status, parsed.ok().as_ref()));
    }
    let body = if body.is_empty() { None } else { Some(parsed?) };
    if let Some(ref value) = body {
        if value.get("error").map_or(false, is_truthy) {
            return Err(Error::from_response(status, Some(value)));
        }
    }
    Ok(Reply { status, body })
}

pub(crate) async fn read_response(res: reqwest::Response) -> crate::Result<Reply> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    let body = res.bytes().await?;
    classify(status, &body)
}

/// Keeps the response untouched when successful, so that its body can be streamed.
pub(crate) async fn ensure_success(res: reqwest::Response) -> crate::Result<reqwest::Response> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if status.is_success() {
        return Ok(res);
    }
    let body = res.bytes().await?;
    let body = serde_json::from_slice::<Value>(&body).ok();
    Err(Error::from_response(status, body.as_ref()))
}

impl crate::Client {
    fn build_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        self.credentials
            .headers()
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }

    #[tracing::instrument(name = "request", skip(self, params))]
    pub(crate) async fn send_request<P: serde::Serialize>(
        &self,
        verb: Method,
        method: &str,
        params: P,
    ) -> crate::Result<Reply> {
        let uri = self.build_url(method);
        tracing::debug!("calling {uri}");
        let res = self
            .authorize(self.inner.request(verb, uri))
            .query(&params)
            .send()
            .await?;
        read_response(res).await
    }

    pub(crate) async fn get_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        method: &str,
        params: P,
    ) -> crate::Result<T> {
        self.send_request(Method::GET, method, params).await?.json()
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct PathParams<'a> {
    pub path: &'a str,
}
