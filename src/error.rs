//! The errors returned by the client and the API

use serde_json::Value;

/// Error body returned by the API, either with an error status or in-band.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    /// Error code sent by the server, `None` when the response body didn't carry one
    pub error: Option<String>,
    pub message: Option<String>,
    pub description: Option<String>,
}

impl ApiError {
    /// Whether the server explained the failure itself, as opposed to a bare error status.
    pub fn is_reported(&self) -> bool {
        self.error.is_some()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.error.as_deref().unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(self.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("UnknownError")
        });
        write!(f, "{code} ({})", self.status)?;
        if let Some(text) = self.description.as_ref().or(self.message.as_ref()) {
            write!(f, ": {text}")?;
        }
        Ok(())
    }
}

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered `409 Conflict`, usually because the destination already exists
    #[error("conflict: {description}")]
    Conflict { description: String },
    /// Server side error, with an error status or an `error` field in the body
    #[error("api error: {0}")]
    Api(ApiError),
    /// Unable to reach the server or to read its response
    #[error("unable to execute request")]
    Reqwest(#[from] reqwest::Error),
    /// Unable to parse a JSON response
    #[error("unable to parse response")]
    SerdeJson(#[from] serde_json::Error),
    /// A field required by the client is missing from the response
    #[error("missing field {0:?} in response")]
    MissingField(&'static str),
    /// Error while writing a downloaded file
    #[error("unable to write downloaded file")]
    Download(#[source] std::io::Error),
    /// Error while reading a file to upload
    #[error("unable to read file to upload")]
    Upload(#[source] std::io::Error),
    /// The retry policy gave up on a failing request
    #[error("giving up after {attempts} attempts")]
    RetryExhausted {
        attempts: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the server refused the request with an explanation, a conflict or an
    /// `error` field in the body. Outages and transport failures are not refusals.
    pub fn is_refusal(&self) -> bool {
        match self {
            Self::Conflict { .. } => true,
            Self::Api(value) => value.is_reported(),
            _ => false,
        }
    }

    /// Builds the error matching a failed response.
    pub(crate) fn from_response(status: reqwest::StatusCode, body: Option<&Value>) -> Self {
        let text = |name: &str| {
            body.and_then(|value| value.get(name))
                .and_then(Value::as_str)
                .map(String::from)
        };
        let message = text("message");
        let description = text("description");
        if status == reqwest::StatusCode::CONFLICT {
            let description = description
                .or(message)
                .unwrap_or_else(|| status.to_string());
            return Self::Conflict { description };
        }
        let error = match body.and_then(|value| value.get("error")) {
            Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
            Some(value) if is_truthy(value) => Some(value.to_string()),
            _ => None,
        };
        Self::Api(ApiError {
            status: status.as_u16(),
            error,
            message,
            description,
        })
    }
}

/// Whether the value would count as set, `null`, `false`, `0` and empty values don't.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(value) => value.as_f64().map_or(true, |n| n != 0.0),
        Value::String(value) => !value.is_empty(),
        Value::Array(value) => !value.is_empty(),
        Value::Object(value) => !value.is_empty(),
    }
}

/// Turns a conflict into an absent value, surfacing its description to the operator.
pub(crate) fn absent_on_conflict<T>(result: crate::Result<T>) -> crate::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::Conflict { description }) => {
            tracing::warn!("{description}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
