use std::fmt;

use crate::http::Response;

/// A non-success status, described by a short message only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    message: String,
}

impl StatusError {
    pub(crate) fn new(message: String) -> Self {
        StatusError { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}
impl std::error::Error for StatusError {}

/// Why a request failed, as far as the response could tell.
#[derive(Debug, Clone, PartialEq)]
pub enum Reason {
    /// The status text. Used when the body could not be read or parsed.
    StatusText(String),
    /// The body, parsed as json.
    #[cfg(feature = "json")]
    Json(serde_json::Value),
    /// The body, as text.
    Text(String),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reason::StatusText(text) | Reason::Text(text) => f.write_str(text),
            #[cfg(feature = "json")]
            Reason::Json(value) => write!(f, "{value}"),
        }
    }
}

/// A non-success response, with a message, the failure reason, the source
/// URL and the response itself.
#[derive(Debug)]
pub struct ResponseError {
    message: String,
    reason: Reason,
    url: String,
    response: Response,
}

impl ResponseError {
    pub(crate) fn new(message: String, reason: Reason, url: String, response: Response) -> Self {
        ResponseError {
            message,
            reason,
            url,
            response,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn reason(&self) -> &Reason {
        &self.reason
    }

    /// Whether the reason was read from the response body rather than
    /// falling back to the status text.
    pub fn enriched(&self) -> bool {
        !matches!(self.reason, Reason::StatusText(_))
    }

    /// The full URL of the response. The message only holds a shortened
    /// form.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn into_response(self) -> Response {
        self.response
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}
impl std::error::Error for ResponseError {}
