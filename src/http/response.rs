use http::StatusCode;

use crate::http::body::{Body, Bytes};
use crate::http::error::{BodyUsed, Context as _, Error};
use crate::http::fields::{self, HeaderMap, HeaderName, HeaderValue};

/// The uniform response: a host `http::Response<Body>` together with the
/// status text, the logical source URL, and whether the body has been read.
///
/// A `Response` is only ever produced whole, by [`ResponseBuilder`] or
/// [`Response::from_http`], so the URL a caller observes is always the
/// final one.
#[derive(Debug)]
pub struct Response {
    inner: http::Response<Body>,
    status_text: String,
    url: String,
    body_used: bool,
}

impl Response {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::new()
    }

    /// Adopt a host response. The host type carries no URL, so the source
    /// URL is supplied alongside it.
    pub fn from_http(response: http::Response<Body>, url: impl Into<String>) -> Self {
        let status_text = canonical_status_text(response.status());
        Response {
            inner: response,
            status_text,
            url: url.into(),
            body_used: false,
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        self.inner.status().is_success()
    }

    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// The logical source URL of this response. Empty when the response
    /// was built from content that has no location.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    pub fn body_used(&self) -> bool {
        self.body_used
    }

    /// Length of the content in bytes, from the `Content-Length` header or,
    /// failing that, from the body itself.
    pub fn content_length(&self) -> Option<u64> {
        match fields::content_length(self.headers()) {
            Ok(Some(len)) => Some(len),
            Ok(None) | Err(_) => self.inner.body().content_length(),
        }
    }

    /// Read the whole body. The body can be read once; any later read fails
    /// with [`BodyUsed`], even if this read fails.
    pub async fn bytes(&mut self) -> Result<Bytes, Error> {
        self.take_body()?
            .into_bytes()
            .await
            .context("reading response body")
    }

    /// Read the whole body as utf-8 text.
    pub async fn text(&mut self) -> Result<String, Error> {
        let mut body = self.take_body()?;
        let text = body.str_contents().await.context("reading response body")?;
        Ok(text.to_owned())
    }

    /// Read the whole body and deserialize it from json.
    #[cfg(feature = "json")]
    pub async fn json<T: serde::de::DeserializeOwned>(&mut self) -> Result<T, Error> {
        let mut body = self.take_body()?;
        body.json().await.context("reading response body")
    }

    fn take_body(&mut self) -> Result<Body, Error> {
        if self.body_used {
            return Err(BodyUsed.into());
        }
        self.body_used = true;
        Ok(std::mem::take(self.inner.body_mut()))
    }

    /// Give back the host response. The source URL and status text are
    /// dropped.
    pub fn into_http(self) -> http::Response<Body> {
        self.inner
    }
}

/// Assembles every part of a [`Response`], URL included, before the
/// response exists.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    status: StatusCode,
    status_text: Option<String>,
    headers: HeaderMap,
    url: String,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Override the status text. Defaults to the canonical reason phrase of
    /// the status, or empty for unknown codes.
    pub fn status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = Some(status_text.into());
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merge `headers` into the headers collected so far. Later values win.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn body(self, body: impl Into<Body>) -> Response {
        let mut inner = http::Response::new(body.into());
        *inner.status_mut() = self.status;
        *inner.headers_mut() = self.headers;
        Response {
            inner,
            status_text: self
                .status_text
                .unwrap_or_else(|| canonical_status_text(self.status)),
            url: self.url,
            body_used: false,
        }
    }
}

fn canonical_status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_owned()
}
