pub use http::header::{HeaderMap, HeaderName, HeaderValue};

use super::{Error, error::Context};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::fmt;

/// Build a `HeaderMap` from name/value string pairs. Names are lowercased
/// by `HeaderName`; repeated names are appended.
pub fn header_map_from_pairs<'a, I>(pairs: I) -> Result<HeaderMap, Error>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut output = HeaderMap::new();
    for (key, value) in pairs {
        let key =
            HeaderName::from_bytes(key.as_bytes()).with_context(|| format!("header name {key}"))?;
        let value =
            HeaderValue::from_str(value).with_context(|| format!("header value for {key}"))?;
        output.append(key, value);
    }
    Ok(output)
}

/// The `Content-Length` header, if present.
pub(crate) fn content_length(headers: &HeaderMap) -> Result<Option<u64>, InvalidContentLength> {
    match headers.get(CONTENT_LENGTH) {
        Some(val) => std::str::from_utf8(val.as_ref())
            .map_err(|_| InvalidContentLength)?
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| InvalidContentLength),
        None => Ok(None),
    }
}

/// The `Content-Type` header, if present and readable as a string.
pub(crate) fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE)?.to_str().ok()
}

#[derive(Debug)]
pub struct InvalidContentLength;
impl fmt::Display for InvalidContentLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid Content-Length header")
    }
}
impl std::error::Error for InvalidContentLength {}
