use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use tracing::{debug, trace};

use crate::data_url;
use crate::http::{HeaderMap, HeaderName, HeaderValue, Response};
use crate::resource::{self, Resource};

/// Header carrying a `data:` URL of the first few units of the content.
pub const FIRST_BYTES_HEADER: &str = "x-first-bytes";

/// Number of characters (text) or bytes (binary) kept in the preview.
pub const INITIAL_DATA_LENGTH: usize = 5;

/// Turn any resource into a uniform [`Response`].
///
/// A resource that already is a `Response` is returned untouched. Anything
/// else gets a 200 response whose body is the resource's content, with
/// `content-length`, `content-type` and [`FIRST_BYTES_HEADER`] headers set
/// where they can be determined, and whose URL is the resource's own URL.
/// Nothing here fails: headers that cannot be determined are left out.
pub async fn make_response(resource: impl Into<Resource>) -> Response {
    let resource = match resource.into() {
        Resource::Response(response) => return response,
        resource => resource,
    };

    let mut headers = HeaderMap::new();
    if let Some(len) = resource::content_length(&resource) {
        headers.insert(CONTENT_LENGTH, HeaderValue::from(len));
    }
    if let Some(mime_type) = resource::mime_type(&resource) {
        match HeaderValue::try_from(mime_type) {
            Ok(value) => {
                headers.insert(CONTENT_TYPE, value);
            }
            Err(err) => debug!(error = %err, "content type is not a valid header value"),
        }
    }
    if let Some(preview) = initial_data_url(&resource).await {
        match HeaderValue::try_from(preview) {
            Ok(value) => {
                headers.insert(HeaderName::from_static(FIRST_BYTES_HEADER), value);
            }
            Err(err) => debug!(error = %err, "skipping preview header"),
        }
    }

    let url = resource::resource_url(&resource);
    trace!(url = %url, headers = headers.len(), "normalized resource into response");
    Response::builder()
        .headers(headers)
        .url(url)
        .body(resource.into_body())
}

/// A `data:` URL of the first [`INITIAL_DATA_LENGTH`] characters or bytes
/// of the resource, for diagnostics only.
///
/// * text: `data:,<chars>`, unencoded
/// * blob: `data:<mime>;base64,<bytes>`
/// * byte buffer: `data:base64,<bytes>`
///
/// Responses and bodies of unknown shape have no preview.
pub async fn initial_data_url(resource: &Resource) -> Option<String> {
    match resource {
        Resource::Text(text) => {
            let head = match text.char_indices().nth(INITIAL_DATA_LENGTH) {
                Some((end, _)) => &text[..end],
                None => text,
            };
            Some(data_url::from_text(head))
        }
        Resource::Blob(blob) => Some(blob.slice(0, INITIAL_DATA_LENGTH).read_as_data_url().await),
        Resource::Bytes(bytes) => {
            let end = bytes.len().min(INITIAL_DATA_LENGTH);
            Some(data_url::from_bytes(&bytes[..end]))
        }
        Resource::Response(_) | Resource::Other(_) => None,
    }
}
