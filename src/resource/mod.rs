//! Loadable resources and what can be learned about them without reading
//! them.

use bytes::Bytes;

use crate::http::{Body, Response, fields};

pub use blob::Blob;
pub use mime::{parse_mime_type, parse_mime_type_from_url};

mod blob;
pub(crate) mod mime;

/// Content to be turned into a [`Response`].
#[derive(Debug)]
pub enum Resource {
    /// Textual content. Always treated as the content itself, never as a
    /// location to load from.
    Text(String),
    /// A raw byte buffer.
    Bytes(Bytes),
    /// Binary content with a MIME type and optional file name.
    Blob(Blob),
    /// A response that is already uniform.
    Response(Response),
    /// A body of unknown shape, such as a stream.
    Other(Body),
}

impl Resource {
    /// The content of this resource as a body.
    pub fn into_body(self) -> Body {
        match self {
            Resource::Text(text) => Body::from(text.into_bytes()),
            Resource::Bytes(bytes) => Body::from(bytes),
            Resource::Blob(blob) => Body::from(blob.into_bytes()),
            Resource::Response(response) => response.into_http().into_body(),
            Resource::Other(body) => body,
        }
    }
}

/// Length of the resource in bytes, or `None` when it cannot be known
/// without reading it.
pub fn content_length(resource: &Resource) -> Option<u64> {
    match resource {
        Resource::Text(text) => Some(text.len() as u64),
        Resource::Bytes(bytes) => Some(bytes.len() as u64),
        Resource::Blob(blob) => Some(blob.size()),
        Resource::Response(response) => response.content_length(),
        Resource::Other(body) => body.content_length(),
    }
}

/// Best-effort MIME type of the resource, without parameters.
pub fn mime_type(resource: &Resource) -> Option<String> {
    match resource {
        Resource::Text(text) => parse_mime_type_from_url(text).map(str::to_owned),
        Resource::Blob(blob) => parse_mime_type(blob.mime_type()).map(str::to_owned),
        Resource::Response(response) => fields::content_type(response.headers())
            .and_then(parse_mime_type)
            .or_else(|| parse_mime_type_from_url(response.url()))
            .map(str::to_owned),
        Resource::Bytes(_) | Resource::Other(_) => None,
    }
}

/// Best-effort URL of the resource; empty when it has none.
pub fn resource_url(resource: &Resource) -> String {
    match resource {
        Resource::Blob(blob) => blob.name().unwrap_or_default().to_owned(),
        Resource::Response(response) => response.url().to_owned(),
        Resource::Text(_) | Resource::Bytes(_) | Resource::Other(_) => String::new(),
    }
}

impl From<String> for Resource {
    fn from(text: String) -> Resource {
        Resource::Text(text)
    }
}
impl From<&str> for Resource {
    fn from(text: &str) -> Resource {
        Resource::Text(text.to_owned())
    }
}
impl From<Bytes> for Resource {
    fn from(bytes: Bytes) -> Resource {
        Resource::Bytes(bytes)
    }
}
impl From<Vec<u8>> for Resource {
    fn from(bytes: Vec<u8>) -> Resource {
        Resource::Bytes(Bytes::from(bytes))
    }
}
impl From<&[u8]> for Resource {
    fn from(bytes: &[u8]) -> Resource {
        Resource::Bytes(Bytes::copy_from_slice(bytes))
    }
}
impl From<Blob> for Resource {
    fn from(blob: Blob) -> Resource {
        Resource::Blob(blob)
    }
}
impl From<Response> for Resource {
    fn from(response: Response) -> Resource {
        Resource::Response(response)
    }
}
impl From<Body> for Resource {
    fn from(body: Body) -> Resource {
        Resource::Other(body)
    }
}
