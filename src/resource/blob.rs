use bytes::Bytes;

use crate::data_url;

/// Immutable binary content with a MIME type, and optionally the name of
/// the file it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blob {
    data: Bytes,
    mime_type: String,
    name: Option<String>,
}

impl Blob {
    pub fn new(data: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Blob {
            data: data.into(),
            mime_type: mime_type.into(),
            name: None,
        }
    }

    /// Attach a file name. The name doubles as the blob's URL when it is
    /// turned into a response.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// The MIME type, empty if unknown.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// The bytes in `start..end`, clamped to the blob. The slice keeps the
    /// MIME type but not the name.
    pub fn slice(&self, start: usize, end: usize) -> Blob {
        let end = end.min(self.data.len());
        let start = start.min(end);
        Blob {
            data: self.data.slice(start..end),
            mime_type: self.mime_type.clone(),
            name: None,
        }
    }

    /// Read the whole blob into a `data:<mime>;base64,...` URL. Blobs with
    /// no MIME type are labelled `application/octet-stream`.
    pub async fn read_as_data_url(&self) -> String {
        data_url::from_typed_bytes(&self.mime_type, &self.data)
    }
}
