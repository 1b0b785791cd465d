//! Base64 and `data:` URL helpers used for content previews.

use ::base64::Engine as _;
use ::base64::engine::general_purpose::STANDARD;

/// Encode bytes with the standard base64 alphabet, padded, without line
/// wrapping. Empty input gives an empty string.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// `data:,<text>`, with the text embedded as-is.
pub(crate) fn from_text(text: &str) -> String {
    format!("data:,{text}")
}

/// `data:base64,<payload>`, the form used for raw byte buffers.
pub(crate) fn from_bytes(bytes: &[u8]) -> String {
    format!("data:base64,{}", encode(bytes))
}

/// `data:<mime>;base64,<payload>`, as a file reader produces for a blob.
pub(crate) fn from_typed_bytes(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{mime_type};base64,{}", encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_reference_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(&[0, 0, 0]), "AAAA");
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg==");
        assert_eq!(encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
        assert_eq!(encode(&[0xff, 0xfe, 0xfd]), "//79");
    }

    #[test]
    fn encode_long_input_has_no_line_breaks() {
        let encoded = encode(&[0xab; 200]);
        assert!(!encoded.contains('\n'));
        assert_eq!(encoded.len(), 268);
    }

    #[test]
    fn typed_bytes_defaults_mime() {
        assert_eq!(
            from_typed_bytes("", b"abc"),
            "data:application/octet-stream;base64,YWJj"
        );
        assert_eq!(from_typed_bytes("image/png", b"abc"), "data:image/png;base64,YWJj");
    }
}
