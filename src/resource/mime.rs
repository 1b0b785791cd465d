//! MIME type parsing.

/// The MIME type without parameters: `text/plain; charset=utf-8` gives
/// `text/plain`. `None` for an empty type.
pub fn parse_mime_type(mime_type: &str) -> Option<&str> {
    let essence = mime_type.split(';').next().unwrap_or_default().trim();
    (!essence.is_empty()).then_some(essence)
}

/// The MIME type declared by a `data:` URL, e.g. `image/png` for
/// `data:image/png;base64,...`. `None` for other URLs and for data URLs
/// that declare no type.
pub fn parse_mime_type_from_url(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("data:")?;
    let end = rest.find([';', ','])?;
    let mime_type = &rest[..end];
    let (kind, subtype) = mime_type.split_once('/')?;
    let valid = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+'))
    };
    (valid(kind) && valid(subtype)).then_some(mime_type)
}

/// `application/json` or any `+json` structured syntax, ignoring
/// parameters and case.
pub(crate) fn is_json(mime_type: &str) -> bool {
    let Some(essence) = parse_mime_type(mime_type) else {
        return false;
    };
    let essence = essence.to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
