/// A URL short enough for an error message. URLs under 50 chars are kept;
/// longer ones keep their first 32 and last 15 chars around `...`.
pub fn shorten_url_for_display(url: &str) -> String {
    let len = url.chars().count();
    if len < 50 {
        return url.to_owned();
    }
    let start: String = url.chars().take(32).collect();
    let end: String = url.chars().skip(len - 15).collect();
    format!("{start}...{end}")
}
