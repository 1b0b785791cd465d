//! Turning non-success responses into errors.

use tracing::debug;

use crate::display::shorten_url_for_display;
use crate::http::{Error, Response};

pub use error::{Reason, ResponseError, StatusError};

mod error;

/// Longest message [`check_response_sync`] produces before truncating.
pub const SYNC_MESSAGE_LIMIT: usize = 60;
/// Longest message [`response_error`] produces before truncating.
pub const ASYNC_MESSAGE_LIMIT: usize = 100;

/// Fail with `"<status> <status text>"` unless the response is ok. An empty
/// status text leaves just the status. The body is not touched.
pub fn check_response_sync(response: &Response) -> Result<(), StatusError> {
    if response.ok() {
        return Ok(());
    }
    let message = format!("{} {}", response.status().as_u16(), response.status_text());
    let message = message.trim_end().to_owned();
    Err(StatusError::new(truncate(message, SYNC_MESSAGE_LIMIT)))
}

/// Hand the response back if it is ok, otherwise fail with a
/// [`ResponseError`] built by [`response_error`].
pub async fn check_response(response: Response) -> Result<Response, ResponseError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(response_error(response).await)
    }
}

/// Describe a failed response.
///
/// The reason is read from the body: parsed as json when the content type
/// says json, as text otherwise. If the body cannot be read (it was already
/// consumed, the stream errored, the json is malformed) the reason is the
/// status text instead, and [`ResponseError::enriched`] is false.
pub async fn response_error(mut response: Response) -> ResponseError {
    let url = response.url().to_owned();
    let message = format!(
        "Failed to fetch resource ({}) {}: {}",
        response.status().as_u16(),
        response.status_text(),
        shorten_url_for_display(&url),
    );
    let message = truncate(message, ASYNC_MESSAGE_LIMIT);

    let reason = match read_reason(&mut response).await {
        Ok(reason) => reason,
        Err(err) => {
            debug!(url = %url, error = %err, "falling back to status text as failure reason");
            Reason::StatusText(response.status_text().to_owned())
        }
    };
    ResponseError::new(message, reason, url, response)
}

#[cfg(feature = "json")]
async fn read_reason(response: &mut Response) -> Result<Reason, Error> {
    let is_json = crate::http::fields::content_type(response.headers())
        .is_some_and(crate::resource::mime::is_json);
    if is_json {
        Ok(Reason::Json(response.json().await?))
    } else {
        Ok(Reason::Text(response.text().await?))
    }
}

#[cfg(not(feature = "json"))]
async fn read_reason(response: &mut Response) -> Result<Reason, Error> {
    Ok(Reason::Text(response.text().await?))
}

/// Cut `message` to `limit` chars, marking the cut with `...`.
fn truncate(message: String, limit: usize) -> String {
    match message.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &message[..end]),
        None => message,
    }
}
