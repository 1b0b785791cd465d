//! The http portion of loader-response uses `anyhow::Error` as its `Error`
//! type.
//!
//! There are various concrete error types

pub use crate::http::fields::InvalidContentLength;
pub use anyhow::Context;
pub use http::header::{InvalidHeaderName, InvalidHeaderValue};
use std::fmt;

pub type Error = anyhow::Error;
/// The `http` result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Returned when the body of a [`Response`](super::Response) is read a
/// second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyUsed;
impl fmt::Display for BodyUsed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Response body has already been read")
    }
}
impl std::error::Error for BodyUsed {}
