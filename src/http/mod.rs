//! HTTP types backing the uniform response
//!
pub use http::status::StatusCode;

#[doc(inline)]
pub use body::Body;
pub use http_body_util::BodyExt;
pub use error::{BodyUsed, Error, Result};
pub use fields::{HeaderMap, HeaderName, HeaderValue, header_map_from_pairs};
pub use response::{Response, ResponseBuilder};

pub mod body;

pub mod error;
pub(crate) mod fields;
pub mod response;
