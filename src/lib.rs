#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(unreachable_pub)]

//! Uniform responses for resource loaders.
//!
//! Loaders receive content in many shapes: text, byte buffers, blobs read
//! from files, or responses from an HTTP client. This crate turns all of
//! them into one [`Response`] type, and turns non-success responses into
//! descriptive errors.
//!
//! ```
//! use loader_response::{check_response_sync, make_response, runtime::block_on};
//!
//! block_on(async {
//!     let mut response = make_response("hello, world").await;
//!     check_response_sync(&response).unwrap();
//!     assert_eq!(response.headers()["content-length"], "12");
//!     assert_eq!(response.headers()["x-first-bytes"], "data:,hello");
//!     assert_eq!(response.text().await.unwrap(), "hello, world");
//! });
//! ```
//!
//! A failed response can be checked cheaply, without touching its body,
//! with [`check_response_sync`], or with [`check_response`], which also
//! reads the body to find out why the request failed.
//!
//! # Features
//!
//! * `json` (default): json bodies and json failure reasons, via
//!   `serde_json`.

pub mod data_url;
mod display;
pub mod http;
mod normalize;
pub mod resource;
pub mod runtime;
mod status;

pub use display::shorten_url_for_display;
pub use self::http::{Body, Response, ResponseBuilder};
pub use normalize::{FIRST_BYTES_HEADER, INITIAL_DATA_LENGTH, initial_data_url, make_response};
pub use resource::{Blob, Resource};
pub use status::{
    ASYNC_MESSAGE_LIMIT, Reason, ResponseError, SYNC_MESSAGE_LIMIT, StatusError, check_response,
    check_response_sync, response_error,
};

pub use loader_response_macro::attr_macro_test as test;
