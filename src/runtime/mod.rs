//! Async runtime for tests and synchronous callers.

mod block_on;

pub use block_on::block_on;
