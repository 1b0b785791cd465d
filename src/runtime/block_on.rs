use std::future::Future;

/// Drive a future to completion on the current thread. Blocks until the
/// future resolves.
///
/// Every suspend point in this crate is a read of in-memory or
/// caller-supplied content, so a single-threaded executor is all it needs.
/// A future that never resolves (for example a body stream that never
/// ends) blocks forever; put a timeout around the awaited operation if that
/// matters to the caller.
pub fn block_on<F>(fut: F) -> F::Output
where
    F: Future,
{
    futures_lite::future::block_on(fut)
}
