use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

use crate::error::AssetError;
use crate::source::AssetFuture;

/// Poll an asset future once, expecting it to be immediately ready.
///
/// This is a convenience for synchronous contexts (tools, tests) where
/// the underlying source completes on the first poll, as
/// [`MemoryAssets`](crate::MemoryAssets) and
/// [`DirAssets`](crate::DirAssets) do.
///
/// # Panics
///
/// Panics if the future returns `Poll::Pending`. That indicates a source
/// which needs a real async executor; drive it with one instead.
pub fn poll_now<T>(mut fut: AssetFuture<T>) -> Result<T, AssetError> {
    let mut cx = Context::from_waker(Waker::noop());
    match Pin::new(&mut fut).poll(&mut cx) {
        Poll::Ready(val) => val,
        Poll::Pending => panic!("asset future returned Pending, drive it with an executor"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_future_completes() {
        let fut: AssetFuture<u32> = Box::pin(async { Ok(7) });
        assert_eq!(poll_now(fut).unwrap(), 7);
    }

    #[test]
    #[should_panic(expected = "returned Pending")]
    fn pending_future_panics() {
        struct Never;
        impl Future for Never {
            type Output = Result<(), AssetError>;
            fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
                Poll::Pending
            }
        }

        let fut: AssetFuture<()> = Box::pin(Never);
        let _ = poll_now(fut);
    }
}
