//! Pass-through reader that reports how many bytes each read produced.

use std::io;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

/// A source that can release its resources before it is dropped.
pub trait Close {
    fn close(&mut self) -> io::Result<()>;
}

type CloseFn<R> = fn(&mut R) -> io::Result<()>;

/// Wraps `inner` and calls `on_delta` with the byte count of every
/// completed read, zero-length and failed reads included. The bytes
/// themselves are handed to the caller untouched.
pub struct ProgressReader<R, F> {
    inner: R,
    on_delta: F,
    close: Option<CloseFn<R>>,
}

impl<R, F> ProgressReader<R, F>
    where F: FnMut(u64) {
    /// Wraps a source that has nothing to close; `close` is a no-op.
    pub fn new(inner: R, on_delta: F) -> ProgressReader<R, F> {
        ProgressReader {
            inner,
            on_delta,
            close: None,
        }
    }

    /// Wraps a closable source; `close` is forwarded to it.
    pub fn closable(inner: R, on_delta: F) -> ProgressReader<R, F>
        where R: Close {
        ProgressReader {
            inner,
            on_delta,
            close: Some(<R as Close>::close as CloseFn<R>),
        }
    }

    /// Whether `close` reaches the wrapped source.
    pub fn is_closable(&self) -> bool {
        self.close.is_some()
    }

    /// The wrapped source. Reading from it directly bypasses progress reporting.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps the source, dropping the callback without closing anything.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R, F> Close for ProgressReader<R, F> {
    fn close(&mut self) -> io::Result<()> {
        match self.close {
            Some(close) => close(&mut self.inner),
            None => Ok(()),
        }
    }
}

impl<R, F> AsyncRead for ProgressReader<R, F>
    where R: AsyncRead + Unpin,
          F: FnMut(u64) + Unpin {
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &mut ReadBuf<'_>) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        let before = buf.filled().len();
        let result = ready!(Pin::new(&mut this.inner).poll_read(cx, buf));
        let delta = (buf.filled().len() - before) as u64;
        (this.on_delta)(delta);
        Poll::Ready(result)
    }
}
