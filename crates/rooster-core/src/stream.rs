// ── Store subscriptions ──
//
// What the presentation layer holds on to while a screen is open: the
// snapshot it last rendered plus a way to wait for the next one.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Handle returned by every store's `subscribe()`.
///
/// `current()` is the snapshot this handle last handed out. Rapid
/// successive commits may be observed as one; the latest always wins.
pub struct StateStream<S: Clone + Send + Sync + 'static> {
    rendered: Arc<S>,
    rx: watch::Receiver<Arc<S>>,
}

impl<S: Clone + Send + Sync + 'static> StateStream<S> {
    pub(crate) fn new(rx: watch::Receiver<Arc<S>>) -> Self {
        let rendered = Arc::clone(&rx.borrow());
        Self { rendered, rx }
    }

    pub fn current(&self) -> &Arc<S> {
        &self.rendered
    }

    /// The store's state right now, without marking it seen.
    pub fn latest(&self) -> Arc<S> {
        Arc::clone(&self.rx.borrow())
    }

    /// Wait for a commit newer than `current()` and adopt it.
    ///
    /// `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Arc<S>> {
        self.rx.changed().await.ok()?;
        self.rendered = Arc::clone(&self.rx.borrow_and_update());
        Some(Arc::clone(&self.rendered))
    }

    /// Turn the handle into a [`Stream`] of snapshots, starting with the
    /// state at the time of the call.
    pub fn into_stream(self) -> StateWatchStream<S> {
        StateWatchStream {
            inner: WatchStream::new(self.rx),
        }
    }
}

/// Snapshot stream produced by [`StateStream::into_stream`].
pub struct StateWatchStream<S: Clone + Send + Sync + 'static> {
    inner: WatchStream<Arc<S>>,
}

impl<S: Clone + Send + Sync + 'static> Stream for StateWatchStream<S> {
    type Item = Arc<S>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
