// ── Observable state cell ──
//
// One immutable state record per store, replaced whole on every
// mutation and broadcast through a `watch` channel.

use std::sync::Arc;

use tokio::sync::watch;

/// A single-record reactive cell.
///
/// Readers get `Arc` snapshots and can never observe a half-applied
/// update: every mutation runs under the channel's write lock and
/// publishes the finished record at once. Every mutation also bumps a
/// version counter.
pub(crate) struct StateCell<S: Clone + Send + Sync + 'static> {
    state: watch::Sender<Arc<S>>,

    /// Version counter, bumped on every mutation.
    version: watch::Sender<u64>,
}

impl<S: Clone + Send + Sync + 'static> StateCell<S> {
    pub(crate) fn new(initial: S) -> Self {
        let (state, _) = watch::channel(Arc::new(initial));
        let (version, _) = watch::channel(0u64);
        Self { state, version }
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<S> {
        self.state.borrow().clone()
    }

    /// Apply `f` to the record and publish the result.
    ///
    /// Snapshots already handed out keep their old value.
    pub(crate) fn update(&self, f: impl FnOnce(&mut S)) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.state.send_modify(|current| f(Arc::make_mut(current)));
        self.bump_version();
    }

    /// Apply `f` only if `guard` holds at commit time. Returns whether
    /// the update was applied.
    pub(crate) fn update_if(&self, guard: impl FnOnce() -> bool, f: impl FnOnce(&mut S)) -> bool {
        let applied = self.state.send_if_modified(|current| {
            if !guard() {
                return false;
            }
            f(Arc::make_mut(current));
            true
        });
        if applied {
            self.bump_version();
        }
        applied
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<S>> {
        self.state.subscribe()
    }

    pub(crate) fn version(&self) -> u64 {
        *self.version.borrow()
    }

    fn bump_version(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}
