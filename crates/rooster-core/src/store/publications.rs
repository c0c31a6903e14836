// ── Publications store ──
//
// Publication list, search query, and fetch status, plus the derived
// filtered view consumed by the home and publication screens.

use std::sync::Arc;

use tracing::{debug, warn};

use rooster_api::{DataSource, Publication};

use super::cell::StateCell;
use super::fence::RequestFence;
use crate::error::CoreError;
use crate::stream::StateStream;
use crate::view::ViewState;

/// Error shown when the publication fetch fails, whatever the cause.
pub const FETCH_PUBLICATIONS_FAILED: &str = "Failed to fetch publications";

/// Snapshot of the publications store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationsState {
    pub publications: Vec<Publication>,
    pub search_query: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl PublicationsState {
    /// Publications matching the current query. Recomputed on every call.
    pub fn filtered(&self) -> Vec<Publication> {
        filter_publications(&self.publications, &self.search_query)
    }

    pub fn view(&self) -> ViewState<Vec<Publication>> {
        ViewState::from_parts(self.is_loading, self.error.as_deref(), || self.filtered())
    }
}

/// Case-insensitive substring match over title, description, and tag
/// labels. A blank (empty or whitespace-only) query keeps everything in
/// its original order.
pub fn filter_publications(publications: &[Publication], query: &str) -> Vec<Publication> {
    if query.trim().is_empty() {
        return publications.to_vec();
    }
    let needle = query.to_lowercase();
    publications
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.label.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// State container for publications.
///
/// Cheaply cloneable; clones share state.
pub struct PublicationsStore<S: DataSource> {
    inner: Arc<Inner<S>>,
}

struct Inner<S: DataSource> {
    source: Arc<S>,
    state: StateCell<PublicationsState>,
    fence: RequestFence,
}

impl<S: DataSource> Clone for PublicationsStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DataSource> PublicationsStore<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                state: StateCell::new(PublicationsState::default()),
                fence: RequestFence::new(),
            }),
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Arc<PublicationsState> {
        self.inner.state.snapshot()
    }

    pub fn subscribe(&self) -> StateStream<PublicationsState> {
        StateStream::new(self.inner.state.subscribe())
    }

    /// Derived view over the current snapshot; never cached.
    pub fn filtered_publications(&self) -> Vec<Publication> {
        self.snapshot().filtered()
    }

    pub fn version(&self) -> u64 {
        self.inner.state.version()
    }

    // ── Operations ───────────────────────────────────────────────────

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.inner.state.update(|s| s.search_query = query);
    }

    /// Fetch the full list and replace the stored one.
    ///
    /// Failures never escape: they become [`FETCH_PUBLICATIONS_FAILED`]
    /// in the state, with the previous list kept. A fetch superseded by a
    /// later call is discarded when it resolves.
    pub async fn fetch_publications(&self) {
        let ticket = self.inner.fence.issue();
        self.inner.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let result = self.inner.source.get_publications().await;
        let fence = &self.inner.fence;

        let committed = match result {
            Ok(publications) => {
                let count = publications.len();
                let committed = self.inner.state.update_if(
                    || fence.is_current(ticket),
                    |s| {
                        s.publications = publications;
                        s.is_loading = false;
                    },
                );
                if committed {
                    debug!(count, request = ticket.id(), "publications committed");
                }
                committed
            }
            Err(e) => {
                warn!(error = %e, request = ticket.id(), "publication fetch failed");
                self.inner.state.update_if(
                    || fence.is_current(ticket),
                    |s| {
                        s.error = Some(FETCH_PUBLICATIONS_FAILED.to_owned());
                        s.is_loading = false;
                    },
                )
            }
        };

        if !committed {
            debug!(request = ticket.id(), "discarding superseded publication fetch");
        }
    }

    /// Look up a single publication through the data facade.
    pub async fn publication(&self, id: &str) -> Result<Publication, CoreError> {
        self.inner
            .source
            .get_publication_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Publication", id))
    }

    /// Backend-side search; does not touch store state.
    pub async fn search_remote(&self, query: &str) -> Result<Vec<Publication>, CoreError> {
        Ok(self.inner.source.search_publications(query).await?)
    }
}
