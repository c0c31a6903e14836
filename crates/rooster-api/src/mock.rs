// Mock backend for the data facade
//
// Serves fixture records after a simulated network delay. Stands in for
// the real backend until it exists, and lets tests force outages.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Error;
use crate::fixtures;
use crate::models::{Publication, Shift};
use crate::source::DataSource;

const LIST_PUBLICATIONS_DELAY: Duration = Duration::from_millis(800);
const LOOKUP_DELAY: Duration = Duration::from_millis(300);
const SEARCH_DELAY: Duration = Duration::from_millis(500);
const LIST_SHIFTS_DELAY: Duration = Duration::from_millis(500);

/// Fixture-backed [`DataSource`] with simulated latency.
///
/// Cheaply cloneable; clones share the offline switch.
#[derive(Debug, Clone)]
pub struct MockSource {
    publications: Arc<Vec<Publication>>,
    shifts: Arc<Vec<Shift>>,
    /// Replaces every per-operation delay when set. Zero disables sleeping.
    delay_override: Option<Duration>,
    offline: Arc<AtomicBool>,
}

impl MockSource {
    /// Fixture data with realistic per-operation delays.
    pub fn new() -> Self {
        Self::with_data(fixtures::publications(), fixtures::shifts())
    }

    /// Custom data with realistic per-operation delays.
    pub fn with_data(publications: Vec<Publication>, shifts: Vec<Shift>) -> Self {
        Self {
            publications: Arc::new(publications),
            shifts: Arc::new(shifts),
            delay_override: None,
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use a single delay for every operation.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_override = Some(delay);
        self
    }

    /// No simulated latency at all.
    pub fn instant(self) -> Self {
        self.with_delay(Duration::ZERO)
    }

    /// Switch the simulated backend on or off. While offline every
    /// operation fails with [`Error::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    async fn simulate(&self, op: &'static str, default_delay: Duration) -> Result<(), Error> {
        let delay = self.delay_override.unwrap_or(default_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.is_offline() {
            debug!(op, "mock backend offline");
            return Err(Error::Unavailable(format!("{op}: mock backend is offline")));
        }
        debug!(op, delay_ms = delay.as_millis(), "mock request served");
        Ok(())
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for MockSource {
    async fn get_publications(&self) -> Result<Vec<Publication>, Error> {
        self.simulate("get_publications", LIST_PUBLICATIONS_DELAY)
            .await?;
        Ok(self.publications.as_ref().clone())
    }

    async fn get_publication_by_id(&self, id: &str) -> Result<Option<Publication>, Error> {
        self.simulate("get_publication_by_id", LOOKUP_DELAY).await?;
        Ok(self.publications.iter().find(|p| p.id == id).cloned())
    }

    /// Title or description match only; tags are not searched here.
    async fn search_publications(&self, query: &str) -> Result<Vec<Publication>, Error> {
        self.simulate("search_publications", SEARCH_DELAY).await?;
        let needle = query.to_lowercase();
        Ok(self
            .publications
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn get_shifts(&self, date: Option<NaiveDate>) -> Result<Vec<Shift>, Error> {
        self.simulate("get_shifts", LIST_SHIFTS_DELAY).await?;
        Ok(self
            .shifts
            .iter()
            .filter(|s| date.is_none_or(|d| s.is_on(d)))
            .cloned()
            .collect())
    }

    async fn get_shift_by_id(&self, id: &str) -> Result<Option<Shift>, Error> {
        self.simulate("get_shift_by_id", LOOKUP_DELAY).await?;
        Ok(self.shifts.iter().find(|s| s.id == id).cloned())
    }
}
