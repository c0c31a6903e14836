// ── Data facade contract ──
//
// The boundary every store calls into for raw records. Implementations
// decide whether data is mocked or network-backed; callers cannot tell.

use std::future::Future;

use chrono::NaiveDate;

use crate::error::Error;
use crate::models::{Publication, Shift};

/// Asynchronous source of publications and shifts.
///
/// Lookups by id return `Ok(None)` when the record does not exist; an
/// `Err` always means the source itself failed.
pub trait DataSource: Send + Sync + 'static {
    /// Fetch the full publication list.
    fn get_publications(&self) -> impl Future<Output = Result<Vec<Publication>, Error>> + Send;

    /// Look up a single publication.
    fn get_publication_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Publication>, Error>> + Send;

    /// Backend-side publication search.
    fn search_publications(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Publication>, Error>> + Send;

    /// Fetch shifts, optionally restricted to a single day.
    fn get_shifts(
        &self,
        date: Option<NaiveDate>,
    ) -> impl Future<Output = Result<Vec<Shift>, Error>> + Send;

    /// Look up a single shift.
    fn get_shift_by_id(&self, id: &str)
    -> impl Future<Output = Result<Option<Shift>, Error>> + Send;
}
