// Fetch lifecycle tests for the stores: loading transitions, failure
// handling, and overlapping fetches resolved out of order.
#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;
use tokio_test::{assert_pending, assert_ready, task};

use rooster_api::{DataSource, Error, MockSource, Publication, Shift, fixtures};
use rooster_core::{
    FETCH_PUBLICATIONS_FAILED, FETCH_SHIFTS_FAILED, PublicationsStore, ScheduleStore, ViewState,
};

// ── Scripted source ─────────────────────────────────────────────────

type Reply<T> = oneshot::Sender<Result<T, Error>>;

/// A data facade whose list calls block until the test answers them.
#[derive(Default)]
struct Scripted {
    publications: Mutex<VecDeque<oneshot::Receiver<Result<Vec<Publication>, Error>>>>,
    shifts: Mutex<VecDeque<oneshot::Receiver<Result<Vec<Shift>, Error>>>>,
}

impl Scripted {
    fn expect_publications(&self) -> Reply<Vec<Publication>> {
        let (tx, rx) = oneshot::channel();
        self.publications.lock().unwrap().push_back(rx);
        tx
    }

    fn expect_shifts(&self) -> Reply<Vec<Shift>> {
        let (tx, rx) = oneshot::channel();
        self.shifts.lock().unwrap().push_back(rx);
        tx
    }
}

fn dropped() -> Error {
    Error::Unavailable("reply dropped".into())
}

impl DataSource for Scripted {
    async fn get_publications(&self) -> Result<Vec<Publication>, Error> {
        let rx = self.publications.lock().unwrap().pop_front();
        rx.ok_or_else(dropped)?.await.unwrap_or_else(|_| Err(dropped()))
    }

    async fn get_publication_by_id(&self, _id: &str) -> Result<Option<Publication>, Error> {
        Ok(None)
    }

    async fn search_publications(&self, _query: &str) -> Result<Vec<Publication>, Error> {
        Ok(Vec::new())
    }

    async fn get_shifts(&self, _date: Option<NaiveDate>) -> Result<Vec<Shift>, Error> {
        let rx = self.shifts.lock().unwrap().pop_front();
        rx.ok_or_else(dropped)?.await.unwrap_or_else(|_| Err(dropped()))
    }

    async fn get_shift_by_id(&self, _id: &str) -> Result<Option<Shift>, Error> {
        Ok(None)
    }
}

fn schedule(source: Arc<Scripted>) -> ScheduleStore<Scripted> {
    ScheduleStore::new(source, fixtures::rooms(), fixtures::fixture_day()).unwrap()
}

fn shift_ids(shifts: &[Shift]) -> Vec<&str> {
    shifts.iter().map(|s| s.id.as_str()).collect()
}

// ── Loading transitions ─────────────────────────────────────────────

#[test]
fn loading_is_set_while_the_fetch_is_in_flight() {
    let source = Arc::new(Scripted::default());
    let reply = source.expect_publications();
    let store = PublicationsStore::new(Arc::clone(&source));

    let mut fetch = task::spawn(store.fetch_publications());
    assert_pending!(fetch.poll());
    assert!(store.snapshot().is_loading);
    assert!(store.snapshot().view().is_loading());

    reply.send(Ok(fixtures::publications())).unwrap();
    assert!(fetch.is_woken());
    assert_ready!(fetch.poll());

    let state = store.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.error, None);
    assert_eq!(state.publications.len(), 3);
}

#[test]
fn retry_clears_the_previous_error() {
    let source = Arc::new(Scripted::default());
    let store = PublicationsStore::new(Arc::clone(&source));

    let failing = source.expect_publications();
    let mut fetch = task::spawn(store.fetch_publications());
    assert_pending!(fetch.poll());
    failing.send(Err(Error::Unavailable("down".into()))).unwrap();
    assert_ready!(fetch.poll());
    assert!(store.snapshot().view().offers_retry());

    let reply = source.expect_publications();
    let mut retry = task::spawn(store.fetch_publications());
    assert_pending!(retry.poll());
    assert_eq!(store.snapshot().error, None);

    reply.send(Ok(Vec::new())).unwrap();
    assert_ready!(retry.poll());
    assert_eq!(store.snapshot().view(), ViewState::Empty);
}

// ── Failure keeps data ──────────────────────────────────────────────

#[tokio::test]
async fn failed_refetch_keeps_previous_publications() {
    let source = Arc::new(MockSource::new().instant());
    let store = PublicationsStore::new(Arc::clone(&source));
    store.fetch_publications().await;

    source.set_offline(true);
    store.fetch_publications().await;

    let state = store.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some(FETCH_PUBLICATIONS_FAILED));
    assert_eq!(state.publications, fixtures::publications());
}

#[tokio::test]
async fn failed_refetch_keeps_previous_shifts() {
    let source = Arc::new(MockSource::new().instant());
    let store = ScheduleStore::new(
        Arc::clone(&source),
        fixtures::rooms(),
        fixtures::fixture_day(),
    )
    .unwrap();
    store.fetch_shifts().await;

    source.set_offline(true);
    store.fetch_shifts().await;

    let state = store.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some(FETCH_SHIFTS_FAILED));
    assert_eq!(state.shifts.len(), 5);
    assert!(state.selected_day().unwrap().has_event);
}

#[tokio::test(start_paused = true)]
async fn mock_latency_is_observable_as_loading() {
    let source = Arc::new(MockSource::new());
    let store = ScheduleStore::new(source, fixtures::rooms(), fixtures::fixture_day()).unwrap();

    let mut fetch = task::spawn(store.fetch_shifts());
    assert_pending!(fetch.poll());
    assert!(store.snapshot().is_loading);

    tokio::time::advance(Duration::from_millis(499)).await;
    assert_pending!(fetch.poll());

    tokio::time::advance(Duration::from_millis(1)).await;
    assert_ready!(fetch.poll());
    assert!(!store.snapshot().is_loading);
    assert_eq!(store.snapshot().shifts.len(), 5);
}

// ── Overlapping fetches ─────────────────────────────────────────────

#[test]
fn last_requested_shift_fetch_wins_when_it_resolves_first() {
    let source = Arc::new(Scripted::default());
    let first_reply = source.expect_shifts();
    let second_reply = source.expect_shifts();
    let store = schedule(Arc::clone(&source));

    let mut first = task::spawn(store.fetch_shifts());
    let mut second = task::spawn(store.fetch_shifts());
    assert_pending!(first.poll());
    assert_pending!(second.poll());

    let all = fixtures::shifts();
    second_reply.send(Ok(all[..2].to_vec())).unwrap();
    assert_ready!(second.poll());
    assert_eq!(shift_ids(&store.snapshot().shifts), vec!["1", "2"]);
    assert!(!store.snapshot().is_loading);

    // The stale reply lands afterwards and must not overwrite.
    first_reply.send(Ok(all)).unwrap();
    assert_ready!(first.poll());
    assert_eq!(shift_ids(&store.snapshot().shifts), vec!["1", "2"]);
}

#[test]
fn stale_fetch_cannot_clear_loading_or_set_error() {
    let source = Arc::new(Scripted::default());
    let first_reply = source.expect_shifts();
    let second_reply = source.expect_shifts();
    let store = schedule(Arc::clone(&source));

    let mut first = task::spawn(store.fetch_shifts());
    let mut second = task::spawn(store.fetch_shifts());
    assert_pending!(first.poll());
    assert_pending!(second.poll());

    first_reply
        .send(Err(Error::Unavailable("late failure".into())))
        .unwrap();
    assert_ready!(first.poll());
    let state = store.snapshot();
    assert!(state.is_loading);
    assert_eq!(state.error, None);

    second_reply.send(Ok(fixtures::shifts())).unwrap();
    assert_ready!(second.poll());
    let state = store.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.shifts.len(), 5);
}

#[test]
fn last_requested_publication_fetch_wins_when_it_resolves_last() {
    let source = Arc::new(Scripted::default());
    let first_reply = source.expect_publications();
    let second_reply = source.expect_publications();
    let store = PublicationsStore::new(Arc::clone(&source));

    let mut first = task::spawn(store.fetch_publications());
    let mut second = task::spawn(store.fetch_publications());
    assert_pending!(first.poll());
    assert_pending!(second.poll());

    first_reply.send(Ok(fixtures::publications())).unwrap();
    assert_ready!(first.poll());
    assert!(store.snapshot().publications.is_empty());

    let latest = fixtures::publications()[2..].to_vec();
    second_reply.send(Ok(latest.clone())).unwrap();
    assert_ready!(second.poll());
    assert_eq!(store.snapshot().publications, latest);
}

// ── Subscriptions ───────────────────────────────────────────────────

#[tokio::test]
async fn subscribers_see_every_committed_change() {
    let store = PublicationsStore::new(Arc::new(MockSource::new().instant()));
    let mut stream = store.subscribe();
    assert!(stream.current().publications.is_empty());

    store.set_search_query("mrna");
    let seen = stream.changed().await.unwrap();
    assert_eq!(seen.search_query, "mrna");

    store.fetch_publications().await;
    let latest = stream.latest();
    assert!(!latest.is_loading);
    assert_eq!(latest.filtered().len(), 1);
}

#[tokio::test]
async fn snapshot_stream_goes_from_empty_through_loading_to_ready() {
    let source = Arc::new(Scripted::default());
    let reply = source.expect_publications();
    let store = PublicationsStore::new(Arc::clone(&source));
    let mut states = store.subscribe().into_stream();

    let initial = states.next().await.unwrap();
    assert_eq!(initial.view(), ViewState::Empty);

    let mut fetch = task::spawn(store.fetch_publications());
    assert_pending!(fetch.poll());
    let loading = states.next().await.unwrap();
    assert_eq!(loading.view(), ViewState::Loading);

    reply.send(Ok(fixtures::publications())).unwrap();
    assert_ready!(fetch.poll());
    let ready = states.next().await.unwrap();
    assert_eq!(ready.view(), ViewState::Ready(fixtures::publications()));
    assert_eq!(store.version(), 2);

    drop(fetch);
    drop(store);
    assert!(states.next().await.is_none());
}
