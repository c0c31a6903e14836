// ── Schedule store ──
//
// Shifts, rooms, the selected day with its derived week strip and month
// label, and the shift-detail viewer.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use rooster_api::{DataSource, Room, Shift};

use super::cell::StateCell;
use super::fence::RequestFence;
use crate::calendar::{self, DayItem, MonthDirection};
use crate::error::CoreError;
use crate::stream::StateStream;
use crate::view::ViewState;

/// Error shown when the shift fetch fails, whatever the cause.
pub const FETCH_SHIFTS_FAILED: &str = "Failed to fetch shifts";

/// Shift-detail viewer. Only `open_shift_detail` enters `Open`; only
/// `close_shift_detail` leaves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ShiftDetail {
    #[default]
    Closed,
    Open(Shift),
}

/// Snapshot of the schedule store.
///
/// `week_days` and `current_month` are always derived from
/// `selected_date`; they are never set on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleState {
    pub shifts: Vec<Shift>,
    pub rooms: Vec<Room>,
    pub selected_room: Room,
    pub selected_date: NaiveDate,
    pub week_days: Vec<DayItem>,
    pub current_month: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub shift_detail: ShiftDetail,
}

impl ScheduleState {
    fn new(rooms: Vec<Room>, selected_room: Room, pivot: NaiveDate) -> Self {
        let mut state = Self {
            shifts: Vec::new(),
            rooms,
            selected_room,
            selected_date: pivot,
            week_days: Vec::new(),
            current_month: String::new(),
            is_loading: false,
            error: None,
            shift_detail: ShiftDetail::Closed,
        };
        state.repivot(pivot);
        state
    }

    /// The single mutator for the selected date and everything derived
    /// from it.
    fn repivot(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.rebuild_week();
        self.current_month = calendar::month_label(date);
    }

    fn rebuild_week(&mut self) {
        let shifts = &self.shifts;
        self.week_days = calendar::generate_week_days(self.selected_date, |day| {
            shifts.iter().any(|s| s.is_on(day))
        });
    }

    pub fn has_event_on(&self, date: NaiveDate) -> bool {
        self.shifts.iter().any(|s| s.is_on(date))
    }

    /// Shifts on `date`, in list order.
    pub fn shifts_on(&self, date: NaiveDate) -> Vec<Shift> {
        self.shifts.iter().filter(|s| s.is_on(date)).cloned().collect()
    }

    pub fn shifts_for_selected_date(&self) -> Vec<Shift> {
        self.shifts_on(self.selected_date)
    }

    /// The strip entry for the selected date.
    pub fn selected_day(&self) -> Option<&DayItem> {
        self.week_days.iter().find(|d| d.is_selected)
    }

    pub fn selected_shift(&self) -> Option<&Shift> {
        match &self.shift_detail {
            ShiftDetail::Open(shift) => Some(shift),
            ShiftDetail::Closed => None,
        }
    }

    pub fn is_shift_detail_visible(&self) -> bool {
        matches!(self.shift_detail, ShiftDetail::Open(_))
    }

    pub fn view(&self) -> ViewState<Vec<Shift>> {
        ViewState::from_parts(self.is_loading, self.error.as_deref(), || self.shifts.clone())
    }
}

/// State container for the roster screen.
///
/// Cheaply cloneable; clones share state.
pub struct ScheduleStore<S: DataSource> {
    inner: Arc<Inner<S>>,
}

struct Inner<S: DataSource> {
    source: Arc<S>,
    state: StateCell<ScheduleState>,
    fence: RequestFence,
}

impl<S: DataSource> Clone for ScheduleStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DataSource> ScheduleStore<S> {
    /// Create a store pivoted on `pivot` with the first room selected.
    pub fn new(source: Arc<S>, rooms: Vec<Room>, pivot: NaiveDate) -> Result<Self, CoreError> {
        let selected_room = rooms.first().cloned().ok_or_else(|| CoreError::Validation {
            message: "schedule needs at least one room".into(),
        })?;

        Ok(Self {
            inner: Arc::new(Inner {
                source,
                state: StateCell::new(ScheduleState::new(rooms, selected_room, pivot)),
                fence: RequestFence::new(),
            }),
        })
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Arc<ScheduleState> {
        self.inner.state.snapshot()
    }

    pub fn subscribe(&self) -> StateStream<ScheduleState> {
        StateStream::new(self.inner.state.subscribe())
    }

    pub fn version(&self) -> u64 {
        self.inner.state.version()
    }

    // ── Selection ────────────────────────────────────────────────────

    pub fn set_selected_room(&self, room: Room) {
        debug!(room = %room.id, "room selected");
        self.inner.state.update(|s| s.selected_room = room);
    }

    /// Select a room from the store's own list by id.
    pub fn select_room_by_id(&self, id: &str) -> Result<(), CoreError> {
        let room = self
            .snapshot()
            .rooms
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Room", id))?;
        self.set_selected_room(room);
        Ok(())
    }

    /// Replace the selected date and re-derive the week strip and month
    /// label from it.
    pub fn set_selected_date(&self, date: NaiveDate) {
        self.inner.state.update(|s| s.repivot(date));
    }

    /// Move the selected date one calendar month back or forward.
    ///
    /// At the ends of the representable calendar the move is dropped and
    /// subscribers are not notified.
    pub fn navigate_month(&self, direction: MonthDirection) {
        let from = self.snapshot().selected_date;
        match calendar::shift_month(from, direction) {
            Some(date) => self.inner.state.update(|s| s.repivot(date)),
            None => warn!(%from, %direction, "month navigation out of calendar range"),
        }
    }

    /// Re-pivot the strip on the tapped day.
    pub fn select_day(&self, day: &DayItem) {
        self.set_selected_date(day.full_date);
    }

    // ── Shift detail viewer ──────────────────────────────────────────

    pub fn open_shift_detail(&self, shift: Shift) {
        debug!(shift = %shift.id, "shift detail opened");
        self.inner
            .state
            .update(|s| s.shift_detail = ShiftDetail::Open(shift));
    }

    pub fn close_shift_detail(&self) {
        self.inner
            .state
            .update(|s| s.shift_detail = ShiftDetail::Closed);
    }

    // ── Fetching ─────────────────────────────────────────────────────

    /// Fetch every shift and replace the stored list.
    ///
    /// Same contract as the publication fetch: failures become
    /// [`FETCH_SHIFTS_FAILED`], superseded fetches are discarded. The
    /// week strip is rebuilt on success since its event markers follow
    /// the shift list.
    pub async fn fetch_shifts(&self) {
        let ticket = self.inner.fence.issue();
        self.inner.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let result = self.inner.source.get_shifts(None).await;
        let fence = &self.inner.fence;

        let committed = match result {
            Ok(shifts) => {
                let count = shifts.len();
                let committed = self.inner.state.update_if(
                    || fence.is_current(ticket),
                    |s| {
                        s.shifts = shifts;
                        s.rebuild_week();
                        s.is_loading = false;
                    },
                );
                if committed {
                    debug!(count, request = ticket.id(), "shifts committed");
                }
                committed
            }
            Err(e) => {
                warn!(error = %e, request = ticket.id(), "shift fetch failed");
                self.inner.state.update_if(
                    || fence.is_current(ticket),
                    |s| {
                        s.error = Some(FETCH_SHIFTS_FAILED.to_owned());
                        s.is_loading = false;
                    },
                )
            }
        };

        if !committed {
            debug!(request = ticket.id(), "discarding superseded shift fetch");
        }
    }

    /// Look up a single shift through the data facade.
    pub async fn shift(&self, id: &str) -> Result<Shift, CoreError> {
        self.inner
            .source
            .get_shift_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Shift", id))
    }
}
