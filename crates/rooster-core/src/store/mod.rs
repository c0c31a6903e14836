// ── Reactive state containers ──
//
// One store per screen concern. Each holds a single immutable state
// record in a `watch` channel; mutations replace the record atomically
// and wake every subscriber.

mod cell;
mod fence;
mod publications;
mod schedule;
mod user;

pub use publications::{
    FETCH_PUBLICATIONS_FAILED, PublicationsState, PublicationsStore, filter_publications,
};
pub use schedule::{FETCH_SHIFTS_FAILED, ScheduleState, ScheduleStore, ShiftDetail};
pub use user::{UserState, UserStore};
