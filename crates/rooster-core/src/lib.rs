//! Reactive state layer between `rooster-api` and presentation consumers.
//!
//! - **Stores** ([`PublicationsStore`], [`ScheduleStore`], [`UserStore`])
//!   each hold one immutable state record behind a `tokio::sync::watch`
//!   channel. Operations replace the record whole; readers take `Arc`
//!   snapshots or subscribe through [`StateStream`].
//!
//! - **[`calendar`]** derives the seven-day week strip and the month
//!   label from a pivot date, and moves dates by calendar months.
//!
//! - **[`ViewState`]** maps a store's loading/error/data fields to what a
//!   screen should show.
//!
//! - **[`App`]** owns a data facade and the three stores built on it.
//!
//! Fetches are fenced: when two fetches of the same kind overlap, only
//! the one requested last may commit.

pub mod app;
pub mod calendar;
pub mod config;
pub mod error;
pub mod store;
pub mod stream;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use app::{App, Source};
pub use calendar::{DayItem, MonthDirection};
pub use config::{ApiConfig, AppConfig, Backend};
pub use error::CoreError;
pub use store::{
    FETCH_PUBLICATIONS_FAILED, FETCH_SHIFTS_FAILED, PublicationsState, PublicationsStore,
    ScheduleState, ScheduleStore, ShiftDetail, UserState, UserStore, filter_publications,
};
pub use stream::{StateStream, StateWatchStream};
pub use view::ViewState;

// Records callers handle directly.
pub use rooster_api::{DataSource, Publication, Room, Shift, User};
