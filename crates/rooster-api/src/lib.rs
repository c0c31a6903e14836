//! Async data facade for the Rooster app.
//!
//! Stores in `rooster-core` obtain every raw record through the
//! [`DataSource`] trait, which has two backends:
//!
//! - **[`MockSource`]**: fixture data behind a simulated network delay,
//!   with a switch to force outages.
//! - **[`HttpSource`]**: JSON over HTTP against a configurable base URL
//!   (see [`TransportConfig`]).

pub mod error;
pub mod fixtures;
pub mod http;
pub mod mock;
pub mod models;
pub mod source;
pub mod transport;

pub use error::Error;
pub use http::HttpSource;
pub use mock::MockSource;
pub use models::{
    Author, Publication, Room, Shift, ShiftNote, ShiftRoom, ShiftService, Tag, TeamMember, User,
};
pub use source::DataSource;
pub use transport::TransportConfig;
