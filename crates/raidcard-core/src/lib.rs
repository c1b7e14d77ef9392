//! Core selection and aggregation engine for raid party cards.
//!
//! Everything here is synchronous and free of I/O except for `config` and
//! `logging`, which touch the filesystem at startup.

pub mod aggregate;
pub mod config;
pub mod logging;
pub mod model;
pub mod power;
pub mod selection;
pub mod share;
pub mod visibility;

pub use aggregate::{Aggregate, AggregateSource, DisplayAggregate, summarize};
pub use model::{Candidate, CandidateId, GroupedMatch, MatchBoard, Role, Slot};
pub use power::format_power;
pub use selection::{SelectionError, SelectionStore, SlotSelection};
pub use share::format_share;
pub use visibility::{INITIAL_PAGE_SIZE, VisibilityController, VisibleRows, visible_rows};
