//! Stat engine and match session for live basketball box scores.
//!
//! This crate provides:
//! - Pure event-application functions ([`apply_made_shot`] and friends) and
//!   their symmetric corrections
//! - [`derive_box_score`] and [`derive_team_score`]
//! - [`StatStore`] - per-player records and the on-court set
//! - [`Event`] - explicit operator actions with a one-line text form
//! - [`Tracker`] - a match session with a single [`Tracker::apply`] entry point
//!
//! # Example
//!
//! ```
//! use hoops_core::Roster;
//! use hoops_engine::Tracker;
//!
//! let mut tracker = Tracker::new(Roster::builtin());
//! tracker.apply_line("sub Lucas").unwrap();
//! tracker.apply_line("made Lucas 3").unwrap();
//! tracker.apply_line("miss Lucas 2").unwrap();
//!
//! assert_eq!(tracker.team_score(), 3);
//! assert_eq!(tracker.on_court(), vec!["Lucas"]);
//! ```

mod box_score;
mod engine;
mod event;
mod store;
mod tracker;

pub use box_score::{BoxScoreLine, BoxScoreRow, MadeAttempted, Percentage};
pub use engine::{
    apply_made_shot, apply_missed_shot, apply_simple_event, derive_box_score, derive_team_score,
    points, revert_made_shot, revert_missed_shot, revert_simple_event,
};
pub use event::{Event, EventParseError, PlayerRef};
pub use store::{CourtChange, StatStore, StoreError, ON_COURT_LIMIT};
pub use tracker::{Outcome, Tracker, TrackerError};
