//! Core types for basketball stat tracking.
//!
//! This crate provides the value types shared by the engine and the tracker:
//! - [`Player`] and [`Roster`] for team identity
//! - [`ShotCategory`] and [`CounterField`] naming what an event touches
//! - [`ShotLine`] and [`StatRecord`] for per-player counters

mod category;
mod player;
mod record;

pub use category::{CounterField, ParseError, ShotCategory};
pub use player::{Player, Roster, RosterError};
pub use record::{InvariantViolation, ShotLine, StatRecord};
