//! Per-player counter records.
//!
//! A [`StatRecord`] is a fixed-shape set of counters. Shot counters are kept
//! in [`ShotLine`] values, which can only be built with `made <= attempted`.

use crate::{CounterField, ShotCategory};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shot line with more makes than attempts.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invariant violated for {category}: {made} made > {attempted} attempted")]
pub struct InvariantViolation {
    pub category: ShotCategory,
    pub made: u32,
    pub attempted: u32,
}

/// Made and attempted counts for one shot category.
///
/// Invariant: `made <= attempted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShotLine")]
pub struct ShotLine {
    made: u32,
    attempted: u32,
}

#[derive(Deserialize)]
struct RawShotLine {
    made: u32,
    attempted: u32,
}

impl TryFrom<RawShotLine> for ShotLine {
    type Error = String;

    fn try_from(raw: RawShotLine) -> Result<Self, Self::Error> {
        if raw.made > raw.attempted {
            return Err(format!(
                "{} made > {} attempted",
                raw.made, raw.attempted
            ));
        }
        Ok(ShotLine {
            made: raw.made,
            attempted: raw.attempted,
        })
    }
}

impl ShotLine {
    /// An empty shot line.
    pub const ZERO: ShotLine = ShotLine {
        made: 0,
        attempted: 0,
    };

    /// Creates a shot line, rejecting `made > attempted`.
    pub fn new(
        category: ShotCategory,
        made: u32,
        attempted: u32,
    ) -> Result<Self, InvariantViolation> {
        if made > attempted {
            return Err(InvariantViolation {
                category,
                made,
                attempted,
            });
        }
        Ok(ShotLine { made, attempted })
    }

    #[inline]
    pub const fn made(self) -> u32 {
        self.made
    }

    #[inline]
    pub const fn attempted(self) -> u32 {
        self.attempted
    }

    /// Attempts that did not go in.
    #[inline]
    pub const fn missed(self) -> u32 {
        self.attempted - self.made
    }

    /// Adds one make, which is also one attempt.
    #[must_use]
    pub const fn with_make(self) -> Self {
        ShotLine {
            made: self.made.saturating_add(1),
            attempted: self.attempted.saturating_add(1),
        }
    }

    /// Adds one missed attempt.
    #[must_use]
    pub const fn with_miss(self) -> Self {
        ShotLine {
            made: self.made,
            attempted: self.attempted.saturating_add(1),
        }
    }

    /// Removes one make together with its attempt. Returns `None` when
    /// there is no make to remove.
    pub const fn without_make(self) -> Option<Self> {
        if self.made == 0 {
            return None;
        }
        Some(ShotLine {
            made: self.made - 1,
            attempted: self.attempted - 1,
        })
    }

    /// Removes one missed attempt. Returns `None` when every attempt was a
    /// make, since dropping an attempt would leave `made > attempted`.
    pub const fn without_miss(self) -> Option<Self> {
        if self.attempted == self.made {
            return None;
        }
        Some(ShotLine {
            made: self.made,
            attempted: self.attempted - 1,
        })
    }
}

/// The raw counters for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatRecord {
    pub two: ShotLine,
    pub three: ShotLine,
    pub free_throws: ShotLine,
    pub rebounds_off: u32,
    pub rebounds_def: u32,
    pub assists: u32,
    pub turnovers: u32,
    pub fouls: u32,
}

impl StatRecord {
    /// A record with every counter at zero.
    pub const ZERO: StatRecord = StatRecord {
        two: ShotLine::ZERO,
        three: ShotLine::ZERO,
        free_throws: ShotLine::ZERO,
        rebounds_off: 0,
        rebounds_def: 0,
        assists: 0,
        turnovers: 0,
        fouls: 0,
    };

    /// Returns the shot line for a category.
    #[inline]
    pub const fn shots(&self, category: ShotCategory) -> ShotLine {
        match category {
            ShotCategory::Two => self.two,
            ShotCategory::Three => self.three,
            ShotCategory::FreeThrow => self.free_throws,
        }
    }

    /// Returns a mutable reference to the shot line for a category.
    #[inline]
    pub fn shots_mut(&mut self, category: ShotCategory) -> &mut ShotLine {
        match category {
            ShotCategory::Two => &mut self.two,
            ShotCategory::Three => &mut self.three,
            ShotCategory::FreeThrow => &mut self.free_throws,
        }
    }

    /// Returns the value of a simple counter.
    #[inline]
    pub const fn counter(&self, field: CounterField) -> u32 {
        match field {
            CounterField::ReboundsOff => self.rebounds_off,
            CounterField::ReboundsDef => self.rebounds_def,
            CounterField::Assists => self.assists,
            CounterField::Turnovers => self.turnovers,
            CounterField::Fouls => self.fouls,
        }
    }

    /// Returns a mutable reference to a simple counter.
    #[inline]
    pub fn counter_mut(&mut self, field: CounterField) -> &mut u32 {
        match field {
            CounterField::ReboundsOff => &mut self.rebounds_off,
            CounterField::ReboundsDef => &mut self.rebounds_def,
            CounterField::Assists => &mut self.assists,
            CounterField::Turnovers => &mut self.turnovers,
            CounterField::Fouls => &mut self.fouls,
        }
    }

    /// Returns true if every counter is zero.
    pub fn is_zero(&self) -> bool {
        *self == StatRecord::ZERO
    }

    /// Re-checks `made <= attempted` for every category.
    ///
    /// [`ShotLine`] already enforces this on construction, so a failure here
    /// points at a bug rather than bad input.
    pub fn check(&self) -> Result<(), InvariantViolation> {
        for category in ShotCategory::ALL {
            let line = self.shots(category);
            if line.made > line.attempted {
                return Err(InvariantViolation {
                    category,
                    made: line.made,
                    attempted: line.attempted,
                });
            }
        }
        Ok(())
    }
}
