//! Derived box-score rows.
//!
//! A [`BoxScoreRow`] is never stored. It is rebuilt from a [`StatRecord`]
//! by [`derive_box_score`](crate::derive_box_score) whenever it is needed.

use hoops_core::{Player, ShotLine};
use serde::Serialize;
use std::fmt;

/// A shooting percentage in the range `0.0..=100.0`.
///
/// Zero attempts give `0.0`. Displayed with one decimal and a percent
/// sign, e.g. `0.0%` or `57.1%`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0.0);

    /// Computes `made / attempted * 100`, or zero when nothing was attempted.
    pub fn of(made: u32, attempted: u32) -> Self {
        if attempted == 0 {
            return Percentage::ZERO;
        }
        Percentage(f64::from(made) / f64::from(attempted) * 100.0)
    }

    /// Percentage for a shot line.
    pub fn of_line(line: ShotLine) -> Self {
        Self::of(line.made(), line.attempted())
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Made/attempted pair as it appears in a box score, e.g. `4/7`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MadeAttempted {
    pub made: u32,
    pub attempted: u32,
}

impl MadeAttempted {
    pub fn missed(self) -> u32 {
        self.attempted.saturating_sub(self.made)
    }
}

impl From<ShotLine> for MadeAttempted {
    fn from(line: ShotLine) -> Self {
        MadeAttempted {
            made: line.made(),
            attempted: line.attempted(),
        }
    }
}

impl fmt::Display for MadeAttempted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.made, self.attempted)
    }
}

/// The full derived statistics for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxScoreRow {
    pub points: u32,
    pub field_goals: MadeAttempted,
    pub fg_pct: Percentage,
    pub two: MadeAttempted,
    pub two_pct: Percentage,
    pub three: MadeAttempted,
    pub three_pct: Percentage,
    pub free_throws: MadeAttempted,
    pub ft_pct: Percentage,
    pub rebounds_off: u32,
    pub rebounds_def: u32,
    pub rebounds_total: u32,
    pub assists: u32,
    pub turnovers: u32,
    pub fouls: u32,
    pub missed_field_goals: u32,
    pub missed_free_throws: u32,
    /// May be negative.
    pub efficiency: i64,
}

/// A box-score row paired with the player it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxScoreLine {
    #[serde(flatten)]
    pub player: Player,
    #[serde(flatten)]
    pub row: BoxScoreRow,
}
