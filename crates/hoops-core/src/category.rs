//! Shot categories and simple counter fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a category or field token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown shot category '{0}': expected 2, 3 or ft")]
    UnknownCategory(String),

    #[error("unknown stat field '{0}': expected oreb, dreb, ast, to or foul")]
    UnknownField(String),
}

/// The three kinds of scoring attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ShotCategory {
    Two = 0,
    Three = 1,
    FreeThrow = 2,
}

impl ShotCategory {
    /// All shot categories in box-score order.
    pub const ALL: [ShotCategory; 3] = [
        ShotCategory::Two,
        ShotCategory::Three,
        ShotCategory::FreeThrow,
    ];

    /// Points awarded for a made shot of this category.
    #[inline]
    pub const fn points(self) -> u32 {
        match self {
            ShotCategory::Two => 2,
            ShotCategory::Three => 3,
            ShotCategory::FreeThrow => 1,
        }
    }

    /// Returns true for two- and three-point attempts.
    #[inline]
    pub const fn is_field_goal(self) -> bool {
        matches!(self, ShotCategory::Two | ShotCategory::Three)
    }

    /// Short token used in event scripts.
    pub const fn token(self) -> &'static str {
        match self {
            ShotCategory::Two => "2",
            ShotCategory::Three => "3",
            ShotCategory::FreeThrow => "ft",
        }
    }
}

impl FromStr for ShotCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "2" | "2pt" | "2pts" | "two" => Ok(ShotCategory::Two),
            "3" | "3pt" | "3pts" | "three" => Ok(ShotCategory::Three),
            "ft" | "lf" | "1" | "free" => Ok(ShotCategory::FreeThrow),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for ShotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShotCategory::Two => "2P",
            ShotCategory::Three => "3P",
            ShotCategory::FreeThrow => "FT",
        };
        write!(f, "{}", name)
    }
}

/// Counters that move independently of every other counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CounterField {
    ReboundsOff = 0,
    ReboundsDef = 1,
    Assists = 2,
    Turnovers = 3,
    Fouls = 4,
}

impl CounterField {
    /// All simple counter fields.
    pub const ALL: [CounterField; 5] = [
        CounterField::ReboundsOff,
        CounterField::ReboundsDef,
        CounterField::Assists,
        CounterField::Turnovers,
        CounterField::Fouls,
    ];

    /// Short token used in event scripts.
    pub const fn token(self) -> &'static str {
        match self {
            CounterField::ReboundsOff => "oreb",
            CounterField::ReboundsDef => "dreb",
            CounterField::Assists => "ast",
            CounterField::Turnovers => "to",
            CounterField::Fouls => "foul",
        }
    }
}

impl FromStr for CounterField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "oreb" | "off" => Ok(CounterField::ReboundsOff),
            "dreb" | "def" => Ok(CounterField::ReboundsDef),
            "ast" | "as" => Ok(CounterField::Assists),
            "to" | "bp" => Ok(CounterField::Turnovers),
            "foul" | "pf" | "f" => Ok(CounterField::Fouls),
            _ => Err(ParseError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for CounterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CounterField::ReboundsOff => "REB OFF",
            CounterField::ReboundsDef => "REB DEF",
            CounterField::Assists => "AST",
            CounterField::Turnovers => "TO",
            CounterField::Fouls => "PF",
        };
        write!(f, "{}", name)
    }
}
