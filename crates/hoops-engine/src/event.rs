//! Explicit event records and their one-line text form.
//!
//! ```text
//! made <player> <2|3|ft>        miss <player> <2|3|ft>
//! oreb|dreb|ast|to|foul <player>
//! undo made|miss <player> <2|3|ft>
//! undo oreb|dreb|ast|to|foul <player>
//! sub <player>                  reset
//! ```
//!
//! `<player>` is a roster name or a jersey number written as `#7`.

use hoops_core::{CounterField, ParseError, ShotCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing an event line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventParseError {
    #[error("empty event")]
    Empty,
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("'{action}' is missing its {what}")]
    MissingArgument {
        action: &'static str,
        what: &'static str,
    },
    #[error("invalid jersey number '{0}'")]
    InvalidNumber(String),
    #[error(transparent)]
    Token(#[from] ParseError),
    #[error("unexpected input after event: '{0}'")]
    TrailingInput(String),
}

/// How an event names its player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRef {
    Name(String),
    Number(u32),
}

impl PlayerRef {
    fn parse(token: &str) -> Result<Self, EventParseError> {
        match token.strip_prefix('#') {
            Some(digits) => digits
                .parse()
                .map(PlayerRef::Number)
                .map_err(|_| EventParseError::InvalidNumber(token.to_string())),
            None => Ok(PlayerRef::Name(token.to_string())),
        }
    }
}

impl From<&str> for PlayerRef {
    fn from(name: &str) -> Self {
        PlayerRef::Name(name.to_string())
    }
}

impl fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRef::Name(name) => write!(f, "{}", name),
            PlayerRef::Number(n) => write!(f, "#{}", n),
        }
    }
}

/// One operator action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Event {
    MadeShot {
        player: PlayerRef,
        category: ShotCategory,
    },
    MissedShot {
        player: PlayerRef,
        category: ShotCategory,
    },
    Simple {
        player: PlayerRef,
        field: CounterField,
    },
    RevertMadeShot {
        player: PlayerRef,
        category: ShotCategory,
    },
    RevertMissedShot {
        player: PlayerRef,
        category: ShotCategory,
    },
    RevertSimple {
        player: PlayerRef,
        field: CounterField,
    },
    ToggleCourt {
        player: PlayerRef,
    },
    ResetMatch,
}

impl Event {
    /// Returns the player this event targets, if any.
    pub fn player(&self) -> Option<&PlayerRef> {
        match self {
            Event::MadeShot { player, .. }
            | Event::MissedShot { player, .. }
            | Event::Simple { player, .. }
            | Event::RevertMadeShot { player, .. }
            | Event::RevertMissedShot { player, .. }
            | Event::RevertSimple { player, .. }
            | Event::ToggleCourt { player } => Some(player),
            Event::ResetMatch => None,
        }
    }

    /// Parses one event line.
    pub fn parse(input: &str) -> Result<Self, EventParseError> {
        let mut parts = input.split_whitespace();
        let action = parts.next().ok_or(EventParseError::Empty)?;

        let event = match action.to_ascii_lowercase().as_str() {
            "made" => {
                let (player, category) = Self::parse_shot("made", &mut parts)?;
                Event::MadeShot { player, category }
            }
            "miss" => {
                let (player, category) = Self::parse_shot("miss", &mut parts)?;
                Event::MissedShot { player, category }
            }
            "sub" => Event::ToggleCourt {
                player: Self::parse_player("sub", &mut parts)?,
            },
            "reset" => Event::ResetMatch,
            "undo" => Self::parse_undo(&mut parts)?,
            other => match other.parse::<CounterField>() {
                Ok(field) => Event::Simple {
                    player: Self::parse_player("stat", &mut parts)?,
                    field,
                },
                Err(_) => return Err(EventParseError::UnknownAction(action.to_string())),
            },
        };

        let rest: Vec<&str> = parts.collect();
        if !rest.is_empty() {
            return Err(EventParseError::TrailingInput(rest.join(" ")));
        }
        Ok(event)
    }

    fn parse_undo<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Self, EventParseError> {
        let what = parts.next().ok_or(EventParseError::MissingArgument {
            action: "undo",
            what: "action",
        })?;
        match what.to_ascii_lowercase().as_str() {
            "made" => {
                let (player, category) = Self::parse_shot("undo made", parts)?;
                Ok(Event::RevertMadeShot { player, category })
            }
            "miss" => {
                let (player, category) = Self::parse_shot("undo miss", parts)?;
                Ok(Event::RevertMissedShot { player, category })
            }
            other => {
                let field = other
                    .parse::<CounterField>()
                    .map_err(|_| EventParseError::UnknownAction(format!("undo {}", what)))?;
                Ok(Event::RevertSimple {
                    player: Self::parse_player("undo", parts)?,
                    field,
                })
            }
        }
    }

    fn parse_player<'a>(
        action: &'static str,
        parts: &mut impl Iterator<Item = &'a str>,
    ) -> Result<PlayerRef, EventParseError> {
        let token = parts.next().ok_or(EventParseError::MissingArgument {
            action,
            what: "player",
        })?;
        PlayerRef::parse(token)
    }

    fn parse_shot<'a>(
        action: &'static str,
        parts: &mut impl Iterator<Item = &'a str>,
    ) -> Result<(PlayerRef, ShotCategory), EventParseError> {
        let player = Self::parse_player(action, parts)?;
        let category = parts
            .next()
            .ok_or(EventParseError::MissingArgument {
                action,
                what: "shot category",
            })?
            .parse::<ShotCategory>()?;
        Ok((player, category))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::MadeShot { player, category } => {
                write!(f, "made {} {}", player, category.token())
            }
            Event::MissedShot { player, category } => {
                write!(f, "miss {} {}", player, category.token())
            }
            Event::Simple { player, field } => write!(f, "{} {}", field.token(), player),
            Event::RevertMadeShot { player, category } => {
                write!(f, "undo made {} {}", player, category.token())
            }
            Event::RevertMissedShot { player, category } => {
                write!(f, "undo miss {} {}", player, category.token())
            }
            Event::RevertSimple { player, field } => {
                write!(f, "undo {} {}", field.token(), player)
            }
            Event::ToggleCourt { player } => write!(f, "sub {}", player),
            Event::ResetMatch => write!(f, "reset"),
        }
    }
}
