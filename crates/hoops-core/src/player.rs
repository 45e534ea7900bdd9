//! Player identity and the fixed team roster.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when building a roster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("duplicate player name: {0}")]
    DuplicatePlayer(String),

    #[error("roster has no players")]
    EmptyRoster,

    #[error("invalid player name '{0}': must be non-empty, without spaces, not starting with '#'")]
    InvalidName(String),
}

/// A player's identity. Names are unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Jersey number, if assigned.
    #[serde(default)]
    pub number: Option<u32>,
    pub name: String,
}

impl Player {
    pub fn new(number: Option<u32>, name: impl Into<String>) -> Self {
        Player {
            number,
            name: name.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            Some(n) => write!(f, "#{} {}", n, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// An ordered, non-empty list of players with unique names.
///
/// The order given at construction is the order of every box score and
/// export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster, rejecting duplicate names and empty lists.
    ///
    /// Every name must be usable as a single event token: non-empty, free of
    /// whitespace, and not starting with `#` (which marks a jersey number).
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        if players.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        let mut seen = HashSet::new();
        for player in &players {
            if !is_addressable(&player.name) {
                return Err(RosterError::InvalidName(player.name.clone()));
            }
            if !seen.insert(player.name.as_str()) {
                return Err(RosterError::DuplicatePlayer(player.name.clone()));
            }
        }
        Ok(Roster { players })
    }

    /// The built-in thirteen-player roster, jersey numbers 4 through 16.
    pub fn builtin() -> Self {
        const NAMES: [&str; 13] = [
            "Timéo", "Yehya", "Yannis", "Ronice", "Keran", "M'Baye", "Jobin", "Klérance",
            "Franck", "Johan", "Lucas", "Mehdi", "Antoine",
        ];
        let players = NAMES
            .iter()
            .zip(4u32..)
            .map(|(name, number)| Player::new(Some(number), *name))
            .collect();
        Roster { players }
    }

    /// Players in roster order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; a roster cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the roster index of the player with this exact name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    /// Returns the roster index of the first player wearing this number.
    pub fn index_of_number(&self, number: u32) -> Option<usize> {
        self.players.iter().position(|p| p.number == Some(number))
    }

    /// Returns the player at a roster index.
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

fn is_addressable(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('#') && !name.chars().any(char::is_whitespace)
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roster_order() {
        let roster = Roster::builtin();
        assert_eq!(roster.len(), 13);
        assert_eq!(roster.players()[0], Player::new(Some(4), "Timéo"));
        assert_eq!(roster.players()[12], Player::new(Some(16), "Antoine"));
        assert_eq!(roster.index_of("M'Baye"), Some(5));
        assert_eq!(roster.index_of_number(10), Some(6));
    }

    #[test]
    fn rejects_duplicates() {
        let result = Roster::new(vec![
            Player::new(Some(1), "Ana"),
            Player::new(Some(2), "Ana"),
        ]);
        assert_eq!(result, Err(RosterError::DuplicatePlayer("Ana".to_string())));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Roster::new(Vec::new()), Err(RosterError::EmptyRoster));
    }

    #[test]
    fn rejects_names_events_cannot_address() {
        for name in ["", "Jean Pierre", "Ana\t", "#1"] {
            let result = Roster::new(vec![Player::new(None, "Ana"), Player::new(Some(2), name)]);
            assert_eq!(result, Err(RosterError::InvalidName(name.to_string())));
        }
    }

    #[test]
    fn builtin_names_are_addressable() {
        assert!(Roster::new(Roster::builtin().players().to_vec()).is_ok());
    }

    #[test]
    fn allows_missing_numbers() {
        let roster = Roster::new(vec![Player::new(None, "Ana"), Player::new(None, "Bo")]).unwrap();
        assert!(roster.contains("Bo"));
        assert!(!roster.contains("bo"));
        assert_eq!(roster.index_of_number(0), None);
    }

    #[test]
    fn display() {
        assert_eq!(Player::new(Some(7), "Ronice").to_string(), "#7 Ronice");
        assert_eq!(Player::new(None, "Guest").to_string(), "Guest");
    }
}
