//! The stat store: one record per roster player plus the on-court set.

use hoops_core::{InvariantViolation, Player, Roster, StatRecord};
use thiserror::Error;

/// Maximum number of players on court at once.
pub const ON_COURT_LIMIT: usize = 5;

/// Errors from store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The player is not on the roster. Nothing was changed.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    /// The court already holds the maximum number of players. Nothing was changed.
    #[error("cannot put {player} on court: already {limit} players on the floor")]
    CourtFull { player: String, limit: usize },
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl StoreError {
    /// Returns true for conditions the operator can simply be warned about.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StoreError::CourtFull { .. })
    }
}

/// What a court toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourtChange {
    Entered,
    Left,
}

/// Owns every player's [`StatRecord`] and the on-court set.
///
/// Records are kept in roster order. The on-court set holds roster indices
/// in the order players entered.
#[derive(Debug, Clone)]
pub struct StatStore {
    roster: Roster,
    records: Vec<StatRecord>,
    on_court: Vec<usize>,
}

impl Default for StatStore {
    fn default() -> Self {
        Self::new(Roster::builtin())
    }
}

impl StatStore {
    /// Creates a store with a zeroed record for every player and nobody on court.
    pub fn new(roster: Roster) -> Self {
        let records = vec![StatRecord::ZERO; roster.len()];
        StatStore {
            roster,
            records,
            on_court: Vec::with_capacity(ON_COURT_LIMIT),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    fn index(&self, player: &str) -> Result<usize, StoreError> {
        self.roster
            .index_of(player)
            .ok_or_else(|| StoreError::UnknownPlayer(player.to_string()))
    }

    /// Returns a copy of a player's record.
    pub fn get_record(&self, player: &str) -> Result<StatRecord, StoreError> {
        let idx = self.index(player)?;
        Ok(self.records[idx])
    }

    /// Replaces a player's record.
    pub fn set_record(&mut self, player: &str, record: StatRecord) -> Result<(), StoreError> {
        let idx = self.index(player)?;
        record.check()?;
        self.records[idx] = record;
        Ok(())
    }

    /// Reads a record, applies `f`, and stores the result.
    pub fn update<F>(&mut self, player: &str, f: F) -> Result<StatRecord, StoreError>
    where
        F: FnOnce(StatRecord) -> StatRecord,
    {
        let idx = self.index(player)?;
        let updated = f(self.records[idx]);
        debug_assert!(updated.check().is_ok(), "{:?}", updated.check());
        updated.check()?;
        self.records[idx] = updated;
        Ok(updated)
    }

    /// Zeroes every record and clears the court.
    pub fn reset_all(&mut self) {
        self.records.fill(StatRecord::ZERO);
        self.on_court.clear();
    }

    /// Moves a player onto or off the court.
    ///
    /// Returns [`StoreError::CourtFull`] without changing anything when the
    /// player is on the bench and the court is full.
    pub fn toggle_on_court(&mut self, player: &str) -> Result<CourtChange, StoreError> {
        let idx = self.index(player)?;
        if let Some(pos) = self.on_court.iter().position(|&i| i == idx) {
            self.on_court.remove(pos);
            return Ok(CourtChange::Left);
        }
        if self.on_court.len() >= ON_COURT_LIMIT {
            return Err(StoreError::CourtFull {
                player: player.to_string(),
                limit: ON_COURT_LIMIT,
            });
        }
        self.on_court.push(idx);
        Ok(CourtChange::Entered)
    }

    pub fn is_on_court(&self, player: &str) -> bool {
        self.roster
            .index_of(player)
            .is_some_and(|idx| self.on_court.contains(&idx))
    }

    /// Names of players on court, in the order they entered.
    pub fn on_court(&self) -> Vec<&str> {
        self.on_court
            .iter()
            .map(|&i| self.roster.players()[i].name.as_str())
            .collect()
    }

    /// Players not on court, in roster order.
    pub fn bench(&self) -> Vec<&Player> {
        self.roster
            .players()
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.on_court.contains(i))
            .map(|(_, p)| p)
            .collect()
    }

    /// Every player with their record, in roster order.
    pub fn records(&self) -> impl Iterator<Item = (&Player, &StatRecord)> {
        self.roster.players().iter().zip(self.records.iter())
    }
}
