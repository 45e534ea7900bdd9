//! Match session management.
//!
//! The [`Tracker`] owns the [`StatStore`] for one match and is the single
//! entry point for operator events. Every query recomputes from the
//! current records.

use crate::box_score::BoxScoreLine;
use crate::engine::{
    apply_made_shot, apply_missed_shot, apply_simple_event, derive_box_score, derive_team_score,
    revert_made_shot, revert_missed_shot, revert_simple_event,
};
use crate::event::{Event, EventParseError, PlayerRef};
use crate::store::{CourtChange, StatStore, StoreError};
use hoops_core::{Player, Roster, StatRecord};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for tracker operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid event: {0}")]
    Parse(#[from] EventParseError),
}

impl TrackerError {
    /// Returns true if the session can carry on after warning the operator.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TrackerError::Store(e) if e.is_recoverable())
    }
}

/// The effect of an applied event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player's counters changed (or were left as they were by a correction
    /// with nothing to take back).
    Updated { player: String, record: StatRecord },
    /// A player entered or left the court.
    Court { player: String, change: CourtChange },
    /// Every record was zeroed and the court cleared.
    Reset,
}

/// A live match session.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    store: StatStore,
    history: Vec<Event>,
}

impl Tracker {
    /// Creates a session for a roster with all counters at zero.
    pub fn new(roster: Roster) -> Self {
        Tracker {
            store: StatStore::new(roster),
            history: Vec::new(),
        }
    }

    pub fn store(&self) -> &StatStore {
        &self.store
    }

    pub fn roster(&self) -> &Roster {
        self.store.roster()
    }

    /// Events applied so far in this session, including resets.
    pub fn history(&self) -> &[Event] {
        &self.history
    }

    /// Resolves a player reference to a roster name.
    pub fn resolve(&self, player: &PlayerRef) -> Result<&str, StoreError> {
        let roster = self.store.roster();
        let idx = match player {
            PlayerRef::Name(name) => roster.index_of(name),
            PlayerRef::Number(n) => roster.index_of_number(*n),
        };
        idx.and_then(|i| roster.get(i))
            .map(|p| p.name.as_str())
            .ok_or_else(|| StoreError::UnknownPlayer(player.to_string()))
    }

    /// Applies one event. Nothing changes if an error is returned.
    pub fn apply(&mut self, event: Event) -> Result<Outcome, TrackerError> {
        let outcome = match &event {
            Event::ResetMatch => {
                self.store.reset_all();
                info!("match reset");
                Outcome::Reset
            }
            Event::ToggleCourt { player } => {
                let name = self.resolve(player)?.to_string();
                match self.store.toggle_on_court(&name) {
                    Ok(change) => {
                        debug!(player = %name, ?change, "court toggle");
                        Outcome::Court {
                            player: name,
                            change,
                        }
                    }
                    Err(e) => {
                        warn!("{}", e);
                        return Err(e.into());
                    }
                }
            }
            Event::MadeShot { player, category } => {
                let category = *category;
                self.update(player, |r| apply_made_shot(r, category))?
            }
            Event::MissedShot { player, category } => {
                let category = *category;
                self.update(player, |r| apply_missed_shot(r, category))?
            }
            Event::Simple { player, field } => {
                let field = *field;
                self.update(player, |r| apply_simple_event(r, field))?
            }
            Event::RevertMadeShot { player, category } => {
                let category = *category;
                self.update(player, |r| revert_made_shot(r, category))?
            }
            Event::RevertMissedShot { player, category } => {
                let category = *category;
                self.update(player, |r| revert_missed_shot(r, category))?
            }
            Event::RevertSimple { player, field } => {
                let field = *field;
                self.update(player, |r| revert_simple_event(r, field))?
            }
        };
        debug!(event = %event, "applied");
        self.history.push(event);
        Ok(outcome)
    }

    /// Parses and applies one event line.
    pub fn apply_line(&mut self, line: &str) -> Result<Outcome, TrackerError> {
        let event = Event::parse(line)?;
        self.apply(event)
    }

    fn update<F>(&mut self, player: &PlayerRef, f: F) -> Result<Outcome, TrackerError>
    where
        F: FnOnce(StatRecord) -> StatRecord,
    {
        let name = self.resolve(player)?.to_string();
        let before = self.store.get_record(&name)?;
        let record = self.store.update(&name, f)?;
        if record == before {
            debug!(player = %name, "correction had nothing to take back");
        }
        Ok(Outcome::Updated {
            player: name,
            record,
        })
    }

    /// One row per roster player, in roster order.
    pub fn box_score(&self) -> Vec<BoxScoreLine> {
        self.store
            .records()
            .map(|(player, record)| BoxScoreLine {
                player: player.clone(),
                row: derive_box_score(record),
            })
            .collect()
    }

    /// Total team points.
    pub fn team_score(&self) -> u32 {
        derive_team_score(self.store.records().map(|(_, r)| r))
    }

    /// Names on court, in entry order.
    pub fn on_court(&self) -> Vec<&str> {
        self.store.on_court()
    }

    /// Players on the bench, in roster order.
    pub fn bench(&self) -> Vec<&Player> {
        self.store.bench()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoops_core::{CounterField, ShotCategory};

    fn tracker() -> Tracker {
        Tracker::new(Roster::builtin())
    }

    #[test]
    fn new_tracker() {
        let t = tracker();
        assert_eq!(t.team_score(), 0);
        assert!(t.on_court().is_empty());
        assert_eq!(t.box_score().len(), 13);
        assert!(t.history().is_empty());
    }

    #[test]
    fn apply_made_shot_by_number() {
        let mut t = tracker();
        let outcome = t.apply_line("made #7 3").unwrap();
        match outcome {
            Outcome::Updated { player, record } => {
                assert_eq!(player, "Ronice");
                assert_eq!(record.three.made(), 1);
                assert_eq!(record.three.attempted(), 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(t.team_score(), 3);
        assert_eq!(t.history().len(), 1);
    }

    #[test]
    fn unknown_player_changes_nothing() {
        let mut t = tracker();
        let err = t
            .apply(Event::MadeShot {
                player: "Nobody".into(),
                category: ShotCategory::Two,
            })
            .unwrap_err();
        assert_eq!(
            err,
            TrackerError::Store(StoreError::UnknownPlayer("Nobody".to_string()))
        );
        assert!(!err.is_recoverable());
        assert_eq!(t.apply_line("sub #99").unwrap_err().to_string(), "unknown player: #99");
        assert_eq!(t.team_score(), 0);
        assert!(t.history().is_empty());
    }

    #[test]
    fn court_full_is_recoverable() {
        let mut t = tracker();
        for n in 4..9 {
            t.apply_line(&format!("sub #{}", n)).unwrap();
        }
        let err = t.apply_line("sub #9").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(t.on_court().len(), 5);
        assert!(!t.on_court().contains(&"M'Baye"));
        assert_eq!(t.history().len(), 5);
    }

    #[test]
    fn box_score_in_roster_order() {
        let mut t = tracker();
        t.apply_line("made Antoine 2").unwrap();
        t.apply_line("ast Timéo").unwrap();
        let rows = t.box_score();
        assert_eq!(rows[0].player.name, "Timéo");
        assert_eq!(rows[0].row.assists, 1);
        assert_eq!(rows[12].player.name, "Antoine");
        assert_eq!(rows[12].row.points, 2);
    }

    #[test]
    fn correction_with_nothing_to_take_back() {
        let mut t = tracker();
        let outcome = t
            .apply(Event::RevertSimple {
                player: "Lucas".into(),
                field: CounterField::Fouls,
            })
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Updated {
                player: "Lucas".to_string(),
                record: StatRecord::ZERO
            }
        );
    }

    #[test]
    fn parse_error_is_reported() {
        let mut t = tracker();
        assert!(matches!(
            t.apply_line("dunk Lucas"),
            Err(TrackerError::Parse(EventParseError::UnknownAction(_)))
        ));
    }

    #[test]
    fn reset_law() {
        let mut t = tracker();
        t.apply_line("made Lucas 3").unwrap();
        t.apply_line("miss Lucas ft").unwrap();
        t.apply_line("oreb Mehdi").unwrap();
        t.apply_line("sub Lucas").unwrap();

        assert_eq!(t.apply(Event::ResetMatch).unwrap(), Outcome::Reset);
        assert_eq!(t.team_score(), 0);
        assert!(t.on_court().is_empty());
        for line in t.box_score() {
            assert_eq!(line.row.points, 0);
            assert_eq!(line.row.field_goals.attempted, 0);
            assert_eq!(line.row.free_throws.attempted, 0);
            assert_eq!(line.row.rebounds_total, 0);
        }
        assert!(t.store().records().all(|(_, r)| r.is_zero()));
    }
}
