//! JSON snapshot of a match in progress.
//!
//! The snapshot carries the team score, the on-court set and the full box
//! score, which makes it handy for scoreboards or later analysis.

use chrono::Utc;
use hoops_engine::{BoxScoreLine, Tracker};
use serde::Serialize;
use std::path::Path;

/// JSON representation of the current match state.
#[derive(Serialize)]
struct SnapshotJson<'a> {
    /// Team name from the configuration.
    team: &'a str,
    /// Total team points.
    score: u32,
    /// Players on court, in entry order.
    on_court: Vec<&'a str>,
    /// Number of events applied this session.
    events: usize,
    /// One entry per roster player.
    players: Vec<BoxScoreLine>,
    /// ISO 8601 timestamp when the snapshot was taken.
    created_at: String,
}

fn snapshot<'a>(team: &'a str, tracker: &'a Tracker) -> SnapshotJson<'a> {
    SnapshotJson {
        team,
        score: tracker.team_score(),
        on_court: tracker.on_court(),
        events: tracker.history().len(),
        players: tracker.box_score(),
        created_at: Utc::now().to_rfc3339(),
    }
}

/// Renders the snapshot as pretty-printed JSON.
///
/// The generated document has the following structure:
/// ```json
/// {
///   "team": "Home",
///   "score": 3,
///   "on_court": ["Lucas"],
///   "events": 2,
///   "players": [
///     { "number": 14, "name": "Lucas", "points": 3, "fg_pct": 100.0, ... }
///   ],
///   "created_at": "2024-01-15T12:00:00Z"
/// }
/// ```
pub fn to_json_string(team: &str, tracker: &Tracker) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&snapshot(team, tracker))
}

/// Writes the snapshot to a JSON file.
///
/// Returns an `std::io::Error` if the file cannot be created or written to.
pub fn write_json<P: AsRef<Path>>(path: P, team: &str, tracker: &Tracker) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot(team, tracker))?;
    Ok(())
}
