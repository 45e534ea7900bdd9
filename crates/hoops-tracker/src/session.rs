//! Console session and script replay.
//!
//! Both read one command per line. Blank lines and lines starting with `#`
//! are skipped. The console additionally understands a handful of query and
//! export commands; everything else is handed to [`Event::parse`].

use crate::csv_export::write_csv_file;
use crate::json_output::write_json;
use crate::table::{render_bench, render_box_score, render_court};
use hoops_engine::{
    points, CourtChange, Event, EventParseError, Outcome, Tracker, TrackerError,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

const HELP: &str = "\
events:
  made <player> <2|3|ft>      miss <player> <2|3|ft>
  oreb|dreb|ast|to|foul <player>
  undo made|miss <player> <2|3|ft>
  undo oreb|dreb|ast|to|foul <player>
  sub <player>                reset
  <player> is a name or a jersey number like #7
commands:
  show  score  court  bench  export [path]  json [path]  help  quit";

/// A line typed at the console.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Event(Event),
    Show,
    Score,
    Court,
    Bench,
    Export(Option<PathBuf>),
    Json(Option<PathBuf>),
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parses a console line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(input: &str) -> Result<Option<Self>, EventParseError> {
        let input = input.trim();
        if input.is_empty() || input.starts_with('#') {
            return Ok(None);
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        let command = match cmd.to_ascii_lowercase().as_str() {
            "show" => ConsoleCommand::Show,
            "score" => ConsoleCommand::Score,
            "court" => ConsoleCommand::Court,
            "bench" => ConsoleCommand::Bench,
            "export" => ConsoleCommand::Export(parts.next().map(PathBuf::from)),
            "json" => ConsoleCommand::Json(parts.next().map(PathBuf::from)),
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            _ => return Ok(Some(ConsoleCommand::Event(Event::parse(input)?))),
        };

        let rest: Vec<&str> = parts.collect();
        if !rest.is_empty() {
            return Err(EventParseError::TrailingInput(rest.join(" ")));
        }
        Ok(Some(command))
    }
}

fn describe(outcome: &Outcome, tracker: &Tracker) -> String {
    match outcome {
        Outcome::Updated { player, record } => format!(
            "{}: {} pts | team {} pts",
            player,
            points(record),
            tracker.team_score()
        ),
        Outcome::Court { player, change } => {
            let verb = match change {
                CourtChange::Entered => "enters",
                CourtChange::Left => "leaves",
            };
            format!("{} {} | {}", player, verb, render_court(tracker))
        }
        Outcome::Reset => "match reset".to_string(),
    }
}

/// An interactive match session bound to one [`Tracker`].
pub struct Session {
    tracker: Tracker,
    team: String,
    export_path: PathBuf,
}

impl Session {
    pub fn new(tracker: Tracker, team: impl Into<String>, export_path: PathBuf) -> Self {
        Session {
            tracker,
            team: team.into(),
            export_path,
        }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Handles one console line and returns the text to show, or `None`
    /// when the session should end.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let command = match ConsoleCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Some(String::new()),
            Err(e) => return Some(format!("error: {} (type 'help')", e)),
        };

        let reply = match command {
            ConsoleCommand::Quit => return None,
            ConsoleCommand::Help => HELP.to_string(),
            ConsoleCommand::Show => {
                render_box_score(&self.tracker.box_score(), self.tracker.team_score())
            }
            ConsoleCommand::Score => format!("{}: {} pts", self.team, self.tracker.team_score()),
            ConsoleCommand::Court => render_court(&self.tracker),
            ConsoleCommand::Bench => render_bench(&self.tracker),
            ConsoleCommand::Export(path) => {
                let path = path.unwrap_or_else(|| self.export_path.clone());
                match write_csv_file(&path, &self.tracker.box_score()) {
                    Ok(()) => {
                        info!(path = %path.display(), "box score exported");
                        format!("box score written to {}", path.display())
                    }
                    Err(e) => format!("error: export failed: {}", e),
                }
            }
            ConsoleCommand::Json(path) => {
                let path = path.unwrap_or_else(|| self.export_path.with_extension("json"));
                match write_json(&path, &self.team, &self.tracker) {
                    Ok(()) => format!("snapshot written to {}", path.display()),
                    Err(e) => format!("error: snapshot failed: {}", e),
                }
            }
            ConsoleCommand::Event(event) => match self.tracker.apply(event) {
                Ok(outcome) => describe(&outcome, &self.tracker),
                Err(e) if e.is_recoverable() => format!("warning: {}", e),
                Err(e) => format!("error: {}", e),
            },
        };
        Some(reply)
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", render_court(&self.tracker))?;
        write!(output, "> ")?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Some(reply) => {
                    if !reply.is_empty() {
                        writeln!(output, "{}", reply)?;
                    }
                }
                None => break,
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }
}

/// Errors that abort a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read script: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: TrackerError,
    },
}

/// What a replay did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events applied successfully.
    pub applied: usize,
    /// Recoverable conditions, prefixed with their line number.
    pub warnings: Vec<String>,
}

/// Applies an event script to `tracker`.
///
/// Court-full conditions are collected as warnings and the replay carries on.
/// Any other error stops the replay at that line; events before it stay
/// applied.
pub fn replay<R: BufRead>(tracker: &mut Tracker, input: R) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match tracker.apply_line(trimmed) {
            Ok(_) => summary.applied += 1,
            Err(e) if e.is_recoverable() => {
                warn!(line = idx + 1, "{}", e);
                summary.warnings.push(format!("line {}: {}", idx + 1, e));
            }
            Err(source) => {
                return Err(ReplayError::Line {
                    line: idx + 1,
                    source,
                })
            }
        }
    }
    Ok(summary)
}
