//! CSV export of the box score.
//!
//! Values come only from the rows passed in, which callers take from
//! [`Tracker::box_score`](hoops_engine::Tracker::box_score). Nothing is
//! recomputed here.

use hoops_engine::BoxScoreLine;
use std::io;
use std::path::Path;

/// Column headers, in output order.
pub const HEADERS: [&str; 20] = [
    "No", "Player", "PTS", "FG (M/A)", "FG%", "2P (M/A)", "2P%", "3P (M/A)", "3P%", "FT (M/A)",
    "FT%", "REB OFF", "REB DEF", "REB TOT", "AST", "TO", "PF", "FG MISS", "FT MISS", "EFF",
];

fn record(line: &BoxScoreLine) -> [String; 20] {
    let row = &line.row;
    [
        line.player.number.map(|n| n.to_string()).unwrap_or_default(),
        line.player.name.clone(),
        row.points.to_string(),
        row.field_goals.to_string(),
        row.fg_pct.to_string(),
        row.two.to_string(),
        row.two_pct.to_string(),
        row.three.to_string(),
        row.three_pct.to_string(),
        row.free_throws.to_string(),
        row.ft_pct.to_string(),
        row.rebounds_off.to_string(),
        row.rebounds_def.to_string(),
        row.rebounds_total.to_string(),
        row.assists.to_string(),
        row.turnovers.to_string(),
        row.fouls.to_string(),
        row.missed_field_goals.to_string(),
        row.missed_free_throws.to_string(),
        row.efficiency.to_string(),
    ]
}

/// Writes a header row and one row per player to `writer` as UTF-8 CSV.
pub fn write_csv<W: io::Write>(writer: W, lines: &[BoxScoreLine]) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADERS)?;
    for line in lines {
        out.write_record(record(line))?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the box score to a CSV file, replacing any existing file.
pub fn write_csv_file<P: AsRef<Path>>(path: P, lines: &[BoxScoreLine]) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_csv(file, lines)
}
