//! Plain-text rendering for the console.

use hoops_engine::{BoxScoreLine, Tracker, ON_COURT_LIMIT};
use std::fmt::Write;

/// Renders the box score as a fixed-width table with a team total line.
pub fn render_box_score(lines: &[BoxScoreLine], team_score: u32) -> String {
    let name_width = lines
        .iter()
        .map(|l| l.player.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3} {:<nw$} {:>3} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>4} {:>4} {:>4} {:>3} {:>3} {:>3} {:>4}",
        "No", "Player", "PTS", "FG", "FG%", "2P", "2P%", "3P", "3P%", "FT", "FT%",
        "OREB", "DREB", "REB", "AST", "TO", "PF", "EFF",
        nw = name_width
    );
    for line in lines {
        let row = &line.row;
        let number = line.player.number.map(|n| n.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>3} {:<nw$} {:>3} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>4} {:>4} {:>4} {:>3} {:>3} {:>3} {:>4}",
            number,
            line.player.name,
            row.points,
            row.field_goals.to_string(),
            row.fg_pct.to_string(),
            row.two.to_string(),
            row.two_pct.to_string(),
            row.three.to_string(),
            row.three_pct.to_string(),
            row.free_throws.to_string(),
            row.ft_pct.to_string(),
            row.rebounds_off,
            row.rebounds_def,
            row.rebounds_total,
            row.assists,
            row.turnovers,
            row.fouls,
            row.efficiency,
            nw = name_width
        );
    }
    let _ = writeln!(out, "Team score: {} pts", team_score);
    out
}

/// One line describing who is on court, e.g. `On court (2/5): Lucas, Mehdi`.
pub fn render_court(tracker: &Tracker) -> String {
    let on_court = tracker.on_court();
    let names = if on_court.is_empty() {
        "-".to_string()
    } else {
        on_court.join(", ")
    };
    format!(
        "On court ({}/{}): {}",
        on_court.len(),
        ON_COURT_LIMIT,
        names
    )
}

/// One line listing the bench in roster order.
pub fn render_bench(tracker: &Tracker) -> String {
    let bench: Vec<String> = tracker.bench().iter().map(|p| p.to_string()).collect();
    if bench.is_empty() {
        "Bench: -".to_string()
    } else {
        format!("Bench: {}", bench.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoops_core::{Player, Roster};

    fn tracker() -> Tracker {
        let roster = Roster::new(vec![
            Player::new(Some(4), "Ana"),
            Player::new(None, "Bartholomew"),
        ])
        .unwrap();
        Tracker::new(roster)
    }

    #[test]
    fn box_score_has_header_rows_and_total() {
        let mut t = tracker();
        t.apply_line("made Ana 3").unwrap();
        let text = render_box_score(&t.box_score(), t.team_score());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Player"));
        assert!(lines[0].contains("EFF"));
        assert!(lines[1].contains("Ana"));
        assert!(lines[1].contains("100.0%"));
        assert!(lines[2].contains("Bartholomew"));
        assert_eq!(lines[3], "Team score: 3 pts");
    }

    #[test]
    fn columns_line_up() {
        let t = tracker();
        let text = render_box_score(&t.box_score(), t.team_score());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert_eq!(lines[1].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn court_and_bench() {
        let mut t = tracker();
        assert_eq!(render_court(&t), "On court (0/5): -");
        t.apply_line("sub Ana").unwrap();
        assert_eq!(render_court(&t), "On court (1/5): Ana");
        assert_eq!(render_bench(&t), "Bench: Bartholomew");
    }
}
