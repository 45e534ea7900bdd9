use anyhow::Context;
use clap::{Parser, Subcommand};
use hoops_engine::Tracker;
use hoops_tracker::config::TrackerConfig;
use hoops_tracker::csv_export::write_csv_file;
use hoops_tracker::json_output::write_json;
use hoops_tracker::session::{replay, Session};
use hoops_tracker::table::{render_box_score, render_court};
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hoops-tracker")]
#[command(about = "Live basketball stat tracker")]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track a match interactively from the console
    Live {
        /// Default path for the `export` command
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Apply an event script and print the box score
    Replay {
        /// Event script, one event per line
        script: PathBuf,
        /// Write the box score as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write a JSON snapshot
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Print the configured roster
    Roster,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => TrackerConfig::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TrackerConfig::load().with_context(|| {
            format!("loading {}", TrackerConfig::config_path().display())
        })?,
    };
    let roster = config.roster()?;

    match cli.command {
        Commands::Live { csv } => {
            let export_path = csv.unwrap_or_else(|| config.export_path.clone());
            let mut session = Session::new(Tracker::new(roster), config.team.clone(), export_path);
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout())?;
        }
        Commands::Replay { script, csv, json } => {
            let file = std::fs::File::open(&script)
                .with_context(|| format!("opening {}", script.display()))?;
            let mut tracker = Tracker::new(roster);
            let summary = replay(&mut tracker, BufReader::new(file))
                .with_context(|| format!("replaying {}", script.display()))?;

            for warning in &summary.warnings {
                eprintln!("warning: {}", warning);
            }
            println!("Applied {} events", summary.applied);
            println!("{}", render_court(&tracker));
            print!("{}", render_box_score(&tracker.box_score(), tracker.team_score()));

            if let Some(path) = csv {
                write_csv_file(&path, &tracker.box_score())
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Box score written to {}", path.display());
            }
            if let Some(path) = json {
                write_json(&path, &config.team, &tracker)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Snapshot written to {}", path.display());
            }
        }
        Commands::Roster => {
            for player in roster.players() {
                println!("{}", player);
            }
        }
    }
    Ok(())
}
