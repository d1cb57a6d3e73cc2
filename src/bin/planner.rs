//! Training planner report.
//!
//! Prints the training windows for one team's week.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin planner -- config/teams.toml 2xA week.json --overlay
//! ```
//!
//! `week.json` is an object of member name → member document, in either
//! the wrapped (`{"grid": {...}}`) or bare (`{"D0_T0": true}`) shape.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: warn)

use std::env;
use std::fs;
use std::process::ExitCode;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use training_planner::config::PlannerConfig;
use training_planner::display::{render_heatmap, render_suggestions, render_summary, visible_counts};
use training_planner::snapshot::TeamAvailability;
use training_planner::summary::WeekSummary;
use training_planner::validation::{validate_snapshot, validate_team};

const USAGE: &str = "usage: planner <config.toml> <team-id> <snapshot.json> [--overlay]";

struct Args {
    config: String,
    team_id: String,
    snapshot: String,
    overlay: bool,
}

fn parse_args() -> Option<Args> {
    let mut positional = Vec::new();
    let mut overlay = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--overlay" => overlay = true,
            _ => positional.push(arg),
        }
    }
    let [config, team_id, snapshot]: [String; 3] = positional.try_into().ok()?;
    Some(Args {
        config,
        team_id,
        snapshot,
        overlay,
    })
}

fn run(args: Args) -> training_planner::Result<()> {
    let config = PlannerConfig::from_file(&args.config)?;
    let dims = config.dimensions();
    let team = config.team(&args.team_id)?;

    let snapshot = TeamAvailability::from_json_str(&fs::read_to_string(&args.snapshot)?)?;
    info!(team = %team.id, members = snapshot.len(), "loaded snapshot");

    for issue in validate_team(team)
        .err()
        .into_iter()
        .chain(validate_snapshot(team, &snapshot, &dims).err())
        .flatten()
    {
        warn!(kind = ?issue.kind, "{}", issue.message);
    }

    let plan = config.engine().plan(team, &snapshot);
    let summary = WeekSummary::calculate(&plan.suggestions, &plan.counts, &dims);

    println!("{} ({})", team.name, team.id);
    println!("{}", plan.policy.describe());
    print!("{}", render_suggestions(&plan.suggestions, &dims));
    println!();
    print!("{}", render_summary(&summary, &dims));

    let counts = visible_counts(&plan.counts, args.overlay);
    if !counts.is_empty() {
        println!();
        print!("{}", render_heatmap(&counts, &dims));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let Some(args) = parse_args() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
