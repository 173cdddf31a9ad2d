//! `eplan health` command

use std::path::PathBuf;

use clap::Args;

use crate::cli::input::{load_envelopes, parse_cycle, parse_date};
use crate::config::Settings;
use crate::display::format_health;
use crate::error::PlannerResult;
use crate::planner::{assess_all, sort_by_urgency};

/// Arguments for the health command
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Path to the envelope JSON file
    #[arg(short, long)]
    pub envelopes: PathBuf,

    /// Pay cycle (weekly, fortnightly, monthly); defaults to settings
    #[arg(short, long)]
    pub cycle: Option<String>,

    /// Assessment date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Assess every expense envelope and print the health set
pub fn handle_health_command(args: HealthArgs, settings: &Settings) -> PlannerResult<()> {
    let envelopes = load_envelopes(&args.envelopes)?;
    let cycle = parse_cycle(args.cycle.as_deref(), settings.default_pay_cycle)?;
    let now = parse_date(args.date.as_deref())?;

    let mut health = assess_all(&envelopes, cycle, now);
    sort_by_urgency(&mut health);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&health)?);
    } else {
        print!("{}", format_health(&health));
    }
    Ok(())
}
