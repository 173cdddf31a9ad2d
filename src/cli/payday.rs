//! `eplan payday` command

use std::path::PathBuf;

use clap::Args;

use crate::cli::input::{load_envelopes, parse_amount, parse_cycle, parse_date};
use crate::config::Settings;
use crate::display::format_allocation;
use crate::error::PlannerResult;
use crate::planner::PaydayAllocation;

/// Arguments for the payday command
#[derive(Args, Debug)]
pub struct PaydayArgs {
    /// Paycheck amount (e.g. "4200" or "4200.50")
    pub amount: String,

    /// Path to the envelope JSON file
    #[arg(short, long)]
    pub envelopes: PathBuf,

    /// Pay cycle (weekly, fortnightly, monthly); defaults to settings
    #[arg(short, long)]
    pub cycle: Option<String>,

    /// Allocation date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Emit JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// Split a paycheck across the envelope set and print the result
pub fn handle_payday_command(args: PaydayArgs, settings: &Settings) -> PlannerResult<()> {
    let pay_amount = parse_amount(&args.amount)?;
    let envelopes = load_envelopes(&args.envelopes)?;
    let cycle = parse_cycle(args.cycle.as_deref(), settings.default_pay_cycle)?;
    let now = parse_date(args.date.as_deref())?;

    let allocation = PaydayAllocation::allocate(pay_amount, &envelopes, cycle, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&allocation)?);
    } else {
        print!("{}", format_allocation(&allocation));
    }
    Ok(())
}
