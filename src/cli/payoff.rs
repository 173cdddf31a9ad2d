//! `eplan payoff` command

use std::path::PathBuf;

use clap::Args;

use crate::cli::input::{load_debts, parse_amount, parse_date, parse_strategy};
use crate::display::{format_comparison, format_payoff};
use crate::error::{PlannerError, PlannerResult};
use crate::planner::{PayoffComparison, PayoffResult};

/// Arguments for the payoff command
#[derive(Args, Debug)]
pub struct PayoffArgs {
    /// Path to the debt JSON file
    #[arg(short, long)]
    pub debts: PathBuf,

    /// Total monthly budget (e.g. "500")
    #[arg(short, long)]
    pub budget: String,

    /// Repayment strategy (snowball, avalanche, hybrid)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Compare against paying this much extra on top of the minimums
    #[arg(short, long)]
    pub extra: Option<String>,

    /// Simulation start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub from: Option<String>,

    /// Write the month-by-month balance history to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Emit JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// Simulate the payoff of a debt basket and print the result
pub fn handle_payoff_command(args: PayoffArgs) -> PlannerResult<()> {
    let debts = load_debts(&args.debts)?;
    let budget = parse_amount(&args.budget)?;
    let strategy = parse_strategy(args.strategy.as_deref())?;
    let from = parse_date(args.from.as_deref())?;

    if let Some(extra) = &args.extra {
        let extra = parse_amount(extra)?;
        let Some(comparison) = PayoffComparison::run(&debts, strategy, extra, from) else {
            println!("Nothing to simulate: no debts with a positive balance.");
            return Ok(());
        };
        write_csv(&comparison.with_extra, args.csv.as_deref())?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        } else {
            print!("{}", format_comparison(&comparison));
        }
        return Ok(());
    }

    let Some(result) = PayoffResult::simulate(&debts, strategy, budget, from) else {
        println!("Nothing to simulate: add a monthly budget and at least one open debt.");
        return Ok(());
    };
    write_csv(&result, args.csv.as_deref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_payoff(&result));
    }
    Ok(())
}

fn write_csv(result: &PayoffResult, path: Option<&std::path::Path>) -> PlannerResult<()> {
    if let Some(path) = path {
        let file = std::fs::File::create(path)
            .map_err(|e| PlannerError::Export(format!("{}: {}", path.display(), e)))?;
        result.export_csv(file)?;
    }
    Ok(())
}
