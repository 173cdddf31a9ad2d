//! `eplan scenario` and `eplan scenarios` commands

use std::path::PathBuf;

use clap::Args;

use crate::cli::input::{load_envelopes, parse_cycle, parse_date};
use crate::config::Settings;
use crate::display::format_scenario;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{PriorityTier, Scenario};
use crate::planner::ScenarioResult;

/// Arguments for the scenario command
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Path to the envelope JSON file
    #[arg(short, long)]
    pub envelopes: PathBuf,

    /// Run a canned scenario by (partial) name instead of a custom one
    #[arg(short, long, conflicts_with_all = ["tiers", "reduction", "months"])]
    pub name: Option<String>,

    /// Tiers a custom scenario touches (essential, important, discretionary)
    #[arg(short, long, value_delimiter = ',')]
    pub tiers: Vec<String>,

    /// Reduction percentage (0-100) for a custom scenario
    #[arg(short, long)]
    pub reduction: Option<f64>,

    /// Duration of a custom scenario, in calendar months
    #[arg(short, long)]
    pub months: Option<u32>,

    /// Narrow to envelopes whose name contains this substring
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Pay cycle (weekly, fortnightly, monthly); defaults to settings
    #[arg(short, long)]
    pub cycle: Option<String>,

    /// Projection date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Emit JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the scenarios listing command
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Pay cycle (weekly, fortnightly, monthly); defaults to settings
    #[arg(short, long)]
    pub cycle: Option<String>,
}

/// Project a canned or custom scenario against the envelope set
pub fn handle_scenario_command(args: ScenarioArgs, settings: &Settings) -> PlannerResult<()> {
    let envelopes = load_envelopes(&args.envelopes)?;
    let cycle = parse_cycle(args.cycle.as_deref(), settings.default_pay_cycle)?;
    let now = parse_date(args.date.as_deref())?;

    let scenario = match &args.name {
        Some(name) => {
            let needle = name.to_lowercase();
            Scenario::library(cycle)
                .into_iter()
                .find(|s| s.name.to_lowercase().contains(&needle))
                .ok_or_else(|| {
                    PlannerError::Validation(format!("no canned scenario matches '{}'", name))
                })?
        }
        None => {
            let tiers = parse_tiers(&args.tiers)?;
            let reduction = args.reduction.ok_or_else(|| {
                PlannerError::Validation("a custom scenario needs --reduction".into())
            })?;
            let months = args.months.ok_or_else(|| {
                PlannerError::Validation("a custom scenario needs --months".into())
            })?;
            let mut scenario = Scenario::new(
                "Custom scenario",
                cycle.pays_for_months(months),
                tiers,
                reduction,
            );
            if let Some(filter) = &args.filter {
                scenario = scenario.with_filter(filter.clone());
            }
            scenario
        }
    };
    scenario
        .validate()
        .map_err(|e| PlannerError::Validation(e.to_string()))?;

    let result = ScenarioResult::project(&envelopes, cycle, &scenario, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_scenario(&result));
    }
    Ok(())
}

/// List the canned scenario library for a pay cycle
pub fn handle_scenarios_command(args: ScenariosArgs, settings: &Settings) -> PlannerResult<()> {
    let cycle = parse_cycle(args.cycle.as_deref(), settings.default_pay_cycle)?;
    println!("Canned scenarios ({} pay cycle):", cycle);
    for scenario in Scenario::library(cycle) {
        match &scenario.specific_envelopes {
            Some(filter) => println!("  {} [filter: {}]", scenario, filter),
            None => println!("  {}", scenario),
        }
    }
    Ok(())
}

fn parse_tiers(raw: &[String]) -> PlannerResult<Vec<PriorityTier>> {
    if raw.is_empty() {
        return Err(PlannerError::Validation(
            "a custom scenario needs --tiers".into(),
        ));
    }
    raw.iter()
        .map(|s| match s.trim().to_lowercase().as_str() {
            "essential" => Ok(PriorityTier::Essential),
            "important" => Ok(PriorityTier::Important),
            "discretionary" => Ok(PriorityTier::Discretionary),
            other => Err(PlannerError::Validation(format!(
                "unknown tier '{}' (expected essential, important, or discretionary)",
                other
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiers() {
        let tiers = parse_tiers(&["essential".into(), "Discretionary".into()]).unwrap();
        assert_eq!(
            tiers,
            vec![PriorityTier::Essential, PriorityTier::Discretionary]
        );
        assert!(parse_tiers(&[]).is_err());
        assert!(parse_tiers(&["luxury".into()]).is_err());
    }
}
