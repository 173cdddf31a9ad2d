use anyhow::Result;
use clap::{Parser, Subcommand};

use envelope_planner::cli::{
    handle_health_command, handle_payday_command, handle_payoff_command, handle_scenario_command,
    handle_scenarios_command, HealthArgs, PaydayArgs, PayoffArgs, ScenarioArgs, ScenariosArgs,
};
use envelope_planner::config::{PlannerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "eplan",
    version,
    about = "Financial projection and simulation for envelope budgets",
    long_about = "eplan takes plain JSON records of budget envelopes and debts and \
                  answers the planning questions an envelope budget raises: how far \
                  ahead or behind each envelope is, how to split a paycheck, what a \
                  spending-reduction scenario frees up, and how a basket of debts \
                  pays off under snowball, avalanche, or hybrid repayment."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess envelope health (gaps, urgency, progress)
    Health(HealthArgs),

    /// Split a paycheck into envelope allocations and surplus suggestions
    Payday(PaydayArgs),

    /// Project a spending-reduction scenario
    Scenario(ScenarioArgs),

    /// List the canned scenario library
    Scenarios(ScenariosArgs),

    /// Simulate debt payoff under a repayment strategy
    Payoff(PayoffArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Health(args) => handle_health_command(args, &settings)?,
        Commands::Payday(args) => handle_payday_command(args, &settings)?,
        Commands::Scenario(args) => handle_scenario_command(args, &settings)?,
        Commands::Scenarios(args) => handle_scenarios_command(args, &settings)?,
        Commands::Payoff(args) => handle_payoff_command(args)?,
        Commands::Config => {
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Default pay cycle: {}", settings.default_pay_cycle);
            println!("Currency symbol:   {}", settings.currency_symbol);
        }
    }

    Ok(())
}
