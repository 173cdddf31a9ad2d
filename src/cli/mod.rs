//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging
//! the clap argument parsing with the planner core.

pub mod health;
pub mod input;
pub mod payday;
pub mod payoff;
pub mod scenario;

pub use health::{handle_health_command, HealthArgs};
pub use payday::{handle_payday_command, PaydayArgs};
pub use payoff::{handle_payoff_command, PayoffArgs};
pub use scenario::{
    handle_scenario_command, handle_scenarios_command, ScenarioArgs, ScenariosArgs,
};
