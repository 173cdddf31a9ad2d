//! Envelope Planner - financial projection and simulation engine
//!
//! The core of a household envelope-budgeting application: given budget
//! envelopes with targets and due dates, it works out how far ahead or
//! behind each envelope is, how to split an incoming paycheck, what a
//! temporary spending reduction would free up, and how a basket of
//! debts pays off under different repayment strategies.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings (boundary defaults)
//! - `error`: custom error types for the boundary layer
//! - `models`: plain input records (envelopes, scenarios, debts)
//! - `planner`: the four pure calculators
//! - `display`: terminal rendering of result records
//! - `cli`: command handlers for the `eplan` binary
//!
//! The calculators in `planner` are synchronous, deterministic, and
//! side-effect-free; persistence, authentication, and serving results
//! over a network are the caller's concern.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use envelope_planner::models::{Envelope, Frequency, Money, PayCycle, PriorityTier};
//! use envelope_planner::planner::EnvelopeHealth;
//!
//! let envelope = Envelope::new(
//!     "Groceries",
//!     PriorityTier::Essential,
//!     Money::from_major(600),
//!     Frequency::Monthly,
//! )
//! .with_due(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
//!
//! let health = EnvelopeHealth::assess(
//!     &envelope,
//!     PayCycle::Fortnightly,
//!     NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
//! );
//! assert!(health.gap.is_positive());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod planner;

pub use error::{PlannerError, PlannerResult};
