//! The projection and simulation engine
//!
//! Four pure, stateless calculators, computed bottom-up: envelope
//! health, the scenario simulator and payday allocator built on it, and
//! the independent debt payoff simulator. Every function here takes its
//! inputs (including the "now" date) explicitly and returns a freshly
//! allocated result record; nothing reads the clock, touches I/O, or
//! keeps state between calls.

pub mod health;
pub mod payday;
pub mod payoff;
pub mod scenario;

pub use health::{assess_all, sort_by_urgency, total_positive_gap, EnvelopeHealth, GapStatus};
pub use payday::{
    apply_suggestion, AppliedAllocation, PaydayAllocation, RegularAllocation, SuggestionKind,
    SurplusStatus, SurplusSuggestion, TierSummary,
};
pub use payoff::{BalancePoint, DebtPayoffEntry, PayoffComparison, PayoffResult};
pub use scenario::{EnvelopeSaving, GapAllocation, ScenarioResult, TierHealth};
