//! Core data models
//!
//! Plain records crossing the planner boundary: money, pay cycles,
//! envelopes, scenarios, and debt liabilities. The planner only ever
//! reads these; derived result records live in `crate::planner`.

pub mod debt;
pub mod envelope;
pub mod ids;
pub mod money;
pub mod pay_cycle;
pub mod scenario;

pub use debt::{
    estimate_minimum_payment, DebtKind, DebtLiability, DebtValidationError, RepaymentStrategy,
};
pub use envelope::{Envelope, EnvelopeKind, EnvelopeValidationError, Frequency, PriorityTier};
pub use ids::{DebtId, EnvelopeId};
pub use money::{Money, MoneyParseError};
pub use pay_cycle::PayCycle;
pub use scenario::{Scenario, ScenarioValidationError};
