//! Envelope model
//!
//! An envelope is a named budget bucket with a target amount for its
//! current due period, a running balance, and the committed per-pay
//! contribution the owner has budgeted for it. Envelope records are owned
//! by the caller; the planner only reads them.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EnvelopeId;
use super::money::Money;

/// Whether an envelope tracks income or an expense
///
/// Only `expense` envelopes participate in health and allocation math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeKind {
    Income,
    Expense,
}

/// Priority tier of an expense envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    Essential,
    Important,
    Discretionary,
}

impl PriorityTier {
    pub const ALL: [PriorityTier; 3] = [
        PriorityTier::Essential,
        PriorityTier::Important,
        PriorityTier::Discretionary,
    ];
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Essential => "essential",
            Self::Important => "important",
            Self::Discretionary => "discretionary",
        };
        write!(f, "{}", name)
    }
}

/// How often an envelope's target comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Annual,
    Once,
}

impl Frequency {
    /// Step a due date back exactly one recurrence period, yielding the
    /// start of the saving period that ends on the due date.
    ///
    /// `Once` has no recurrence to step through; it uses a one-month
    /// saving window.
    pub fn step_back(&self, due: NaiveDate) -> NaiveDate {
        match self {
            Self::Weekly => due - Duration::days(7),
            Self::Fortnightly => due - Duration::days(14),
            Self::Monthly | Self::Once => due
                .checked_sub_months(Months::new(1))
                .unwrap_or(due - Duration::days(30)),
            Self::Quarterly => due
                .checked_sub_months(Months::new(3))
                .unwrap_or(due - Duration::days(91)),
            Self::Annual => due
                .checked_sub_months(Months::new(12))
                .unwrap_or(due - Duration::days(365)),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weekly => "weekly",
            Self::Fortnightly => "fortnightly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
            Self::Once => "once",
        };
        write!(f, "{}", name)
    }
}

/// A budget envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Unique identifier
    pub id: EnvelopeId,

    /// Envelope name
    pub name: String,

    /// Income or expense
    pub kind: EnvelopeKind,

    /// Priority tier
    pub tier: PriorityTier,

    /// Target amount for the current due period
    pub target_amount: Money,

    /// Current balance
    #[serde(default)]
    pub balance: Money,

    /// Committed per-pay contribution (what the owner has budgeted,
    /// distinct from the theoretical per-pay the health model derives)
    #[serde(default)]
    pub per_pay_amount: Money,

    /// Recurrence frequency of the target
    pub frequency: Frequency,

    /// Next due date, if any
    #[serde(default)]
    pub next_due: Option<NaiveDate>,
}

impl Envelope {
    /// Create a new expense envelope
    pub fn new(
        name: impl Into<String>,
        tier: PriorityTier,
        target_amount: Money,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: EnvelopeId::new(),
            name: name.into(),
            kind: EnvelopeKind::Expense,
            tier,
            target_amount,
            balance: Money::zero(),
            per_pay_amount: Money::zero(),
            frequency,
            next_due: None,
        }
    }

    /// Set the current balance
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    /// Set the committed per-pay contribution
    pub fn with_per_pay(mut self, per_pay: Money) -> Self {
        self.per_pay_amount = per_pay;
        self
    }

    /// Set the next due date
    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.next_due = Some(due);
        self
    }

    /// Whether this envelope participates in health/allocation math
    pub fn is_expense(&self) -> bool {
        self.kind == EnvelopeKind::Expense
    }

    /// Case-insensitive name-substring match, used by scenario filters
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Validate the envelope record
    pub fn validate(&self) -> Result<(), EnvelopeValidationError> {
        if self.name.trim().is_empty() {
            return Err(EnvelopeValidationError::EmptyName);
        }
        if self.name.len() > 50 {
            return Err(EnvelopeValidationError::NameTooLong(self.name.len()));
        }
        if self.target_amount.is_negative() {
            return Err(EnvelopeValidationError::NegativeTarget);
        }
        if self.per_pay_amount.is_negative() {
            return Err(EnvelopeValidationError::NegativePerPay);
        }
        Ok(())
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.target_amount, self.frequency)
    }
}

/// Validation errors for envelope records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeTarget,
    NegativePerPay,
}

impl fmt::Display for EnvelopeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Envelope name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Envelope name too long ({} chars, max 50)", len),
            Self::NegativeTarget => write!(f, "Target amount cannot be negative"),
            Self::NegativePerPay => write!(f, "Per-pay amount cannot be negative"),
        }
    }
}

impl std::error::Error for EnvelopeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_envelope() {
        let env = Envelope::new(
            "Groceries",
            PriorityTier::Essential,
            Money::from_major(600),
            Frequency::Monthly,
        )
        .with_balance(Money::from_major(150))
        .with_per_pay(Money::from_major(300));

        assert!(env.is_expense());
        assert_eq!(env.balance.cents(), 15000);
        assert_eq!(env.per_pay_amount.cents(), 30000);
        assert!(env.next_due.is_none());
        assert!(env.validate().is_ok());
    }

    #[test]
    fn test_step_back_fixed_periods() {
        let due = date(2025, 3, 15);
        assert_eq!(Frequency::Weekly.step_back(due), date(2025, 3, 8));
        assert_eq!(Frequency::Fortnightly.step_back(due), date(2025, 3, 1));
        assert_eq!(Frequency::Monthly.step_back(due), date(2025, 2, 15));
        assert_eq!(Frequency::Quarterly.step_back(due), date(2024, 12, 15));
        assert_eq!(Frequency::Annual.step_back(due), date(2024, 3, 15));
    }

    #[test]
    fn test_step_back_once_uses_one_month() {
        let due = date(2025, 3, 31);
        assert_eq!(Frequency::Once.step_back(due), date(2025, 2, 28));
    }

    #[test]
    fn test_step_back_month_end_clamping() {
        // March 31 minus one month clamps to February's last day
        assert_eq!(Frequency::Monthly.step_back(date(2025, 3, 31)), date(2025, 2, 28));
        assert_eq!(Frequency::Monthly.step_back(date(2024, 3, 31)), date(2024, 2, 29));
    }

    #[test]
    fn test_name_matches() {
        let env = Envelope::new(
            "Streaming Subscriptions",
            PriorityTier::Discretionary,
            Money::from_major(40),
            Frequency::Monthly,
        );
        assert!(env.name_matches("subscri"));
        assert!(env.name_matches("STREAMING"));
        assert!(!env.name_matches("dining"));
    }

    #[test]
    fn test_validation() {
        let mut env = Envelope::new(
            "Rent",
            PriorityTier::Essential,
            Money::from_major(2000),
            Frequency::Monthly,
        );
        assert!(env.validate().is_ok());

        env.name = "  ".into();
        assert_eq!(env.validate(), Err(EnvelopeValidationError::EmptyName));

        env.name = "Rent".into();
        env.target_amount = Money::from_cents(-1);
        assert_eq!(env.validate(), Err(EnvelopeValidationError::NegativeTarget));
    }

    #[test]
    fn test_serde_roundtrip() {
        let env = Envelope::new(
            "Car Rego",
            PriorityTier::Important,
            Money::from_major(900),
            Frequency::Annual,
        )
        .with_due(date(2025, 11, 1));

        let json = serde_json::to_string(&env).unwrap();
        let back: Envelope = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, env.id);
        assert_eq!(back.next_due, env.next_due);
        assert_eq!(back.tier, PriorityTier::Important);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        // balance, per_pay_amount, and next_due are optional on the wire
        let json = r#"{
            "id": "7f3c2f9e-1a77-4a91-9f3e-2a1b3c4d5e6f",
            "name": "Utilities",
            "kind": "expense",
            "tier": "essential",
            "target_amount": 20000,
            "frequency": "quarterly"
        }"#;
        let env: Envelope = serde_json::from_str(json).unwrap();
        assert!(env.balance.is_zero());
        assert!(env.per_pay_amount.is_zero());
        assert!(env.next_due.is_none());
    }
}
