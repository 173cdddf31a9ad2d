//! Debt liability model
//!
//! An interest-bearing balance with a minimum payment. The minimum is
//! usually estimated heuristically from the balance size and liability
//! kind; an explicitly supplied minimum is capped at the balance the same
//! way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::DebtId;
use super::money::Money;

/// Kind of liability, used by the minimum-payment heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DebtKind {
    CreditCard,
    PersonalLoan,
    CarLoan,
    StudentLoan,
    #[default]
    Other,
}

impl fmt::Display for DebtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreditCard => "credit card",
            Self::PersonalLoan => "personal loan",
            Self::CarLoan => "car loan",
            Self::StudentLoan => "student loan",
            Self::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Estimate a minimum monthly payment from balance size and kind
///
/// Credit cards: 2% of balance, at least $25. Personal/car loans: 1.5%,
/// at least $50. Student loans: 1%, at least $40. Other: 1.5%, at least
/// $25. Always capped at the balance itself.
pub fn estimate_minimum_payment(balance: Money, kind: DebtKind) -> Money {
    let (pct, floor) = match kind {
        DebtKind::CreditCard => (2.0, Money::from_major(25)),
        DebtKind::PersonalLoan | DebtKind::CarLoan => (1.5, Money::from_major(50)),
        DebtKind::StudentLoan => (1.0, Money::from_major(40)),
        DebtKind::Other => (1.5, Money::from_major(25)),
    };
    balance.percent(pct).max(floor).min(balance)
}

/// Debt repayment ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentStrategy {
    /// Smallest balance first
    #[default]
    Snowball,
    /// Highest interest rate first
    Avalanche,
    /// Highest rate first, but rates within 1.5 percentage points are
    /// tied and broken by smallest balance
    Hybrid,
}

impl fmt::Display for RepaymentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Snowball => "snowball",
            Self::Avalanche => "avalanche",
            Self::Hybrid => "hybrid",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RepaymentStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "snowball" => Ok(Self::Snowball),
            "avalanche" => Ok(Self::Avalanche),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(format!(
                "unknown strategy '{}' (expected snowball, avalanche, or hybrid)",
                other
            )),
        }
    }
}

/// An interest-bearing liability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtLiability {
    /// Unique identifier
    pub id: DebtId,

    /// Liability name
    pub name: String,

    /// Outstanding balance
    pub balance: Money,

    /// Annual interest rate, in percent
    pub interest_rate: f64,

    /// Liability kind
    #[serde(default)]
    pub kind: DebtKind,

    /// Minimum monthly payment; estimated from balance and kind when
    /// absent on the wire
    #[serde(default)]
    pub minimum_payment: Option<Money>,
}

impl DebtLiability {
    /// Create a liability with a heuristically estimated minimum payment
    pub fn new(
        name: impl Into<String>,
        balance: Money,
        interest_rate: f64,
        kind: DebtKind,
    ) -> Self {
        Self {
            id: DebtId::new(),
            name: name.into(),
            balance,
            interest_rate,
            kind,
            minimum_payment: Some(estimate_minimum_payment(balance, kind)),
        }
    }

    /// Override the minimum payment (still capped at the balance)
    pub fn with_minimum(mut self, minimum: Money) -> Self {
        self.minimum_payment = Some(minimum.min(self.balance));
        self
    }

    /// The effective minimum payment: supplied or estimated, capped at
    /// the balance
    pub fn effective_minimum(&self) -> Money {
        self.minimum_payment
            .unwrap_or_else(|| estimate_minimum_payment(self.balance, self.kind))
            .min(self.balance)
    }

    /// Validate the liability record
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.name.trim().is_empty() {
            return Err(DebtValidationError::EmptyName);
        }
        if self.balance.is_negative() {
            return Err(DebtValidationError::NegativeBalance);
        }
        if self.interest_rate < 0.0 {
            return Err(DebtValidationError::NegativeRate(self.interest_rate));
        }
        Ok(())
    }
}

impl fmt::Display for DebtLiability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} @ {:.2}%)", self.name, self.balance, self.interest_rate)
    }
}

/// Validation errors for debt records
#[derive(Debug, Clone, PartialEq)]
pub enum DebtValidationError {
    EmptyName,
    NegativeBalance,
    NegativeRate(f64),
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Debt name cannot be empty"),
            Self::NegativeBalance => write!(f, "Debt balance cannot be negative"),
            Self::NegativeRate(r) => write!(f, "Interest rate cannot be negative, got {}", r),
        }
    }
}

impl std::error::Error for DebtValidationError {}
