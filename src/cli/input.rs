//! Input loading and validation for the CLI boundary
//!
//! The calculators assume validated numeric/date inputs; everything
//! crossing from the command line or a JSON file is checked here first.
//! Malformed records are rejected with a validation error before any
//! calculator runs.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{DebtLiability, Envelope, Money, PayCycle, RepaymentStrategy};

/// Load and validate an envelope set from a JSON file
pub fn load_envelopes(path: &Path) -> PlannerResult<Vec<Envelope>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| PlannerError::Io(format!("{}: {}", path.display(), e)))?;
    let envelopes: Vec<Envelope> = serde_json::from_str(&raw)?;
    for envelope in &envelopes {
        envelope.validate().map_err(|e| {
            PlannerError::invalid_record(&format!("Envelope '{}'", envelope.name), e.to_string())
        })?;
    }
    Ok(envelopes)
}

/// Load and validate a debt basket from a JSON file
pub fn load_debts(path: &Path) -> PlannerResult<Vec<DebtLiability>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| PlannerError::Io(format!("{}: {}", path.display(), e)))?;
    let debts: Vec<DebtLiability> = serde_json::from_str(&raw)?;
    for debt in &debts {
        debt.validate().map_err(|e| {
            PlannerError::invalid_record(&format!("Debt '{}'", debt.name), e.to_string())
        })?;
    }
    Ok(debts)
}

/// Parse a money amount from a command-line string
pub fn parse_amount(s: &str) -> PlannerResult<Money> {
    Money::parse(s).map_err(|e| PlannerError::Validation(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date, defaulting to today
pub fn parse_date(s: Option<&str>) -> PlannerResult<NaiveDate> {
    match s {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| PlannerError::InvalidDate(raw.to_string())),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a pay cycle, falling back to the configured default
pub fn parse_cycle(s: Option<&str>, default: PayCycle) -> PlannerResult<PayCycle> {
    match s {
        Some(raw) => raw.parse().map_err(PlannerError::Validation),
        None => Ok(default),
    }
}

/// Parse a repayment strategy, defaulting to snowball
pub fn parse_strategy(s: Option<&str>) -> PlannerResult<RepaymentStrategy> {
    match s {
        Some(raw) => raw.parse().map_err(PlannerError::Validation),
        None => Ok(RepaymentStrategy::default()),
    }
}
