//! Spending-reduction scenario model
//!
//! A scenario is a named hypothetical: for some duration (counted in pay
//! cycles), reduce the committed per-pay spend of the touched priority
//! tiers by a percentage, optionally narrowing to envelopes whose name
//! contains a substring.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::envelope::PriorityTier;
use super::pay_cycle::PayCycle;

/// A hypothetical temporary spending reduction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name
    pub name: String,

    /// Duration, in pays
    pub duration_pays: u32,

    /// Priority tiers the reduction touches
    pub tiers: Vec<PriorityTier>,

    /// Reduction percentage (0-100) applied to affected envelopes'
    /// committed per-pay amount
    pub reduction_pct: f64,

    /// Optional name-substring filter narrowing to specific envelopes
    #[serde(default)]
    pub specific_envelopes: Option<String>,
}

impl Scenario {
    /// Create a scenario touching whole tiers
    pub fn new(
        name: impl Into<String>,
        duration_pays: u32,
        tiers: Vec<PriorityTier>,
        reduction_pct: f64,
    ) -> Self {
        Self {
            name: name.into(),
            duration_pays,
            tiers,
            reduction_pct,
            specific_envelopes: None,
        }
    }

    /// Narrow the scenario to envelopes whose name contains `needle`
    pub fn with_filter(mut self, needle: impl Into<String>) -> Self {
        self.specific_envelopes = Some(needle.into());
        self
    }

    /// Whether a tier is touched by this scenario
    pub fn touches(&self, tier: PriorityTier) -> bool {
        self.tiers.contains(&tier)
    }

    /// Validate the scenario record
    pub fn validate(&self) -> Result<(), ScenarioValidationError> {
        if self.name.trim().is_empty() {
            return Err(ScenarioValidationError::EmptyName);
        }
        if self.duration_pays == 0 {
            return Err(ScenarioValidationError::ZeroDuration);
        }
        if self.tiers.is_empty() {
            return Err(ScenarioValidationError::NoTiers);
        }
        if !(0.0..=100.0).contains(&self.reduction_pct) {
            return Err(ScenarioValidationError::ReductionOutOfRange(self.reduction_pct));
        }
        Ok(())
    }

    /// The canned scenario library
    ///
    /// Durations are computed from the pay cycle (months x pays-per-month,
    /// rounded up), never hard-coded per cycle.
    pub fn library(cycle: PayCycle) -> Vec<Scenario> {
        vec![
            Scenario::new(
                "Pause discretionary spending",
                cycle.pays_for_months(3),
                vec![PriorityTier::Discretionary],
                100.0,
            ),
            Scenario::new(
                "Halve discretionary spending",
                cycle.pays_for_months(3),
                vec![PriorityTier::Discretionary],
                50.0,
            ),
            Scenario::new(
                "Pause subscriptions",
                cycle.pays_for_months(6),
                vec![PriorityTier::Discretionary, PriorityTier::Important],
                100.0,
            )
            .with_filter("subscri"),
            Scenario::new(
                "Cut dining out",
                cycle.pays_for_months(3),
                vec![PriorityTier::Discretionary],
                100.0,
            )
            .with_filter("dining"),
            Scenario::new(
                "Essentials-only sprint",
                cycle.pays_for_months(1),
                vec![PriorityTier::Discretionary, PriorityTier::Important],
                100.0,
            ),
        ]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (-{:.0}% for {} pays)",
            self.name, self.reduction_pct, self.duration_pays
        )
    }
}

/// Validation errors for scenario records
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioValidationError {
    EmptyName,
    ZeroDuration,
    NoTiers,
    ReductionOutOfRange(f64),
}

impl fmt::Display for ScenarioValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Scenario name cannot be empty"),
            Self::ZeroDuration => write!(f, "Scenario duration must be at least 1 pay"),
            Self::NoTiers => write!(f, "Scenario must touch at least one priority tier"),
            Self::ReductionOutOfRange(pct) => {
                write!(f, "Reduction must be between 0 and 100, got {}", pct)
            }
        }
    }
}

impl std::error::Error for ScenarioValidationError {}
