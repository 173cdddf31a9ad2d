//! Pay cycle representation
//!
//! The cadence at which the owning user is paid. Every conversion from
//! calendar time into "number of pays" goes through this type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often the user receives a paycheck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PayCycle {
    Weekly,
    #[default]
    Fortnightly,
    Monthly,
}

impl PayCycle {
    /// Average days between pays (30.44 is the mean Gregorian month length)
    pub fn days_per_pay(&self) -> f64 {
        match self {
            Self::Weekly => 7.0,
            Self::Fortnightly => 14.0,
            Self::Monthly => 30.44,
        }
    }

    /// Average pays per calendar month
    pub fn pays_per_month(&self) -> f64 {
        match self {
            Self::Weekly => 4.33,
            Self::Fortnightly => 2.17,
            Self::Monthly => 1.0,
        }
    }

    /// Whole pays between two dates, by ceiling division on elapsed days
    ///
    /// Returns 0 when `end` is not after `start`.
    pub fn pays_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let days = (end - start).num_days();
        if days <= 0 {
            return 0;
        }
        (days as f64 / self.days_per_pay()).ceil() as u32
    }

    /// Whole pays covering a span of calendar months
    pub fn pays_for_months(&self, months: u32) -> u32 {
        (months as f64 * self.pays_per_month()).ceil() as u32
    }
}

impl fmt::Display for PayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weekly => "weekly",
            Self::Fortnightly => "fortnightly",
            Self::Monthly => "monthly",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PayCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "fortnightly" | "biweekly" => Ok(Self::Fortnightly),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!(
                "unknown pay cycle '{}' (expected weekly, fortnightly, or monthly)",
                other
            )),
        }
    }
}
