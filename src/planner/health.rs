//! Envelope health model
//!
//! For one envelope at one instant: where the balance should be by now,
//! where it actually is, the gap between the two, and an urgency score.
//! This is the leaf calculator; the scenario simulator and payday
//! allocator both build on it.
//!
//! The health model derives its own theoretical per-pay from the target
//! and period length. That figure answers "what is theoretically needed"
//! and is deliberately distinct from the envelope's committed
//! `per_pay_amount` ("what's budgeted"), which the payday allocator uses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Envelope, EnvelopeId, Money, PayCycle, PriorityTier};

/// Half-width of the on-track band, in cents ($50.00)
///
/// Fixed regardless of envelope size; very large or very small targets
/// may bucket inconsistently as a result.
const GAP_BAND_CENTS: i64 = 5_000;

/// Where an envelope sits relative to its expected accumulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapStatus {
    Ahead,
    OnTrack,
    Behind,
}

impl GapStatus {
    /// Bucket a gap into the fixed +/- $50 band
    pub fn from_gap(gap: Money) -> Self {
        if gap.cents() > GAP_BAND_CENTS {
            Self::Behind
        } else if gap.cents() < -GAP_BAND_CENTS {
            Self::Ahead
        } else {
            Self::OnTrack
        }
    }
}

impl fmt::Display for GapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ahead => "ahead",
            Self::OnTrack => "on-track",
            Self::Behind => "behind",
        };
        write!(f, "{}", name)
    }
}

/// Derived health snapshot for one envelope
///
/// Ephemeral: recomputed on every call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeHealth {
    pub envelope_id: EnvelopeId,
    pub name: String,
    pub tier: PriorityTier,

    /// Start of the saving period (due date stepped back one frequency
    /// period); `None` when the envelope has no due date
    pub period_start: Option<NaiveDate>,

    /// Whole pays elapsed since the period start, clamped to the period
    pub pays_elapsed: u32,

    /// Whole pays in the full saving period
    pub pays_total: u32,

    /// Theoretical per-pay contribution implied by target / period length
    pub regular_per_pay: Money,

    /// What should have accumulated by now (never exceeds the target)
    pub should_have_saved: Money,

    /// should-have-saved minus current balance; positive = behind
    pub gap: Money,

    pub gap_status: GapStatus,

    /// Balance as a percentage of target, clamped to 0-100
    pub percent_complete: f64,

    /// Days until the due date (negative when overdue); `None` without a
    /// due date
    pub days_until_due: Option<i64>,

    /// Whole pays remaining before the due date
    pub pays_until_due: u32,

    /// Urgency score, lower = more urgent; infinite without a due date
    pub priority_score: f64,

    /// Human-readable explanation of the score
    pub priority_reason: String,
}

impl EnvelopeHealth {
    /// Assess one envelope at `now`
    ///
    /// Deterministic and side-effect-free: identical inputs always yield
    /// an identical record. An envelope without a due date gets a neutral
    /// record (gap 0, on-track, infinite priority score) rather than an
    /// error.
    pub fn assess(envelope: &Envelope, cycle: PayCycle, now: NaiveDate) -> Self {
        let percent_complete = envelope
            .balance
            .percent_of(envelope.target_amount)
            .clamp(0.0, 100.0);

        let due = match envelope.next_due {
            Some(due) => due,
            None => {
                return Self {
                    envelope_id: envelope.id,
                    name: envelope.name.clone(),
                    tier: envelope.tier,
                    period_start: None,
                    pays_elapsed: 0,
                    pays_total: 0,
                    regular_per_pay: Money::zero(),
                    should_have_saved: Money::zero(),
                    gap: Money::zero(),
                    gap_status: GapStatus::OnTrack,
                    percent_complete,
                    days_until_due: None,
                    pays_until_due: 0,
                    priority_score: f64::INFINITY,
                    priority_reason: "no due date".into(),
                };
            }
        };

        let period_start = envelope.frequency.step_back(due);
        let pays_total = cycle.pays_between(period_start, due);
        let pays_elapsed = cycle.pays_between(period_start, now).min(pays_total);

        let regular_per_pay = if pays_total == 0 {
            Money::zero()
        } else {
            envelope.target_amount.mul_f64(1.0 / pays_total as f64)
        };
        let should_have_saved = regular_per_pay
            .mul_f64(pays_elapsed as f64)
            .min(envelope.target_amount);

        let gap = should_have_saved - envelope.balance;
        let gap_status = GapStatus::from_gap(gap);

        let days_until_due = (due - now).num_days();
        let pays_until_due = cycle.pays_between(now, due);

        let gap_severity = gap.percent_of(envelope.target_amount).max(0.0);
        let priority_score = days_until_due as f64 - gap_severity;
        let priority_reason = if gap_status == GapStatus::Behind {
            format!(
                "behind by {:.0}% of target, due in {} days",
                gap_severity, days_until_due
            )
        } else if days_until_due <= 7 {
            format!("due in {} days", days_until_due)
        } else {
            "on track".into()
        };

        Self {
            envelope_id: envelope.id,
            name: envelope.name.clone(),
            tier: envelope.tier,
            period_start: Some(period_start),
            pays_elapsed,
            pays_total,
            regular_per_pay,
            should_have_saved,
            gap,
            gap_status,
            percent_complete,
            days_until_due: Some(days_until_due),
            pays_until_due,
            priority_score,
            priority_reason,
        }
    }

    /// Whether this envelope needs topping up (positive gap, behind band)
    pub fn is_behind(&self) -> bool {
        self.gap.is_positive() && self.gap_status == GapStatus::Behind
    }
}

/// Assess every expense envelope in the set
pub fn assess_all(envelopes: &[Envelope], cycle: PayCycle, now: NaiveDate) -> Vec<EnvelopeHealth> {
    envelopes
        .iter()
        .filter(|e| e.is_expense())
        .map(|e| EnvelopeHealth::assess(e, cycle, now))
        .collect()
}

/// Sum of positive gaps across a health set
pub fn total_positive_gap(health: &[EnvelopeHealth]) -> Money {
    health
        .iter()
        .filter(|h| h.gap.is_positive())
        .map(|h| h.gap)
        .sum()
}

/// Sort a health set ascending by priority score (most urgent first)
pub fn sort_by_urgency(health: &mut [EnvelopeHealth]) {
    health.sort_by(|a, b| a.priority_score.total_cmp(&b.priority_score));
}
