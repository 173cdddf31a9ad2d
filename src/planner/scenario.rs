//! Scenario simulator
//!
//! Projects what a temporary spending reduction frees up, and how far
//! that freed money goes toward closing the current gaps across the
//! whole envelope set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Envelope, EnvelopeId, Money, PayCycle, PriorityTier, Scenario};
use crate::planner::health::{
    assess_all, sort_by_urgency, total_positive_gap, EnvelopeHealth,
};

/// Per-envelope savings line inside a scenario projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeSaving {
    pub envelope_id: EnvelopeId,
    pub name: String,
    pub tier: PriorityTier,
    pub old_per_pay: Money,
    pub new_per_pay: Money,
    pub saved_per_pay: Money,
}

/// One greedy allocation of projected savings toward an envelope's gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAllocation {
    pub envelope_id: EnvelopeId,
    pub name: String,
    pub amount: Money,
}

/// A health set partitioned by priority tier, for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierHealth {
    pub essential: Vec<EnvelopeHealth>,
    pub important: Vec<EnvelopeHealth>,
    pub discretionary: Vec<EnvelopeHealth>,
}

impl TierHealth {
    /// Partition a health set into the three tiers
    pub fn partition(health: Vec<EnvelopeHealth>) -> Self {
        let mut out = Self {
            essential: Vec::new(),
            important: Vec::new(),
            discretionary: Vec::new(),
        };
        for h in health {
            match h.tier {
                PriorityTier::Essential => out.essential.push(h),
                PriorityTier::Important => out.important.push(h),
                PriorityTier::Discretionary => out.discretionary.push(h),
            }
        }
        out
    }
}

/// Projection of a spending-reduction scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub pay_cycle: PayCycle,

    /// Envelopes the reduction touches, with old/new/saved per-pay
    pub affected: Vec<EnvelopeSaving>,

    pub savings_per_pay: Money,
    pub savings_per_month: Money,
    pub total_savings_over_period: Money,

    /// Sum of positive gaps across all expense envelopes today
    pub current_gap: Money,

    /// Greedy distribution of the projected savings, most urgent gap
    /// first, each capped at its own gap
    pub gap_allocations: Vec<GapAllocation>,

    /// Gap left unclosed after the scenario (never negative)
    pub gap_after_scenario: Money,

    /// Pays needed to close today's gap at the projected savings rate
    /// (0 when the scenario saves nothing)
    pub pays_to_close_gap: u32,

    /// Savings left over once every gap is closed
    pub leftover_buffer: Money,

    /// Health set re-assessed with the allocations applied, by tier
    pub projected_health: TierHealth,
}

impl ScenarioResult {
    /// Project a scenario against the full envelope set
    pub fn project(
        envelopes: &[Envelope],
        cycle: PayCycle,
        scenario: &Scenario,
        now: NaiveDate,
    ) -> Self {
        let affected: Vec<EnvelopeSaving> = envelopes
            .iter()
            .filter(|e| e.is_expense() && scenario.touches(e.tier))
            .filter(|e| match &scenario.specific_envelopes {
                Some(needle) => e.name_matches(needle),
                None => true,
            })
            .map(|e| {
                let saved = e.per_pay_amount.percent(scenario.reduction_pct);
                EnvelopeSaving {
                    envelope_id: e.id,
                    name: e.name.clone(),
                    tier: e.tier,
                    old_per_pay: e.per_pay_amount,
                    new_per_pay: e.per_pay_amount - saved,
                    saved_per_pay: saved,
                }
            })
            .collect();

        let savings_per_pay: Money = affected.iter().map(|a| a.saved_per_pay).sum();
        let savings_per_month = savings_per_pay.mul_f64(cycle.pays_per_month());
        let total_savings_over_period = savings_per_pay.mul_f64(scenario.duration_pays as f64);

        let mut health = assess_all(envelopes, cycle, now);
        sort_by_urgency(&mut health);
        let current_gap = total_positive_gap(&health);

        // Greedy gap-closing: most urgent first, capped at each gap
        let mut gap_allocations = Vec::new();
        let mut remaining = total_savings_over_period;
        for h in &health {
            if !h.gap.is_positive() || remaining.is_zero() {
                continue;
            }
            let amount = remaining.min(h.gap);
            if amount.is_positive() {
                gap_allocations.push(GapAllocation {
                    envelope_id: h.envelope_id,
                    name: h.name.clone(),
                    amount,
                });
                remaining -= amount;
            }
        }

        let gap_after_scenario = (current_gap - total_savings_over_period).floor_zero();
        let pays_to_close_gap = if savings_per_pay.is_positive() && current_gap.is_positive() {
            (current_gap.cents() as f64 / savings_per_pay.cents() as f64).ceil() as u32
        } else {
            0
        };
        let leftover_buffer = (total_savings_over_period - current_gap).floor_zero();

        // Re-assess with the allocations applied to balances
        let allocated: HashMap<EnvelopeId, Money> = gap_allocations
            .iter()
            .map(|a| (a.envelope_id, a.amount))
            .collect();
        let boosted: Vec<Envelope> = envelopes
            .iter()
            .map(|e| {
                let mut e = e.clone();
                if let Some(extra) = allocated.get(&e.id) {
                    e.balance += *extra;
                }
                e
            })
            .collect();
        let projected_health = TierHealth::partition(assess_all(&boosted, cycle, now));

        Self {
            scenario: scenario.clone(),
            pay_cycle: cycle,
            affected,
            savings_per_pay,
            savings_per_month,
            total_savings_over_period,
            current_gap,
            gap_allocations,
            gap_after_scenario,
            pays_to_close_gap,
            leftover_buffer,
            projected_health,
        }
    }
}
