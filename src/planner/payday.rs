//! Payday allocator
//!
//! Splits an incoming paycheck into the envelopes' committed per-pay
//! amounts and works out what to do with whatever is left over. The
//! regular allocations use the committed `per_pay_amount` on each
//! envelope (the budgeted figure), never the theoretical per-pay the
//! health model derives; the two answer different questions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Envelope, EnvelopeId, Money, PayCycle, PriorityTier};
use crate::planner::health::{assess_all, sort_by_urgency, EnvelopeHealth};

/// Smallest remainder worth suggesting a new goal for ($100.00)
const NEW_GOAL_MIN: Money = Money::from_major(100);

/// How the paycheck compares to the committed allocations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurplusStatus {
    Available,
    Exact,
    Shortfall,
}

impl fmt::Display for SurplusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Available => "available",
            Self::Exact => "exact",
            Self::Shortfall => "shortfall",
        };
        write!(f, "{}", name)
    }
}

/// What kind of use a surplus suggestion proposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    /// Top up one specific behind envelope
    TopUp,
    /// Split across all behind envelopes, proportions computed at apply
    /// time from the fresh health set
    TopUpSplit,
    /// Seed a new savings goal
    NewGoal,
    /// Keep as uncommitted buffer
    Buffer,
}

/// One ordered suggestion for using the surplus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurplusSuggestion {
    pub kind: SuggestionKind,
    /// Set only for `TopUp`
    pub envelope_id: Option<EnvelopeId>,
    pub envelope_name: Option<String>,
    pub suggested_amount: Money,
    pub description: String,
}

/// A regular per-envelope allocation line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegularAllocation {
    pub envelope_id: EnvelopeId,
    pub name: String,
    pub tier: PriorityTier,
    pub amount: Money,
}

/// Committed per-pay totals for one priority tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierSummary {
    pub tier: PriorityTier,
    pub envelope_count: usize,
    pub total_per_pay: Money,
}

/// Result of splitting one paycheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaydayAllocation {
    pub pay_amount: Money,
    pub pay_cycle: PayCycle,

    pub allocations: Vec<RegularAllocation>,
    pub total_regular: Money,

    /// pay amount minus total regular
    pub surplus: Money,
    pub surplus_status: SurplusStatus,

    /// Health set for context, most urgent first
    pub health: Vec<EnvelopeHealth>,

    /// Ordered surplus suggestions; empty unless surplus > 0
    pub suggestions: Vec<SurplusSuggestion>,

    pub tier_summaries: Vec<TierSummary>,
    pub behind_count: usize,
    pub behind_total_gap: Money,
}

impl PaydayAllocation {
    /// Split a paycheck across the envelope set
    pub fn allocate(
        pay_amount: Money,
        envelopes: &[Envelope],
        cycle: PayCycle,
        now: NaiveDate,
    ) -> Self {
        let allocations: Vec<RegularAllocation> = envelopes
            .iter()
            .filter(|e| e.is_expense())
            .map(|e| RegularAllocation {
                envelope_id: e.id,
                name: e.name.clone(),
                tier: e.tier,
                amount: e.per_pay_amount,
            })
            .collect();
        let total_regular: Money = allocations.iter().map(|a| a.amount).sum();

        let surplus = pay_amount - total_regular;
        let surplus_status = if surplus.is_positive() {
            SurplusStatus::Available
        } else if surplus.is_zero() {
            SurplusStatus::Exact
        } else {
            SurplusStatus::Shortfall
        };

        let mut health = assess_all(envelopes, cycle, now);
        sort_by_urgency(&mut health);

        let behind: Vec<&EnvelopeHealth> = health.iter().filter(|h| h.is_behind()).collect();
        let behind_count = behind.len();
        let behind_total_gap: Money = behind.iter().map(|h| h.gap).sum();

        let suggestions = if surplus.is_positive() {
            build_suggestions(surplus, &behind, behind_total_gap)
        } else {
            Vec::new()
        };

        let tier_summaries = PriorityTier::ALL
            .iter()
            .map(|&tier| {
                let in_tier: Vec<&RegularAllocation> =
                    allocations.iter().filter(|a| a.tier == tier).collect();
                TierSummary {
                    tier,
                    envelope_count: in_tier.len(),
                    total_per_pay: in_tier.iter().map(|a| a.amount).sum(),
                }
            })
            .collect();

        Self {
            pay_amount,
            pay_cycle: cycle,
            allocations,
            total_regular,
            surplus,
            surplus_status,
            health,
            suggestions,
            tier_summaries,
            behind_count,
            behind_total_gap,
        }
    }
}

/// Build the ordered suggestion list for a positive surplus
///
/// The amounts are sized so their sum never exceeds the surplus: the
/// split suggestion carries the remainder after the single top-up, and
/// exactly one terminal (new-goal or buffer) suggestion is emitted for
/// whatever is left after all gaps close.
fn build_suggestions(
    surplus: Money,
    behind: &[&EnvelopeHealth],
    behind_total_gap: Money,
) -> Vec<SurplusSuggestion> {
    let mut suggestions = Vec::new();
    let mut claimed = Money::zero();

    if let Some(most_urgent) = behind.first() {
        let amount = surplus.min(most_urgent.gap);
        claimed += amount;
        suggestions.push(SurplusSuggestion {
            kind: SuggestionKind::TopUp,
            envelope_id: Some(most_urgent.envelope_id),
            envelope_name: Some(most_urgent.name.clone()),
            suggested_amount: amount,
            description: format!(
                "Top up '{}' ({})",
                most_urgent.name, most_urgent.priority_reason
            ),
        });
    }

    if behind.len() >= 2 && surplus < behind_total_gap {
        // Whatever the single top-up left over, split proportionally
        let amount = surplus - claimed;
        if amount.is_positive() {
            claimed += amount;
            suggestions.push(SurplusSuggestion {
                kind: SuggestionKind::TopUpSplit,
                envelope_id: None,
                envelope_name: None,
                suggested_amount: amount,
                description: format!(
                    "Split {} across behind envelopes in proportion to their gaps",
                    amount
                ),
            });
        }
    }

    if behind.is_empty() || surplus > behind_total_gap {
        let remaining = surplus - behind_total_gap.min(surplus);
        if remaining.is_positive() {
            let (kind, description) = if remaining >= NEW_GOAL_MIN {
                (
                    SuggestionKind::NewGoal,
                    format!("Start a new savings goal with {}", remaining),
                )
            } else {
                (
                    SuggestionKind::Buffer,
                    format!("Keep {} as uncommitted buffer", remaining),
                )
            };
            suggestions.push(SurplusSuggestion {
                kind,
                envelope_id: None,
                envelope_name: None,
                suggested_amount: remaining,
                description,
            });
        }
    }

    suggestions
}

/// A concrete per-envelope amount produced by applying a suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedAllocation {
    /// `None` for new-goal/buffer amounts that stay unassigned
    pub envelope_id: Option<EnvelopeId>,
    pub envelope_name: Option<String>,
    pub amount: Money,
}

/// Apply a chosen suggestion
///
/// A separate operation from generation: the behind-envelope composition
/// can change between the two, so amounts are recomputed from a fresh
/// health assessment and the total applied never exceeds the available
/// surplus.
pub fn apply_suggestion(
    suggestion: &SurplusSuggestion,
    envelopes: &[Envelope],
    cycle: PayCycle,
    surplus: Money,
    now: NaiveDate,
) -> Vec<AppliedAllocation> {
    if !surplus.is_positive() {
        return Vec::new();
    }

    let mut health = assess_all(envelopes, cycle, now);
    sort_by_urgency(&mut health);

    match suggestion.kind {
        SuggestionKind::TopUp => {
            let Some(target_id) = suggestion.envelope_id else {
                return Vec::new();
            };
            let Some(target) = health.iter().find(|h| h.envelope_id == target_id) else {
                return Vec::new();
            };
            let amount = surplus.min(target.gap).floor_zero();
            if amount.is_zero() {
                return Vec::new();
            }
            vec![AppliedAllocation {
                envelope_id: Some(target.envelope_id),
                envelope_name: Some(target.name.clone()),
                amount,
            }]
        }
        SuggestionKind::TopUpSplit => {
            let behind: Vec<&EnvelopeHealth> = health.iter().filter(|h| h.is_behind()).collect();
            let total_gap: Money = behind.iter().map(|h| h.gap).sum();
            if !total_gap.is_positive() {
                return Vec::new();
            }
            let mut remaining = surplus;
            let mut applied = Vec::new();
            for h in behind {
                let proportion = h.gap.cents() as f64 / total_gap.cents() as f64;
                let amount = surplus.mul_f64(proportion).min(h.gap).min(remaining);
                if amount.is_positive() {
                    remaining -= amount;
                    applied.push(AppliedAllocation {
                        envelope_id: Some(h.envelope_id),
                        envelope_name: Some(h.name.clone()),
                        amount,
                    });
                }
            }
            applied
        }
        SuggestionKind::NewGoal | SuggestionKind::Buffer => {
            let amount = suggestion.suggested_amount.min(surplus);
            if amount.is_zero() {
                return Vec::new();
            }
            vec![AppliedAllocation {
                envelope_id: None,
                envelope_name: None,
                amount,
            }]
        }
    }
}
