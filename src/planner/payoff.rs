//! Debt payoff simulator
//!
//! Month-by-month amortization of a basket of interest-bearing balances
//! under a repayment strategy. Working state is a set of short-lived
//! local records scoped to one simulation call; callers only ever see
//! the finished result record.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{DebtId, DebtLiability, Money, RepaymentStrategy};

/// Hard ceiling on simulated months (50 years)
const MAX_MONTHS: u32 = 600;

/// A balance at/under this many currency units counts as paid off
const PAYOFF_EPSILON: f64 = 0.5;

/// Months of sub-epsilon progress tolerated before aborting
const STAGNATION_LIMIT: u32 = 3;

/// Projections beyond this many months carry a warning (20 years)
const MULTI_DECADE_MONTHS: u32 = 240;

/// Rates within this many percentage points tie under the hybrid strategy
const HYBRID_RATE_BAND: f64 = 1.5;

/// A debt reaching zero, with the month it happened
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtPayoffEntry {
    pub debt_id: DebtId,
    pub name: String,
    pub month: u32,
}

/// Aggregate balance at the end of one simulated month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancePoint {
    pub month: u32,
    pub balance: Money,
}

/// Outcome of one payoff simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffResult {
    pub strategy: RepaymentStrategy,

    /// Months simulated until zero balance (or until the abort)
    pub months: u32,

    pub interest_paid: Money,

    /// Simulation start date plus `months`
    pub payoff_date: NaiveDate,

    /// Debts in the order they reached zero
    pub payoff_order: Vec<DebtPayoffEntry>,

    /// Aggregate balance, month by month
    pub history: Vec<BalancePoint>,

    pub warnings: Vec<String>,

    /// max(requested budget, sum of minimum payments)
    pub monthly_commitment: Money,

    /// True when the simulation aborted before reaching zero
    pub stalled: bool,
}

/// Working copy of one debt, local to a single simulation call
struct WorkingDebt {
    debt_id: DebtId,
    name: String,
    balance: f64,
    monthly_rate: f64,
    minimum: f64,
    paid_off: bool,
}

impl PayoffResult {
    /// Simulate paying off a basket of debts
    ///
    /// Returns `None` for a non-positive budget or a basket with no
    /// positive balances; the caller should prompt for more input
    /// rather than treat this as a fault.
    pub fn simulate(
        debts: &[DebtLiability],
        strategy: RepaymentStrategy,
        monthly_budget: Money,
        from: NaiveDate,
    ) -> Option<Self> {
        if !monthly_budget.is_positive() {
            return None;
        }

        let mut working: Vec<WorkingDebt> = debts
            .iter()
            .filter(|d| d.balance.is_positive())
            .map(|d| WorkingDebt {
                debt_id: d.id,
                name: d.name.clone(),
                balance: d.balance.as_major(),
                monthly_rate: d.interest_rate / 100.0 / 12.0,
                minimum: d.effective_minimum().as_major(),
                paid_off: false,
            })
            .collect();
        if working.is_empty() {
            return None;
        }

        order_by_strategy(&mut working, strategy);

        // Never run with less than the combined minimums
        let total_minimums: f64 = working.iter().map(|d| d.minimum).sum();
        let commitment = monthly_budget.as_major().max(total_minimums);

        let mut total_interest = 0.0;
        let mut payoff_order = Vec::new();
        let mut history = Vec::new();
        let mut warnings = Vec::new();
        let mut stalled = false;

        let mut prev_aggregate: f64 = working.iter().map(|d| d.balance).sum();
        let mut stagnant_months = 0u32;
        let mut months = 0u32;

        for month in 1..=MAX_MONTHS {
            months = month;

            // 1. Accrue monthly interest on every open balance
            for debt in working.iter_mut().filter(|d| !d.paid_off) {
                let interest = debt.balance * debt.monthly_rate;
                debt.balance += interest;
                total_interest += interest;
            }

            // 2. Pay capped minimums from the shared pool, strategy order
            let mut pool = commitment;
            for debt in working.iter_mut().filter(|d| !d.paid_off) {
                if pool <= 0.0 {
                    break;
                }
                let payment = debt.minimum.min(debt.balance).min(pool);
                debt.balance -= payment;
                pool -= payment;
            }

            // 3. Leftover pool rolls onto the first open debt, moving to
            //    the next only once the current one zeroes this month
            for debt in working.iter_mut().filter(|d| !d.paid_off) {
                if pool <= 0.0 {
                    break;
                }
                if debt.balance <= 0.0 {
                    continue;
                }
                let payment = debt.balance.min(pool);
                debt.balance -= payment;
                pool -= payment;
            }

            // 4. Mark newly cleared debts, record the history point
            for debt in working.iter_mut() {
                if !debt.paid_off && debt.balance <= PAYOFF_EPSILON {
                    debt.paid_off = true;
                    debt.balance = 0.0;
                    payoff_order.push(DebtPayoffEntry {
                        debt_id: debt.debt_id,
                        name: debt.name.clone(),
                        month,
                    });
                }
            }
            let aggregate: f64 = working.iter().map(|d| d.balance).sum();
            history.push(BalancePoint {
                month,
                balance: Money::from_major_f64(aggregate),
            });

            if aggregate <= PAYOFF_EPSILON {
                break;
            }

            // 5. Stagnation guard
            if prev_aggregate - aggregate < PAYOFF_EPSILON {
                stagnant_months += 1;
                if stagnant_months >= STAGNATION_LIMIT {
                    warnings.push(
                        "Payments are barely covering interest; the balance is not going down"
                            .into(),
                    );
                    stalled = true;
                    break;
                }
            } else {
                stagnant_months = 0;
            }
            prev_aggregate = aggregate;
        }

        let final_balance: f64 = working.iter().map(|d| d.balance).sum();
        if !stalled && final_balance > PAYOFF_EPSILON {
            warnings.push(format!(
                "Projection exceeds the {}-year simulation ceiling",
                MAX_MONTHS / 12
            ));
            stalled = true;
        }
        if !stalled && months > MULTI_DECADE_MONTHS {
            warnings.push("Payoff is projected to take more than two decades".into());
        }

        Some(Self {
            strategy,
            months,
            interest_paid: Money::from_major_f64(total_interest),
            payoff_date: from.checked_add_months(Months::new(months)).unwrap_or(from),
            payoff_order,
            history,
            warnings,
            monthly_commitment: Money::from_major_f64(commitment),
            stalled,
        })
    }

    /// Export the month-by-month balance history as CSV
    pub fn export_csv<W: std::io::Write>(&self, writer: W) -> crate::error::PlannerResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["month", "balance"])
            .map_err(|e| crate::error::PlannerError::Export(e.to_string()))?;
        for point in &self.history {
            wtr.write_record([point.month.to_string(), format!("{:.2}", point.balance.as_major())])
                .map_err(|e| crate::error::PlannerError::Export(e.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Sort working debts into repayment order
///
/// Hybrid buckets rates into bands so that near-equal rates compare as
/// tied and fall back to smallest balance, keeping the comparison a
/// proper ordering.
fn order_by_strategy(working: &mut [WorkingDebt], strategy: RepaymentStrategy) {
    match strategy {
        RepaymentStrategy::Snowball => {
            working.sort_by(|a, b| a.balance.total_cmp(&b.balance));
        }
        RepaymentStrategy::Avalanche => {
            working.sort_by(|a, b| b.monthly_rate.total_cmp(&a.monthly_rate));
        }
        RepaymentStrategy::Hybrid => {
            working.sort_by(|a, b| {
                let band_a = (a.monthly_rate * 1200.0 / HYBRID_RATE_BAND).floor() as i64;
                let band_b = (b.monthly_rate * 1200.0 / HYBRID_RATE_BAND).floor() as i64;
                band_b.cmp(&band_a).then(a.balance.total_cmp(&b.balance))
            });
        }
    }
}

/// Minimum-only vs minimum-plus-extra runs, side by side
///
/// The simulator itself stays single-run; reporting what an extra
/// payment saves is this caller-level concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffComparison {
    pub minimum_only: PayoffResult,
    pub with_extra: PayoffResult,
    pub extra_per_month: Money,
    pub months_saved: u32,
    pub interest_saved: Money,
}

impl PayoffComparison {
    /// Run the simulator twice and compare
    pub fn run(
        debts: &[DebtLiability],
        strategy: RepaymentStrategy,
        extra_per_month: Money,
        from: NaiveDate,
    ) -> Option<Self> {
        let minimums: Money = debts
            .iter()
            .filter(|d| d.balance.is_positive())
            .map(|d| d.effective_minimum())
            .sum();
        let minimum_only = PayoffResult::simulate(debts, strategy, minimums, from)?;
        let with_extra =
            PayoffResult::simulate(debts, strategy, minimums + extra_per_month, from)?;

        let months_saved = minimum_only.months.saturating_sub(with_extra.months);
        let interest_saved =
            (minimum_only.interest_paid - with_extra.interest_paid).floor_zero();

        Some(Self {
            minimum_only,
            with_extra,
            extra_per_month,
            months_saved,
            interest_saved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DebtKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn from_date() -> NaiveDate {
        date(2025, 6, 1)
    }

    fn debt(name: &str, balance_major: i64, rate: f64, minimum_major: i64) -> DebtLiability {
        DebtLiability::new(name, Money::from_major(balance_major), rate, DebtKind::Other)
            .with_minimum(Money::from_major(minimum_major))
    }

    #[test]
    fn test_none_for_zero_budget() {
        let debts = vec![debt("Visa", 1000, 12.0, 30)];
        assert!(PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::zero(),
            from_date()
        )
        .is_none());
    }

    #[test]
    fn test_none_for_empty_or_cleared_basket() {
        assert!(PayoffResult::simulate(
            &[],
            RepaymentStrategy::Snowball,
            Money::from_major(100),
            from_date()
        )
        .is_none());

        let cleared = vec![debt("Visa", 0, 12.0, 30)];
        assert!(PayoffResult::simulate(
            &cleared,
            RepaymentStrategy::Snowball,
            Money::from_major(100),
            from_date()
        )
        .is_none());
    }

    #[test]
    fn test_single_debt_converges() {
        let debts = vec![debt("Visa", 1000, 12.0, 30)];
        let result = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(30),
            from_date(),
        )
        .unwrap();

        assert!(!result.stalled);
        assert!(result.months < MAX_MONTHS);
        assert_eq!(result.payoff_order.len(), 1);
        assert_eq!(result.payoff_order[0].name, "Visa");
        assert!(result.interest_paid.is_positive());
        assert_eq!(
            result.payoff_date,
            from_date()
                .checked_add_months(Months::new(result.months))
                .unwrap()
        );
    }

    #[test]
    fn test_extra_payment_saves_time_and_interest() {
        let debts = vec![debt("Visa", 1000, 12.0, 30)];
        let minimum_only = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(30),
            from_date(),
        )
        .unwrap();
        let with_extra = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(100),
            from_date(),
        )
        .unwrap();

        assert!(with_extra.months < minimum_only.months);
        assert!(with_extra.interest_paid < minimum_only.interest_paid);
    }

    #[test]
    fn test_balance_history_is_non_increasing() {
        let debts = vec![
            debt("Visa", 1000, 22.0, 30),
            debt("Car", 5000, 8.0, 150),
        ];
        let result = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Avalanche,
            Money::from_major(400),
            from_date(),
        )
        .unwrap();

        assert!(!result.stalled);
        for pair in result.history.windows(2) {
            assert!(
                pair[1].balance <= pair[0].balance,
                "balance rose from {} to {}",
                pair[0].balance,
                pair[1].balance
            );
        }
    }

    #[test]
    fn test_strategy_ordering() {
        let debts = vec![debt("A", 1000, 22.0, 30), debt("B", 300, 10.0, 30)];

        let snowball = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(400),
            from_date(),
        )
        .unwrap();
        assert_eq!(snowball.payoff_order[0].name, "B");

        let avalanche = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Avalanche,
            Money::from_major(400),
            from_date(),
        )
        .unwrap();
        assert_eq!(avalanche.payoff_order[0].name, "A");
    }

    #[test]
    fn test_hybrid_breaks_near_ties_by_balance() {
        // 19.9% and 20.4% sit within the 1.5-point band; the smaller
        // balance goes first despite the slightly lower rate
        let debts = vec![debt("Big", 5000, 20.4, 100), debt("Small", 800, 19.9, 30)];
        let result = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Hybrid,
            Money::from_major(500),
            from_date(),
        )
        .unwrap();
        assert_eq!(result.payoff_order[0].name, "Small");
    }

    #[test]
    fn test_hybrid_prefers_clearly_higher_rate() {
        let debts = vec![debt("Cheap", 800, 6.0, 30), debt("Dear", 5000, 21.0, 100)];
        let result = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Hybrid,
            Money::from_major(600),
            from_date(),
        )
        .unwrap();
        assert_eq!(result.payoff_order[0].name, "Dear");
    }

    #[test]
    fn test_commitment_never_below_minimums() {
        let debts = vec![debt("Visa", 1000, 12.0, 30), debt("Car", 5000, 8.0, 150)];
        let result = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(50),
            from_date(),
        )
        .unwrap();
        assert_eq!(result.monthly_commitment, Money::from_major(180));
    }

    #[test]
    fn test_stagnation_aborts_with_warning() {
        // 5% monthly interest on 10k dwarfs a $100 commitment
        let debts = vec![debt("Payday", 10_000, 60.0, 100)];
        let result = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(100),
            from_date(),
        )
        .unwrap();

        assert!(result.stalled);
        assert!(result.months <= STAGNATION_LIMIT + 1);
        assert!(result.warnings.iter().any(|w| w.contains("barely covering interest")));
        assert!(result.payoff_order.is_empty());
    }

    #[test]
    fn test_ceiling_aborts_with_warning() {
        // Decreases steadily (about a dollar a month at first) but needs
        // roughly 614 months to clear, past the 600-month ceiling
        let debts = vec![debt("Mortgage", 13_200, 9.0, 100)];
        let result = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(100),
            from_date(),
        )
        .unwrap();

        assert!(result.stalled);
        assert_eq!(result.months, MAX_MONTHS);
        assert!(result.warnings.iter().any(|w| w.contains("ceiling")));
    }

    #[test]
    fn test_determinism_allows_double_invocation() {
        let debts = vec![debt("Visa", 1000, 12.0, 30)];
        let a = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(100),
            from_date(),
        )
        .unwrap();
        let b = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(100),
            from_date(),
        )
        .unwrap();
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn test_comparison_runs_twice() {
        let debts = vec![debt("Visa", 1000, 12.0, 30)];
        let comparison = PayoffComparison::run(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(70),
            from_date(),
        )
        .unwrap();

        assert!(comparison.months_saved > 0);
        assert!(comparison.interest_saved.is_positive());
        assert_eq!(
            comparison.minimum_only.monthly_commitment,
            Money::from_major(30)
        );
        assert_eq!(
            comparison.with_extra.monthly_commitment,
            Money::from_major(100)
        );
    }

    #[test]
    fn test_csv_export() {
        let debts = vec![debt("Visa", 1000, 12.0, 30)];
        let result = PayoffResult::simulate(
            &debts,
            RepaymentStrategy::Snowball,
            Money::from_major(100),
            from_date(),
        )
        .unwrap();

        let mut out = Vec::new();
        result.export_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        assert!(csv.starts_with("month,balance"));
        assert_eq!(csv.lines().count(), result.history.len() + 1);
    }
}
