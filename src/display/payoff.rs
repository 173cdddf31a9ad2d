//! Debt payoff rendering

use crate::planner::{PayoffComparison, PayoffResult};

use super::{separator, truncate};

/// Render a payoff simulation as a terminal report
pub fn format_payoff(result: &PayoffResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Debt Payoff - {} strategy\n", result.strategy));
    output.push_str(&separator(56));
    output.push('\n');

    let years = result.months / 12;
    let months = result.months % 12;
    output.push_str(&format!(
        "Months to zero:       {} ({}y {}m)\n",
        result.months, years, months
    ));
    output.push_str(&format!("Total interest paid:  {}\n", result.interest_paid));
    output.push_str(&format!(
        "Projected payoff:     {}\n",
        result.payoff_date.format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "Monthly commitment:   {}\n",
        result.monthly_commitment
    ));

    if !result.payoff_order.is_empty() {
        output.push('\n');
        output.push_str("Payoff order:\n");
        for (i, entry) in result.payoff_order.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {:<26} month {}\n",
                i + 1,
                truncate(&entry.name, 26),
                entry.month
            ));
        }
    }

    for warning in &result.warnings {
        output.push_str(&format!("\nWarning: {}\n", warning));
    }
    if result.stalled {
        output.push_str("The simulation stopped before the balance reached zero.\n");
    }

    output
}

/// Render a minimum-vs-extra comparison
pub fn format_comparison(comparison: &PayoffComparison) -> String {
    let mut output = format_payoff(&comparison.with_extra);

    output.push('\n');
    output.push_str(&separator(56));
    output.push('\n');
    output.push_str(&format!(
        "Paying an extra {} per month vs minimums only:\n",
        comparison.extra_per_month
    ));
    output.push_str(&format!(
        "  {} months sooner, {} less interest\n",
        comparison.months_saved, comparison.interest_saved
    ));
    output.push_str(&format!(
        "  (minimums only: {} months, {} interest)\n",
        comparison.minimum_only.months, comparison.minimum_only.interest_paid
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DebtKind, DebtLiability, Money, RepaymentStrategy};
    use chrono::NaiveDate;

    fn sample_debts() -> Vec<DebtLiability> {
        vec![DebtLiability::new(
            "Visa",
            Money::from_major(1000),
            12.0,
            DebtKind::CreditCard,
        )
        .with_minimum(Money::from_major(30))]
    }

    #[test]
    fn test_format_payoff_report() {
        let result = PayoffResult::simulate(
            &sample_debts(),
            RepaymentStrategy::Snowball,
            Money::from_major(100),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
        .unwrap();

        let out = format_payoff(&result);
        assert!(out.contains("snowball strategy"));
        assert!(out.contains("Months to zero:"));
        assert!(out.contains("Visa"));
        assert!(!out.contains("Warning:"));
    }

    #[test]
    fn test_format_comparison_report() {
        let comparison = PayoffComparison::run(
            &sample_debts(),
            RepaymentStrategy::Snowball,
            Money::from_major(70),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
        .unwrap();

        let out = format_comparison(&comparison);
        assert!(out.contains("months sooner"));
        assert!(out.contains("minimums only"));
    }
}
