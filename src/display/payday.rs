//! Payday allocation rendering

use crate::planner::{PaydayAllocation, SurplusStatus};

use super::{separator, truncate};

/// Render a payday allocation as a terminal report
pub fn format_allocation(allocation: &PaydayAllocation) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Payday Allocation - {} ({} pay)\n",
        allocation.pay_amount, allocation.pay_cycle
    ));
    output.push_str(&separator(60));
    output.push('\n');

    for line in &allocation.allocations {
        output.push_str(&format!(
            "  {:<28} {:>10} {:>14}\n",
            truncate(&line.name, 28),
            line.tier.to_string(),
            line.amount.to_string()
        ));
    }

    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "{:<40} {:>14}\n",
        "Total regular allocations:", allocation.total_regular.to_string()
    ));

    let surplus_label = match allocation.surplus_status {
        SurplusStatus::Available => "Surplus available:",
        SurplusStatus::Exact => "Fully allocated:",
        SurplusStatus::Shortfall => "Shortfall:",
    };
    output.push_str(&format!(
        "{:<40} {:>14}\n",
        surplus_label,
        allocation.surplus.to_string()
    ));

    for summary in &allocation.tier_summaries {
        output.push_str(&format!(
            "  {:<16} {:>3} envelopes {:>14} per pay\n",
            summary.tier.to_string(),
            summary.envelope_count,
            summary.total_per_pay.to_string()
        ));
    }

    if allocation.behind_count > 0 {
        output.push_str(&format!(
            "{} envelopes behind by {} combined\n",
            allocation.behind_count, allocation.behind_total_gap
        ));
    }

    if !allocation.suggestions.is_empty() {
        output.push('\n');
        output.push_str("Suggestions for the surplus:\n");
        for (i, suggestion) in allocation.suggestions.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} ({})\n",
                i + 1,
                suggestion.description,
                suggestion.suggested_amount
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Envelope, Frequency, Money, PayCycle, PriorityTier};
    use chrono::NaiveDate;

    #[test]
    fn test_format_allocation_shows_surplus_and_suggestions() {
        let envelopes = vec![Envelope::new(
            "Car Fund",
            PriorityTier::Important,
            Money::from_major(450),
            Frequency::Monthly,
        )
        .with_per_pay(Money::from_major(500))
        .with_balance(Money::from_major(150))
        .with_due(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())];

        let allocation = PaydayAllocation::allocate(
            Money::from_major(900),
            &envelopes,
            PayCycle::Fortnightly,
            NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
        );

        let out = format_allocation(&allocation);
        assert!(out.contains("Car Fund"));
        assert!(out.contains("Surplus available:"));
        assert!(out.contains("Suggestions for the surplus:"));
    }
}
