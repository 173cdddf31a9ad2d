//! Scenario projection rendering

use crate::planner::{EnvelopeHealth, ScenarioResult};

use super::{separator, truncate};

/// Render a scenario projection as a terminal report
pub fn format_scenario(result: &ScenarioResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Scenario: {}\n", result.scenario));
    output.push_str(&separator(64));
    output.push('\n');

    if result.affected.is_empty() {
        output.push_str("No envelopes are affected by this scenario.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<28} {:>10} {:>10} {:>10}\n",
        "Envelope", "Now", "Reduced", "Saved"
    ));
    for saving in &result.affected {
        output.push_str(&format!(
            "{:<28} {:>10} {:>10} {:>10}\n",
            truncate(&saving.name, 28),
            saving.old_per_pay.to_string(),
            saving.new_per_pay.to_string(),
            saving.saved_per_pay.to_string()
        ));
    }

    output.push_str(&separator(64));
    output.push('\n');
    output.push_str(&format!(
        "Savings: {} per pay, {} per month, {} over the period\n",
        result.savings_per_pay, result.savings_per_month, result.total_savings_over_period
    ));
    output.push_str(&format!(
        "Current combined gap: {}  ->  after scenario: {}\n",
        result.current_gap, result.gap_after_scenario
    ));
    if result.pays_to_close_gap > 0 {
        output.push_str(&format!(
            "At that rate the gap closes in {} pays\n",
            result.pays_to_close_gap
        ));
    }
    if result.leftover_buffer.is_positive() {
        output.push_str(&format!(
            "Leftover beyond the gap: {}\n",
            result.leftover_buffer
        ));
    }

    output.push('\n');
    output.push_str("Projected health by tier:\n");
    format_tier(&mut output, "Essential", &result.projected_health.essential);
    format_tier(&mut output, "Important", &result.projected_health.important);
    format_tier(&mut output, "Discretionary", &result.projected_health.discretionary);

    output
}

fn format_tier(output: &mut String, label: &str, health: &[EnvelopeHealth]) {
    if health.is_empty() {
        return;
    }
    output.push_str(&format!("  {}\n", label.to_uppercase()));
    for h in health {
        output.push_str(&format!(
            "    {:<26} gap {:>10}  {}\n",
            truncate(&h.name, 26),
            h.gap.to_string(),
            h.gap_status
        ));
    }
}
