//! Envelope health table rendering

use crate::planner::EnvelopeHealth;

use super::{format_bar, format_percentage, separator, truncate};

/// Render a health set as a terminal table
pub fn format_health(health: &[EnvelopeHealth]) -> String {
    let mut output = String::new();

    output.push_str("Envelope Health\n");
    output.push_str(&separator(86));
    output.push('\n');
    output.push_str(&format!(
        "{:<24} {:>6} {:>12} {:>12} {:>10} {:>10}  {}\n",
        "Envelope", "Tier", "Should have", "Gap", "Status", "Complete", "Progress"
    ));
    output.push_str(&separator(86));
    output.push('\n');

    for h in health {
        output.push_str(&format!(
            "{:<24} {:>6} {:>12} {:>12} {:>10} {:>10}  {}\n",
            truncate(&h.name, 24),
            truncate(&h.tier.to_string(), 6),
            h.should_have_saved.to_string(),
            h.gap.to_string(),
            h.gap_status.to_string(),
            format_percentage(h.percent_complete),
            format_bar(h.percent_complete, 100.0, 10),
        ));
    }

    let behind = health.iter().filter(|h| h.is_behind()).count();
    output.push_str(&separator(86));
    output.push('\n');
    output.push_str(&format!(
        "{} envelopes, {} behind\n",
        health.len(),
        behind
    ));

    output
}
