//! Text rendering of calculation results.
//!
//! Formatting lives here so the HTTP layer and any embedding caller
//! share one notion of how a ruble amount, a payback period or a full
//! scenario digest looks.  Delivery of the digest (chat bots, email,
//! clipboard) is someone else's problem.

use crate::models::{CalculationInput, CalculationResult, ComplexityTier, Payback, Provider};
use std::fmt::Write;

/// Formats a ruble amount with space-grouped thousands, rounded to
/// whole rubles: `1234567.8` becomes `"1 234 568 ₽"`.
pub fn format_rub(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped.push_str(" ₽");
    grouped
}

/// Renders a payback period with one decimal place, or the infinity
/// sign when the cost is never recovered.
pub fn format_payback(payback: &Payback) -> String {
    match payback {
        Payback::Months(m) => format!("{m:.1} months"),
        Payback::Never => "∞".to_string(),
    }
}

fn tier_label(tier: ComplexityTier) -> &'static str {
    match tier {
        ComplexityTier::Low => "low",
        ComplexityTier::Medium => "medium",
        ComplexityTier::High => "high",
    }
}

fn provider_label(provider: Provider) -> &'static str {
    match provider {
        Provider::OpenAi => "OpenAI",
        Provider::YandexGpt => "YandexGPT",
        Provider::GigaChat => "GigaChat",
    }
}

/// Builds a human-readable digest of one scenario and its metrics.
pub fn build_summary(input: &CalculationInput, result: &CalculationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "AI agent ROI estimate");
    let _ = writeln!(
        out,
        "Scenario: {} requests/month, {} min each, salary {}, {} complexity, {}",
        input.requests_per_month,
        input.processing_time_minutes,
        format_rub(input.monthly_salary),
        tier_label(input.complexity),
        provider_label(input.provider),
    );
    let _ = writeln!(out, "Time saved: {:.1} h/month", result.time_saved_hours);
    let _ = writeln!(
        out,
        "Money saved: {}/month",
        format_rub(result.money_saved_per_month)
    );
    let _ = writeln!(
        out,
        "AI cost: {}/month, implementation: {}",
        format_rub(result.monthly_ai_cost),
        format_rub(result.implementation_cost),
    );
    let _ = writeln!(
        out,
        "Net savings: {}/month",
        format_rub(result.net_saved_per_month)
    );
    let _ = writeln!(out, "Payback: {}", format_payback(&result.payback));
    let _ = writeln!(
        out,
        "First-year ROI: {:.1}%",
        result.roi_percent_first_year
    );
    match result.breakeven_month {
        Some(month) => {
            let _ = writeln!(out, "Break-even: month {month}");
        }
        None => {
            let _ = writeln!(out, "Break-even: not reached within 24 months");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::CostTable;
    use crate::engine::calculate;

    #[test]
    fn rub_amounts_group_thousands_with_spaces() {
        assert_eq!(format_rub(0.0), "0 ₽");
        assert_eq!(format_rub(999.0), "999 ₽");
        assert_eq!(format_rub(1000.0), "1 000 ₽");
        assert_eq!(format_rub(2_000_000.0), "2 000 000 ₽");
        assert_eq!(format_rub(1234567.8), "1 234 568 ₽");
        assert_eq!(format_rub(-45_000.0), "-45 000 ₽");
    }

    #[test]
    fn never_payback_renders_as_infinity() {
        assert_eq!(format_payback(&Payback::Never), "∞");
        assert_eq!(format_payback(&Payback::Months(5.3551)), "5.4 months");
    }

    #[test]
    fn summary_mentions_every_metric() {
        let input = CalculationInput {
            requests_per_month: 5000,
            processing_time_minutes: 10.0,
            monthly_salary: 100_000.0,
            complexity: ComplexityTier::Medium,
            provider: Provider::OpenAi,
        };
        let result = calculate(&CostTable::default(), &input);
        let summary = build_summary(&input, &result);

        assert!(summary.contains("5000 requests/month"));
        assert!(summary.contains("OpenAI"));
        assert!(summary.contains("Payback: 5.4 months"));
        assert!(summary.contains("Break-even: month 6"));
    }

    #[test]
    fn summary_reports_missing_breakeven() {
        let input = CalculationInput {
            requests_per_month: 10,
            processing_time_minutes: 1.0,
            monthly_salary: 0.0,
            complexity: ComplexityTier::High,
            provider: Provider::OpenAi,
        };
        let result = calculate(&CostTable::default(), &input);
        let summary = build_summary(&input, &result);

        assert!(summary.contains("Payback: ∞"));
        assert!(summary.contains("not reached"));
    }
}
