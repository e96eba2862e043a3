//! Data models for the ROI engine.
//!
//! The `models` module defines the serialisable structs and enums
//! describing one automation scenario (the caller-supplied input) and
//! the full set of financial metrics derived from it.  All types
//! derive `Serialize` and `Deserialize` so they can travel over the
//! HTTP API or be embedded in reports without further conversion.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Implementation complexity tier of the agent being deployed.
///
/// The tier drives both the one-time implementation cost and the
/// recurring AI service cost (together with [`Provider`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    /// Simple single-step automation, e.g. classification or routing.
    Low,
    /// Multi-step workflow with some integration work.
    Medium,
    /// Deep integration with existing systems, custom tooling.
    High,
}

impl Default for ComplexityTier {
    fn default() -> Self {
        ComplexityTier::Medium
    }
}

impl FromStr for ComplexityTier {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ComplexityTier::Low),
            "medium" => Ok(ComplexityTier::Medium),
            "high" => Ok(ComplexityTier::High),
            _ => Err(UnknownVariant),
        }
    }
}

/// AI backend running the agent.  Providers differ only in their
/// cost profile; the engine treats them as interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    YandexGpt,
    GigaChat,
}

impl Default for Provider {
    fn default() -> Self {
        Provider::OpenAi
    }
}

impl FromStr for Provider {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            "yandexgpt" => Ok(Provider::YandexGpt),
            "gigachat" => Ok(Provider::GigaChat),
            _ => Err(UnknownVariant),
        }
    }
}

/// Marker error for [`FromStr`] on the categorical enums.  Callers
/// that want strict validation can match on it; deserialisation
/// deliberately does not and substitutes the default instead.
#[derive(Debug, Clone, Copy)]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown variant")
    }
}

impl std::error::Error for UnknownVariant {}

// Unrecognised tier/provider strings fall back to the default value
// rather than failing the whole request.  UI callers send free-form
// select values, and a stale option label must not break recalculation.
impl<'de> Deserialize<'de> for ComplexityTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// One automation scenario: the operating parameters of the manual
/// workflow an AI agent would replace.
///
/// Numeric fields must be finite and non-negative; the engine does
/// not validate this and callers are expected to reject or clamp bad
/// values before calling [`crate::engine::calculate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Workflow invocations handled per month.
    pub requests_per_month: u32,
    /// Minutes of human processing time replaced per request.
    pub processing_time_minutes: f64,
    /// Monthly salary of the employee doing the work today, in rubles.
    pub monthly_salary: f64,
    /// Implementation complexity tier.
    #[serde(default)]
    pub complexity: ComplexityTier,
    /// AI backend.
    #[serde(default)]
    pub provider: Provider,
}

/// Payback period for the one-time implementation cost.
///
/// Modelled as an explicit sum type rather than `f64::INFINITY` so
/// that the "never pays back" outcome survives serialisation and is
/// impossible to confuse with a very long finite period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months", rename_all = "lowercase")]
pub enum Payback {
    /// Real number of months until accumulated net savings cover the
    /// implementation cost.  Not rounded.
    Months(f64),
    /// Net savings are zero or negative; the cost is never recovered.
    Never,
}

impl Payback {
    pub fn is_never(&self) -> bool {
        matches!(self, Payback::Never)
    }

    pub fn months(&self) -> Option<f64> {
        match *self {
            Payback::Months(m) => Some(m),
            Payback::Never => None,
        }
    }
}

/// One sample of the cumulative-profit curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitPoint {
    /// Month index, 0 = moment of deployment.
    pub month: u32,
    /// Cumulative profit in rubles: negative until the implementation
    /// cost is recovered.
    pub cumulative_profit: f64,
}

/// All metrics derived from one [`CalculationInput`].
///
/// Produced in full on every calculation; no field is carried over
/// from a previous result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Employee cost per working hour (salary over 176 h/month).
    pub hourly_rate: f64,
    /// One-time implementation cost resolved from the cost table.
    pub implementation_cost: f64,
    /// Recurring AI service cost resolved from the cost table.
    pub monthly_ai_cost: f64,
    /// Hours of human work eliminated per month.
    pub time_saved_hours: f64,
    /// Monetary value of the eliminated hours, before AI costs.
    pub money_saved_per_month: f64,
    /// Money saved minus the AI service cost.  Negative when running
    /// the agent costs more than the labour it replaces.
    pub net_saved_per_month: f64,
    /// Months to recover the implementation cost.
    pub payback: Payback,
    /// First-year return on investment, percent, signed.
    pub roi_percent_first_year: f64,
    /// Cumulative profit for months 0..=24.
    pub profit_series: Vec<ProfitPoint>,
    /// First month with non-negative cumulative profit, if any month
    /// within the horizon qualifies.
    pub breakeven_month: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tier_falls_back_to_medium() {
        let tier: ComplexityTier = serde_json::from_str("\"ultra\"").unwrap();
        assert_eq!(tier, ComplexityTier::Medium);
    }

    #[test]
    fn unknown_provider_falls_back_to_openai() {
        let provider: Provider = serde_json::from_str("\"skynet\"").unwrap();
        assert_eq!(provider, Provider::OpenAi);
    }

    #[test]
    fn known_variants_deserialise_exactly() {
        let tier: ComplexityTier = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(tier, ComplexityTier::High);
        let provider: Provider = serde_json::from_str("\"gigachat\"").unwrap();
        assert_eq!(provider, Provider::GigaChat);
    }

    #[test]
    fn input_defaults_apply_when_fields_missing() {
        let input: CalculationInput = serde_json::from_str(
            r#"{"requests_per_month": 100, "processing_time_minutes": 5, "monthly_salary": 80000}"#,
        )
        .unwrap();
        assert_eq!(input.complexity, ComplexityTier::Medium);
        assert_eq!(input.provider, Provider::OpenAi);
    }

    #[test]
    fn payback_serialises_as_tagged_variant() {
        let never = serde_json::to_value(Payback::Never).unwrap();
        assert_eq!(never, serde_json::json!({"kind": "never"}));
        let finite = serde_json::to_value(Payback::Months(5.5)).unwrap();
        assert_eq!(finite, serde_json::json!({"kind": "months", "months": 5.5}));
    }
}
