//! Cost tables for implementation and AI service pricing.
//!
//! The `costs` module holds the business assumptions behind the
//! calculator: what a deployment of each complexity tier costs to
//! build, and what each AI provider charges per month to run it.
//! Compiled-in defaults cover the common case; a deployment can
//! override individual cells by pointing the engine at a JSON file
//! with the same shape as [`CostTable`].

use crate::models::{ComplexityTier, Provider};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a cost table override file.
#[derive(Debug, Error)]
pub enum CostTableError {
    #[error("failed to read cost table file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse cost table file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One-time implementation cost and recurring AI cost lookup tables.
///
/// Read-only after construction.  Lookups never fail: a cell missing
/// from an override file resolves to the compiled-in default for
/// that tier/provider combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostTable {
    /// One-time implementation cost per complexity tier, rubles.
    #[serde(default)]
    pub implementation: HashMap<ComplexityTier, f64>,
    /// Recurring AI service cost per provider and tier, rubles/month.
    #[serde(default)]
    pub monthly_ai: HashMap<Provider, HashMap<ComplexityTier, f64>>,
}

impl Default for CostTable {
    fn default() -> Self {
        let tiers = [ComplexityTier::Low, ComplexityTier::Medium, ComplexityTier::High];
        let providers = [Provider::OpenAi, Provider::YandexGpt, Provider::GigaChat];
        let implementation = tiers
            .iter()
            .map(|&t| (t, default_implementation_cost(t)))
            .collect();
        let monthly_ai = providers
            .iter()
            .map(|&p| {
                let per_tier = tiers
                    .iter()
                    .map(|&t| (t, default_monthly_ai_cost(p, t)))
                    .collect();
                (p, per_tier)
            })
            .collect();
        CostTable {
            implementation,
            monthly_ai,
        }
    }
}

impl CostTable {
    /// Load a cost table from a JSON file.  The file may specify any
    /// subset of cells; unspecified ones keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<CostTable, CostTableError> {
        let data = std::fs::read_to_string(path)?;
        let table = serde_json::from_str(&data)?;
        Ok(table)
    }

    /// One-time implementation cost for a complexity tier.
    pub fn implementation_cost(&self, tier: ComplexityTier) -> f64 {
        self.implementation
            .get(&tier)
            .copied()
            .unwrap_or_else(|| default_implementation_cost(tier))
    }

    /// Monthly AI service cost for a provider at a complexity tier.
    pub fn monthly_ai_cost(&self, provider: Provider, tier: ComplexityTier) -> f64 {
        self.monthly_ai
            .get(&provider)
            .and_then(|per_tier| per_tier.get(&tier))
            .copied()
            .unwrap_or_else(|| default_monthly_ai_cost(provider, tier))
    }
}

fn default_implementation_cost(tier: ComplexityTier) -> f64 {
    match tier {
        ComplexityTier::Low => 500_000.0,
        ComplexityTier::Medium => 2_000_000.0,
        ComplexityTier::High => 5_000_000.0,
    }
}

fn default_monthly_ai_cost(provider: Provider, tier: ComplexityTier) -> f64 {
    match (provider, tier) {
        (Provider::OpenAi, ComplexityTier::Low) => 25_000.0,
        (Provider::OpenAi, ComplexityTier::Medium) => 100_000.0,
        (Provider::OpenAi, ComplexityTier::High) => 250_000.0,
        (Provider::YandexGpt, ComplexityTier::Low) => 15_000.0,
        (Provider::YandexGpt, ComplexityTier::Medium) => 60_000.0,
        (Provider::YandexGpt, ComplexityTier::High) => 150_000.0,
        (Provider::GigaChat, ComplexityTier::Low) => 10_000.0,
        (Provider::GigaChat, ComplexityTier::Medium) => 50_000.0,
        (Provider::GigaChat, ComplexityTier::High) => 120_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_every_cell() {
        let table = CostTable::default();
        assert_eq!(table.implementation.len(), 3);
        assert_eq!(table.monthly_ai.len(), 3);
        assert_eq!(
            table.implementation_cost(ComplexityTier::Medium),
            2_000_000.0
        );
        assert_eq!(
            table.monthly_ai_cost(Provider::OpenAi, ComplexityTier::Medium),
            100_000.0
        );
    }

    #[test]
    fn partial_override_keeps_defaults_elsewhere() {
        let table: CostTable = serde_json::from_str(
            r#"{"implementation": {"low": 300000}, "monthly_ai": {"gigachat": {"low": 8000}}}"#,
        )
        .unwrap();
        assert_eq!(table.implementation_cost(ComplexityTier::Low), 300_000.0);
        // Cells absent from the override resolve to compiled-in values.
        assert_eq!(table.implementation_cost(ComplexityTier::High), 5_000_000.0);
        assert_eq!(
            table.monthly_ai_cost(Provider::GigaChat, ComplexityTier::Low),
            8_000.0
        );
        assert_eq!(
            table.monthly_ai_cost(Provider::YandexGpt, ComplexityTier::High),
            150_000.0
        );
    }

    #[test]
    fn table_round_trips_through_json() {
        let table = CostTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let back: CostTable = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.monthly_ai_cost(Provider::YandexGpt, ComplexityTier::Medium),
            table.monthly_ai_cost(Provider::YandexGpt, ComplexityTier::Medium)
        );
    }
}
