//! ROI computation engine.
//!
//! The `engine` module turns a [`CalculationInput`] into a
//! [`CalculationResult`]: a fixed pipeline of pure stages running in
//! order — cost resolution, hourly rate, time saved, money saved, net
//! savings, payback, first-year ROI and the cumulative-profit series.
//! Each stage is a standalone function so individual formulas can be
//! tested and reused; [`calculate`] only wires them together.
//!
//! The engine holds no state between calls and performs no I/O.
//! Identical inputs always produce identical results.  Batch
//! calculations are parallelised with [`rayon`].

use crate::costs::CostTable;
use crate::models::{
    CalculationInput, CalculationResult, ComplexityTier, Payback, ProfitPoint, Provider,
};
use rayon::prelude::*;

/// Working hours in one month: 22 working days of 8 hours.  Fixed by
/// the working-month model, never parameterised per call.
pub const HOURS_PER_MONTH: f64 = 22.0 * 8.0;

/// Length of the cumulative-profit projection, in months.
pub const HORIZON_MONTHS: u32 = 24;

/// Resolves the one-time implementation cost and the recurring AI
/// cost for a tier/provider pair.  Infallible: the table falls back
/// to compiled-in defaults for any cell it does not carry.
pub fn resolve_costs(
    costs: &CostTable,
    tier: ComplexityTier,
    provider: Provider,
) -> (f64, f64) {
    (
        costs.implementation_cost(tier),
        costs.monthly_ai_cost(provider, tier),
    )
}

/// Employee cost per working hour.  Zero salary yields a zero rate.
pub fn hourly_rate(monthly_salary: f64) -> f64 {
    monthly_salary / HOURS_PER_MONTH
}

/// Hours of human work eliminated per month.  Linear in both
/// arguments, no clamping.
pub fn time_saved_hours(requests_per_month: u32, processing_time_minutes: f64) -> f64 {
    requests_per_month as f64 * (processing_time_minutes / 60.0)
}

/// Monetary value of the eliminated hours, before AI costs.
pub fn money_saved(time_saved_hours: f64, hourly_rate: f64) -> f64 {
    time_saved_hours * hourly_rate
}

/// Monthly savings after the AI service cost.  A negative value is a
/// valid outcome (the agent costs more than the labour it replaces),
/// not an error.
pub fn net_saved(money_saved: f64, monthly_ai_cost: f64) -> f64 {
    money_saved - monthly_ai_cost
}

/// Months until accumulated net savings cover the implementation
/// cost.  [`Payback::Never`] when net savings are zero or negative;
/// zero implementation cost with positive savings pays back at once.
pub fn payback_period(implementation_cost: f64, net_saved: f64) -> Payback {
    if net_saved <= 0.0 {
        Payback::Never
    } else {
        Payback::Months(implementation_cost / net_saved)
    }
}

/// First-year return on investment, percent.
///
/// Normalised against total first-year cost exposure (implementation
/// plus twelve months of AI cost) rather than implementation cost
/// alone, so the zero-cost degenerate case is a well-defined 0%.
pub fn first_year_roi(money_saved: f64, monthly_ai_cost: f64, implementation_cost: f64) -> f64 {
    let yearly_savings = money_saved * 12.0;
    let yearly_ai_cost = monthly_ai_cost * 12.0;
    let total_cost = implementation_cost + yearly_ai_cost;
    if total_cost == 0.0 {
        return 0.0;
    }
    let net_profit = yearly_savings - yearly_ai_cost - implementation_cost;
    net_profit / total_cost * 100.0
}

/// Cumulative profit for each month in `0..=horizon_months`, plus the
/// first month at which the curve becomes non-negative.
///
/// The model is linear: `profit(m) = -implementation_cost +
/// net_saved * m`.  No compounding, no discounting.  The scan runs in
/// increasing month order, so ties resolve to the earliest month; a
/// zero implementation cost breaks even at month 0.
pub fn profit_series(
    implementation_cost: f64,
    net_saved: f64,
    horizon_months: u32,
) -> (Vec<ProfitPoint>, Option<u32>) {
    let mut series = Vec::with_capacity(horizon_months as usize + 1);
    let mut breakeven = None;
    for month in 0..=horizon_months {
        let cumulative_profit = -implementation_cost + net_saved * month as f64;
        if breakeven.is_none() && cumulative_profit >= 0.0 {
            breakeven = Some(month);
        }
        series.push(ProfitPoint {
            month,
            cumulative_profit,
        });
    }
    (series, breakeven)
}

/// Runs the full pipeline for one scenario.
///
/// Pure and infallible for finite, non-negative numeric inputs;
/// recognised-or-defaulted categorical inputs are guaranteed by the
/// [`CalculationInput`] type itself.
pub fn calculate(costs: &CostTable, input: &CalculationInput) -> CalculationResult {
    let (implementation_cost, monthly_ai_cost) =
        resolve_costs(costs, input.complexity, input.provider);
    let hourly_rate = hourly_rate(input.monthly_salary);
    let time_saved_hours = time_saved_hours(input.requests_per_month, input.processing_time_minutes);
    let money_saved = money_saved(time_saved_hours, hourly_rate);
    let net_saved = net_saved(money_saved, monthly_ai_cost);
    let payback = payback_period(implementation_cost, net_saved);
    let roi_percent_first_year = first_year_roi(money_saved, monthly_ai_cost, implementation_cost);
    let (profit_series, breakeven_month) =
        profit_series(implementation_cost, net_saved, HORIZON_MONTHS);
    CalculationResult {
        hourly_rate,
        implementation_cost,
        monthly_ai_cost,
        time_saved_hours,
        money_saved_per_month: money_saved,
        net_saved_per_month: net_saved,
        payback,
        roi_percent_first_year,
        profit_series,
        breakeven_month,
    }
}

/// Calculates many scenarios at once, in parallel.  Result order
/// matches input order; scenarios are independent, so this is a
/// straightforward data-parallel map.
pub fn calculate_batch(costs: &CostTable, inputs: Vec<CalculationInput>) -> Vec<CalculationResult> {
    inputs
        .into_par_iter()
        .map(|input| calculate(costs, &input))
        .collect()
}
