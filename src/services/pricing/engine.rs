//! Pricing formulas
//!
//! Every function here is pure and total: no I/O, no logging, no hidden state, and
//! no panics for any `f64` input. A zero divisor yields a zero rate, and every
//! returned value is finite. Non-finite intermediates are coerced to `0` inside the
//! engine, so callers can display results as they are.

use super::types::{
    AmortizationHours, ConsumableItem, CostBreakdown, FixedCostItem, FixedCostPolicy,
    LaborConfig, PriceComparison, ProductSpec,
};

/// Hourly rate the owner has to charge to earn the desired salary
pub fn compute_hourly_labor_rate(labor: &LaborConfig) -> f64 {
    safe_ratio(labor.monthly_salary, labor.total_monthly_hours())
}

/// Sum of all monthly fixed costs
pub fn compute_total_monthly_fixed_cost(fixed_costs: &[FixedCostItem]) -> f64 {
    finite_or_zero(fixed_costs.iter().map(|item| item.monthly_amount).sum())
}

/// Hours a month of fixed costs is spread over, according to `policy`
pub fn compute_reference_monthly_hours(
    policy: FixedCostPolicy,
    labor: &LaborConfig,
    hours: &AmortizationHours,
) -> f64 {
    match policy {
        FixedCostPolicy::CalendarHours => finite_or_zero(hours.calendar_hours_per_month),
        FixedCostPolicy::WorkingHours => {
            let worked = finite_or_zero(labor.total_monthly_hours());
            if worked == 0.0 {
                finite_or_zero(hours.fallback_working_hours_per_month)
            } else {
                worked
            }
        }
    }
}

/// Fixed cost attributable to one hour of work
pub fn compute_hourly_fixed_cost_rate(
    fixed_costs: &[FixedCostItem],
    reference_monthly_hours: f64,
) -> f64 {
    safe_ratio(
        compute_total_monthly_fixed_cost(fixed_costs),
        reference_monthly_hours,
    )
}

/// Cost of one unit out of a pack. A pack without a positive yield costs nothing
/// per unit.
pub fn compute_consumable_unit_cost(item: &ConsumableItem) -> f64 {
    if item.units_per_pack > 0.0 {
        finite_or_zero(item.pack_cost / item.units_per_pack)
    } else {
        0.0
    }
}

pub fn compute_line_cost(item: &ConsumableItem, quantity_used: f64) -> f64 {
    finite_or_zero(compute_consumable_unit_cost(item) * quantity_used)
}

/// Sum of line costs over `(item, quantity_used)` pairs
pub fn compute_variable_cost<'a, I>(lines: I) -> f64
where
    I: IntoIterator<Item = (&'a ConsumableItem, f64)>,
{
    finite_or_zero(
        lines
            .into_iter()
            .map(|(item, quantity)| compute_line_cost(item, quantity))
            .sum(),
    )
}

/// Turn hourly rates and the variable cost of one product into its price.
///
/// `rounded_suggested_price` is the ceiling of the suggested price, so the
/// rounding step never undercharges.
pub fn compute_breakdown(
    product: &ProductSpec,
    hourly_labor_rate: f64,
    hourly_fixed_cost_rate: f64,
    variable_cost: f64,
) -> CostBreakdown {
    let hours = finite_or_zero(product.time_spent_hours);
    let labor_cost = finite_or_zero(hours * finite_or_zero(hourly_labor_rate));
    let fixed_cost_share = finite_or_zero(hours * finite_or_zero(hourly_fixed_cost_rate));
    let variable_cost = finite_or_zero(variable_cost);

    let total_cost = finite_or_zero(labor_cost + fixed_cost_share + variable_cost);
    let margin = finite_or_zero(product.desired_profit_margin_percent) / 100.0;
    let profit_amount = finite_or_zero(total_cost * margin);
    let suggested_price = finite_or_zero(total_cost + profit_amount);

    CostBreakdown {
        labor_cost,
        fixed_cost_share,
        variable_cost,
        total_cost,
        profit_amount,
        suggested_price,
        rounded_suggested_price: Some(suggested_price.ceil()),
    }
}

/// Profit at the price actually charged.
///
/// A manual price counts only when it is positive; otherwise the suggested price
/// is the basis.
pub fn compute_manual_price_comparison(
    manual_price: Option<f64>,
    suggested_price: f64,
    total_cost: f64,
) -> PriceComparison {
    let suggested_price = finite_or_zero(suggested_price);
    let total_cost = finite_or_zero(total_cost);
    let manual_price = manual_price
        .map(finite_or_zero)
        .filter(|price| *price > 0.0);

    let price_basis = manual_price.unwrap_or(suggested_price);
    let profit_amount = finite_or_zero(price_basis - total_cost);
    let profit_margin_percent = if total_cost > 0.0 {
        finite_or_zero(profit_amount / total_cost * 100.0)
    } else {
        0.0
    };

    PriceComparison {
        price_basis,
        manual_price_applied: manual_price.is_some(),
        profit_amount,
        profit_margin_percent,
        below_suggested: manual_price.is_some_and(|price| price < suggested_price),
    }
}

/// `numerator / denominator`, or `0` when the denominator is zero or the
/// result is not finite
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    finite_or_zero(numerator / denominator)
}

pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
