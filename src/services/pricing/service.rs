//! Pricing service: runs the engine over whole quotes

use super::engine;
use super::quote::Quote;
use super::types::{
    ConsumableItem, ConsumableKind, FixedCostPolicy, LaborConfig, QuoteResult,
    VariableCostDetail,
};
use crate::config::PricingConfig;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Evaluates quotes under one pricing configuration.
///
/// Holds no per-quote state; `evaluate` can be called from any number of
/// threads at once.
#[derive(Debug, Clone)]
pub struct PricingService {
    config: PricingConfig,
}

impl PricingService {
    /// Create a new pricing service
    pub fn new(config: PricingConfig) -> Self {
        info!(
            "Pricing service initialized with {} fixed cost policy",
            config.fixed_cost_policy
        );
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn policy(&self) -> FixedCostPolicy {
        self.config.fixed_cost_policy
    }

    /// Hours monthly fixed costs are spread over for this labor configuration
    pub fn reference_monthly_hours(&self, labor: &LaborConfig) -> f64 {
        engine::compute_reference_monthly_hours(
            self.config.fixed_cost_policy,
            labor,
            &self.config.amortization_hours(),
        )
    }

    /// Price one quote. Never fails: missing references and degenerate numbers
    /// resolve to zero contributions.
    pub fn evaluate(&self, quote: &Quote) -> QuoteResult {
        let product = quote.product.to_spec();
        if let Some(field) = first_non_finite(quote) {
            warn!(
                "Quote for '{}' has a non-finite {}, counting it as zero",
                product.name, field
            );
        }

        let hourly_labor_rate = engine::compute_hourly_labor_rate(&quote.labor);
        let reference_monthly_hours = self.reference_monthly_hours(&quote.labor);
        let hourly_fixed_cost_rate =
            engine::compute_hourly_fixed_cost_rate(&quote.fixed_costs, reference_monthly_hours);

        let (variable, unresolved_consumables) = self.variable_cost_detail(quote);

        let mut breakdown = engine::compute_breakdown(
            &product,
            hourly_labor_rate,
            hourly_fixed_cost_rate,
            variable.total(),
        );
        if !self.config.round_suggested_price {
            breakdown.rounded_suggested_price = None;
        }

        let comparison = engine::compute_manual_price_comparison(
            quote.manual_price,
            breakdown.suggested_price,
            breakdown.total_cost,
        );

        debug!(
            product = %product.name,
            total_cost = breakdown.total_cost,
            suggested_price = breakdown.suggested_price,
            below_suggested = comparison.below_suggested,
            "Quote evaluated"
        );

        QuoteResult {
            product_name: product.name,
            fixed_cost_policy: self.config.fixed_cost_policy,
            monthly_labor_hours: engine::finite_or_zero(quote.labor.total_monthly_hours()),
            hourly_labor_rate,
            total_monthly_fixed_cost: engine::compute_total_monthly_fixed_cost(&quote.fixed_costs),
            reference_monthly_hours,
            hourly_fixed_cost_rate,
            variable,
            breakdown,
            comparison,
            unresolved_consumables,
        }
    }

    /// Price several quotes with the same configuration
    pub fn evaluate_many(&self, quotes: &[Quote]) -> Vec<QuoteResult> {
        quotes.iter().map(|quote| self.evaluate(quote)).collect()
    }

    /// Resolve the product's usages against the catalog and split the variable
    /// cost into materials, prints and flat extras.
    fn variable_cost_detail(&self, quote: &Quote) -> (VariableCostDetail, Vec<String>) {
        let catalog = index_catalog(&quote.consumables);
        let product = &quote.product;

        let mut material_lines: Vec<(&ConsumableItem, f64)> = Vec::new();
        let mut ink_lines: Vec<(&ConsumableItem, f64)> = Vec::new();
        let mut used_ids: HashSet<&str> = HashSet::new();
        let mut unresolved = Vec::new();

        for usage in &product.consumables_used {
            match catalog.get(usage.consumable_id.as_str()) {
                Some(item) => {
                    used_ids.insert(item.id.as_str());
                    match item.kind {
                        ConsumableKind::Material => material_lines.push((item, usage.quantity)),
                        ConsumableKind::Ink => ink_lines.push((item, usage.quantity)),
                    }
                }
                None => {
                    warn!(
                        "Product '{}' uses unknown consumable '{}', counting it as free",
                        product.name, usage.consumable_id
                    );
                    unresolved.push(usage.consumable_id.clone());
                }
            }
        }

        // Inks the product does not list are charged once per printed impression.
        // Only catalog entries kept by `index_catalog` count.
        if product.print_quantity != 0.0 {
            ink_lines.extend(
                quote
                    .consumables
                    .iter()
                    .filter(|item| {
                        catalog
                            .get(item.id.as_str())
                            .is_some_and(|kept| std::ptr::eq(*kept, *item))
                    })
                    .filter(|item| item.kind == ConsumableKind::Ink)
                    .filter(|item| !used_ids.contains(item.id.as_str()))
                    .map(|item| (item, product.print_quantity)),
            );
        }

        let other_cost = engine::finite_or_zero(
            product.other_costs.iter().map(|cost| cost.amount).sum(),
        );

        let detail = VariableCostDetail {
            material_cost: engine::compute_variable_cost(material_lines),
            print_cost: engine::compute_variable_cost(ink_lines),
            other_cost,
        };
        (detail, unresolved)
    }
}

/// Name of the first input that is NaN or infinite, if any
pub(super) fn first_non_finite(quote: &Quote) -> Option<&'static str> {
    let product = &quote.product;
    let scalars = [
        ("monthly salary", quote.labor.monthly_salary),
        ("working hours per day", quote.labor.working_hours_per_day),
        ("production time", product.time_spent_hours()),
        ("profit margin", product.desired_profit_margin_percent),
        ("print quantity", product.print_quantity),
        ("manual price", quote.manual_price.unwrap_or(0.0)),
    ];
    if let Some((field, _)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
        return Some(*field);
    }

    if quote.fixed_costs.iter().any(|item| !item.monthly_amount.is_finite()) {
        return Some("fixed cost");
    }
    if quote
        .consumables
        .iter()
        .any(|item| !item.pack_cost.is_finite() || !item.units_per_pack.is_finite())
    {
        return Some("consumable price or yield");
    }
    if product.consumables_used.iter().any(|usage| !usage.quantity.is_finite())
        || product.other_costs.iter().any(|cost| !cost.amount.is_finite())
    {
        return Some("product quantity or extra cost");
    }
    None
}

/// Catalog lookup by id. The first entry with a given id wins.
fn index_catalog(items: &[ConsumableItem]) -> HashMap<&str, &ConsumableItem> {
    let mut catalog = HashMap::with_capacity(items.len());
    for item in items {
        if catalog.contains_key(item.id.as_str()) {
            warn!("Duplicate consumable id '{}', keeping the first entry", item.id);
            continue;
        }
        catalog.insert(item.id.as_str(), item);
    }
    catalog
}
