//! Plain text rendering of a priced quote

use crate::config::PricingConfig;
use crate::services::pricing::QuoteResult;
use std::fmt::Write;

/// Format an amount with the configured decimals and currency code
pub fn format_amount(amount: f64, decimals: u8, currency: &str) -> String {
    format!("{} {:.*}", currency, usize::from(decimals), amount)
}

/// Human readable breakdown of a quote result
pub fn render_report(result: &QuoteResult, config: &PricingConfig) -> String {
    let money = |amount: f64| format_amount(amount, config.display_decimals, &config.currency);
    // Hourly fixed cost rates are small; show them with at least four decimals.
    let rate = |amount: f64| format_amount(amount, config.display_decimals.max(4), &config.currency);

    let b = &result.breakdown;
    let c = &result.comparison;
    let mut out = String::new();

    let _ = writeln!(out, "{}", result.product_name);
    let _ = writeln!(
        out,
        "  {:<24}{} ({} h/month)",
        "Fixed cost policy", result.fixed_cost_policy, result.reference_monthly_hours
    );
    let _ = writeln!(out, "  {:<24}{}", "Hourly labor rate", money(result.hourly_labor_rate));
    let _ = writeln!(out, "  {:<24}{}", "Hourly fixed cost", rate(result.hourly_fixed_cost_rate));
    out.push('\n');

    let _ = writeln!(out, "  {:<24}{}", "Labor", money(b.labor_cost));
    let _ = writeln!(out, "  {:<24}{}", "Fixed cost share", money(b.fixed_cost_share));
    let _ = writeln!(out, "  {:<24}{}", "Materials", money(result.variable.material_cost));
    if result.variable.print_cost != 0.0 {
        let _ = writeln!(out, "  {:<24}{}", "Printing", money(result.variable.print_cost));
    }
    if result.variable.other_cost != 0.0 {
        let _ = writeln!(out, "  {:<24}{}", "Other costs", money(result.variable.other_cost));
    }
    let _ = writeln!(out, "  {:<24}{}", "Total cost", money(b.total_cost));
    let _ = writeln!(out, "  {:<24}{}", "Profit", money(b.profit_amount));
    let _ = writeln!(out, "  {:<24}{}", "Suggested price", money(b.suggested_price));
    if let Some(rounded) = b.rounded_suggested_price {
        let _ = writeln!(out, "  {:<24}{}", "Rounded suggestion", money(rounded));
    }

    if c.manual_price_applied {
        out.push('\n');
        let _ = writeln!(out, "  {:<24}{}", "Your price", money(c.price_basis));
        let _ = writeln!(
            out,
            "  {:<24}{} ({:.1}%)",
            "Profit at your price",
            money(c.profit_amount),
            c.profit_margin_percent
        );
        if c.below_suggested {
            let _ = writeln!(out, "  Warning: your price is below the suggested price");
        }
    }

    if !result.unresolved_consumables.is_empty() {
        out.push('\n');
        let _ = writeln!(
            out,
            "  Not in catalog (counted as free): {}",
            result.unresolved_consumables.join(", ")
        );
    }

    out
}
