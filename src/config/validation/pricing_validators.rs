//! Pricing configuration validators
//!
//! Zero hour figures pass: the engine turns a zero divisor into a zero rate.
//! Negative or non-finite figures are configuration mistakes.

use super::trait_def::Validate;
use crate::config::models::{PricingConfig, PricingSettings};
use tracing::debug;

const MAX_DISPLAY_DECIMALS: u8 = 6;

impl Validate for PricingSettings {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating pricing settings");
        validate_figures(
            self.calendar_hours_per_month,
            self.fallback_working_hours_per_month,
            &self.currency,
            self.display_decimals,
        )
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<(), String> {
        validate_figures(
            self.calendar_hours_per_month,
            self.fallback_working_hours_per_month,
            &self.currency,
            self.display_decimals,
        )
    }
}

fn validate_figures(
    calendar_hours: f64,
    fallback_working_hours: f64,
    currency: &str,
    display_decimals: u8,
) -> Result<(), String> {
    validate_hours("calendar_hours_per_month", calendar_hours)?;
    validate_hours("fallback_working_hours_per_month", fallback_working_hours)?;
    validate_currency(currency)?;

    if display_decimals > MAX_DISPLAY_DECIMALS {
        return Err(format!(
            "display_decimals must be at most {}, got {}",
            MAX_DISPLAY_DECIMALS, display_decimals
        ));
    }
    Ok(())
}

fn validate_hours(field: &str, hours: f64) -> Result<(), String> {
    if !hours.is_finite() {
        return Err(format!("{} must be a finite number", field));
    }
    if hours < 0.0 {
        return Err(format!("{} cannot be negative, got {}", field, hours));
    }
    Ok(())
}

fn validate_currency(currency: &str) -> Result<(), String> {
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!(
            "currency must be a 3-letter ISO 4217 code, got '{}'",
            currency
        ));
    }
    Ok(())
}
