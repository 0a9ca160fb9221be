//! Pricing configuration models
//!
//! `PricingSettings` is what a config file or the environment provides;
//! `PricingConfig` is the resolved configuration the service runs with. The
//! difference is the fixed cost policy: settings may leave it out, a resolved
//! configuration always names one.

use crate::services::pricing::{
    AmortizationHours, CALENDAR_HOURS_PER_MONTH, DEFAULT_WORKING_HOURS_PER_MONTH, FixedCostPolicy,
};
use crate::utils::error::{PricingError, Result};
use serde::{Deserialize, Serialize};

/// Resolved pricing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub fixed_cost_policy: FixedCostPolicy,
    pub calendar_hours_per_month: f64,
    pub fallback_working_hours_per_month: f64,
    /// Report the suggested price rounded up to a whole unit
    pub round_suggested_price: bool,
    /// ISO 4217 code shown next to amounts
    pub currency: String,
    pub display_decimals: u8,
}

impl PricingConfig {
    /// Configuration with the given policy and default figures
    pub fn new(fixed_cost_policy: FixedCostPolicy) -> Self {
        Self {
            fixed_cost_policy,
            calendar_hours_per_month: CALENDAR_HOURS_PER_MONTH,
            fallback_working_hours_per_month: DEFAULT_WORKING_HOURS_PER_MONTH,
            round_suggested_price: true,
            currency: default_currency(),
            display_decimals: default_display_decimals(),
        }
    }

    pub fn amortization_hours(&self) -> AmortizationHours {
        AmortizationHours {
            calendar_hours_per_month: self.calendar_hours_per_month,
            fallback_working_hours_per_month: self.fallback_working_hours_per_month,
        }
    }
}

/// Pricing section of a configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// No default: the two policies price fixed costs very differently
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_cost_policy: Option<FixedCostPolicy>,
    #[serde(default = "default_calendar_hours")]
    pub calendar_hours_per_month: f64,
    #[serde(default = "default_fallback_working_hours")]
    pub fallback_working_hours_per_month: f64,
    #[serde(default = "default_true")]
    pub round_suggested_price: bool,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u8,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            fixed_cost_policy: None,
            calendar_hours_per_month: default_calendar_hours(),
            fallback_working_hours_per_month: default_fallback_working_hours(),
            round_suggested_price: true,
            currency: default_currency(),
            display_decimals: default_display_decimals(),
        }
    }
}

impl PricingSettings {
    /// Merge with another settings block (other takes precedence where it
    /// differs from the defaults)
    pub fn merge(mut self, other: Self) -> Self {
        if other.fixed_cost_policy.is_some() {
            self.fixed_cost_policy = other.fixed_cost_policy;
        }
        if other.calendar_hours_per_month != default_calendar_hours() {
            self.calendar_hours_per_month = other.calendar_hours_per_month;
        }
        if other.fallback_working_hours_per_month != default_fallback_working_hours() {
            self.fallback_working_hours_per_month = other.fallback_working_hours_per_month;
        }
        if !other.round_suggested_price {
            self.round_suggested_price = other.round_suggested_price;
        }
        if other.currency != default_currency() {
            self.currency = other.currency;
        }
        if other.display_decimals != default_display_decimals() {
            self.display_decimals = other.display_decimals;
        }
        self
    }

    /// Override fields from `PRICING_*` variables looked up through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup("PRICING_FIXED_COST_POLICY") {
            self.fixed_cost_policy = Some(policy.parse().map_err(PricingError::Config)?);
        }
        if let Some(hours) = lookup("PRICING_CALENDAR_HOURS") {
            self.calendar_hours_per_month = hours
                .trim()
                .parse()
                .map_err(|e| PricingError::config(format!("Invalid calendar hours: {}", e)))?;
        }
        if let Some(hours) = lookup("PRICING_FALLBACK_WORKING_HOURS") {
            self.fallback_working_hours_per_month = hours.trim().parse().map_err(|e| {
                PricingError::config(format!("Invalid fallback working hours: {}", e))
            })?;
        }
        if let Some(round) = lookup("PRICING_ROUND_SUGGESTED") {
            self.round_suggested_price = round.trim().parse().map_err(|e| {
                PricingError::config(format!("Invalid round suggested flag: {}", e))
            })?;
        }
        if let Some(currency) = lookup("PRICING_CURRENCY") {
            self.currency = currency.trim().to_uppercase();
        }
        if let Some(decimals) = lookup("PRICING_DISPLAY_DECIMALS") {
            self.display_decimals = decimals
                .trim()
                .parse()
                .map_err(|e| PricingError::config(format!("Invalid display decimals: {}", e)))?;
        }
        Ok(())
    }

    /// Pin down the fixed cost policy. `policy_override` wins over the settings;
    /// with neither, this is an error.
    pub fn resolve(&self, policy_override: Option<FixedCostPolicy>) -> Result<PricingConfig> {
        let fixed_cost_policy = policy_override
            .or(self.fixed_cost_policy)
            .ok_or_else(|| {
                PricingError::config(
                    "No fixed cost policy selected: set pricing.fixed_cost_policy to \
                     calendar_hours or working_hours",
                )
            })?;

        Ok(PricingConfig {
            fixed_cost_policy,
            calendar_hours_per_month: self.calendar_hours_per_month,
            fallback_working_hours_per_month: self.fallback_working_hours_per_month,
            round_suggested_price: self.round_suggested_price,
            currency: self.currency.clone(),
            display_decimals: self.display_decimals,
        })
    }
}

// Default value functions
fn default_calendar_hours() -> f64 {
    CALENDAR_HOURS_PER_MONTH
}

fn default_fallback_working_hours() -> f64 {
    DEFAULT_WORKING_HOURS_PER_MONTH
}

fn default_currency() -> String {
    "BRL".to_string()
}

fn default_display_decimals() -> u8 {
    2
}

fn default_true() -> bool {
    true
}
