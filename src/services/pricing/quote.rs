//! Quote documents: everything needed to price one product, as loaded from disk
//! or assembled by a front end.

use super::types::{ConsumableItem, ConsumableUsage, FixedCostItem, LaborConfig, ProductSpec};
use crate::utils::error::{PricingError, Result};
use crate::utils::input::hours_from_minutes;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// A flat extra cost charged once per product (packaging, shipping label)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherCost {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "price")]
    pub amount: f64,
}

impl OtherCost {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Product section of a quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteProduct {
    #[serde(default)]
    pub name: String,
    /// Production time in hours. Wins over `production_time_minutes`.
    #[serde(default, alias = "time_spent", skip_serializing_if = "Option::is_none")]
    pub time_spent_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_time_minutes: Option<f64>,
    #[serde(
        default,
        alias = "profit_margin",
        alias = "desired_profit_margin",
        alias = "profit_margin_percentage"
    )]
    pub desired_profit_margin_percent: f64,
    #[serde(default, alias = "materials_used")]
    pub consumables_used: Vec<ConsumableUsage>,
    /// Printed impressions; every catalog ink the product does not list
    /// explicitly is charged this many units
    #[serde(default, alias = "print_count")]
    pub print_quantity: f64,
    #[serde(default)]
    pub other_costs: Vec<OtherCost>,
}

impl QuoteProduct {
    /// Production time in hours, from whichever field is set
    pub fn time_spent_hours(&self) -> f64 {
        match (self.time_spent_hours, self.production_time_minutes) {
            (Some(hours), _) => hours,
            (None, Some(minutes)) => hours_from_minutes(minutes),
            (None, None) => 0.0,
        }
    }

    pub fn to_spec(&self) -> ProductSpec {
        ProductSpec {
            name: self.name.clone(),
            time_spent_hours: self.time_spent_hours(),
            desired_profit_margin_percent: self.desired_profit_margin_percent,
            consumables_used: self.consumables_used.clone(),
        }
    }
}

/// Complete pricing input for one product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub labor: LaborConfig,
    #[serde(default)]
    pub fixed_costs: Vec<FixedCostItem>,
    /// Consumable catalog the product's usages refer to
    #[serde(default, alias = "materials")]
    pub consumables: Vec<ConsumableItem>,
    pub product: QuoteProduct,
    /// Price the seller intends to charge instead of the suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_price: Option<f64>,
}

impl Quote {
    /// Load a quote from a YAML or JSON file, chosen by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading quote from: {:?}", path);

        if !path.exists() {
            return Err(PricingError::not_found(format!(
                "Quote file {} does not exist",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let quote = if is_json(path) {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        debug!(
            "Quote loaded: product '{}', {} fixed costs, {} consumables",
            quote.product.name,
            quote.fixed_costs.len(),
            quote.consumables.len()
        );
        Ok(quote)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| PricingError::parsing(format!("Failed to parse quote: {}", e)))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| PricingError::parsing(format!("Failed to parse quote: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
