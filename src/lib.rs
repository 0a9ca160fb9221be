//! # print-pricing
//!
//! Pricing engine for print and graphics micro-businesses. Turns the owner's
//! desired salary, monthly fixed costs and per-product consumption of
//! materials into a suggested sale price.
//!
//! ## Features
//!
//! - **Labor rate**: desired monthly salary spread over the hours actually worked
//! - **Fixed cost amortization**: explicit choice between calendar hours and working hours
//! - **Consumables**: unit cost from pack price and yield, ink charged per print
//! - **Manual price check**: profit and margin at the price you really charge
//! - **Total functions**: degenerate inputs give zero contributions, never NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use print_pricing::{
//!     ConsumableItem, ConsumableUsage, FixedCostItem, FixedCostPolicy, LaborConfig,
//!     PricingConfig, PricingService, Quote, QuoteProduct,
//! };
//!
//! let quote = Quote {
//!     labor: LaborConfig::new(1500.0, 20, 8.0),
//!     fixed_costs: vec![FixedCostItem::new("Rent", 132.0)],
//!     consumables: vec![ConsumableItem::new("vinyl", 22.0, 50.0)],
//!     product: QuoteProduct {
//!         name: "Sticker sheet".to_string(),
//!         time_spent_hours: Some(2.0),
//!         desired_profit_margin_percent: 50.0,
//!         consumables_used: vec![ConsumableUsage::new("vinyl", 70.0)],
//!         ..QuoteProduct::default()
//!     },
//!     manual_price: None,
//! };
//!
//! let service = PricingService::new(PricingConfig::new(FixedCostPolicy::CalendarHours));
//! let result = service.evaluate(&quote);
//! assert_eq!(result.breakdown.rounded_suggested_price, Some(75.0));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::{Config, PricingConfig};
pub use utils::error::{PricingError, Result};

pub use services::pricing::engine;
pub use services::pricing::{
    AmortizationHours, ConsumableItem, ConsumableKind, ConsumableUsage, CostBreakdown,
    FixedCostItem, FixedCostPolicy, LaborConfig, OtherCost, PriceComparison, PricingService,
    ProductSpec, Quote, QuoteProduct, QuoteResult, VariableCostDetail,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
