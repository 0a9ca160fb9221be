//! Product pricing for print and graphics work
//!
//! `engine` holds the pure formulas (labor rate, fixed cost rate, consumable
//! costs, breakdown, manual price comparison). `PricingService` runs them over a
//! whole [`Quote`] with a chosen [`FixedCostPolicy`].

pub mod engine;
pub(crate) mod quote;
mod service;
mod types;


// Re-export public types
pub use quote::{OtherCost, Quote, QuoteProduct};
pub use service::PricingService;
pub use types::{
    AmortizationHours, CALENDAR_HOURS_PER_MONTH, ConsumableItem, ConsumableKind, ConsumableUsage,
    CostBreakdown, DEFAULT_WORKING_HOURS_PER_MONTH, FixedCostItem, FixedCostPolicy, LaborConfig,
    PriceComparison, ProductSpec, QuoteResult, VariableCostDetail,
};
