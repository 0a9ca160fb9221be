//! Configuration data models

pub mod logging;
pub mod pricing;

pub use logging::LoggingConfig;
pub use pricing::{PricingConfig, PricingSettings};
