//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `pricing_validators`: Pricing configuration validators
//! - `tests`: Test suite for all validators

mod pricing_validators;
mod trait_def;

pub use trait_def::Validate;
