//! Common test utilities for print-pricing
//!
//! - Quote fixtures and data factories
//! - Custom assertions

pub mod assertions;
pub mod fixtures;

pub use fixtures::QuoteFactory;
