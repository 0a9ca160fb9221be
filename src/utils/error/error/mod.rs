//! Error handling for the pricing crate
//!
//! The pricing engine itself is total and never fails; these errors come from
//! configuration and quote loading.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{PricingError, Result};
