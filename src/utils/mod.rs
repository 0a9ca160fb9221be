//! Utility modules for the pricing crate
//!
//! - **error**: crate error type and result alias
//! - **input**: lenient parsing of user-typed numbers
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod input;
pub mod logging;

pub use error::{PricingError, Result};
pub use input::{hours_from_minutes, parse_amount, parse_optional_amount};
pub use logging::{LogFormat, LogLevel, LoggingUtils};
