//! Integration tests for print-pricing
//!
//! These tests drive the public API the way a front end would: quotes in,
//! priced results out.

pub mod cli_tests;
pub mod config_tests;
