//! Error handling utilities
//!
//! This module defines the crate error type and its helpers.

pub mod error;

pub use error::*;
