//! Helper functions for creating specific error types

use super::types::PricingError;

impl PricingError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    /// Errors caused by what the user supplied (bad files, bad values) rather than
    /// by the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::Validation(_)
                | Self::Parsing(_)
                | Self::NotFound(_)
                | Self::Yaml(_)
                | Self::Serialization(_)
        )
    }
}
