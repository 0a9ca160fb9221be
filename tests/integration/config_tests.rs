//! Configuration integration tests
//!
//! Config files, policy resolution and validation through the public API.

#[cfg(test)]
mod tests {
    use print_pricing::config::{PricingSettings, Validate};
    use print_pricing::{Config, FixedCostPolicy, PricingError};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// The shipped example configuration is valid
    #[test]
    fn test_example_config_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/pricing.yaml.example");
        let config = Config::from_file(path).unwrap();

        let pricing = config.pricing_config(None).unwrap();
        assert_eq!(pricing.fixed_cost_policy, FixedCostPolicy::CalendarHours);
        assert_eq!(pricing.calendar_hours_per_month, 720.0);
        assert_eq!(pricing.fallback_working_hours_per_month, 176.0);
        assert_eq!(pricing.currency, "BRL");
        assert!(pricing.validate().is_ok());
    }

    /// Without a policy anywhere the configuration cannot be resolved
    #[test]
    fn test_policy_is_required() {
        let file = config_file("pricing:\n  currency: USD\n");
        let config = Config::from_file(file.path()).unwrap();

        let err = config.pricing_config(None).unwrap_err();
        assert!(matches!(err, PricingError::Config(_)));
        assert!(err.to_string().contains("fixed cost policy"));

        let pricing = config
            .pricing_config(Some(FixedCostPolicy::WorkingHours))
            .unwrap();
        assert_eq!(pricing.fixed_cost_policy, FixedCostPolicy::WorkingHours);
        assert_eq!(pricing.currency, "USD");
    }

    #[test]
    fn test_unknown_policy_in_file() {
        let file = config_file("pricing:\n  fixed_cost_policy: per_minute\n");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PricingError::Config(_)));
    }

    #[test]
    fn test_invalid_currency() {
        let file = config_file("pricing:\n  currency: reais\n");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PricingError::Validation(_)));
        assert!(err.is_user_error());
        assert!(err.to_string().contains("currency"));
    }

    #[test]
    fn test_too_many_decimals() {
        let settings = PricingSettings {
            display_decimals: 9,
            ..PricingSettings::default()
        };
        assert!(settings.validate().unwrap_err().contains("display_decimals"));
    }

    /// Environment-style overrides beat the file
    #[test]
    fn test_overrides_beat_file() {
        let file = config_file("pricing:\n  fixed_cost_policy: calendar_hours\n  currency: BRL\n");
        let mut config = Config::from_file(file.path()).unwrap();

        config
            .pricing
            .apply_overrides(|key| match key {
                "PRICING_FIXED_COST_POLICY" => Some("working-hours".to_string()),
                "PRICING_CURRENCY" => Some("usd".to_string()),
                _ => None,
            })
            .unwrap();

        let pricing = config.pricing_config(None).unwrap();
        assert_eq!(pricing.fixed_cost_policy, FixedCostPolicy::WorkingHours);
        assert_eq!(pricing.currency, "USD");
    }
}
