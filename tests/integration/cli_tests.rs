//! Command line runs
//!
//! Drives `cli::run` with parsed arguments and checks what would be printed.

#[cfg(test)]
mod tests {
    use clap::Parser;
    use print_pricing::cli::{self, Cli};
    use print_pricing::PricingError;
    use std::path::PathBuf;

    fn demo(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("demos")
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    fn run(args: &[&str]) -> print_pricing::Result<String> {
        let mut argv = vec!["pricing"];
        argv.extend_from_slice(args);
        cli::run(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_quote_report() {
        let output = run(&["--policy", "calendar-hours", "quote", &demo("sticker-sheet.yaml")]).unwrap();

        assert!(output.starts_with("Sticker sheet"));
        assert!(output.contains("Rounded suggestion"));
        assert!(output.contains("75.00"));
    }

    #[test]
    fn test_manual_price_flag_overrides_file() {
        let output = run(&[
            "--policy",
            "calendar-hours",
            "quote",
            &demo("invitations.json"),
            "--manual-price",
            "120",
            "--json",
        ])
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["comparison"]["price_basis"], 120.0);
        assert_eq!(value["comparison"]["below_suggested"], false);
    }

    /// Text that is not a number counts as zero, which means "use the suggestion"
    #[test]
    fn test_lenient_manual_price() {
        let output = run(&[
            "--policy",
            "working-hours",
            "quote",
            &demo("sticker-sheet.yaml"),
            "--manual-price",
            "cheap",
            "--json",
        ])
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["comparison"]["manual_price_applied"], false);
    }

    #[test]
    fn test_bad_config_file_is_user_error() {
        let err = run(&[
            "--config",
            "/no/such/pricing.yaml",
            "--policy",
            "calendar-hours",
            "show-config",
        ])
        .unwrap_err();

        assert!(matches!(err, PricingError::Config(_)));
        assert_eq!(cli::exit_code_for(&err), 2);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = PricingError::from(std::io::Error::other("disk on fire"));
        assert_eq!(cli::exit_code_for(&err), 1);
    }
}
