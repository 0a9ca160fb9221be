//! Lenient numeric parsing for form-style input
//!
//! Front ends hand the engine plain numbers. These helpers turn raw text fields
//! into those numbers: empty or unreadable text becomes `0`, the same way an
//! emptied number input behaves.

/// Parse an amount typed by a user. Accepts `,` as the decimal separator.
pub fn parse_amount(text: &str) -> f64 {
    parse_optional_amount(text).unwrap_or(0.0)
}

/// Like [`parse_amount`], but distinguishes "nothing typed" (`None`) from a value.
///
/// Unreadable text is `Some(0.0)`.
pub fn parse_optional_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = normalize_decimal_separator(trimmed);
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => Some(0.0),
    }
}

/// Convert a production time given in minutes into hours.
pub fn hours_from_minutes(minutes: f64) -> f64 {
    minutes / 60.0
}

// "1.234,56" -> "1234.56", "12,5" -> "12.5", "1,234.56" -> "1234.56"
fn normalize_decimal_separator(text: &str) -> String {
    match (text.rfind(','), text.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => text.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => text.replace(',', ""),
        (Some(_), None) => text.replace(',', "."),
        _ => text.to_string(),
    }
}
