//! # Shared Utility Functions
//!
//! Display helpers used by every client of the marketplace API.
//!
//! ## Price Formatting
//!
//! - [`format_price`] - Format an amount with its currency symbol, two decimals
//! - [`currency_symbol`] - Map an ISO currency code to its display symbol
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_price;
//!
//! assert_eq!(format_price(19.5, "USD"), "$19.50");
//! assert_eq!(format_price(7.0, "EUR"), "€7.00");
//! ```

/// Display symbol for an ISO 4217 currency code.
///
/// Unknown codes are returned as-is followed by a space, so `"MAD"` renders
/// as `"MAD 12.00"`.
pub fn currency_symbol(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "USD" | "" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{} ", other),
    }
}

/// Format an amount with its currency symbol and two decimal places.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(0.0, "USD"), "$0.00");
/// assert_eq!(format_price(12.5, "GBP"), "£12.50");
/// assert_eq!(format_price(12.0, "MAD"), "MAD 12.00");
/// ```
pub fn format_price(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency_symbol(currency), amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(19.5, "USD"), "$19.50");
        assert_eq!(format_price(19.5, "usd"), "$19.50");
        assert_eq!(format_price(1234.0, "EUR"), "€1234.00");
    }

    #[test]
    fn test_unknown_currency() {
        assert_eq!(format_price(3.0, "MAD"), "MAD 3.00");
    }

    #[test]
    fn test_empty_currency_defaults_to_dollar() {
        assert_eq!(currency_symbol(""), "$");
    }
}
