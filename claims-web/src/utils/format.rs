//! # Formatting Utilities
//!
//! Number formatting for the claims list and the payout console.
//! For address formatting, use [`shared::utils::short_address`].
//!
//! ## Functions
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_usd`] - Whole dollar amounts (`$2,500`)
//! - [`format_claim_amount`] - The claim amount input as dollars, if it parses

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use claims_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();
    let rounds_to_zero = formatted.chars().all(|ch| ch == '0' || ch == '.');
    let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Whole US dollars with comma grouping.
///
/// ```rust
/// use claims_web::utils::format::format_usd;
///
/// assert_eq!(format_usd(8_900), "$8,900");
/// ```
pub fn format_usd(amount: u64) -> String {
    format!("${}", format_number(amount as f64, 0))
}

/// Render a claim amount input (`"1250.5"`) as `$1,250.50`, negatives as
/// `-$5.00`. The amount is never validated, so anything that does not parse
/// yields `None`.
pub fn format_claim_amount(input: &str) -> Option<String> {
    let value: f64 = input.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let grouped = format_number(value.abs(), 2);
    let sign = if value < 0.0 && grouped != "0.00" { "-" } else { "" };
    Some(format!("{}${}", sign, grouped))
}
