//! # Validation Utilities
//!
//! Input validation helpers. Errors are plain messages meant to be shown to
//! the user as-is.

/// Validate that a value is not empty once surrounding whitespace is ignored.
///
/// `message` is returned unchanged on failure.
pub fn validate_required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Parse a whole, non-negative amount that fits the contract's `uint32`.
pub fn validate_u32_amount(value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| "Amount must be a whole number that fits in 32 bits".to_string())
}

/// Run a list of checks and keep only the first failure.
pub fn first_error<I>(checks: I) -> Result<(), String>
where
    I: IntoIterator<Item = Result<(), String>>,
{
    checks.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("John", "Name is required").is_ok());
        assert_eq!(
            validate_required("   \t", "Name is required"),
            Err("Name is required".to_string())
        );
    }

    #[test]
    fn test_validate_u32_amount() {
        assert_eq!(validate_u32_amount(" 1500 "), Ok(1500));
        assert!(validate_u32_amount("12.5").is_err());
        assert!(validate_u32_amount("-1").is_err());
        assert!(validate_u32_amount("4294967296").is_err());
    }

    #[test]
    fn test_first_error_stops_at_first_failure() {
        let result = first_error(vec![
            Ok(()),
            Err("first".to_string()),
            Err("second".to_string()),
        ]);
        assert_eq!(result, Err("first".to_string()));
        assert_eq!(first_error(Vec::<Result<(), String>>::new()), Ok(()));
    }
}
