//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Keep the first N and last M characters of an address
//! - [`short_address`] - `0x1234...5678` style, used wherever a wallet is shown
//!
//! ```rust
//! use shared::utils::short_address;
//!
//! let address = "0x742d35Cc6634C0532925a3b8D0C0E1C4C5C5C5C5";
//! assert_eq!(short_address(address), "0x742d...C5C5");
//! ```

/// Format an address by keeping the first `prefix_len` and last `suffix_len`
/// characters.
///
/// If the address is not longer than `prefix_len + suffix_len` it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b8D0C0E1C4C5C5C5C5";
/// assert_eq!(format_address(addr, 4, 4), "0x74...C5C5");
/// assert_eq!(format_address("0x12", 4, 4), "0x12");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten an EVM-style address to its `0x` prefix plus four hex digits on
/// each side.
pub fn short_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x1234567890abcdef1234567890abcdef12345678";
        assert_eq!(format_address(addr, 6, 4), "0x1234...5678");
        assert_eq!(format_address(addr, 2, 2), "0x...78");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("", 4, 4), "");
    }

    #[test]
    fn test_format_address_multibyte() {
        assert_eq!(format_address("ééééééééééé", 2, 2), "éé...éé");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x742d35Cc6634C0532925a3b8D0C0E1C4C5C5C5C5"),
            "0x742d...C5C5"
        );
    }
}
