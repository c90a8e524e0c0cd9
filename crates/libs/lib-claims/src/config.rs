//! Dashboard constants.
//!
//! There is no runtime environment to read from in the browser, so every
//! value is a compile-time constant collected into [`DashboardConfig`].

use serde::Deserialize;
use std::time::Duration;

/// Placeholder payout contract. No call is ever sent to it.
pub const CONTRACT_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D0C0E1C4C5C5C5C5";

/// Wallet shown once the connection toggle is on.
pub const PLACEHOLDER_WALLET_ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";

/// Simulated encryption and submission time.
pub const SUBMIT_DELAY_MS: u64 = 2_000;

pub const TOAST_DURATION_MS: u64 = 4_000;
pub const MAX_TOASTS: usize = 5;

/// Payout requests expire a week after creation.
pub const PAYOUT_DEADLINE_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub submit_delay_ms: u64,
    pub toast_duration_ms: u64,
    pub max_toasts: usize,
    pub contract_address: String,
    pub wallet_address: String,
    pub payout_deadline_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: SUBMIT_DELAY_MS,
            toast_duration_ms: TOAST_DURATION_MS,
            max_toasts: MAX_TOASTS,
            contract_address: CONTRACT_ADDRESS.to_string(),
            wallet_address: PLACEHOLDER_WALLET_ADDRESS.to_string(),
            payout_deadline_days: PAYOUT_DEADLINE_DAYS,
        }
    }
}

impl DashboardConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
        assert_eq!(config.toast_duration(), Duration::from_secs(4));
        assert_eq!(config.contract_address, CONTRACT_ADDRESS);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "submit_delay_ms": 10 }"#).unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.max_toasts, MAX_TOASTS);
        assert_eq!(config.payout_deadline_days, 7);
    }
}
