//! # Utilities Library
//!
//! Small helpers shared by the claims core: required-field validation and
//! time handling for payout deadlines and incident dates.

pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use time::{deadline_after_days, format_calendar_date, now_utc, parse_calendar_date};
pub use validation::{first_error, validate_required, validate_u32_amount};
