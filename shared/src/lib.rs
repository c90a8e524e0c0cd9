//! # Shared Claims Data Model
//!
//! Plain data types used by both the claims core library and the web front-end.
//! Nothing in here holds behaviour beyond parsing, labelling and formatting;
//! state transitions live in `lib-claims`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::claims`]**: Claim form record, claim types, static claim summaries
//!   - **[`dto::payout`]**: Encrypted payout requests, recipients and illustrative contract calls
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::short_address`]**: `0x1234...5678` style shortening
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON with `serde`. The claim form record keeps the
//! camelCase field names the form inputs are keyed by:
//!
//! ```rust
//! use shared::dto::claims::ClaimFormRecord;
//!
//! let record = ClaimFormRecord::sample();
//! let json = serde_json::to_value(&record).unwrap();
//! assert_eq!(json["claimantName"], "John Smith");
//! assert_eq!(json["policyNumber"], "POL-789456123");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
