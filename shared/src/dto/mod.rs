//! # Data Transfer Objects (DTOs)
//!
//! - [`claims`] - Claim form record, claim types and the static claims list
//! - [`payout`] - Payout requests, recipients and simulated contract calls
//!
//! ## Serialization Format
//!
//! - **Claim form fields**: camelCase, matching the form input keys
//! - **Enums**: lowercase strings, except [`claims::ClaimStatus`] which keeps its display label
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod claims;
pub mod payout;

pub use claims::*;
pub use payout::*;
