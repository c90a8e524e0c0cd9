//! UI constants. Dashboard behaviour constants live in `lib_claims::config`.

pub const APP_NAME: &str = "Cipher Payout Hub";
pub const APP_TAGLINE: &str = "FHE-Encrypted Payout Management";

/// Element in index.html shown until the wasm bundle mounts.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

/// How long the "copied" check mark stays after copying the wallet address.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

pub const HEADER_BADGES: &[&str] = &["FHE Encrypted", "Fast Processing", "Multi-Wallet"];

pub const FOOTER_SERVICES: &[&str] = &["Claims Processing", "Encrypted Storage", "FHE Processing"];
pub const FOOTER_CONTACT: &[&str] = &["1-800-SECURE", "claims@secureguard.com", "New York, NY"];
pub const FOOTER_SECURITY: &[&str] = &["256-bit Encryption", "HIPAA Compliant", "Zero-Knowledge"];
