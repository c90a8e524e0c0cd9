//! # Claims Dashboard Core
//!
//! Runtime-agnostic state and transitions behind the claims dashboard. The
//! web front-end keeps a [`DashboardState`] in a signal and replaces it with
//! the value each transition returns; nothing in here touches the DOM or a
//! timer directly.
//!
//! ## Modules
//!
//! - [`connection`] - Wallet connection flag
//! - [`form`] - Claim form updates and required-field validation
//! - [`submission`] - Submission phases and the cancellable simulated submission
//! - [`dashboard`] - The aggregate state and its transitions
//! - [`payout`] - Simulated payout contract console
//! - [`notify`] - Notifications and the toast queue
//! - [`config`] - Dashboard constants
//! - [`error`] - [`ClaimError`] and the crate `Result`
//!
//! ## Example
//!
//! ```rust
//! use lib_claims::{DashboardState, SubmitOutcome};
//! use shared::dto::claims::ClaimField;
//!
//! let state = DashboardState::default();
//! let (state, _) = state.toggle_connection();
//! let state = state
//!     .set_field(ClaimField::ClaimType, "auto")
//!     .set_field(ClaimField::IncidentDate, "2024-01-01")
//!     .set_field(ClaimField::ClaimAmount, "100")
//!     .set_field(ClaimField::Description, "dent");
//!
//! let (state, outcome) = state.begin_submit();
//! assert!(matches!(outcome, SubmitOutcome::Started { .. }));
//! assert!(!state.can_submit());
//! ```

pub mod config;
pub mod connection;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod notify;
pub mod payout;
pub mod submission;

pub use config::DashboardConfig;
pub use connection::ConnectionState;
pub use dashboard::{DashboardState, SubmitOutcome};
pub use error::{ClaimError, Result, ValidationError};
pub use notify::{Notification, NotificationLevel, Toast, ToastQueue};
pub use payout::{PayoutConsole, PayoutDraft, PayoutField};
pub use submission::{simulate_submission, ClaimReceipt, SubmissionHandle, SubmissionPhase, SubmissionTicket};
