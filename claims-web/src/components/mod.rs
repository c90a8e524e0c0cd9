//! UI Components

pub mod claim_form;
pub mod claims_list;
pub mod footer;
pub mod header;
pub mod payout_console;
pub mod toaster;
pub mod wallet_gate;

pub use claim_form::ClaimForm;
pub use claims_list::ClaimsList;
pub use footer::Footer;
pub use header::Header;
pub use payout_console::PayoutConsole;
pub use toaster::Toaster;
pub use wallet_gate::WalletGate;
