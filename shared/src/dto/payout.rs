//! Payout DTOs for the simulated encrypted payout contract.
//!
//! Nothing here talks to a chain. The types describe what the dashboard
//! pretends to send to the payout contract so the console can show it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a payout request in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Open,
    Processing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRecipient {
    pub address: String,
    pub amount: u32,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub metadata: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRequest {
    pub id: u64,
    pub description: String,
    pub amount: u32,
    pub deadline: DateTime<Utc>,
    pub recipients: Vec<PayoutRecipient>,
    pub status: PayoutStatus,
}

impl PayoutRequest {
    /// Sum of all recipient amounts, widened so it cannot overflow.
    pub fn allocated(&self) -> u64 {
        self.recipients.iter().map(|r| u64::from(r.amount)).sum()
    }
}

/// Functions of the payout contract the console can "call".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractFunction {
    CreatePayoutRequest,
    AddRecipient,
    ProcessPayout,
}

impl ContractFunction {
    pub fn name(&self) -> &'static str {
        match self {
            ContractFunction::CreatePayoutRequest => "createPayoutRequest",
            ContractFunction::AddRecipient => "addRecipient",
            ContractFunction::ProcessPayout => "processPayout",
        }
    }
}

/// Illustrative record of a contract call. Never broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    pub contract_address: String,
    pub function: ContractFunction,
    pub payout_id: u64,
}
