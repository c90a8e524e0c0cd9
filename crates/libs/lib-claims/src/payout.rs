//! # Payout Console
//!
//! Simulated interaction with the encrypted payout contract: create a payout
//! request, add recipients to it, then process it. Every call succeeds or
//! fails synchronously and is only recorded locally as a [`ContractCall`].

use crate::config::DashboardConfig;
use crate::error::{ClaimError, Result};
use crate::notify::Notification;
use chrono::{DateTime, Utc};
use lib_utils::{deadline_after_days, first_error, validate_required, validate_u32_amount};
use shared::dto::payout::{
    ContractCall, ContractFunction, PayoutRecipient, PayoutRequest, PayoutStatus,
};

const FILL_REQUIRED: &str = "Please fill in all required fields";
const CREATE_FIRST: &str = "Please create a payout request first";
const CREATE_FIRST_WITH_RECIPIENT: &str =
    "Please create a payout request first and fill recipient details";

/// Inputs of the payout console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutField {
    Description,
    Amount,
    RecipientAddress,
    RecipientAmount,
    Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutDraft {
    pub description: String,
    pub amount: String,
    pub recipient_address: String,
    pub recipient_amount: String,
    pub metadata: String,
}

impl PayoutDraft {
    pub fn get(&self, field: PayoutField) -> &str {
        match field {
            PayoutField::Description => &self.description,
            PayoutField::Amount => &self.amount,
            PayoutField::RecipientAddress => &self.recipient_address,
            PayoutField::RecipientAmount => &self.recipient_amount,
            PayoutField::Metadata => &self.metadata,
        }
    }

    fn get_mut(&mut self, field: PayoutField) -> &mut String {
        match field {
            PayoutField::Description => &mut self.description,
            PayoutField::Amount => &mut self.amount,
            PayoutField::RecipientAddress => &mut self.recipient_address,
            PayoutField::RecipientAmount => &mut self.recipient_amount,
            PayoutField::Metadata => &mut self.metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutConsole {
    pub draft: PayoutDraft,
    /// Request recipients are added to. Cleared once it is processed.
    pub current: Option<PayoutRequest>,
    pub processed: Vec<PayoutRequest>,
    pub calls: Vec<ContractCall>,
    next_payout_id: u64,
    contract_address: String,
    deadline_days: i64,
}

impl Default for PayoutConsole {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl PayoutConsole {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            draft: PayoutDraft::default(),
            current: None,
            processed: Vec::new(),
            calls: Vec::new(),
            next_payout_id: 1,
            contract_address: config.contract_address.clone(),
            deadline_days: config.payout_deadline_days,
        }
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    pub fn set_field(mut self, field: PayoutField, value: impl Into<String>) -> Self {
        *self.draft.get_mut(field) = value.into();
        self
    }

    /// `createPayoutRequest(description, amount, deadline)`.
    pub fn create_request(mut self, connected: bool, now: DateTime<Utc>) -> Result<(Self, Notification)> {
        if !connected {
            return Err(ClaimError::NotConnected);
        }
        first_error([
            validate_required(&self.draft.description, FILL_REQUIRED),
            validate_required(&self.draft.amount, FILL_REQUIRED),
        ])
        .map_err(ClaimError::Payout)?;
        let amount = validate_u32_amount(&self.draft.amount).map_err(ClaimError::Payout)?;
        let deadline = deadline_after_days(now, self.deadline_days).map_err(|_| {
            ClaimError::Payout(format!(
                "Payout deadline of {} days is out of range",
                self.deadline_days
            ))
        })?;

        let id = self.next_payout_id;
        self.next_payout_id += 1;

        let request = PayoutRequest {
            id,
            description: self.draft.description.trim().to_string(),
            amount,
            deadline,
            recipients: Vec::new(),
            status: PayoutStatus::Open,
        };
        log::info!("payout request {} created for {}", id, amount);

        self.record_call(ContractFunction::CreatePayoutRequest, id);
        self.draft.description.clear();
        self.draft.amount.clear();
        self.current = Some(request);

        Ok((self, Notification::success("Payout request created successfully!")))
    }

    /// `addRecipient(payoutId, recipientAddress, amount, metadata)`.
    pub fn add_recipient(mut self) -> Result<(Self, Notification)> {
        let id = match &self.current {
            Some(request) => request.id,
            None => return Err(ClaimError::Payout(CREATE_FIRST_WITH_RECIPIENT.to_string())),
        };
        first_error([
            validate_required(&self.draft.recipient_address, CREATE_FIRST_WITH_RECIPIENT),
            validate_required(&self.draft.recipient_amount, CREATE_FIRST_WITH_RECIPIENT),
        ])
        .map_err(ClaimError::Payout)?;
        let amount = validate_u32_amount(&self.draft.recipient_amount).map_err(ClaimError::Payout)?;

        let recipient = PayoutRecipient {
            address: self.draft.recipient_address.trim().to_string(),
            amount,
            metadata: std::mem::take(&mut self.draft.metadata),
        };
        if let Some(request) = self.current.as_mut() {
            request.recipients.push(recipient);
        }
        log::info!("recipient added to payout request {}", id);

        self.record_call(ContractFunction::AddRecipient, id);
        self.draft.recipient_address.clear();
        self.draft.recipient_amount.clear();

        Ok((self, Notification::success("Recipient added successfully!")))
    }

    /// `processPayout(payoutId)`.
    pub fn process_payout(mut self) -> Result<(Self, Notification)> {
        let mut request = self
            .current
            .take()
            .ok_or_else(|| ClaimError::Payout(CREATE_FIRST.to_string()))?;
        request.status = PayoutStatus::Processing;
        log::info!(
            "processing payout request {} with {} recipient(s)",
            request.id,
            request.recipients.len()
        );

        self.record_call(ContractFunction::ProcessPayout, request.id);
        self.processed.push(request);

        Ok((self, Notification::success("Payout processing initiated!")))
    }

    fn record_call(&mut self, function: ContractFunction, payout_id: u64) {
        self.calls.push(ContractCall {
            contract_address: self.contract_address.clone(),
            function,
            payout_id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    fn drafted() -> PayoutConsole {
        PayoutConsole::default()
            .set_field(PayoutField::Description, "Storm damage batch")
            .set_field(PayoutField::Amount, "5000")
    }

    #[test]
    fn test_create_requires_connection() {
        let err = drafted().create_request(false, now()).unwrap_err();
        assert_eq!(err, ClaimError::NotConnected);
    }

    #[test]
    fn test_create_requires_fields() {
        let console = PayoutConsole::default().set_field(PayoutField::Description, "x");
        let err = console.create_request(true, now()).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn test_create_rejects_fractional_amount() {
        let console = drafted().set_field(PayoutField::Amount, "1.5");
        assert!(matches!(
            console.create_request(true, now()),
            Err(ClaimError::Payout(_))
        ));
    }

    #[test]
    fn test_create_assigns_id_and_deadline() {
        let (console, note) = drafted().create_request(true, now()).unwrap();
        let request = console.current.as_ref().unwrap();
        assert_eq!(request.id, 1);
        assert_eq!(request.amount, 5000);
        assert_eq!(request.deadline, Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap());
        assert_eq!(note.message, "Payout request created successfully!");
        assert!(console.draft.description.is_empty());
        assert_eq!(console.calls[0].function, ContractFunction::CreatePayoutRequest);
        assert_eq!(console.calls[0].contract_address, console.contract_address());
    }

    #[test]
    fn test_create_rejects_unusable_deadline_config() {
        for days in [i64::MAX, 0, -1] {
            let config: DashboardConfig =
                serde_json::from_str(&format!(r#"{{ "payout_deadline_days": {days} }}"#)).unwrap();
            let console = PayoutConsole::new(&config)
                .set_field(PayoutField::Description, "Storm damage batch")
                .set_field(PayoutField::Amount, "5000");
            let err = console.create_request(true, now()).unwrap_err();
            assert_eq!(
                err,
                ClaimError::Payout(format!("Payout deadline of {days} days is out of range"))
            );
        }
    }

    #[test]
    fn test_add_recipient_requires_request() {
        let console = PayoutConsole::default()
            .set_field(PayoutField::RecipientAddress, "0xabc")
            .set_field(PayoutField::RecipientAmount, "10");
        let err = console.add_recipient().unwrap_err();
        assert_eq!(err.to_string(), CREATE_FIRST_WITH_RECIPIENT);
    }

    #[test]
    fn test_full_payout_flow() {
        let (console, _) = drafted().create_request(true, now()).unwrap();
        let (console, note) = console
            .set_field(PayoutField::RecipientAddress, "0xabc")
            .set_field(PayoutField::RecipientAmount, "1200")
            .set_field(PayoutField::Metadata, "adjuster note")
            .add_recipient()
            .unwrap();
        assert_eq!(note.message, "Recipient added successfully!");
        assert!(console.draft.metadata.is_empty());

        let (console, note) = console.process_payout().unwrap();
        assert_eq!(note.message, "Payout processing initiated!");
        assert!(console.current.is_none());
        assert_eq!(console.processed[0].status, PayoutStatus::Processing);
        assert_eq!(console.processed[0].recipients[0].metadata, "adjuster note");
        assert_eq!(console.calls.len(), 3);
    }

    #[test]
    fn test_process_requires_request() {
        let err = PayoutConsole::default().process_payout().unwrap_err();
        assert_eq!(err.to_string(), CREATE_FIRST);
    }

    #[test]
    fn test_ids_keep_increasing_after_processing() {
        let (console, _) = drafted().create_request(true, now()).unwrap();
        let (console, _) = console.process_payout().unwrap();
        let (console, _) = console
            .set_field(PayoutField::Description, "second")
            .set_field(PayoutField::Amount, "1")
            .create_request(true, now())
            .unwrap();
        assert_eq!(console.current.unwrap().id, 2);
    }
}
