//! Claim form updates and validation.
//!
//! Input is never checked while typing; the only check is the required-field
//! pass at submit time. `claimAmount` and `ssn` have no format rules.

use crate::error::{ClaimError, Result, ValidationError};
use lib_utils::validate_required;
use shared::dto::claims::{ClaimField, ClaimFormRecord};

/// Overwrite one field.
pub fn set_field(mut record: ClaimFormRecord, field: ClaimField, value: impl Into<String>) -> ClaimFormRecord {
    *record.get_mut(field) = value.into();
    record
}

/// Overwrite a field addressed by its input key (`claimantName`, ...).
pub fn set_field_by_key(record: ClaimFormRecord, key: &str, value: impl Into<String>) -> Result<ClaimFormRecord> {
    let field = ClaimField::from_key(key).ok_or_else(|| ClaimError::UnknownField(key.to_string()))?;
    Ok(set_field(record, field, value))
}

/// Every empty required field, in form order.
pub fn validate(record: &ClaimFormRecord) -> Vec<ValidationError> {
    ClaimField::ALL
        .into_iter()
        .filter(|field| validate_required(record.get(*field), field.required_message()).is_err())
        .map(ValidationError::required)
        .collect()
}

/// First failing field, the one surfaced to the user.
pub fn first_validation_error(record: &ClaimFormRecord) -> Option<ValidationError> {
    validate(record).into_iter().next()
}

/// Clear the fields describing the incident, keeping the claimant identity.
pub fn reset_after_submit(mut record: ClaimFormRecord) -> ClaimFormRecord {
    for field in ClaimField::ALL.into_iter().filter(ClaimField::is_transient) {
        record.get_mut(field).clear();
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ClaimFormRecord {
        ClaimFormRecord {
            claimant_name: "John Smith".to_string(),
            policy_number: "POL-1".to_string(),
            ssn: "***-1234".to_string(),
            claim_type: "auto".to_string(),
            incident_date: "2024-01-01".to_string(),
            claim_amount: "100".to_string(),
            description: "dent".to_string(),
        }
    }

    #[test]
    fn test_complete_record_is_valid() {
        assert!(validate(&complete()).is_empty());
    }

    #[test]
    fn test_errors_follow_form_order() {
        let record = ClaimFormRecord::default();
        let messages: Vec<_> = validate(&record).into_iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec![
                "Claimant name is required",
                "Policy number is required",
                "Social security number is required",
                "Claim type is required",
                "Incident date is required",
                "Claim amount is required",
                "Incident description is required",
            ]
        );
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let record = set_field(complete(), ClaimField::PolicyNumber, "   ");
        let err = first_validation_error(&record).unwrap();
        assert_eq!(err.field, ClaimField::PolicyNumber);
    }

    #[test]
    fn test_amount_and_ssn_have_no_format_rules() {
        let record = set_field(complete(), ClaimField::ClaimAmount, "lots");
        let record = set_field(record, ClaimField::Ssn, "n/a");
        assert!(validate(&record).is_empty());
    }

    #[test]
    fn test_set_field_by_key() {
        let record = set_field_by_key(complete(), "description", "hail").unwrap();
        assert_eq!(record.description, "hail");

        let err = set_field_by_key(complete(), "wallet", "x").unwrap_err();
        assert_eq!(err, ClaimError::UnknownField("wallet".to_string()));
    }

    #[test]
    fn test_reset_keeps_identity_fields() {
        let record = reset_after_submit(complete());
        assert_eq!(record.claimant_name, "John Smith");
        assert_eq!(record.policy_number, "POL-1");
        assert_eq!(record.ssn, "***-1234");
        assert!(record.claim_type.is_empty());
        assert!(record.incident_date.is_empty());
        assert!(record.claim_amount.is_empty());
        assert!(record.description.is_empty());
    }
}
