//! Claim DTOs: the submission form record and the static claims list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields of the claim submission form, in display and validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClaimField {
    ClaimantName,
    PolicyNumber,
    Ssn,
    ClaimType,
    IncidentDate,
    ClaimAmount,
    Description,
}

impl ClaimField {
    /// All form fields in the order they are rendered and validated.
    pub const ALL: [ClaimField; 7] = [
        ClaimField::ClaimantName,
        ClaimField::PolicyNumber,
        ClaimField::Ssn,
        ClaimField::ClaimType,
        ClaimField::IncidentDate,
        ClaimField::ClaimAmount,
        ClaimField::Description,
    ];

    /// Form input key (camelCase, same as the serialized record).
    pub fn key(&self) -> &'static str {
        match self {
            ClaimField::ClaimantName => "claimantName",
            ClaimField::PolicyNumber => "policyNumber",
            ClaimField::Ssn => "ssn",
            ClaimField::ClaimType => "claimType",
            ClaimField::IncidentDate => "incidentDate",
            ClaimField::ClaimAmount => "claimAmount",
            ClaimField::Description => "description",
        }
    }

    /// Input label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            ClaimField::ClaimantName => "Claimant Name",
            ClaimField::PolicyNumber => "Policy Number",
            ClaimField::Ssn => "Social Security Number",
            ClaimField::ClaimType => "Claim Type",
            ClaimField::IncidentDate => "Incident Date",
            ClaimField::ClaimAmount => "Claim Amount",
            ClaimField::Description => "Incident Description",
        }
    }

    /// Message reported when the field is left empty.
    pub fn required_message(&self) -> &'static str {
        match self {
            ClaimField::ClaimantName => "Claimant name is required",
            ClaimField::PolicyNumber => "Policy number is required",
            ClaimField::Ssn => "Social security number is required",
            ClaimField::ClaimType => "Claim type is required",
            ClaimField::IncidentDate => "Incident date is required",
            ClaimField::ClaimAmount => "Claim amount is required",
            ClaimField::Description => "Incident description is required",
        }
    }

    /// Fields blurred while sensitive data is hidden.
    pub fn is_sensitive(&self) -> bool {
        matches!(
            self,
            ClaimField::ClaimantName | ClaimField::PolicyNumber | ClaimField::Ssn
        )
    }

    /// Fields cleared after a successful submission. Identity fields are kept
    /// so the claimant can file a follow-up claim.
    pub fn is_transient(&self) -> bool {
        !self.is_sensitive()
    }

    /// Look a field up by its input key.
    pub fn from_key(key: &str) -> Option<ClaimField> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The claim form as typed by the user. Every value is kept as the raw input
/// string; parsing happens only for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimFormRecord {
    pub claimant_name: String,
    pub policy_number: String,
    pub ssn: String,
    pub claim_type: String,
    pub incident_date: String,
    pub claim_amount: String,
    pub description: String,
}

impl ClaimFormRecord {
    /// Record the form starts with when the dashboard mounts.
    pub fn sample() -> Self {
        Self {
            claimant_name: "John Smith".to_string(),
            policy_number: "POL-789456123".to_string(),
            ssn: "***-**-1234".to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: ClaimField) -> &str {
        match field {
            ClaimField::ClaimantName => &self.claimant_name,
            ClaimField::PolicyNumber => &self.policy_number,
            ClaimField::Ssn => &self.ssn,
            ClaimField::ClaimType => &self.claim_type,
            ClaimField::IncidentDate => &self.incident_date,
            ClaimField::ClaimAmount => &self.claim_amount,
            ClaimField::Description => &self.description,
        }
    }

    pub fn get_mut(&mut self, field: ClaimField) -> &mut String {
        match field {
            ClaimField::ClaimantName => &mut self.claimant_name,
            ClaimField::PolicyNumber => &mut self.policy_number,
            ClaimField::Ssn => &mut self.ssn,
            ClaimField::ClaimType => &mut self.claim_type,
            ClaimField::IncidentDate => &mut self.incident_date,
            ClaimField::ClaimAmount => &mut self.claim_amount,
            ClaimField::Description => &mut self.description,
        }
    }

    /// Parsed claim type, if the stored value names one.
    pub fn claim_type(&self) -> Option<ClaimType> {
        self.claim_type.parse().ok()
    }
}

/// Insurance line a claim is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Auto,
    Home,
    Health,
    Life,
}

impl ClaimType {
    pub const ALL: [ClaimType; 4] = [
        ClaimType::Auto,
        ClaimType::Home,
        ClaimType::Health,
        ClaimType::Life,
    ];

    /// Value stored in the form record.
    pub fn value(&self) -> &'static str {
        match self {
            ClaimType::Auto => "auto",
            ClaimType::Home => "home",
            ClaimType::Health => "health",
            ClaimType::Life => "life",
        }
    }

    /// Option label in the claim type selector.
    pub fn label(&self) -> &'static str {
        match self {
            ClaimType::Auto => "Auto Insurance",
            ClaimType::Home => "Home Insurance",
            ClaimType::Health => "Health Insurance",
            ClaimType::Life => "Life Insurance",
        }
    }

    /// Short name used in the claims list.
    pub fn short_label(&self) -> &'static str {
        match self {
            ClaimType::Auto => "Auto",
            ClaimType::Home => "Home",
            ClaimType::Health => "Health",
            ClaimType::Life => "Life",
        }
    }
}

impl FromStr for ClaimType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ClaimType::Auto),
            "home" => Ok(ClaimType::Home),
            "health" => Ok(ClaimType::Health),
            "life" => Ok(ClaimType::Life),
            other => Err(format!("Unknown claim type: {}", other)),
        }
    }
}

/// Processing status of a previously filed claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Processing,
    Approved,
    #[serde(rename = "Under Review")]
    UnderReview,
}

/// Badge style a claim status is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge badge-primary",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
        }
    }
}

impl ClaimStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Processing => "Processing",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::UnderReview => "Under Review",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            ClaimStatus::Approved => BadgeVariant::Primary,
            ClaimStatus::Processing => BadgeVariant::Secondary,
            ClaimStatus::UnderReview => BadgeVariant::Outline,
        }
    }
}

/// A previously filed claim shown in the "Recent Claims" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSummary {
    pub id: String,
    pub claim_type: ClaimType,
    /// Whole US dollars.
    pub amount_usd: u64,
    pub status: ClaimStatus,
    /// Filing date, `YYYY-MM-DD`.
    pub date: String,
}

/// Format a claim number as a claim id (`7` -> `CLM-007`).
pub fn format_claim_id(number: u32) -> String {
    format!("CLM-{:03}", number)
}

/// The fixed list of recent claims. Submitting a new claim never changes it.
pub fn sample_claims() -> Vec<ClaimSummary> {
    vec![
        ClaimSummary {
            id: format_claim_id(1),
            claim_type: ClaimType::Auto,
            amount_usd: 2_500,
            status: ClaimStatus::Processing,
            date: "2024-01-15".to_string(),
        },
        ClaimSummary {
            id: format_claim_id(2),
            claim_type: ClaimType::Home,
            amount_usd: 8_900,
            status: ClaimStatus::Approved,
            date: "2024-01-10".to_string(),
        },
        ClaimSummary {
            id: format_claim_id(3),
            claim_type: ClaimType::Health,
            amount_usd: 1_200,
            status: ClaimStatus::UnderReview,
            date: "2024-01-05".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_round_trip() {
        for field in ClaimField::ALL {
            assert_eq!(ClaimField::from_key(field.key()), Some(field));
        }
        assert_eq!(ClaimField::from_key("walletAddress"), None);
    }

    #[test]
    fn test_transient_fields() {
        let transient: Vec<_> = ClaimField::ALL
            .into_iter()
            .filter(|f| f.is_transient())
            .collect();
        assert_eq!(
            transient,
            vec![
                ClaimField::ClaimType,
                ClaimField::IncidentDate,
                ClaimField::ClaimAmount,
                ClaimField::Description,
            ]
        );
    }

    #[test]
    fn test_sample_record() {
        let record = ClaimFormRecord::sample();
        assert_eq!(record.get(ClaimField::ClaimantName), "John Smith");
        assert_eq!(record.get(ClaimField::Ssn), "***-**-1234");
        assert!(record.get(ClaimField::Description).is_empty());
        assert_eq!(record.claim_type(), None);
    }

    #[test]
    fn test_claim_type_parse() {
        assert_eq!("auto".parse::<ClaimType>(), Ok(ClaimType::Auto));
        assert_eq!(" Life ".parse::<ClaimType>(), Ok(ClaimType::Life));
        assert!("boat".parse::<ClaimType>().is_err());
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(ClaimStatus::Approved.badge(), BadgeVariant::Primary);
        assert_eq!(ClaimStatus::Processing.badge(), BadgeVariant::Secondary);
        assert_eq!(ClaimStatus::UnderReview.badge(), BadgeVariant::Outline);
    }

    #[test]
    fn test_status_serializes_with_label() {
        let json = serde_json::to_string(&ClaimStatus::UnderReview).unwrap();
        assert_eq!(json, "\"Under Review\"");
    }

    #[test]
    fn test_sample_claims() {
        let claims = sample_claims();
        let ids: Vec<_> = claims.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CLM-001", "CLM-002", "CLM-003"]);
        assert_eq!(claims[1].amount_usd, 8_900);
        assert_eq!(claims[2].status, ClaimStatus::UnderReview);
    }
}
