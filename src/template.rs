//! Contract template domain types.
//!
//! DESIGN
//! ======
//! The two dropdown enumerations are closed sets. Their display strings are
//! also their wire and storage values, so `as_str` / `from_str` are the only
//! conversions and serde goes through them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;
use uuid::Uuid;

/// Maximum length of the short text columns, in characters.
pub const SHORT_TEXT_MAX: usize = 200;

// =============================================================================
// CONTRACT TYPE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractType {
    FullyManaged,
    PartiallyManaged,
    BreakFix,
}

impl ContractType {
    pub const ALL: [Self; 3] = [Self::FullyManaged, Self::PartiallyManaged, Self::BreakFix];

    /// Stored value. `Partialy Managed` keeps the historical spelling that
    /// existing records carry.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullyManaged => "Fully Managed",
            Self::PartiallyManaged => "Partialy Managed",
            Self::BreakFix => "Break/Fix",
        }
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

// =============================================================================
// RENEWAL FREQUENCY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenewalFrequency {
    Manual,
    Annually,
    TwoYear,
    ThreeYear,
    FiveYear,
    SevenYear,
}

impl RenewalFrequency {
    pub const ALL: [Self; 6] =
        [Self::Manual, Self::Annually, Self::TwoYear, Self::ThreeYear, Self::FiveYear, Self::SevenYear];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Annually => "Annually",
            Self::TwoYear => "2 Year",
            Self::ThreeYear => "3 Year",
            Self::FiveYear => "5 Year",
            Self::SevenYear => "7 Year",
        }
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }
}

macro_rules! string_serde {
    ($ty:ty, $what:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::from_str(&raw).ok_or_else(|| serde::de::Error::custom(format!("unknown {}: {raw}", $what)))
            }
        }
    };
}

string_serde!(ContractType, "contract type");
string_serde!(RenewalFrequency, "renewal frequency");

// =============================================================================
// SLA
// =============================================================================

/// Response and resolution targets in hours, per priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaHours {
    pub low_response: Option<i32>,
    pub low_resolution: Option<i32>,
    pub medium_response: Option<i32>,
    pub medium_resolution: Option<i32>,
    pub high_response: Option<i32>,
    pub high_resolution: Option<i32>,
}

// =============================================================================
// RECORDS
// =============================================================================

/// A validated template ready to be written. Produced only by
/// `services::contract_template::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContractTemplate {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub contract_type: ContractType,
    pub renewal_frequency: Option<RenewalFrequency>,
    pub sla: SlaHours,
    pub rate_standard: Option<String>,
    pub rate_after_hours: Option<String>,
    pub support_hours: Option<String>,
    pub net_terms: Option<String>,
    pub details: Option<String>,
}

/// Persisted contract template. Mirrors the `contract_templates` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTemplate {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: NewContractTemplate,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl ContractTemplate {
    #[must_use]
    pub fn new(id: Uuid, fields: NewContractTemplate, now: OffsetDateTime) -> Self {
        Self { id, fields, created_at: now, updated_at: now }
    }
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
