use crate::{ModelError, ModelResult};
use pagecraft_types::{ComponentId, LeadId, PageId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const MAX_FIELD_NAME_LEN: usize = 64;
pub const MAX_FIELD_VALUE_LEN: usize = 4096;

/// Pipeline stage of a captured lead, as managed from the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Converted => "converted",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "converted" => Ok(Self::Converted),
            "lost" => Ok(Self::Lost),
            other => Err(ModelError::InvalidStatus(other.to_string())),
        }
    }
}

/// A form submission captured from a published page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub page_id: PageId,
    /// The form block that produced the submission, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<ComponentId>,
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub status: LeadStatus,
    pub submitted_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Lead {
    /// Builds a lead from raw form fields.
    ///
    /// Names and values are trimmed and empty values dropped. A submission
    /// left with no fields is rejected.
    pub fn from_submission<I, K, V>(
        page_id: PageId,
        component_id: Option<ComponentId>,
        fields: I,
        now: Timestamp,
    ) -> ModelResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cleaned = BTreeMap::new();
        for (name, value) in fields {
            let name = name.as_ref().trim();
            let value = value.as_ref().trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            if name.len() > MAX_FIELD_NAME_LEN {
                return Err(ModelError::FieldTooLong(truncate_for_error(name)));
            }
            if value.len() > MAX_FIELD_VALUE_LEN {
                return Err(ModelError::FieldTooLong(name.to_string()));
            }
            cleaned.insert(name.to_string(), value.to_string());
        }
        if cleaned.is_empty() {
            return Err(ModelError::EmptySubmission);
        }
        Ok(Self {
            id: LeadId::new(),
            page_id,
            component_id,
            fields: cleaned,
            status: LeadStatus::New,
            submitted_at: now,
            updated_at: now,
        })
    }

    pub fn email(&self) -> Option<&str> {
        self.fields.get("email").map(String::as_str)
    }

    pub fn set_status(&mut self, status: LeadStatus, now: Timestamp) {
        self.status = status;
        self.updated_at = now;
    }
}

fn truncate_for_error(name: &str) -> String {
    name.chars().take(MAX_FIELD_NAME_LEN).collect()
}
