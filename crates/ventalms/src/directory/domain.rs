use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Incubator stage a company currently occupies.
///
/// The set is closed: a textual value outside it never constructs a `Phase`,
/// it fails at the `TryFrom<String>` boundary instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Phase {
    Ideation,
    IncuHatch,
    IncuBoost,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ideation => "Ideation",
            Phase::IncuHatch => "IncuHatch",
            Phase::IncuBoost => "IncuBoost",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Ideation" => Ok(Phase::Ideation),
            "IncuHatch" => Ok(Phase::IncuHatch),
            "IncuBoost" => Ok(Phase::IncuBoost),
            other => Err(ValidationError::UnknownPhase(other.to_string())),
        }
    }
}

impl TryFrom<String> for Phase {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Phase> for String {
    fn from(value: Phase) -> Self {
        value.as_str().to_string()
    }
}

/// Engagement status of a company within the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CompanyStatus {
    Active,
    Pending,
    Inactive,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "Active",
            CompanyStatus::Pending => "Pending",
            CompanyStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Active" => Ok(CompanyStatus::Active),
            "Pending" => Ok(CompanyStatus::Pending),
            "Inactive" => Ok(CompanyStatus::Inactive),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for CompanyStatus {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CompanyStatus> for String {
    fn from(value: CompanyStatus) -> Self {
        value.as_str().to_string()
    }
}

/// A company record as held by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub industry: String,
    pub phase: Phase,
    pub status: CompanyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Company {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

/// Fields supplied when creating a company; the directory assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub industry: String,
    pub phase: Phase,
    pub status: CompanyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewCompany {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }

    pub(crate) fn into_company(self, id: u32) -> Company {
        Company {
            id,
            name: self.name,
            industry: self.industry,
            phase: self.phase,
            status: self.status,
            founded_date: self.founded_date,
            description: self.description,
        }
    }
}

/// Partial update: absent fields leave the stored value untouched.
///
/// The merge is a shallow structural overwrite, mirroring how the edit forms
/// submit only the fields the operator changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CompanyStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CompanyUpdate {
    /// Build the candidate record without touching the stored one, so a
    /// failed validation leaves the directory unchanged.
    pub(crate) fn merged(&self, existing: &Company) -> Company {
        Company {
            id: existing.id,
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            industry: self
                .industry
                .clone()
                .unwrap_or_else(|| existing.industry.clone()),
            phase: self.phase.unwrap_or(existing.phase),
            status: self.status.unwrap_or(existing.status),
            founded_date: self.founded_date.or(existing.founded_date),
            description: self
                .description
                .clone()
                .or_else(|| existing.description.clone()),
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Field-level constraint failures on create/update.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("company name must not be empty")]
    EmptyName,
    #[error("unknown phase '{0}'")]
    UnknownPhase(String),
    #[error("unknown status '{0}'")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        Company {
            id: 7,
            name: "TechnoVision Ltd".to_string(),
            industry: "Tech".to_string(),
            phase: Phase::Ideation,
            status: CompanyStatus::Active,
            founded_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            description: Some("AI-powered visual recognition".to_string()),
        }
    }

    #[test]
    fn phase_parses_known_values() {
        assert_eq!("Ideation".parse::<Phase>(), Ok(Phase::Ideation));
        assert_eq!("IncuHatch".parse::<Phase>(), Ok(Phase::IncuHatch));
        assert_eq!("IncuBoost".parse::<Phase>(), Ok(Phase::IncuBoost));
    }

    #[test]
    fn phase_rejects_out_of_set_value() {
        let err = "Scaling".parse::<Phase>().expect_err("not a phase");
        assert_eq!(err, ValidationError::UnknownPhase("Scaling".to_string()));
    }

    #[test]
    fn status_rejects_out_of_set_value() {
        let err = "Archived"
            .parse::<CompanyStatus>()
            .expect_err("not a status");
        assert_eq!(err, ValidationError::UnknownStatus("Archived".to_string()));
    }

    #[test]
    fn serde_rejects_unknown_phase_string() {
        let raw = r#"{"name":"X","industry":"Tech","phase":"Scaling","status":"Active"}"#;
        let err = serde_json::from_str::<NewCompany>(raw).expect_err("invalid phase");
        assert!(err.to_string().contains("unknown phase 'Scaling'"));
    }

    #[test]
    fn company_serializes_enums_as_display_strings() {
        let value = serde_json::to_value(company()).expect("serializes");
        assert_eq!(value["phase"], "Ideation");
        assert_eq!(value["status"], "Active");
        assert_eq!(value["founded_date"], "2024-01-15");
    }

    #[test]
    fn empty_update_merges_to_identical_record() {
        let existing = company();
        let merged = CompanyUpdate::default().merged(&existing);
        assert_eq!(merged, existing);
    }

    #[test]
    fn merge_overwrites_only_supplied_fields() {
        let existing = company();
        let update = CompanyUpdate {
            phase: Some(Phase::IncuHatch),
            status: Some(CompanyStatus::Pending),
            ..CompanyUpdate::default()
        };
        let merged = update.merged(&existing);
        assert_eq!(merged.phase, Phase::IncuHatch);
        assert_eq!(merged.status, CompanyStatus::Pending);
        assert_eq!(merged.name, existing.name);
        assert_eq!(merged.industry, existing.industry);
        assert_eq!(merged.founded_date, existing.founded_date);
    }

    #[test]
    fn whitespace_only_name_fails_validation() {
        let mut record = company();
        record.name = "   ".to_string();
        assert_eq!(record.validate(), Err(ValidationError::EmptyName));
    }
}
