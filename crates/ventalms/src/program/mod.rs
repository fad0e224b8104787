//! Program metadata and scoring configuration for the incubator phases.
//!
//! All tables here are fixed at compile time; the module performs lookups and
//! weight validation only and never mutates state.

pub mod resources;
pub mod scoring;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use resources::{resource, resource_catalog, resources_by_kind, Resource, ResourceKind};
pub use scoring::{
    effective_weight, ideation_criteria, validate_weights, ScoringCriterion, WeightSumError,
    TARGET_WEIGHT_SUM,
};

/// Identifier of an incubator program. Lowercase on the wire, matching the
/// phase a company occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ProgramId {
    Ideation,
    IncuHatch,
    IncuBoost,
}

impl ProgramId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramId::Ideation => "ideation",
            ProgramId::IncuHatch => "incuhatch",
            ProgramId::IncuBoost => "incuboost",
        }
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramId {
    type Err = ProgramError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ideation" => Ok(ProgramId::Ideation),
            "incuhatch" => Ok(ProgramId::IncuHatch),
            "incuboost" => Ok(ProgramId::IncuBoost),
            other => Err(ProgramError::UnknownProgram(other.to_string())),
        }
    }
}

impl From<ProgramId> for String {
    fn from(value: ProgramId) -> Self {
        value.as_str().to_string()
    }
}

/// Static program metadata. `duration` is a pure function of the id, never
/// independently settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramType {
    pub id: ProgramId,
    pub name: &'static str,
    pub duration: &'static str,
}

/// Resolve the single `ProgramType` definition for an id.
pub fn program_type(id: ProgramId) -> ProgramType {
    match id {
        ProgramId::Ideation => ProgramType {
            id,
            name: "Ideation Program",
            duration: "3 months",
        },
        ProgramId::IncuHatch => ProgramType {
            id,
            name: "IncuHatch",
            duration: "12 months",
        },
        ProgramId::IncuBoost => ProgramType {
            id,
            name: "IncuBoost",
            duration: "24 months",
        },
    }
}

/// A scheduled checkpoint within a program, keyed by program month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub month: &'static str,
    pub activities: &'static [&'static str],
}

const IDEATION_MILESTONES: &[Milestone] = &[
    Milestone {
        month: "m3",
        activities: &["View Level 1", "Submit V0-V4"],
    },
    Milestone {
        month: "m6",
        activities: &["View Level 2", "Submit V05-V10"],
    },
    Milestone {
        month: "m9",
        activities: &["View Level 3", "Submit V11-V13"],
    },
    Milestone {
        month: "m12",
        activities: &["Finalize V0-13", "AI score Assignment", "Create Shortlist"],
    },
];

/// Milestones in chronological order. Only the ideation program has a defined
/// schedule today; the other programs return an empty slice, which is
/// distinct from an unknown program id (that fails at the string boundary).
pub fn milestones(id: ProgramId) -> &'static [Milestone] {
    match id {
        ProgramId::Ideation => IDEATION_MILESTONES,
        ProgramId::IncuHatch | ProgramId::IncuBoost => &[],
    }
}

/// Lookup failures for static program and resource tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgramError {
    #[error("unknown program '{0}'")]
    UnknownProgram(String),
    #[error("unknown resource '{0}'")]
    UnknownResource(String),
}
