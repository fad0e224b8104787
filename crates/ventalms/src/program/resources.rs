use serde::Serialize;

use super::ProgramError;

/// Kind of learning material offered during program setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Template,
    Tool,
}

/// A catalog entry assignable to a company's program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ResourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
}

const CATALOG: &[Resource] = &[
    Resource {
        id: "vc001",
        name: "VC001 Introduction",
        kind: ResourceKind::Video,
        format: None,
        duration: Some("60 mins"),
    },
    Resource {
        id: "vc100",
        name: "VC100 Product Planning Introduction",
        kind: ResourceKind::Video,
        format: None,
        duration: Some("20 mins"),
    },
    Resource {
        id: "vc101",
        name: "VC101 Market Opportunity Analysis",
        kind: ResourceKind::Video,
        format: None,
        duration: Some("71 mins"),
    },
    Resource {
        id: "vc102",
        name: "VC102 Segmentation and Revenue Stream",
        kind: ResourceKind::Video,
        format: None,
        duration: Some("35 mins"),
    },
    Resource {
        id: "a1",
        name: "A1 Innovation Focus",
        kind: ResourceKind::Template,
        format: Some("Excel"),
        duration: None,
    },
    Resource {
        id: "a2",
        name: "A2 SWOT",
        kind: ResourceKind::Template,
        format: Some("Excel"),
        duration: None,
    },
    Resource {
        id: "a3",
        name: "A3 Market Entry Power",
        kind: ResourceKind::Template,
        format: Some("Excel"),
        duration: None,
    },
    Resource {
        id: "a4",
        name: "A4 Customer Segments",
        kind: ResourceKind::Template,
        format: Some("Excel"),
        duration: None,
    },
    Resource {
        id: "5year",
        name: "5-Year Business Plan",
        kind: ResourceKind::Tool,
        format: Some("Excel Model"),
        duration: None,
    },
];

/// Full program-setup catalog, fixed at startup.
pub fn resource_catalog() -> &'static [Resource] {
    CATALOG
}

/// Resolve a single catalog entry by id.
pub fn resource(id: &str) -> Result<&'static Resource, ProgramError> {
    CATALOG
        .iter()
        .find(|resource| resource.id == id)
        .ok_or_else(|| ProgramError::UnknownResource(id.to_string()))
}

pub fn resources_by_kind(kind: ResourceKind) -> Vec<&'static Resource> {
    CATALOG
        .iter()
        .filter(|resource| resource.kind == kind)
        .collect()
}
