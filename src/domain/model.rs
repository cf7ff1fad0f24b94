use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A scorable/categorizable item in the remote taxonomy hierarchy.
///
/// Only the fields the client needs are typed; anything else the server
/// sends is kept in `extra` so payloads survive a round trip untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurable {
    pub id: i64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub concrete: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Actor,
    Application,
    AppGroup,
    FlowDiagram,
    Measurable,
    OrgUnit,
    Person,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityReference {
    pub kind: EntityKind,
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HierarchyQueryScope {
    Exact,
    Children,
    Parents,
}

/// Scopes an operation to a set of entities by id and hierarchy relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdSelector {
    pub entity_reference: EntityReference,
    pub scope: HierarchyQueryScope,
}

impl IdSelector {
    pub fn new(kind: EntityKind, id: i64, scope: HierarchyQueryScope) -> Self {
        Self {
            entity_reference: EntityReference { kind, id },
            scope,
        }
    }
}
