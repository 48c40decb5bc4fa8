//! Profile document schema.

use hp_core::LengthUnit;
use hp_profile::{ComponentKind, ProfileConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileDocument {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub units: UnitsDef,
    #[serde(default)]
    pub config: ProfileConfig,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
}

/// Units of the numbers in `elements` and of the rendered axis.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct UnitsDef {
    #[serde(default)]
    pub input: LengthUnit,
    #[serde(default)]
    pub display: LengthUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementDef {
    Component(ComponentDef),
    Connection(ConnectionDef),
}

impl ElementDef {
    pub fn id(&self) -> &str {
        match self {
            ElementDef::Component(c) => &c.id,
            ElementDef::Connection(c) => &c.id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p1_el: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2_el: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_el: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_el: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_change: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p1_el: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2_el: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_el: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_el: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_change: Option<f64>,
}
