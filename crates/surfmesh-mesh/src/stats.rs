//! Diagnostic listing of attached properties.
//!
//! The `Display` output is meant for people, not parsers:
//!
//! ```text
//! vertex properties (4 elements):
//!     curvature: scalar [4]
//! edge properties (5 elements):
//! face properties (2 elements):
//! mesh properties:
//!     smoothing_iterations: int
//! ```
//!
//! The mesh section is omitted when no mesh-level property is attached.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use surfmesh_types::ElementKind;

use crate::property::{PropertyType, PropertyValue};
use crate::registry::PropertyRegistry;

/// One attached property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,
    pub value_type: PropertyType,
    /// Number of slots in the backing array.
    pub element_count: usize,
}

/// All properties of one element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindStats {
    pub kind: ElementKind,
    pub element_count: usize,
    pub properties: Vec<PropertyInfo>,
}

/// One mesh-level property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshPropertyInfo {
    pub name: String,
    pub value_type: PropertyType,
}

/// Snapshot of every registry of a mesh, in vertex, edge, face order,
/// followed by the mesh-level properties in name order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyStats {
    pub kinds: Vec<KindStats>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mesh: Vec<MeshPropertyInfo>,
}

impl PropertyStats {
    pub(crate) fn collect<'a>(
        registries: impl IntoIterator<Item = &'a PropertyRegistry>,
        mesh_props: &BTreeMap<String, PropertyValue>,
    ) -> Self {
        let kinds = registries
            .into_iter()
            .map(|reg| KindStats {
                kind: reg.kind(),
                element_count: reg.len(),
                properties: reg
                    .iter()
                    .map(|p| PropertyInfo {
                        name: p.name().to_string(),
                        value_type: p.value_type(),
                        element_count: p.data().len(),
                    })
                    .collect(),
            })
            .collect();
        let mesh = mesh_props
            .iter()
            .map(|(name, value)| MeshPropertyInfo {
                name: name.clone(),
                value_type: value.value_type(),
            })
            .collect();
        Self { kinds, mesh }
    }

    /// Stats for one element kind.
    pub fn kind(&self, kind: ElementKind) -> Option<&KindStats> {
        self.kinds.iter().find(|k| k.kind == kind)
    }

    /// Looks up a property by kind and name.
    pub fn property(&self, kind: ElementKind, name: &str) -> Option<&PropertyInfo> {
        self.kind(kind)?.properties.iter().find(|p| p.name == name)
    }

    /// Looks up a mesh-level property by name.
    pub fn mesh_property(&self, name: &str) -> Option<&MeshPropertyInfo> {
        self.mesh.iter().find(|p| p.name == name)
    }

    /// Total number of attached element properties across all kinds.
    pub fn property_count(&self) -> usize {
        self.kinds.iter().map(|k| k.properties.len()).sum()
    }
}

impl fmt::Display for PropertyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in &self.kinds {
            writeln!(f, "{} properties ({} elements):", k.kind, k.element_count)?;
            for p in &k.properties {
                writeln!(f, "\t{}: {} [{}]", p.name, p.value_type, p.element_count)?;
            }
        }
        if !self.mesh.is_empty() {
            writeln!(f, "mesh properties:")?;
            for p in &self.mesh {
                writeln!(f, "\t{}: {}", p.name, p.value_type)?;
            }
        }
        Ok(())
    }
}
