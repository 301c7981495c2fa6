//! Mesh data contract.
//!
//! [`MeshData`] is what an external loader hands to the store: plain
//! positions, polygon index lists, optional property columns, and
//! mesh-level values. It is serializable so it can also travel as a
//! JSON snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use surfmesh_mesh::{PropertyRegistry, PropertyValue, SurfaceMesh};
use surfmesh_types::{ElementKind, Scalar};

/// A fully materialized mesh, independent of any file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Vertex positions, one `[x, y, z]` per vertex, in handle order.
    pub positions: Vec<[Scalar; 3]>,

    /// Polygon faces as vertex index lists, in handle order.
    pub faces: Vec<Vec<u32>>,

    /// Vertex property columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertex_properties: Vec<PropertyColumn>,

    /// Edge property columns. Edge handles follow face insertion
    /// order, so these only line up when `faces` is unchanged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edge_properties: Vec<PropertyColumn>,

    /// Face property columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub face_properties: Vec<PropertyColumn>,

    /// Values attached to the mesh itself.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mesh_properties: BTreeMap<String, PropertyValue>,
}

/// One property: its name, fill value, and one value per element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyColumn {
    pub name: String,
    pub default: PropertyValue,
    pub values: Vec<PropertyValue>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Property columns for `kind`.
    pub fn properties(&self, kind: ElementKind) -> &[PropertyColumn] {
        match kind {
            ElementKind::Vertex => &self.vertex_properties,
            ElementKind::Edge => &self.edge_properties,
            ElementKind::Face => &self.face_properties,
        }
    }

    /// Captures the full state of a mesh, including every property.
    pub fn from_mesh(mesh: &SurfaceMesh) -> Self {
        Self {
            positions: mesh.vertices().map(|v| mesh.position(v).to_array()).collect(),
            faces: mesh
                .faces()
                .map(|f| mesh.face_vertices(f).map(|v| v.0).collect())
                .collect(),
            vertex_properties: columns(mesh.registry(ElementKind::Vertex)),
            edge_properties: columns(mesh.registry(ElementKind::Edge)),
            face_properties: columns(mesh.registry(ElementKind::Face)),
            mesh_properties: mesh
                .mesh_properties()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

fn columns(registry: &PropertyRegistry) -> Vec<PropertyColumn> {
    registry
        .iter()
        .map(|p| PropertyColumn {
            name: p.name().to_string(),
            default: p.default_value(),
            values: (0..p.data().len()).filter_map(|i| p.data().get(i)).collect(),
        })
        .collect()
}
