//! Mesh store configuration.
//!
//! Capacity hints and face acceptance rules. Loaded from TOML by
//! the CLI; every field has a default so partial files work.

use serde::{Deserialize, Serialize};
use surfmesh_types::constants::{DEFAULT_MAX_FACE_VALENCE, MAX_ELEMENT_INDEX, MIN_FACE_VALENCE};
use surfmesh_types::{MeshError, MeshResult};

/// Configuration for a [`SurfaceMesh`](crate::SurfaceMesh).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Vertex slots reserved up front.
    pub vertex_capacity: usize,

    /// Face slots reserved up front. Edge storage is sized from this.
    pub face_capacity: usize,

    /// Largest accepted polygon (vertex count per face).
    pub max_face_valence: usize,

    /// Accept faces that would give an edge more than two incident
    /// faces or reuse an edge with the same winding direction.
    pub allow_nonmanifold_edges: bool,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 0,
            face_capacity: 0,
            max_face_valence: DEFAULT_MAX_FACE_VALENCE,
            allow_nonmanifold_edges: false,
        }
    }
}

impl MeshConfig {
    /// Only triangles are accepted.
    pub fn triangles_only() -> Self {
        Self {
            max_face_valence: 3,
            ..Default::default()
        }
    }

    /// Accepts any polygon soup, manifold or not.
    pub fn permissive() -> Self {
        Self {
            max_face_valence: u32::MAX as usize,
            allow_nonmanifold_edges: true,
            ..Default::default()
        }
    }

    /// Checks that the configuration can accept at least one face and
    /// that capacity hints fit the `u32` handle range.
    pub fn validate(&self) -> MeshResult<()> {
        if self.max_face_valence < MIN_FACE_VALENCE {
            return Err(MeshError::InvalidConfig(format!(
                "max_face_valence must be >= {}, got {}",
                MIN_FACE_VALENCE, self.max_face_valence
            )));
        }
        for (field, value) in [
            ("vertex_capacity", self.vertex_capacity),
            ("face_capacity", self.face_capacity),
        ] {
            if value > MAX_ELEMENT_INDEX + 1 {
                return Err(MeshError::InvalidConfig(format!(
                    "{} must be <= {}, got {}",
                    field,
                    MAX_ELEMENT_INDEX + 1,
                    value
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> MeshResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| MeshError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> MeshResult<String> {
        toml::to_string(self).map_err(|e| MeshError::Serialization(e.to_string()))
    }
}
