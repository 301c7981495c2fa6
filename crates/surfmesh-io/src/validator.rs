//! Mesh data validation.
//!
//! Validates loader output before the store receives it, catching
//! data-level errors early with clear diagnostics.

use std::collections::HashSet;

use surfmesh_mesh::MeshConfig;
use surfmesh_types::constants::MIN_FACE_VALENCE;
use surfmesh_types::{ElementKind, MeshError, MeshResult};

use crate::contract::{MeshData, PropertyColumn};

/// Validates a complete mesh description.
///
/// Checks:
/// - All positions are finite
/// - Faces have a valid vertex count, in-range and distinct indices
/// - Vertex and face property columns match the element counts
/// - Property names are unique per kind and values match the default's type
///
/// Edge column lengths depend on the edges the faces produce, so they
/// are checked when the mesh is built.
pub fn validate_mesh_data(data: &MeshData, config: &MeshConfig) -> MeshResult<()> {
    config.validate()?;

    if let Some(i) = data
        .positions
        .iter()
        .position(|p| p.iter().any(|c| !c.is_finite()))
    {
        return Err(MeshError::InvalidMesh(format!(
            "Position {} has a non-finite coordinate",
            i
        )));
    }

    let n = data.vertex_count();
    for (f, face) in data.faces.iter().enumerate() {
        validate_face(f, face, n, config)?;
    }

    for kind in [ElementKind::Vertex, ElementKind::Edge, ElementKind::Face] {
        let expected = match kind {
            ElementKind::Vertex => Some(n),
            ElementKind::Face => Some(data.face_count()),
            ElementKind::Edge => None,
        };
        validate_columns(kind, data.properties(kind), expected)?;
    }

    Ok(())
}

fn validate_face(f: usize, face: &[u32], vertex_count: usize, config: &MeshConfig) -> MeshResult<()> {
    if face.len() < MIN_FACE_VALENCE || face.len() > config.max_face_valence {
        return Err(MeshError::InvalidMesh(format!(
            "Face {} has {} vertices (allowed: {}..={})",
            f,
            face.len(),
            MIN_FACE_VALENCE,
            config.max_face_valence
        )));
    }
    let mut seen = HashSet::with_capacity(face.len());
    for &idx in face {
        if idx as usize >= vertex_count {
            return Err(MeshError::InvalidMesh(format!(
                "Face {} references vertex {} (vertex count: {})",
                f, idx, vertex_count
            )));
        }
        if !seen.insert(idx) {
            return Err(MeshError::InvalidMesh(format!(
                "Face {} repeats vertex {}",
                f, idx
            )));
        }
    }
    Ok(())
}

fn validate_columns(
    kind: ElementKind,
    columns: &[PropertyColumn],
    expected_len: Option<usize>,
) -> MeshResult<()> {
    let mut names = HashSet::with_capacity(columns.len());
    for col in columns {
        if !names.insert(col.name.as_str()) {
            return Err(MeshError::DuplicateName {
                kind,
                name: col.name.clone(),
            });
        }
        if let Some(expected) = expected_len {
            if col.values.len() != expected {
                return Err(MeshError::InvalidMesh(format!(
                    "{} property '{}' has {} values, expected {}",
                    kind,
                    col.name,
                    col.values.len(),
                    expected
                )));
            }
        }
        let ty = col.default.value_type();
        if let Some(bad) = col.values.iter().find(|v| v.value_type() != ty) {
            return Err(MeshError::TypeMismatch {
                name: col.name.clone(),
                expected: ty.to_string(),
                found: bad.value_type().to_string(),
            });
        }
    }
    Ok(())
}
