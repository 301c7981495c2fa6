//! Loader boundary.
//!
//! Parsing mesh file formats is the job of a [`MeshSource`]; this
//! module only turns validated [`MeshData`] into a [`SurfaceMesh`].
//! Population is all-or-nothing: the mesh is built fresh and only
//! handed back (or swapped in) once every step has succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use surfmesh_math::Vec3;
use surfmesh_mesh::{MeshConfig, SurfaceMesh};
use surfmesh_types::{ElementKind, MeshError, MeshResult, VertexId};
use tracing::{debug, info};

use crate::contract::MeshData;
use crate::validator::validate_mesh_data;

/// Anything that can produce mesh data: a file parser, a network
/// fetch, a procedural generator.
pub trait MeshSource {
    /// Produces the complete mesh, or fails without partial output.
    fn read(&mut self) -> MeshResult<MeshData>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String {
        "mesh source".to_string()
    }
}

/// In-memory data is its own source.
impl MeshSource for MeshData {
    fn read(&mut self) -> MeshResult<MeshData> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        "in-memory mesh data".to_string()
    }
}

/// Reads a JSON snapshot of [`MeshData`].
#[derive(Debug, Clone)]
pub struct JsonMeshSource {
    path: PathBuf,
}

impl JsonMeshSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MeshSource for JsonMeshSource {
    fn read(&mut self) -> MeshResult<MeshData> {
        let text = fs::read_to_string(&self.path)?;
        serde_json::from_str(&text).map_err(|e| {
            MeshError::Serialization(format!("{}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads a source and builds a new mesh from it.
pub fn load<S: MeshSource + ?Sized>(source: &mut S, config: &MeshConfig) -> MeshResult<SurfaceMesh> {
    let data = source
        .read()
        .map_err(|e| MeshError::Load(format!("{}: {}", source.describe(), e)))?;
    let mesh = build_mesh(&data, config)?;
    info!(
        source = %source.describe(),
        vertices = mesh.vertex_count(),
        edges = mesh.edge_count(),
        faces = mesh.face_count(),
        "mesh loaded"
    );
    Ok(mesh)
}

/// Replaces the contents of `mesh` with what `source` produces.
///
/// Keeps the mesh's configuration. On error `mesh` is left exactly
/// as it was.
pub fn populate<S: MeshSource + ?Sized>(mesh: &mut SurfaceMesh, source: &mut S) -> MeshResult<()> {
    let config = mesh.config().clone();
    *mesh = load(source, &config)?;
    Ok(())
}

/// Loads a JSON snapshot with the default configuration.
pub fn read_json(path: impl AsRef<Path>) -> MeshResult<SurfaceMesh> {
    load(&mut JsonMeshSource::new(path.as_ref()), &MeshConfig::default())
}

/// Writes a mesh, with all of its properties, as a JSON snapshot.
pub fn write_json(mesh: &SurfaceMesh, path: impl AsRef<Path>) -> MeshResult<()> {
    let data = MeshData::from_mesh(mesh);
    let text = serde_json::to_string_pretty(&data)
        .map_err(|e| MeshError::Serialization(e.to_string()))?;
    fs::write(path.as_ref(), text)?;
    debug!(path = %path.as_ref().display(), "mesh written");
    Ok(())
}

/// Builds a mesh from validated data.
pub fn build_mesh(data: &MeshData, config: &MeshConfig) -> MeshResult<SurfaceMesh> {
    validate_mesh_data(data, config)?;

    let mut mesh = SurfaceMesh::with_config(config.clone())?;
    mesh.reserve(data.vertex_count(), 0, data.face_count());

    for p in &data.positions {
        mesh.add_vertex(Vec3::from_array(*p));
    }

    let mut face = Vec::new();
    for indices in &data.faces {
        face.clear();
        face.extend(indices.iter().map(|&i| VertexId(i)));
        mesh.add_face(&face)?;
    }

    for kind in ElementKind::ALL {
        let count = mesh.element_count(kind);
        for col in data.properties(kind) {
            if col.values.len() != count {
                return Err(MeshError::InvalidMesh(format!(
                    "{} property '{}' has {} values, mesh has {} elements",
                    kind,
                    col.name,
                    col.values.len(),
                    count
                )));
            }
            let handle = mesh.add_property(kind, &col.name, col.default)?;
            for (i, &value) in col.values.iter().enumerate() {
                mesh.set_property_value(&handle, i, value)?;
            }
        }
    }

    for (name, &value) in &data.mesh_properties {
        mesh.add_mesh_property(name, value)?;
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "mesh built from data"
    );
    Ok(mesh)
}
