//! Core polygon mesh store.
//!
//! Vertex positions use an SoA (Structure of Arrays) layout:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Each channel is exactly one row of the 3×N bulk position matrix,
//! so bulk reads and writes are three slice copies.
//!
//! Faces are stored flat with an offset table. Undirected edges are
//! created on demand as faces are added. Every element kind owns a
//! [`PropertyRegistry`] that grows in lock-step with its element count.

use std::collections::{BTreeMap, HashMap, TryReserveError};

use surfmesh_math::{Aabb, PositionMatrix, Vec3};
use surfmesh_types::constants::{MAX_ELEMENT_INDEX, MIN_FACE_VALENCE, POSITION_ROWS};
use surfmesh_types::{EdgeId, ElementKind, FaceId, MeshError, MeshResult, Scalar, VertexId};
use tracing::{debug, warn};

use crate::config::MeshConfig;
use crate::property::{PropertyElement, PropertyHandle, PropertyType, PropertyValue};
use crate::registry::PropertyRegistry;
use crate::stats::PropertyStats;

/// An indexed polygon mesh with per-element property registries.
///
/// Element handles are dense and append-only: vertices, edges, and
/// faces are never removed individually, so a handle stays valid
/// until [`clear`](Self::clear) is called.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    config: MeshConfig,

    // --- Vertex data (SoA) ---
    pos_x: Vec<Scalar>,
    pos_y: Vec<Scalar>,
    pos_z: Vec<Scalar>,

    // --- Connectivity ---
    /// `face_indices[face_offsets[f]..face_offsets[f + 1]]` are the
    /// vertices of face `f`, in winding order.
    face_offsets: Vec<usize>,
    face_indices: Vec<u32>,
    /// Edge endpoints as `[v_min, v_max]`.
    edge_vertices: Vec<[u32; 2]>,
    edge_lookup: HashMap<(u32, u32), u32>,
    edge_faces: Vec<Vec<u32>>,
    vertex_faces: Vec<Vec<u32>>,
    vertex_edges: Vec<Vec<u32>>,

    // --- Properties ---
    vertex_props: PropertyRegistry,
    edge_props: PropertyRegistry,
    face_props: PropertyRegistry,
    /// Named values attached to the mesh itself.
    mesh_props: BTreeMap<String, PropertyValue>,
}

impl SurfaceMesh {
    /// Creates an empty mesh with the default configuration.
    pub fn new() -> Self {
        Self::empty(MeshConfig::default())
    }

    /// Creates an empty mesh, reserving the configured capacities.
    ///
    /// Fails with `InvalidConfig` if the configuration is invalid or
    /// the capacities cannot be allocated.
    pub fn with_config(config: MeshConfig) -> MeshResult<Self> {
        config.validate()?;
        let mut mesh = Self::empty(config);
        mesh.reserve_configured().inspect_err(|e| {
            warn!(error = %e, "configured capacity not reserved");
        })?;
        Ok(mesh)
    }

    fn empty(config: MeshConfig) -> Self {
        Self {
            config,
            pos_x: Vec::new(),
            pos_y: Vec::new(),
            pos_z: Vec::new(),
            face_offsets: vec![0],
            face_indices: Vec::new(),
            edge_vertices: Vec::new(),
            edge_lookup: HashMap::new(),
            edge_faces: Vec::new(),
            vertex_faces: Vec::new(),
            vertex_edges: Vec::new(),
            vertex_props: PropertyRegistry::new(ElementKind::Vertex),
            edge_props: PropertyRegistry::new(ElementKind::Edge),
            face_props: PropertyRegistry::new(ElementKind::Face),
            mesh_props: BTreeMap::new(),
        }
    }

    /// Reserves the configured capacities without aborting on
    /// allocation failure. Registries are empty at this point.
    fn reserve_configured(&mut self) -> MeshResult<()> {
        let (nv, nf) = (self.config.vertex_capacity, self.config.face_capacity);
        // Euler estimate for triangle meshes: E ≈ 3V.
        let ne = nv.saturating_mul(3);
        let too_large = |e: TryReserveError| {
            MeshError::InvalidConfig(format!("cannot reserve configured capacity: {}", e))
        };
        self.pos_x.try_reserve(nv).map_err(too_large)?;
        self.pos_y.try_reserve(nv).map_err(too_large)?;
        self.pos_z.try_reserve(nv).map_err(too_large)?;
        self.vertex_faces.try_reserve(nv).map_err(too_large)?;
        self.vertex_edges.try_reserve(nv).map_err(too_large)?;
        self.edge_vertices.try_reserve(ne).map_err(too_large)?;
        self.edge_faces.try_reserve(ne).map_err(too_large)?;
        self.edge_lookup.try_reserve(ne).map_err(too_large)?;
        self.face_offsets.try_reserve(nf).map_err(too_large)?;
        Ok(())
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    // ─── Counts ───────────────────────────────────────────────

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_offsets.len() - 1
    }

    /// Returns the number of elements of `kind`.
    pub fn element_count(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Vertex => self.vertex_count(),
            ElementKind::Edge => self.edge_count(),
            ElementKind::Face => self.face_count(),
        }
    }

    /// True when the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    // ─── Vertices ─────────────────────────────────────────────

    /// Appends a vertex; every vertex property gains a default slot.
    ///
    /// # Panics
    /// Panics if the vertex count would exceed the `u32` handle range.
    pub fn add_vertex(&mut self, p: Vec3) -> VertexId {
        let idx = self.vertex_count();
        assert!(idx <= MAX_ELEMENT_INDEX, "vertex count exceeds handle range");
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        self.vertex_faces.push(Vec::new());
        self.vertex_edges.push(Vec::new());
        self.vertex_props.push();
        VertexId(idx as u32)
    }

    /// Returns the position of vertex `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn position(&self, v: VertexId) -> Vec3 {
        let i = v.index();
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Sets the position of vertex `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn set_position(&mut self, v: VertexId, p: Vec3) {
        let i = v.index();
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Returns all positions as a 3×N matrix, one column per vertex
    /// in handle order.
    ///
    /// The matrix is a copy; later edits to the mesh do not show
    /// through it.
    pub fn vertex_positions(&self) -> PositionMatrix {
        let mut m = PositionMatrix::zeros(POSITION_ROWS, self.vertex_count());
        m.row_mut(0).copy_from_slice(&self.pos_x);
        m.row_mut(1).copy_from_slice(&self.pos_y);
        m.row_mut(2).copy_from_slice(&self.pos_z);
        m
    }

    /// Overwrites every vertex position from a 3×N matrix.
    ///
    /// The shape is checked before anything is written, so on
    /// `ShapeMismatch` the positions are unchanged.
    pub fn set_vertex_positions(&mut self, positions: &PositionMatrix) -> MeshResult<()> {
        let n = self.vertex_count();
        let (rows, cols) = positions.shape();
        if rows != POSITION_ROWS || cols != n {
            warn!(rows, cols, vertices = n, "bulk position write rejected");
            return Err(MeshError::ShapeMismatch {
                expected_rows: POSITION_ROWS,
                expected_cols: n,
                rows,
                cols,
            });
        }
        self.pos_x.copy_from_slice(positions.row(0));
        self.pos_y.copy_from_slice(positions.row(1));
        self.pos_z.copy_from_slice(positions.row(2));
        debug!(vertices = n, "vertex positions replaced");
        Ok(())
    }

    /// Bounding box of all vertex positions, `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices().map(|v| self.position(v)))
    }

    // ─── Faces & Edges ────────────────────────────────────────

    /// Appends a polygon face.
    ///
    /// Rejects faces with fewer than 3 or more than
    /// `max_face_valence` vertices, out-of-range or repeated vertices,
    /// and, unless `allow_nonmanifold_edges` is set, faces that would
    /// give an edge a third incident face or walk an existing edge in
    /// the same direction as its current face (inconsistent winding).
    /// Nothing is modified on error.
    pub fn add_face(&mut self, vertices: &[VertexId]) -> MeshResult<FaceId> {
        let n = vertices.len();
        if n < MIN_FACE_VALENCE {
            return Err(MeshError::InvalidMesh(format!(
                "Face needs at least {} vertices, got {}",
                MIN_FACE_VALENCE, n
            )));
        }
        if n > self.config.max_face_valence {
            return Err(MeshError::InvalidMesh(format!(
                "Face has {} vertices, limit is {}",
                n, self.config.max_face_valence
            )));
        }

        let count = self.vertex_count();
        if let Some(v) = vertices.iter().find(|v| v.index() >= count) {
            return Err(MeshError::InvalidHandle {
                kind: ElementKind::Vertex,
                index: v.index(),
                count,
            });
        }
        for (i, a) in vertices.iter().enumerate() {
            if vertices[i + 1..].contains(a) {
                return Err(MeshError::InvalidMesh(format!(
                    "Face repeats vertex {}",
                    a.index()
                )));
            }
        }

        let mut new_edges = 0;
        for (a, b) in face_edges(vertices) {
            let Some(e) = self.find_edge(a, b) else {
                new_edges += 1;
                continue;
            };
            if self.config.allow_nonmanifold_edges {
                continue;
            }
            let incident = &self.edge_faces[e.index()];
            if incident.len() >= 2 {
                return Err(MeshError::InvalidMesh(format!(
                    "Edge ({}, {}) already has two incident faces",
                    a.index(),
                    b.index()
                )));
            }
            if let Some(&f) = incident.iter().find(|&&f| self.face_traverses(FaceId(f), a, b)) {
                return Err(MeshError::InvalidMesh(format!(
                    "Edge {} -> {} is already used in this direction by face {}",
                    a.index(),
                    b.index(),
                    f
                )));
            }
        }
        if self.face_count() > MAX_ELEMENT_INDEX || self.edge_count() + new_edges > MAX_ELEMENT_INDEX + 1 {
            return Err(MeshError::InvalidMesh("Element count exceeds handle range".into()));
        }

        Ok(self.push_face(vertices))
    }

    /// Appends a triangle. See [`add_face`](Self::add_face).
    pub fn add_triangle(&mut self, v0: VertexId, v1: VertexId, v2: VertexId) -> MeshResult<FaceId> {
        self.add_face(&[v0, v1, v2])
    }

    /// Appends a quad. See [`add_face`](Self::add_face).
    pub fn add_quad(
        &mut self,
        v0: VertexId,
        v1: VertexId,
        v2: VertexId,
        v3: VertexId,
    ) -> MeshResult<FaceId> {
        self.add_face(&[v0, v1, v2, v3])
    }

    /// Appends a face that is already known to be valid.
    pub(crate) fn push_face(&mut self, vertices: &[VertexId]) -> FaceId {
        let f = self.face_count() as u32;
        self.face_indices.extend(vertices.iter().map(|v| v.0));
        self.face_offsets.push(self.face_indices.len());

        for (a, b) in face_edges(vertices) {
            let e = self.find_or_insert_edge(a, b);
            self.edge_faces[e.index()].push(f);
            self.vertex_faces[a.index()].push(f);
        }

        self.face_props.push();
        FaceId(f)
    }

    fn find_or_insert_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let key = edge_key(a, b);
        if let Some(&e) = self.edge_lookup.get(&key) {
            return EdgeId(e);
        }
        let e = self.edge_count() as u32;
        self.edge_vertices.push([key.0, key.1]);
        self.edge_lookup.insert(key, e);
        self.edge_faces.push(Vec::new());
        self.vertex_edges[a.index()].push(e);
        self.vertex_edges[b.index()].push(e);
        self.edge_props.push();
        EdgeId(e)
    }

    /// Returns the vertices of face `f` in winding order.
    ///
    /// # Panics
    /// Panics if `f` is out of range.
    pub fn face_vertices(&self, f: FaceId) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        let i = f.index();
        self.face_indices[self.face_offsets[i]..self.face_offsets[i + 1]]
            .iter()
            .map(|&v| VertexId(v))
    }

    /// True if face `f` walks from `a` directly to `b`.
    fn face_traverses(&self, f: FaceId, a: VertexId, b: VertexId) -> bool {
        let i = f.index();
        let face = &self.face_indices[self.face_offsets[i]..self.face_offsets[i + 1]];
        let n = face.len();
        (0..n).any(|k| face[k] == a.0 && face[(k + 1) % n] == b.0)
    }

    /// Number of vertices in face `f`.
    pub fn face_valence(&self, f: FaceId) -> usize {
        let i = f.index();
        self.face_offsets[i + 1] - self.face_offsets[i]
    }

    /// Returns the endpoints of edge `e`, lower index first.
    pub fn edge_vertices(&self, e: EdgeId) -> [VertexId; 2] {
        let [a, b] = self.edge_vertices[e.index()];
        [VertexId(a), VertexId(b)]
    }

    /// The edge joining `a` and `b`, in either direction.
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edge_lookup.get(&edge_key(a, b)).map(|&e| EdgeId(e))
    }

    /// Faces incident to edge `e` (one for boundary edges).
    pub fn edge_faces(&self, e: EdgeId) -> impl Iterator<Item = FaceId> + '_ {
        self.edge_faces[e.index()].iter().map(|&f| FaceId(f))
    }

    /// Faces incident to vertex `v`.
    pub fn vertex_faces(&self, v: VertexId) -> impl Iterator<Item = FaceId> + '_ {
        self.vertex_faces[v.index()].iter().map(|&f| FaceId(f))
    }

    /// Number of edges incident to vertex `v`.
    pub fn valence(&self, v: VertexId) -> usize {
        self.vertex_edges[v.index()].len()
    }

    /// True if `v` is not part of any face.
    pub fn is_isolated(&self, v: VertexId) -> bool {
        self.vertex_faces[v.index()].is_empty()
    }

    /// True if edge `e` has fewer than two incident faces.
    pub fn is_boundary_edge(&self, e: EdgeId) -> bool {
        self.edge_faces[e.index()].len() < 2
    }

    /// Returns the number of boundary edges.
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_faces.iter().filter(|faces| faces.len() < 2).count()
    }

    /// Returns true if the mesh has no boundary edges.
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }

    /// Returns true if every face is a triangle.
    pub fn is_triangle_mesh(&self) -> bool {
        self.faces().all(|f| self.face_valence(f) == 3)
    }

    // ─── Iteration ────────────────────────────────────────────

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.vertex_count() as u32).map(VertexId)
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = EdgeId> {
        (0..self.edge_count() as u32).map(EdgeId)
    }

    pub fn faces(&self) -> impl ExactSizeIterator<Item = FaceId> {
        (0..self.face_count() as u32).map(FaceId)
    }

    // ─── Storage ──────────────────────────────────────────────

    /// Reserves room for additional elements of each kind.
    pub fn reserve(&mut self, vertices: usize, edges: usize, faces: usize) {
        self.pos_x.reserve(vertices);
        self.pos_y.reserve(vertices);
        self.pos_z.reserve(vertices);
        self.vertex_faces.reserve(vertices);
        self.vertex_edges.reserve(vertices);
        self.edge_vertices.reserve(edges);
        self.edge_faces.reserve(edges);
        self.edge_lookup.reserve(edges);
        self.face_offsets.reserve(faces);
        self.vertex_props.reserve(vertices);
        self.edge_props.reserve(edges);
        self.face_props.reserve(faces);
    }

    /// Removes every element. Registered properties are kept, with
    /// their arrays truncated to zero length; mesh-level properties
    /// are untouched.
    pub fn clear(&mut self) {
        self.pos_x.clear();
        self.pos_y.clear();
        self.pos_z.clear();
        self.face_offsets.clear();
        self.face_offsets.push(0);
        self.face_indices.clear();
        self.edge_vertices.clear();
        self.edge_lookup.clear();
        self.edge_faces.clear();
        self.vertex_faces.clear();
        self.vertex_edges.clear();
        self.vertex_props.clear();
        self.edge_props.clear();
        self.face_props.clear();
        debug!("mesh cleared");
    }

    // ─── Properties ───────────────────────────────────────────

    /// The property registry of `kind`.
    pub fn registry(&self, kind: ElementKind) -> &PropertyRegistry {
        match kind {
            ElementKind::Vertex => &self.vertex_props,
            ElementKind::Edge => &self.edge_props,
            ElementKind::Face => &self.face_props,
        }
    }

    fn registry_mut(&mut self, kind: ElementKind) -> &mut PropertyRegistry {
        match kind {
            ElementKind::Vertex => &mut self.vertex_props,
            ElementKind::Edge => &mut self.edge_props,
            ElementKind::Face => &mut self.face_props,
        }
    }

    /// Attaches a new property with one slot per existing element,
    /// each set to `default`.
    pub fn add_property(
        &mut self,
        kind: ElementKind,
        name: &str,
        default: impl Into<PropertyValue>,
    ) -> MeshResult<PropertyHandle> {
        let default = default.into();
        let handle = self.registry_mut(kind).add(name, default).inspect_err(|e| {
            warn!(%kind, property = name, error = %e, "property not added");
        })?;
        debug!(
            %kind,
            property = name,
            value_type = %default.value_type(),
            elements = self.element_count(kind),
            "property added"
        );
        Ok(handle)
    }

    /// Looks up an attached property.
    pub fn get_property(&self, kind: ElementKind, name: &str) -> MeshResult<PropertyHandle> {
        self.registry(kind).get(name)
    }

    /// Returns the named property, attaching it with `default` if absent.
    pub fn property_or_add(
        &mut self,
        kind: ElementKind,
        name: &str,
        default: impl Into<PropertyValue>,
    ) -> MeshResult<PropertyHandle> {
        self.registry_mut(kind).get_or_add(name, default.into())
    }

    /// Detaches a property and frees its storage.
    pub fn remove_property(&mut self, kind: ElementKind, name: &str) -> MeshResult<()> {
        self.registry_mut(kind).remove(name)?;
        debug!(%kind, property = name, "property removed");
        Ok(())
    }

    pub fn has_property(&self, kind: ElementKind, name: &str) -> bool {
        self.registry(kind).contains(name)
    }

    /// Names of the properties attached to `kind`, in registration order.
    pub fn property_names(&self, kind: ElementKind) -> Vec<&str> {
        self.registry(kind).names()
    }

    pub fn property_type(&self, kind: ElementKind, name: &str) -> MeshResult<PropertyType> {
        Ok(self.registry(kind).find(name)?.value_type())
    }

    /// Reads the slot of element `index`.
    pub fn property_value(&self, handle: &PropertyHandle, index: usize) -> MeshResult<PropertyValue> {
        let registry = self.registry(handle.kind());
        let property = registry.resolve(handle)?;
        property.data().get(index).ok_or(MeshError::InvalidHandle {
            kind: handle.kind(),
            index,
            count: registry.len(),
        })
    }

    /// Writes the slot of element `index`.
    pub fn set_property_value(
        &mut self,
        handle: &PropertyHandle,
        index: usize,
        value: impl Into<PropertyValue>,
    ) -> MeshResult<()> {
        let value = value.into();
        if value.value_type() != handle.value_type() {
            return Err(MeshError::TypeMismatch {
                name: handle.name().to_string(),
                expected: handle.value_type().to_string(),
                found: value.value_type().to_string(),
            });
        }
        let registry = self.registry_mut(handle.kind());
        let count = registry.len();
        let property = registry.resolve_mut(handle)?;
        if !property.data_mut().set(index, value) {
            return Err(MeshError::InvalidHandle {
                kind: handle.kind(),
                index,
                count,
            });
        }
        Ok(())
    }

    /// Typed view of a property's slots, indexed by element handle.
    pub fn property_slice<T: PropertyElement>(&self, handle: &PropertyHandle) -> MeshResult<&[T]> {
        let property = self.registry(handle.kind()).resolve(handle)?;
        T::slice(property.data()).ok_or_else(|| type_mismatch::<T>(handle))
    }

    /// Mutable typed view of a property's slots.
    ///
    /// The slice cannot change length, so the registry invariant holds.
    pub fn property_slice_mut<T: PropertyElement>(
        &mut self,
        handle: &PropertyHandle,
    ) -> MeshResult<&mut [T]> {
        let property = self.registry_mut(handle.kind()).resolve_mut(handle)?;
        T::slice_mut(property.data_mut()).ok_or_else(|| type_mismatch::<T>(handle))
    }

    /// Lists every attached property per element kind.
    pub fn report_property_stats(&self) -> PropertyStats {
        PropertyStats::collect(
            [&self.vertex_props, &self.edge_props, &self.face_props],
            &self.mesh_props,
        )
    }

    // ─── Mesh Properties ──────────────────────────────────────

    /// Attaches a single named value to the mesh itself.
    pub fn add_mesh_property(&mut self, name: &str, value: impl Into<PropertyValue>) -> MeshResult<()> {
        if self.mesh_props.contains_key(name) {
            warn!(property = name, "mesh property already exists");
            return Err(MeshError::DuplicateMeshProperty {
                name: name.to_string(),
            });
        }
        let value = value.into();
        self.mesh_props.insert(name.to_string(), value);
        debug!(property = name, value_type = %value.value_type(), "mesh property added");
        Ok(())
    }

    /// The tagged value of a mesh-level property.
    pub fn mesh_property(&self, name: &str) -> MeshResult<PropertyValue> {
        self.mesh_props
            .get(name)
            .copied()
            .ok_or_else(|| mesh_property_not_found(name))
    }

    /// The value of a mesh-level property as `T`.
    ///
    /// Fails with `TypeMismatch` if the property holds another type.
    pub fn mesh_property_as<T: PropertyElement>(&self, name: &str) -> MeshResult<T> {
        let value = self.mesh_property(name)?;
        T::from_value(value).ok_or_else(|| MeshError::TypeMismatch {
            name: name.to_string(),
            expected: T::TYPE.to_string(),
            found: value.value_type().to_string(),
        })
    }

    /// Overwrites a mesh-level property, keeping its type.
    pub fn set_mesh_property(&mut self, name: &str, value: impl Into<PropertyValue>) -> MeshResult<()> {
        let value = value.into();
        let slot = self
            .mesh_props
            .get_mut(name)
            .ok_or_else(|| mesh_property_not_found(name))?;
        if slot.value_type() != value.value_type() {
            return Err(MeshError::TypeMismatch {
                name: name.to_string(),
                expected: slot.value_type().to_string(),
                found: value.value_type().to_string(),
            });
        }
        *slot = value;
        Ok(())
    }

    /// Detaches a mesh-level property, returning its last value.
    pub fn remove_mesh_property(&mut self, name: &str) -> MeshResult<PropertyValue> {
        let value = self
            .mesh_props
            .remove(name)
            .ok_or_else(|| mesh_property_not_found(name))?;
        debug!(property = name, "mesh property removed");
        Ok(value)
    }

    pub fn has_mesh_property(&self, name: &str) -> bool {
        self.mesh_props.contains_key(name)
    }

    /// Mesh-level properties in name order.
    pub fn mesh_properties(&self) -> impl Iterator<Item = (&str, PropertyValue)> {
        self.mesh_props.iter().map(|(name, &value)| (name.as_str(), value))
    }

    // ─── Integrity ────────────────────────────────────────────

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Position channels and per-vertex adjacency have the same length
    /// - Every property registry matches its element count
    /// - Face offsets are monotonic and face indices are in range
    /// - Edge tables agree with each other
    pub fn validate(&self) -> MeshResult<()> {
        let n = self.vertex_count();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(MeshError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.vertex_faces.len() != n || self.vertex_edges.len() != n {
            return Err(MeshError::InvalidMesh(
                "Vertex adjacency has inconsistent length".into(),
            ));
        }

        let ne = self.edge_count();
        if self.edge_faces.len() != ne || self.edge_lookup.len() != ne {
            return Err(MeshError::InvalidMesh(
                "Edge tables have inconsistent lengths".into(),
            ));
        }

        if self.face_offsets.first() != Some(&0)
            || self.face_offsets.last() != Some(&self.face_indices.len())
            || self.face_offsets.windows(2).any(|w| w[1] < w[0] + MIN_FACE_VALENCE)
        {
            return Err(MeshError::InvalidMesh("Face offsets are malformed".into()));
        }
        for (i, &idx) in self.face_indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(MeshError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for (kind, registry) in [
            (ElementKind::Vertex, &self.vertex_props),
            (ElementKind::Edge, &self.edge_props),
            (ElementKind::Face, &self.face_props),
        ] {
            if registry.len() != self.element_count(kind) {
                return Err(MeshError::InvalidMesh(format!(
                    "{} registry sized for {} elements, mesh has {}",
                    kind,
                    registry.len(),
                    self.element_count(kind)
                )));
            }
            registry.validate()?;
        }

        Ok(())
    }
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical undirected edge key `(min, max)`.
#[inline]
fn edge_key(a: VertexId, b: VertexId) -> (u32, u32) {
    if a.0 < b.0 {
        (a.0, b.0)
    } else {
        (b.0, a.0)
    }
}

/// Consecutive vertex pairs of a face, closing the loop.
fn face_edges(vertices: &[VertexId]) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

fn mesh_property_not_found(name: &str) -> MeshError {
    MeshError::MeshPropertyNotFound {
        name: name.to_string(),
    }
}

fn type_mismatch<T: PropertyElement>(handle: &PropertyHandle) -> MeshError {
    MeshError::TypeMismatch {
        name: handle.name().to_string(),
        expected: T::TYPE.to_string(),
        found: handle.value_type().to_string(),
    }
}
