//! Procedural mesh generators for tests and demos.
//!
//! These generators produce deterministic meshes with consistent
//! (counter-clockwise, outward-facing) winding.

use surfmesh_math::Vec3;
use surfmesh_types::VertexId;

use crate::mesh::SurfaceMesh;

/// Generates a flat rectangular grid of quads in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0. Vertices are numbered row by row,
/// top to bottom.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width` — Total width.
/// - `height` — Total height.
///
/// # Example
/// ```
/// use surfmesh_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.face_count(), 4);    // 2×2 quads
/// assert_eq!(mesh.edge_count(), 12);
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> SurfaceMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut mesh = SurfaceMesh::new();
    mesh.reserve(verts_x * verts_y, 2 * cols * rows + cols + rows, cols * rows);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = if cols == 0 { 0.0 } else { i as f32 / cols as f32 };
            let v = if rows == 0 { 0.0 } else { j as f32 / rows as f32 };
            mesh.add_vertex(Vec3::new(-half_w + u * width, half_h - v * height, 0.0));
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            // Counter-clockwise seen from +Z
            mesh.push_face(&[
                VertexId(top_left),
                VertexId(bot_left),
                VertexId(bot_right),
                VertexId(top_right),
            ]);
        }
    }

    mesh
}

/// Generates a regular tetrahedron inscribed in a sphere of `radius`.
///
/// Closed triangle mesh: 4 vertices, 6 edges, 4 faces.
pub fn tetrahedron(radius: f32) -> SurfaceMesh {
    let s = radius / 3.0_f32.sqrt();
    let corners = [
        Vec3::new(s, s, s),
        Vec3::new(-s, -s, s),
        Vec3::new(-s, s, -s),
        Vec3::new(s, -s, -s),
    ];

    let mut mesh = SurfaceMesh::new();
    let v: Vec<VertexId> = corners.iter().map(|&p| mesh.add_vertex(p)).collect();

    mesh.push_face(&[v[0], v[1], v[3]]);
    mesh.push_face(&[v[0], v[2], v[1]]);
    mesh.push_face(&[v[0], v[3], v[2]]);
    mesh.push_face(&[v[1], v[2], v[3]]);

    mesh
}

/// Generates an axis-aligned cube of edge length `size` centered at the origin.
///
/// Closed quad mesh: 8 vertices, 12 edges, 6 faces.
pub fn cube(size: f32) -> SurfaceMesh {
    let h = size / 2.0;
    let mut mesh = SurfaceMesh::new();

    // Bit 0 → x, bit 1 → y, bit 2 → z
    let v: Vec<VertexId> = (0..8)
        .map(|i| {
            let sign = |bit: u32| if i & (1 << bit) != 0 { h } else { -h };
            mesh.add_vertex(Vec3::new(sign(0), sign(1), sign(2)))
        })
        .collect();

    mesh.push_face(&[v[0], v[2], v[3], v[1]]); // -Z
    mesh.push_face(&[v[4], v[5], v[7], v[6]]); // +Z
    mesh.push_face(&[v[0], v[1], v[5], v[4]]); // -Y
    mesh.push_face(&[v[2], v[6], v[7], v[3]]); // +Y
    mesh.push_face(&[v[0], v[4], v[6], v[2]]); // -X
    mesh.push_face(&[v[1], v[3], v[7], v[5]]); // +X

    mesh
}
