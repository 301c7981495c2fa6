//! CLI command implementations.

use surfmesh_io::{load, write_json, JsonMeshSource};
use surfmesh_math::{PositionMatrix, Vec3};
use surfmesh_mesh::generators::{cube, quad_grid, tetrahedron};
use surfmesh_mesh::{MeshConfig, SurfaceMesh};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Reads the optional TOML config, falling back to defaults.
fn load_config(config_path: Option<&str>) -> Result<MeshConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(MeshConfig::from_toml_str(&content)?)
        }
        None => Ok(MeshConfig::default()),
    }
}

fn load_mesh(path: &str, config_path: Option<&str>) -> Result<SurfaceMesh, Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    Ok(load(&mut JsonMeshSource::new(path), &config)?)
}

/// Print counts, bounds, and property stats.
pub fn stats(path: &str, config_path: Option<&str>) -> CommandResult {
    let mesh = load_mesh(path, config_path)?;

    println!("surfmesh Stats");
    println!("──────────────");
    println!("Mesh:      {path}");
    println!("Vertices:  {}", mesh.vertex_count());
    println!("Edges:     {}", mesh.edge_count());
    println!("Faces:     {}", mesh.face_count());
    println!(
        "Closed:    {} ({} boundary edges)",
        mesh.is_closed(),
        mesh.boundary_edge_count()
    );
    if let Some(aabb) = mesh.bounding_box() {
        let (lo, hi) = (aabb.min, aabb.max);
        println!(
            "Bounds:    [{:.4}, {:.4}, {:.4}] – [{:.4}, {:.4}, {:.4}]",
            lo.x, lo.y, lo.z, hi.x, hi.y, hi.z
        );
    }
    println!();
    print!("{}", mesh.report_property_stats());

    Ok(())
}

/// Validate a mesh snapshot or config.
pub fn validate(path: &str, config_path: Option<&str>) -> CommandResult {
    println!("surfmesh Validator");
    println!("──────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        load_config(Some(path))?;
        println!("✅ Config is valid.");
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        match load_mesh(path, config_path).and_then(|mesh| {
            mesh.validate()?;
            Ok(mesh)
        }) {
            Ok(mesh) => println!(
                "✅ Mesh is valid ({} verts, {} faces).",
                mesh.vertex_count(),
                mesh.face_count()
            ),
            Err(e) => println!("❌ Mesh validation failed: {e}"),
        }
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (mesh).");
    }

    Ok(())
}

/// Print the bulk position matrix, one row per axis.
pub fn positions(path: &str, config_path: Option<&str>) -> CommandResult {
    let mesh = load_mesh(path, config_path)?;
    let m = mesh.vertex_positions();

    println!("3x{} position matrix", m.cols());
    for (axis, r) in ["x", "y", "z"].iter().zip(0..m.rows()) {
        let row: Vec<String> = m.row(r).iter().map(|v| format!("{v:.6}")).collect();
        println!("{axis}: [{}]", row.join(", "));
    }

    Ok(())
}

/// Offset every vertex through a bulk read, edit, and write.
pub fn translate(
    path: &str,
    offset: &[f32],
    output_path: Option<&str>,
    config_path: Option<&str>,
) -> CommandResult {
    let [dx, dy, dz] = <[f32; 3]>::try_from(offset)
        .map_err(|_| format!("Offset needs 3 components, got {}", offset.len()))?;
    let mut mesh = load_mesh(path, config_path)?;

    let m = mesh.vertex_positions();
    let moved: Vec<Vec3> = m.columns().map(|p| p + Vec3::new(dx, dy, dz)).collect();
    mesh.set_vertex_positions(&PositionMatrix::from_vec3s(&moved))?;

    let out = output_path.unwrap_or(path);
    write_json(&mesh, out)?;
    println!("Translated {} vertices by ({dx}, {dy}, {dz}) → {out}", mesh.vertex_count());

    Ok(())
}

/// Write a generated mesh snapshot.
pub fn generate(shape: &str, output_path: &str) -> CommandResult {
    let mesh = match shape {
        "grid" => quad_grid(4, 4, 1.0, 1.0),
        "tetrahedron" => tetrahedron(1.0),
        "cube" => cube(1.0),
        other => {
            eprintln!("Unknown shape: {other}");
            eprintln!("Available: grid, tetrahedron, cube");
            return Err("Unknown shape".into());
        }
    };

    write_json(&mesh, output_path)?;
    println!(
        "Wrote {shape} ({} verts, {} faces) to {output_path}",
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(())
}
