//! Integration tests for surfmesh-cli commands.

use std::path::PathBuf;

use surfmesh_cli::commands;
use surfmesh_io::read_json;

fn temp_path(name: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("surfmesh-cli-{}-{}.{}", name, std::process::id(), ext))
}

// ─── Generate & Stats ─────────────────────────────────────────

#[test]
fn generate_then_stats() {
    let path = temp_path("cube", "json");
    let p = path.to_str().unwrap();

    commands::generate("cube", p).unwrap();
    commands::stats(p, None).unwrap();
    let mesh = read_json(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 6);
    assert!(mesh.is_closed());
}

#[test]
fn generate_unknown_shape_fails() {
    let path = temp_path("unknown", "json");
    assert!(commands::generate("torus", path.to_str().unwrap()).is_err());
    assert!(!path.exists());
}

// ─── Translate ────────────────────────────────────────────────

#[test]
fn translate_offsets_every_vertex() {
    let input = temp_path("grid-in", "json");
    let output = temp_path("grid-out", "json");
    let (i, o) = (input.to_str().unwrap(), output.to_str().unwrap());

    commands::generate("grid", i).unwrap();
    commands::translate(i, &[1.0, -2.0, 0.5], Some(o), None).unwrap();

    let before = read_json(&input).unwrap().vertex_positions();
    let after = read_json(&output).unwrap().vertex_positions();
    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();

    assert_eq!(after.shape(), before.shape());
    for (p, q) in before.columns().zip(after.columns()) {
        assert!((q.x - p.x - 1.0).abs() < 1e-6);
        assert!((q.y - p.y + 2.0).abs() < 1e-6);
        assert!((q.z - p.z - 0.5).abs() < 1e-6);
    }
}

#[test]
fn translate_needs_three_components() {
    let input = temp_path("tet", "json");
    let i = input.to_str().unwrap();
    commands::generate("tetrahedron", i).unwrap();

    assert!(commands::translate(i, &[1.0, 2.0], None, None).is_err());
    let unchanged = read_json(&input).unwrap();
    std::fs::remove_file(&input).ok();
    assert_eq!(unchanged.vertex_count(), 4);
}

// ─── Config ───────────────────────────────────────────────────

#[test]
fn oversized_config_is_rejected() {
    let config = temp_path("huge", "toml");
    std::fs::write(&config, "vertex_capacity = 9223372036854775807\n").unwrap();
    let c = config.to_str().unwrap();

    let mesh = temp_path("grid-cfg", "json");
    let m = mesh.to_str().unwrap();
    commands::generate("grid", m).unwrap();

    let stats = commands::stats(m, Some(c));
    let validate = commands::validate(c, None);
    std::fs::remove_file(&config).ok();
    std::fs::remove_file(&mesh).ok();

    assert!(stats.is_err());
    assert!(validate.is_err());
}
