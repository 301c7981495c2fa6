//! Integration tests for surfmesh-io.

use std::path::PathBuf;

use surfmesh_io::validator::validate_mesh_data;
use surfmesh_io::{build_mesh, load, populate, read_json, write_json, MeshData, MeshSource, PropertyColumn};
use surfmesh_math::{PositionMatrix, Vec3};
use surfmesh_mesh::generators::quad_grid;
use surfmesh_mesh::{MeshConfig, PropertyValue, SurfaceMesh};
use surfmesh_types::{ElementKind, MeshError, MeshResult, VertexId};

fn square_data() -> MeshData {
    MeshData {
        positions: vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        faces: vec![vec![0, 1, 2, 3]],
        ..Default::default()
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("surfmesh-{}-{}.json", name, std::process::id()))
}

/// A loader that always fails, like a missing or corrupt file.
struct BrokenSource;

impl MeshSource for BrokenSource {
    fn read(&mut self) -> MeshResult<MeshData> {
        Err(MeshError::Load("truncated file".into()))
    }
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn mesh_data_json_round_trip() {
    let data = square_data();
    let json = serde_json::to_string(&data).unwrap();
    let recovered: MeshData = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, data);
}

#[test]
fn property_lists_are_optional_in_json() {
    let json = r#"{"positions": [[0,0,0],[1,0,0],[0,1,0]], "faces": [[0,1,2]]}"#;
    let data: MeshData = serde_json::from_str(json).unwrap();
    assert_eq!(data.vertex_count(), 3);
    assert!(data.vertex_properties.is_empty());
}

#[test]
fn from_mesh_captures_properties() {
    let mut mesh = quad_grid(1, 1, 1.0, 1.0);
    let h = mesh.add_property(ElementKind::Vertex, "v:w", 0.0f32).unwrap();
    mesh.set_property_value(&h, 2, 5.0f32).unwrap();

    let data = MeshData::from_mesh(&mesh);
    assert_eq!(data.vertex_count(), 4);
    assert_eq!(data.faces, vec![vec![0, 2, 3, 1]]);
    assert_eq!(data.vertex_properties.len(), 1);
    assert_eq!(data.vertex_properties[0].values[2], PropertyValue::Scalar(5.0));
}

#[test]
fn from_mesh_captures_mesh_properties() {
    let mut mesh = quad_grid(1, 1, 1.0, 1.0);
    mesh.add_mesh_property("iterations", 4).unwrap();

    let data = MeshData::from_mesh(&mesh);
    assert_eq!(data.mesh_properties.get("iterations"), Some(&PropertyValue::Int(4)));

    let loaded = build_mesh(&data, &MeshConfig::default()).unwrap();
    assert_eq!(loaded.mesh_property_as::<i32>("iterations").unwrap(), 4);
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn valid_data_passes() {
    assert!(validate_mesh_data(&square_data(), &MeshConfig::default()).is_ok());
}

#[test]
fn out_of_range_face_index() {
    let mut data = square_data();
    data.faces[0][3] = 4;
    assert!(validate_mesh_data(&data, &MeshConfig::default()).is_err());
}

#[test]
fn non_finite_position() {
    let mut data = square_data();
    data.positions[1][2] = f32::NAN;
    assert!(validate_mesh_data(&data, &MeshConfig::default()).is_err());
}

#[test]
fn property_column_length_checked() {
    let mut data = square_data();
    data.vertex_properties.push(PropertyColumn {
        name: "v:w".into(),
        default: PropertyValue::Scalar(0.0),
        values: vec![PropertyValue::Scalar(1.0); 3],
    });
    assert!(validate_mesh_data(&data, &MeshConfig::default()).is_err());
}

#[test]
fn property_column_type_checked() {
    let mut data = square_data();
    data.face_properties.push(PropertyColumn {
        name: "f:id".into(),
        default: PropertyValue::Int(0),
        values: vec![PropertyValue::Bool(true)],
    });
    assert!(matches!(
        validate_mesh_data(&data, &MeshConfig::default()),
        Err(MeshError::TypeMismatch { .. })
    ));
}

#[test]
fn duplicate_column_names() {
    let mut data = square_data();
    let col = PropertyColumn {
        name: "f:id".into(),
        default: PropertyValue::Int(0),
        values: vec![PropertyValue::Int(1)],
    };
    data.face_properties = vec![col.clone(), col];
    assert!(matches!(
        validate_mesh_data(&data, &MeshConfig::default()),
        Err(MeshError::DuplicateName { kind: ElementKind::Face, .. })
    ));
}

// ─── Loader Tests ─────────────────────────────────────────────

#[test]
fn load_square_scenario() {
    let mut data = square_data();
    let mut mesh = load(&mut data, &MeshConfig::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 4);

    let m = mesh.vertex_positions();
    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.column3(2), Some([1.0, 1.0, 0.0]));

    mesh.set_vertex_positions(&PositionMatrix::from_columns(&[[9.0, 9.0, 9.0]; 4]))
        .unwrap();
    assert!(mesh.vertex_positions().columns().all(|p| p == Vec3::splat(9.0)));
}

#[test]
fn build_attaches_properties() {
    let mut data = square_data();
    data.vertex_properties.push(PropertyColumn {
        name: "v:normal".into(),
        default: PropertyValue::Vec3([0.0, 0.0, 1.0]),
        values: vec![PropertyValue::Vec3([0.0, 0.0, 1.0]); 4],
    });
    data.edge_properties.push(PropertyColumn {
        name: "e:crease".into(),
        default: PropertyValue::Scalar(0.0),
        values: vec![PropertyValue::Scalar(0.5); 4],
    });

    let mesh = build_mesh(&data, &MeshConfig::default()).unwrap();
    let h = mesh.get_property(ElementKind::Edge, "e:crease").unwrap();
    assert_eq!(mesh.property_slice::<f32>(&h).unwrap(), &[0.5; 4]);
    assert!(mesh.has_property(ElementKind::Vertex, "v:normal"));
}

#[test]
fn edge_column_length_checked_at_build() {
    let mut data = square_data();
    data.edge_properties.push(PropertyColumn {
        name: "e:crease".into(),
        default: PropertyValue::Scalar(0.0),
        values: vec![PropertyValue::Scalar(0.5); 3],
    });
    assert!(build_mesh(&data, &MeshConfig::default()).is_err());
}

#[test]
fn config_applies_to_loaded_faces() {
    let mut data = square_data();
    assert!(load(&mut data, &MeshConfig::triangles_only()).is_err());
}

#[test]
fn inconsistent_winding_fails_load() {
    let mut data = MeshData {
        positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, -1.0, 0.0]],
        faces: vec![vec![0, 1, 2], vec![0, 1, 3]],
        ..Default::default()
    };
    assert!(matches!(
        load(&mut data, &MeshConfig::default()),
        Err(MeshError::InvalidMesh(_))
    ));
    assert!(load(&mut data, &MeshConfig::permissive()).is_ok());
}

#[test]
fn failed_load_reports_error() {
    let err = load(&mut BrokenSource, &MeshConfig::default()).unwrap_err();
    assert!(matches!(err, MeshError::Load(_)));
}

#[test]
fn failed_populate_leaves_mesh_untouched() {
    let mut mesh = quad_grid(2, 2, 1.0, 1.0);
    mesh.add_property(ElementKind::Face, "f:id", 0).unwrap();
    let before = mesh.vertex_positions();

    assert!(populate(&mut mesh, &mut BrokenSource).is_err());

    let mut bad = square_data();
    bad.faces.push(vec![0, 0, 1]);
    assert!(populate(&mut mesh, &mut bad).is_err());

    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.vertex_positions(), before);
    assert!(mesh.has_property(ElementKind::Face, "f:id"));
}

#[test]
fn populate_replaces_contents() {
    let mut mesh = SurfaceMesh::new();
    populate(&mut mesh, &mut square_data()).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.position(VertexId(1)), Vec3::X);
}

#[test]
fn json_file_round_trip() {
    let path = temp_path("round-trip");
    let mut mesh = quad_grid(3, 2, 1.0, 1.0);
    let h = mesh.add_property(ElementKind::Face, "f:label", 0).unwrap();
    mesh.set_property_value(&h, 5, 42).unwrap();

    write_json(&mesh, &path).unwrap();
    let loaded = read_json(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.vertex_positions(), mesh.vertex_positions());
    assert_eq!(loaded.edge_count(), mesh.edge_count());
    let h = loaded.get_property(ElementKind::Face, "f:label").unwrap();
    assert_eq!(loaded.property_value(&h, 5).unwrap(), PropertyValue::Int(42));
}

#[test]
fn missing_file_is_load_error() {
    let err = read_json(temp_path("does-not-exist")).unwrap_err();
    assert!(matches!(err, MeshError::Load(_)));
}
