//! Integration tests for surfmesh-math.

use surfmesh_math::{Aabb, PositionMatrix, Vec3};

// ─── PositionMatrix Tests ─────────────────────────────────────

fn unit_square() -> PositionMatrix {
    PositionMatrix::from_columns(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
}

#[test]
fn from_columns_shape() {
    let m = unit_square();
    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.row(0), &[0.0, 1.0, 1.0, 0.0]);
    assert_eq!(m.row(1), &[0.0, 0.0, 1.0, 1.0]);
    assert_eq!(m.row(2), &[0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn column_access() {
    let m = unit_square();
    assert_eq!(m.column3(2), Some([1.0, 1.0, 0.0]));
    assert_eq!(m.column3(4), None);
}

#[test]
fn column3_requires_three_rows() {
    let m = PositionMatrix::zeros(2, 4);
    assert_eq!(m.column3(0), None);
    assert_eq!(m.columns().count(), 0);
}

#[test]
fn from_row_major_checks_length() {
    assert!(PositionMatrix::from_row_major(3, 2, vec![0.0; 6]).is_ok());
    assert!(PositionMatrix::from_row_major(3, 2, vec![0.0; 5]).is_err());
}

#[test]
fn from_row_major_rejects_overflowing_shape() {
    assert!(PositionMatrix::from_row_major(usize::MAX, 2, vec![0.0; 2]).is_err());
}

#[test]
fn from_channels_matches_columns() {
    let m = PositionMatrix::from_channels(&[0.0, 1.0], &[2.0, 3.0], &[4.0, 5.0]).unwrap();
    assert_eq!(m.column3(0), Some([0.0, 2.0, 4.0]));
    assert_eq!(m.column3(1), Some([1.0, 3.0, 5.0]));
}

#[test]
fn from_channels_rejects_ragged() {
    assert!(PositionMatrix::from_channels(&[0.0, 1.0], &[2.0], &[4.0, 5.0]).is_err());
}

#[test]
fn interleaved_layout() {
    let m = PositionMatrix::from_interleaved(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.row(0), &[1.0, 4.0]);
    assert_eq!(m.to_interleaved(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert!(PositionMatrix::from_interleaved(&[1.0, 2.0]).is_err());
}

#[test]
fn empty_matrix() {
    let m = PositionMatrix::from_columns(&[]);
    assert_eq!(m.shape(), (3, 0));
    assert!(m.as_slice().is_empty());
}

#[test]
fn set_and_get() {
    let mut m = PositionMatrix::zeros(3, 2);
    m.set(1, 1, 7.5);
    assert_eq!(m.get(1, 1), Some(7.5));
    assert_eq!(m.get(3, 0), None);
}

#[test]
fn faer_conversion_preserves_entries() {
    let m = unit_square();
    let f = m.to_faer();
    assert_eq!(f.nrows(), 3);
    assert_eq!(f.ncols(), 4);
    assert_eq!(f[(1, 2)], 1.0);
    assert_eq!(PositionMatrix::from_faer(&f), m);
}

#[test]
fn matrix_is_serializable() {
    let m = unit_square();
    let json = serde_json::to_string(&m).unwrap();
    let recovered: PositionMatrix = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, m);
}

#[test]
fn deserialize_rejects_short_data() {
    let result = serde_json::from_str::<PositionMatrix>(r#"{"rows":3,"cols":2,"data":[1.0]}"#);
    assert!(result.is_err());
}

#[test]
fn deserialize_rejects_long_data() {
    let json = r#"{"rows":1,"cols":2,"data":[1.0,2.0,3.0]}"#;
    assert!(serde_json::from_str::<PositionMatrix>(json).is_err());
}

// ─── Aabb Tests ───────────────────────────────────────────────

#[test]
fn aabb_of_points() {
    let aabb = Aabb::from_points([
        Vec3::new(-1.0, 0.0, 2.0),
        Vec3::new(3.0, -2.0, 0.0),
        Vec3::new(0.0, 1.0, 1.0),
    ])
    .unwrap();
    assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
    assert_eq!(aabb.max, Vec3::new(3.0, 1.0, 2.0));
    assert_eq!(aabb.center(), Vec3::new(1.0, -0.5, 1.0));
    assert!(aabb.contains(Vec3::ZERO));
    assert!(!aabb.contains(Vec3::new(4.0, 0.0, 0.0)));
}

#[test]
fn aabb_of_nothing() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}
