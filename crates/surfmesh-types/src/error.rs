//! Error types for the surfmesh store.
//!
//! All crates return `MeshResult<T>` from fallible operations.

use thiserror::Error;

use crate::ids::ElementKind;

/// Unified error type for surfmesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A bulk matrix write did not match the store's shape.
    #[error(
        "Shape mismatch: expected {expected_rows}x{expected_cols} matrix, got {rows}x{cols}"
    )]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// A property with this name already exists for the element kind.
    #[error("Duplicate {kind} property: '{name}'")]
    DuplicateName { kind: ElementKind, name: String },

    /// No property with this name is registered for the element kind.
    #[error("No {kind} property named '{name}'")]
    NotFound { kind: ElementKind, name: String },

    /// A mesh-level property with this name already exists.
    #[error("Duplicate mesh property: '{name}'")]
    DuplicateMeshProperty { name: String },

    /// No mesh-level property with this name is attached.
    #[error("No mesh property named '{name}'")]
    MeshPropertyNotFound { name: String },

    /// A property was accessed or written with the wrong value type.
    #[error("Property '{name}' holds {found} values, not {expected}")]
    TypeMismatch {
        name: String,
        expected: String,
        found: String,
    },

    /// An element handle is out of range for its kind.
    #[error("Invalid {kind} handle {index} (count: {count})")]
    InvalidHandle {
        kind: ElementKind,
        index: usize,
        count: usize,
    },

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An external loader failed to produce mesh data.
    #[error("Load failed: {0}")]
    Load(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, MeshError>`.
pub type MeshResult<T> = Result<T, MeshError>;
