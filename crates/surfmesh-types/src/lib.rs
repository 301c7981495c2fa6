//! # surfmesh-types
//!
//! Shared handles, element kinds, error types, and constants
//! for the surfmesh polygon mesh store.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other surfmesh crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{MeshError, MeshResult};
pub use ids::{EdgeId, ElementKind, FaceId, VertexId};
pub use scalar::Scalar;
