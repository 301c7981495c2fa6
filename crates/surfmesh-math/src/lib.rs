//! # surfmesh-math
//!
//! Numeric types at the mesh boundary.
//!
//! Provides:
//! - Re-exports of `glam` vector types used for single positions
//! - [`PositionMatrix`], the 3×N bulk position matrix, with `faer` interop
//! - [`Aabb`] bounding boxes

pub mod bounds;
pub mod position_matrix;

pub use bounds::Aabb;
pub use position_matrix::PositionMatrix;

// Re-export glam types as the canonical vector types for surfmesh.
pub use glam::{Vec2, Vec3, Vec4};
