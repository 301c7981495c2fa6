//! # surfmesh-mesh
//!
//! Indexed polygon mesh store with dynamic per-element properties.
//!
//! ## Key Types
//!
//! - [`SurfaceMesh`] — The mesh store. Owns SoA vertex positions, face
//!   and edge connectivity, one [`PropertyRegistry`] per element kind,
//!   and a map of mesh-level values.
//! - [`PropertyHandle`] / [`PropertyValue`] — Named, typed attributes
//!   attached at runtime.
//! - [`PropertyStats`] — Diagnostic listing of attached properties.
//! - [`MeshConfig`] — Capacity hints and face acceptance rules.
//! - Procedural generators for tests (quad grids, tetrahedra, cubes).

pub mod config;
pub mod generators;
pub mod mesh;
pub mod property;
pub mod registry;
pub mod stats;

pub use config::MeshConfig;
pub use mesh::SurfaceMesh;
pub use property::{PropertyArray, PropertyElement, PropertyHandle, PropertyType, PropertyValue};
pub use registry::PropertyRegistry;
pub use stats::PropertyStats;
