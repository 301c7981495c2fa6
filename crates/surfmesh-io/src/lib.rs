//! # surfmesh-io
//!
//! The boundary between external mesh loaders and the surfmesh store.
//!
//! Defines the [`MeshData`] contract that loaders produce, validates
//! it, and populates meshes all-or-nothing. File formats themselves
//! are left to [`MeshSource`] implementations.

pub mod contract;
pub mod loader;
pub mod validator;

pub use contract::{MeshData, PropertyColumn};
pub use loader::{build_mesh, load, populate, read_json, write_json, JsonMeshSource, MeshSource};
