//! Scalar type alias for stored coordinates and property values.

/// The floating-point type used for positions and scalar properties.
///
/// `f32` matches what most numeric consumers of the bulk position
/// matrix expect.
pub type Scalar = f32;
