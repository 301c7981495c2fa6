//! Store-wide limits and defaults.

/// Minimum number of vertices in a polygon face.
pub const MIN_FACE_VALENCE: usize = 3;

/// Default upper bound on the number of vertices in one face.
pub const DEFAULT_MAX_FACE_VALENCE: usize = 64;

/// Number of rows in the bulk position matrix (x, y, z).
pub const POSITION_ROWS: usize = 3;

/// Largest element index representable by a `u32` handle.
pub const MAX_ELEMENT_INDEX: usize = u32::MAX as usize - 1;
