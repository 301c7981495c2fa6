//! Dense row-major matrix used for bulk vertex position transfer.
//!
//! A mesh exposes its positions as a 3×N matrix: row 0 holds every
//! x coordinate, row 1 every y, row 2 every z, and column `i` is the
//! position of vertex `i`. Row-major storage means each row is one
//! contiguous slice, which lines up with the store's SoA channels.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use surfmesh_types::constants::POSITION_ROWS;
use surfmesh_types::{MeshError, MeshResult, Scalar};

/// A dense `rows × cols` matrix stored row-major.
///
/// The shape is not fixed to 3 rows so that callers can hand over
/// whatever they built; shape checks happen at the mesh boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct PositionMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Scalar>,
}

/// Unchecked wire form; converted through [`PositionMatrix::from_row_major`]
/// so a deserialized matrix always holds `rows * cols` entries.
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Scalar>,
}

impl TryFrom<RawMatrix> for PositionMatrix {
    type Error = MeshError;

    fn try_from(raw: RawMatrix) -> MeshResult<Self> {
        Self::from_row_major(raw.rows, raw.cols, raw.data)
    }
}

impl PositionMatrix {
    /// Creates a zero-filled matrix.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("{}x{} matrix size overflows usize", rows, cols));
        Self {
            rows,
            cols,
            data: vec![0.0; len],
        }
    }

    /// Creates a matrix from row-major data.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<Scalar>) -> MeshResult<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MeshError::InvalidMesh(format!(
                "Matrix data length ({}) != {}x{}",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a 3×N matrix from three equally long coordinate channels.
    pub fn from_channels(x: &[Scalar], y: &[Scalar], z: &[Scalar]) -> MeshResult<Self> {
        let n = x.len();
        if y.len() != n || z.len() != n {
            return Err(MeshError::InvalidMesh(format!(
                "Coordinate channels have inconsistent lengths ({}, {}, {})",
                n,
                y.len(),
                z.len()
            )));
        }
        let mut data = Vec::with_capacity(POSITION_ROWS * n);
        data.extend_from_slice(x);
        data.extend_from_slice(y);
        data.extend_from_slice(z);
        Ok(Self {
            rows: POSITION_ROWS,
            cols: n,
            data,
        })
    }

    /// Builds a 3×N matrix with one column per point.
    pub fn from_columns(points: &[[Scalar; 3]]) -> Self {
        let n = points.len();
        let mut m = Self::zeros(POSITION_ROWS, n);
        for (c, p) in points.iter().enumerate() {
            m.data[c] = p[0];
            m.data[n + c] = p[1];
            m.data[2 * n + c] = p[2];
        }
        m
    }

    /// Builds a 3×N matrix from `glam` vectors.
    pub fn from_vec3s(points: &[Vec3]) -> Self {
        let cols: Vec<[Scalar; 3]> = points.iter().map(|p| p.to_array()).collect();
        Self::from_columns(&cols)
    }

    /// Builds a 3×N matrix from interleaved `[x0, y0, z0, x1, ...]` data.
    pub fn from_interleaved(coords: &[Scalar]) -> MeshResult<Self> {
        if coords.len() % POSITION_ROWS != 0 {
            return Err(MeshError::InvalidMesh(
                "Interleaved coordinate length not divisible by 3".into(),
            ));
        }
        let cols: Vec<[Scalar; 3]> = coords
            .chunks_exact(POSITION_ROWS)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Ok(Self::from_columns(&cols))
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Raw row-major storage.
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Entry at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Sets the entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: Scalar) {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        self.data[row * self.cols + col] = value;
    }

    /// Row `r` as a contiguous slice.
    ///
    /// # Panics
    /// Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &[Scalar] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Row `r` as a mutable slice.
    ///
    /// # Panics
    /// Panics if `r >= rows`.
    pub fn row_mut(&mut self, r: usize) -> &mut [Scalar] {
        &mut self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Column `c` of a 3-row matrix as a point.
    pub fn column3(&self, c: usize) -> Option<[Scalar; 3]> {
        if self.rows != POSITION_ROWS || c >= self.cols {
            return None;
        }
        Some([
            self.data[c],
            self.data[self.cols + c],
            self.data[2 * self.cols + c],
        ])
    }

    /// Iterates the columns of a 3-row matrix as `glam` vectors.
    ///
    /// Yields nothing if the matrix does not have exactly 3 rows.
    pub fn columns(&self) -> impl Iterator<Item = Vec3> + '_ {
        let n = if self.rows == POSITION_ROWS { self.cols } else { 0 };
        (0..n).filter_map(move |c| self.column3(c).map(Vec3::from_array))
    }

    /// Flattens a 3-row matrix into interleaved `[x0, y0, z0, x1, ...]`.
    pub fn to_interleaved(&self) -> Vec<Scalar> {
        self.columns().flat_map(|p| p.to_array()).collect()
    }

    /// Converts to a `faer` dense matrix of the same shape.
    pub fn to_faer(&self) -> faer::Mat<Scalar> {
        faer::Mat::from_fn(self.rows, self.cols, |i, j| self.data[i * self.cols + j])
    }

    /// Copies a `faer` dense matrix.
    pub fn from_faer(mat: &faer::Mat<Scalar>) -> Self {
        let (rows, cols) = (mat.nrows(), mat.ncols());
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(mat[(i, j)]);
            }
        }
        Self { rows, cols, data }
    }
}
