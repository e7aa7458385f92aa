//! The matrix backing store and its active-submatrix view.
//!
//! Storage is always a full 4×4 grid of integer cells; the grid size only
//! selects which top-left `size × size` slice is active. Shrinking the size
//! hides cells without discarding them, so growing the size back restores
//! the previously entered values.

use std::fmt;

/// Cells per row/column of the backing store.
pub const GRID_CAPACITY: usize = 4;

/// Edge length of the active submatrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GridSize {
    Two,
    Three,
    Four,
}

impl GridSize {
    /// The edge length as a number.
    pub const fn get(self) -> usize {
        match self {
            GridSize::Two => 2,
            GridSize::Three => 3,
            GridSize::Four => 4,
        }
    }

    /// Number of active cells (`size * size`).
    pub const fn cell_count(self) -> usize {
        self.get() * self.get()
    }
}

impl TryFrom<u8> for GridSize {
    type Error = MatrixError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(GridSize::Two),
            3 => Ok(GridSize::Three),
            4 => Ok(GridSize::Four),
            other => Err(MatrixError::InvalidGridSize(other)),
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A confusion matrix with 4×4 backing storage and an active submatrix.
///
/// # Example
/// ```
/// use heatmap_core::{GridSize, Matrix};
///
/// let mut m = Matrix::new(GridSize::Two);
/// m.set(0, 0, 5).unwrap();
/// m.set(1, 1, 5).unwrap();
/// assert_eq!(m.active_values(), vec![5, 0, 0, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cells: [i64; GRID_CAPACITY * GRID_CAPACITY],
    size: GridSize,
}

impl Matrix {
    /// Create an all-zero matrix with the given active size.
    pub fn new(size: GridSize) -> Self {
        Self {
            cells: [0; GRID_CAPACITY * GRID_CAPACITY],
            size,
        }
    }

    /// Create a matrix from a row-major stride-4 backing store.
    pub fn from_cells(cells: [i64; GRID_CAPACITY * GRID_CAPACITY], size: GridSize) -> Self {
        Self { cells, size }
    }

    /// The active edge length.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Change the active size. Hidden cells keep their stored values.
    pub fn set_size(&mut self, size: GridSize) {
        self.size = size;
    }

    /// Read a cell. Coordinates address the 4×4 storage, not just the
    /// active slice.
    pub fn get(&self, row: usize, col: usize) -> Result<i64, MatrixError> {
        if row >= GRID_CAPACITY || col >= GRID_CAPACITY {
            return Err(MatrixError::CellOutOfRange { row, col });
        }
        Ok(self.cells[row * GRID_CAPACITY + col])
    }

    /// Write a cell. Coordinates address the 4×4 storage.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<(), MatrixError> {
        if row >= GRID_CAPACITY || col >= GRID_CAPACITY {
            return Err(MatrixError::CellOutOfRange { row, col });
        }
        self.cells[row * GRID_CAPACITY + col] = value;
        Ok(())
    }

    /// The active cells in row-major order.
    pub fn active_values(&self) -> Vec<i64> {
        self.active_cells().map(|(_, _, v)| v).collect()
    }

    /// Iterate the active cells as `(row, col, value)`, row-major.
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        let size = self.size.get();
        (0..size).flat_map(move |row| {
            (0..size).map(move |col| (row, col, self.cells[row * GRID_CAPACITY + col]))
        })
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new(GridSize::Three)
    }
}

/// Error type for matrix addressing and sizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Cell coordinates outside the 4×4 backing store
    CellOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
    },
    /// Grid size outside the supported 2..=4 range
    InvalidGridSize(u8),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::CellOutOfRange { row, col } => {
                write!(f, "cell ({}, {}) outside the 4x4 backing store", row, col)
            }
            MatrixError::InvalidGridSize(size) => {
                write!(f, "grid size {} not supported (expected 2, 3, or 4)", size)
            }
        }
    }
}

impl std::error::Error for MatrixError {}
