//! Decoded radar grids and their declared shape.

use crate::{RadarError, RadarResult};
use serde::{Deserialize, Serialize};

/// Values the radar service writes for cells without an echo.
pub const NO_DATA_SENTINELS: [f64; 2] = [-127.0, -128.0];

/// Returns true if `value` is one of the no-data sentinels.
pub fn is_no_data(value: f64) -> bool {
    NO_DATA_SENTINELS.contains(&value)
}

/// Declared dimensions of a grid, taken from product metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of columns (scan direction)
    pub xdim: usize,
    /// Number of rows
    pub ydim: usize,
}

impl GridShape {
    pub fn new(xdim: usize, ydim: usize) -> Self {
        Self { xdim, ydim }
    }

    /// Total number of grid cells.
    pub fn len(&self) -> usize {
        self.xdim * self.ydim
    }

    /// Check if the shape has no cells.
    pub fn is_empty(&self) -> bool {
        self.xdim == 0 || self.ydim == 0
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.xdim, self.ydim)
    }
}

/// Rows of sample values in the order the payload supplied them.
///
/// Rows are not required to share a length; the shape is checked against
/// the caller's declared dimensions with [`RawGrid::check_shape`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawGrid {
    rows: Vec<Vec<f64>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Borrow a single row.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Value at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Iterate over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of stored values.
    pub fn cell_count(&self) -> usize {
        self.iter_rows().map(<[f64]>::len).sum()
    }

    /// Number of stored values that are no-data sentinels.
    pub fn no_data_count(&self) -> usize {
        self.iter_rows()
            .flatten()
            .filter(|v| is_no_data(**v))
            .count()
    }

    /// Verify that the grid has exactly `shape.ydim` rows of `shape.xdim`
    /// columns each.
    pub fn check_shape(&self, shape: GridShape) -> RadarResult<()> {
        if self.rows.len() != shape.ydim {
            return Err(RadarError::invalid_grid_shape(
                format!("{} rows", shape.ydim),
                format!("{} rows", self.rows.len()),
            ));
        }

        if let Some((i, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != shape.xdim)
        {
            return Err(RadarError::invalid_grid_shape(
                format!("{} columns in every row", shape.xdim),
                format!("{} columns in row {}", row.len(), i),
            ));
        }

        Ok(())
    }

    /// Consume the grid and return its rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl From<Vec<Vec<f64>>> for RawGrid {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::new(rows)
    }
}
