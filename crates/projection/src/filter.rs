//! Suppression of weak, isolated echoes.
//!
//! Off by default: every non-sentinel cell is emitted unless a caller
//! explicitly enables a filter.

use radar_common::{RadarError, RadarResult, RawGrid};
use serde::{Deserialize, Serialize};

/// Offsets of the eight cells surrounding a cell, as (row, column).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Rule deciding whether a non-sentinel cell is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NoiseFilter {
    /// Emit every non-sentinel cell.
    #[default]
    Disabled,
    /// Drop cells below `threshold` unless one of their eight neighbours is
    /// at or above it.
    IsolatedBelow { threshold: f64 },
}

impl NoiseFilter {
    pub fn isolated_below(threshold: f64) -> Self {
        Self::IsolatedBelow { threshold }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Validate the filter settings.
    pub fn validate(&self) -> RadarResult<()> {
        match self {
            Self::IsolatedBelow { threshold } if !threshold.is_finite() => {
                Err(RadarError::invalid_parameters(format!(
                    "Noise filter threshold {} is not finite",
                    threshold
                )))
            }
            _ => Ok(()),
        }
    }

    /// Whether the cell at row `i`, column `j` holding `value` survives the
    /// filter. Sentinels must already have been excluded by the caller.
    pub fn retains(&self, grid: &RawGrid, i: usize, j: usize, value: f64) -> bool {
        match *self {
            Self::Disabled => true,
            Self::IsolatedBelow { threshold } => {
                value >= threshold || has_neighbor_at_least(grid, i, j, threshold)
            }
        }
    }
}

fn has_neighbor_at_least(grid: &RawGrid, i: usize, j: usize, threshold: f64) -> bool {
    NEIGHBOR_OFFSETS.iter().any(|&(di, dj)| {
        let (Some(ni), Some(nj)) = (i.checked_add_signed(di), j.checked_add_signed(dj)) else {
            return false;
        };
        grid.get(ni, nj).is_some_and(|v| v >= threshold)
    })
}
