//! Common test fixtures for CAPPI radar tests.
//!
//! This module provides pre-defined test data that represents common
//! scenarios in radar grid processing.

use radar_common::ProjectionParameters;

/// Grid origins and spacings resembling real radar products.
pub mod params {
    use super::ProjectionParameters;

    /// The small hand-checked example: origin (127.0, 37.0), 1 km cells,
    /// surface level.
    pub const SIMPLE: ProjectionParameters = ProjectionParameters {
        origin_longitude: 127.0,
        origin_latitude: 37.0,
        grid_spacing_km: 1.0,
        altitude_km: 0.0,
    };

    /// National composite covering the Korean peninsula, 1.5 km CAPPI.
    pub const KOREA_COMPOSITE: ProjectionParameters = ProjectionParameters {
        origin_longitude: 121.5,
        origin_latitude: 31.0,
        grid_spacing_km: 1.0,
        altitude_km: 1.5,
    };

    /// Coarse 2 km grid near the equator, where east-west spacing is widest.
    pub const EQUATORIAL: ProjectionParameters = ProjectionParameters {
        origin_longitude: 0.0,
        origin_latitude: 0.0,
        grid_spacing_km: 2.0,
        altitude_km: 0.0,
    };

    /// High-latitude grid, where longitude steps grow quickly.
    pub const HIGH_LATITUDE: ProjectionParameters = ProjectionParameters {
        origin_longitude: 25.0,
        origin_latitude: 68.0,
        grid_spacing_km: 0.5,
        altitude_km: 3.0,
    };
}

/// Small grids with hand-checked expectations.
pub mod grids {
    /// `[[1,2],[-127,4]]`: three retained cells.
    pub fn simple_2x2() -> Vec<Vec<f64>> {
        vec![vec![1.0, 2.0], vec![-127.0, 4.0]]
    }

    /// Every cell is a no-data sentinel.
    pub fn all_sentinels(width: usize, height: usize) -> Vec<Vec<f64>> {
        (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| if (row + col) % 2 == 0 { -127.0 } else { -128.0 })
                    .collect()
            })
            .collect()
    }

    /// One strong echo in the middle of weak returns.
    ///
    /// ```text
    /// 0.1 0.2 0.1 0.0
    /// 0.3 5.0 0.2 0.0
    /// 0.1 0.4 0.2 0.3
    /// ```
    pub fn weak_around_strong() -> Vec<Vec<f64>> {
        vec![
            vec![0.1, 0.2, 0.1, 0.0],
            vec![0.3, 5.0, 0.2, 0.0],
            vec![0.1, 0.4, 0.2, 0.3],
        ]
    }
}

/// Fixed clock readings for time-key tests.
pub mod time {
    /// 2024-07-25 14:37:12 local time.
    pub const AFTERNOON: &str = "2024-07-25T14:37:12";

    /// Just after midnight on New Year's Day, crossing back into the
    /// previous year once 20 minutes are removed.
    pub const NEW_YEAR: &str = "2024-01-01T00:05:00";
}
