//! Placement of CAPPI grid cells on the map.
//!
//! Rows are stacked northward from the origin latitude, one grid spacing
//! apart. Within a row, column `j` sits east of the origin meridian at the
//! slant distance `sqrt((spacing * j)^2 + altitude^2)`, so the CAPPI
//! altitude pushes every column outward as if it were measured along the
//! beam rather than along the ground. Each row restarts from the origin
//! longitude.

use rayon::prelude::*;
use tracing::debug;

use radar_common::grid::is_no_data;
use radar_common::{GeoCoord, GridShape, ProjectionParameters, RadarResult, RawGrid, SamplePoint};

use crate::filter::NoiseFilter;
use crate::geodesic::{destination, EAST, NORTH};

/// Options controlling which cells are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectorOptions {
    pub noise_filter: NoiseFilter,
}

/// Projects decoded grids onto longitude/latitude points.
#[derive(Debug, Clone, Default)]
pub struct GridGeoProjector {
    options: ProjectorOptions,
}

impl GridGeoProjector {
    /// Create a projector that emits every non-sentinel cell.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ProjectorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProjectorOptions {
        &self.options
    }

    /// Project every retained cell of `grid`, in row-major order.
    ///
    /// Fails with `InvalidGridShape` if `grid` is not exactly `shape`, and
    /// with `InvalidParameters` for unusable parameters or filter settings.
    pub fn project(
        &self,
        grid: &RawGrid,
        shape: GridShape,
        params: &ProjectionParameters,
    ) -> RadarResult<Vec<SamplePoint>> {
        let plan = self.plan(grid, shape, params)?;

        let mut points = Vec::with_capacity(shape.len());
        for (i, &lat) in plan.latitudes.iter().enumerate() {
            self.project_row(grid, i, lat, &plan, &mut points);
        }

        self.log_summary(shape, points.len());
        Ok(points)
    }

    /// Same output as [`project`](Self::project), with rows projected on the
    /// rayon thread pool.
    pub fn project_parallel(
        &self,
        grid: &RawGrid,
        shape: GridShape,
        params: &ProjectionParameters,
    ) -> RadarResult<Vec<SamplePoint>> {
        let plan = self.plan(grid, shape, params)?;

        let rows: Vec<Vec<SamplePoint>> = plan
            .latitudes
            .par_iter()
            .enumerate()
            .map(|(i, &lat)| {
                let mut row = Vec::with_capacity(shape.xdim);
                self.project_row(grid, i, lat, &plan, &mut row);
                row
            })
            .collect();

        let points: Vec<SamplePoint> = rows.into_iter().flatten().collect();
        self.log_summary(shape, points.len());
        Ok(points)
    }

    fn plan(
        &self,
        grid: &RawGrid,
        shape: GridShape,
        params: &ProjectionParameters,
    ) -> RadarResult<RowPlan> {
        params.validate()?;
        self.options.noise_filter.validate()?;
        grid.check_shape(shape)?;

        // A shape with zero rows or columns places nothing, whatever the
        // other dimension claims.
        if shape.is_empty() {
            return Ok(RowPlan {
                origin_longitude: params.origin_longitude,
                latitudes: Vec::new(),
                slant_km: Vec::new(),
            });
        }

        let slant_km = (0..shape.xdim)
            .map(|j| slant_distance_km(params.grid_spacing_km * j as f64, params.altitude_km))
            .collect();

        Ok(RowPlan {
            origin_longitude: params.origin_longitude,
            latitudes: row_latitudes(params, shape.ydim),
            slant_km,
        })
    }

    fn project_row(
        &self,
        grid: &RawGrid,
        i: usize,
        latitude: f64,
        plan: &RowPlan,
        out: &mut Vec<SamplePoint>,
    ) {
        let Some(row) = grid.row(i) else {
            return;
        };
        let row_origin = GeoCoord::new(plan.origin_longitude, latitude);

        for (j, (&value, &slant)) in row.iter().zip(plan.slant_km.iter()).enumerate() {
            if is_no_data(value) || !self.options.noise_filter.retains(grid, i, j, value) {
                continue;
            }

            let east = destination(row_origin, slant, EAST);
            out.push(SamplePoint::new(east.lon, latitude, value));
        }
    }

    fn log_summary(&self, shape: GridShape, emitted: usize) {
        debug!(
            xdim = shape.xdim,
            ydim = shape.ydim,
            emitted,
            skipped = shape.len() - emitted,
            noise_filter = self.options.noise_filter.is_enabled(),
            "Projected CAPPI grid"
        );
    }
}

/// Per-call values shared by every row.
struct RowPlan {
    origin_longitude: f64,
    latitudes: Vec<f64>,
    slant_km: Vec<f64>,
}

/// Project `grid` with the default options (no noise filter).
pub fn assign_coordinates(
    grid: &RawGrid,
    shape: GridShape,
    params: &ProjectionParameters,
) -> RadarResult<Vec<SamplePoint>> {
    GridGeoProjector::new().project(grid, shape, params)
}

/// Latitude of each of the first `ydim` rows.
///
/// Row 0 is the origin latitude; each following row is one grid spacing
/// north of the previous, measured along the origin meridian.
pub fn row_latitudes(params: &ProjectionParameters, ydim: usize) -> Vec<f64> {
    let mut latitudes = Vec::with_capacity(ydim);
    let mut current = params.origin_latitude;
    for _ in 0..ydim {
        latitudes.push(current);
        current = destination(
            GeoCoord::new(params.origin_longitude, current),
            params.grid_spacing_km,
            NORTH,
        )
        .lat;
    }
    latitudes
}

/// Ground distance corrected for the CAPPI altitude (flat right triangle).
pub fn slant_distance_km(ground_km: f64, altitude_km: f64) -> f64 {
    ground_km.hypot(altitude_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_params() -> ProjectionParameters {
        ProjectionParameters::new(127.0, 37.0, 1.0, 0.0)
    }

    #[test]
    fn test_simple_two_by_two() {
        let grid = RawGrid::new(vec![vec![1.0, 2.0], vec![-127.0, 4.0]]);
        let points = assign_coordinates(&grid, GridShape::new(2, 2), &simple_params()).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], SamplePoint::new(127.0, 37.0, 1.0));
        assert_eq!(points[1].value, 2.0);
        assert_eq!(points[1].latitude, 37.0);
        assert!(points[1].longitude > 127.0);
        assert_eq!(points[2].value, 4.0);
        assert!(points[2].latitude > 37.0);
        // Meridians converge northward, so 1 km spans more longitude.
        assert!(points[2].longitude > points[1].longitude);
    }

    #[test]
    fn test_row_latitudes_step_north() {
        let lats = row_latitudes(&simple_params(), 3);
        assert_eq!(lats.len(), 3);
        assert_eq!(lats[0], 37.0);
        let step = 1.0 / crate::geodesic::EARTH_RADIUS_KM;
        assert!((lats[1] - (37.0 + step.to_degrees())).abs() < 1e-9);
        assert!(lats[2] > lats[1]);
    }

    #[test]
    fn test_slant_distance() {
        assert_eq!(slant_distance_km(3.0, 4.0), 5.0);
        assert_eq!(slant_distance_km(2.0, 0.0), 2.0);
        assert_eq!(slant_distance_km(0.0, 1.5), 1.5);
    }

    #[test]
    fn test_altitude_offsets_first_column() {
        let grid = RawGrid::new(vec![vec![10.0]]);
        let params = ProjectionParameters::new(127.0, 37.0, 1.0, 1.5);
        let points = assign_coordinates(&grid, GridShape::new(1, 1), &params).unwrap();
        assert!(points[0].longitude > 127.0);
        assert_eq!(points[0].latitude, 37.0);
    }

    #[test]
    fn test_zero_rows_with_huge_width() {
        let grid = RawGrid::default();
        let shape = GridShape::new(usize::MAX, 0);
        assert!(grid.check_shape(shape).is_ok());

        let points = assign_coordinates(&grid, shape, &simple_params()).unwrap();
        assert!(points.is_empty());

        let points = GridGeoProjector::new()
            .project_parallel(&grid, shape, &simple_params())
            .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_empty_grid() {
        let points =
            assign_coordinates(&RawGrid::default(), GridShape::new(0, 0), &simple_params()).unwrap();
        assert!(points.is_empty());
    }
}
