//! Geographic placement of radar grids.
//!
//! Implements spherical great-circle geodesy from scratch and uses it to
//! assign a longitude/latitude to every retained cell of a decoded CAPPI
//! grid.

pub mod filter;
pub mod geodesic;
pub mod projector;

pub use filter::NoiseFilter;
pub use geodesic::{destination, haversine_distance_km, initial_bearing_deg, EARTH_RADIUS_KM};
pub use projector::{
    assign_coordinates, row_latitudes, slant_distance_km, GridGeoProjector, ProjectorOptions,
};
