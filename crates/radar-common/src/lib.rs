//! Common types and utilities shared across the CAPPI radar crates.

pub mod error;
pub mod grid;
pub mod point;
pub mod product;

pub use error::{DecodeError, RadarError, RadarResult};
pub use grid::{GridShape, RawGrid, NO_DATA_SENTINELS};
pub use point::{GeoCoord, ProjectionParameters, SamplePoint};
pub use product::CappiProduct;
