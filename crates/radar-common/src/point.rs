//! Geographic points and the parameters used to place grid cells.

use crate::{RadarError, RadarResult};
use serde::{Deserialize, Serialize};

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    pub lon: f64,
    pub lat: f64,
}

impl GeoCoord {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// One retained grid cell placed on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub longitude: f64,
    pub latitude: f64,
    pub value: f64,
}

impl SamplePoint {
    pub fn new(longitude: f64, latitude: f64, value: f64) -> Self {
        Self {
            longitude,
            latitude,
            value,
        }
    }

    pub fn coord(&self) -> GeoCoord {
        GeoCoord::new(self.longitude, self.latitude)
    }
}

/// Placement of a grid on the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// Longitude of the first sample (degrees)
    pub origin_longitude: f64,
    /// Latitude of the first sample (degrees)
    pub origin_latitude: f64,
    /// Horizontal and vertical cell spacing (km)
    pub grid_spacing_km: f64,
    /// Altitude of the CAPPI surface (km), folded into column distances
    pub altitude_km: f64,
}

impl ProjectionParameters {
    pub fn new(
        origin_longitude: f64,
        origin_latitude: f64,
        grid_spacing_km: f64,
        altitude_km: f64,
    ) -> Self {
        Self {
            origin_longitude,
            origin_latitude,
            grid_spacing_km,
            altitude_km,
        }
    }

    pub fn origin(&self) -> GeoCoord {
        GeoCoord::new(self.origin_longitude, self.origin_latitude)
    }

    /// Validate the parameters.
    pub fn validate(&self) -> RadarResult<()> {
        if !self.origin_longitude.is_finite() || self.origin_longitude.abs() > 180.0 {
            return Err(RadarError::invalid_parameters(format!(
                "Origin longitude {} is outside [-180, 180]",
                self.origin_longitude
            )));
        }

        if !self.origin_latitude.is_finite() || self.origin_latitude.abs() > 90.0 {
            return Err(RadarError::invalid_parameters(format!(
                "Origin latitude {} is outside [-90, 90]",
                self.origin_latitude
            )));
        }

        if !self.grid_spacing_km.is_finite() || self.grid_spacing_km < 0.0 {
            return Err(RadarError::invalid_parameters(format!(
                "Grid spacing must be a finite non-negative distance, got {}",
                self.grid_spacing_km
            )));
        }

        if !self.altitude_km.is_finite() || self.altitude_km < 0.0 {
            return Err(RadarError::invalid_parameters(format!(
                "Altitude must be a finite non-negative distance, got {}",
                self.altitude_km
            )));
        }

        Ok(())
    }
}
