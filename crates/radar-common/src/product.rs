//! CAPPI product as delivered by the radar service.

use crate::{GridShape, ProjectionParameters};
use serde::{Deserialize, Serialize};

/// A compressed CAPPI grid together with the metadata needed to place it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CappiProduct {
    /// Base64 text of the compressed CSV grid
    pub data: String,
    pub xdim: usize,
    pub ydim: usize,
    /// Cell spacing in kilometers
    pub grid_km: f64,
    pub start_lon: f64,
    pub start_lat: f64,
    /// CAPPI altitude in kilometers
    #[serde(default)]
    pub altitude: f64,
}

impl CappiProduct {
    pub fn shape(&self) -> GridShape {
        GridShape::new(self.xdim, self.ydim)
    }

    pub fn projection(&self) -> ProjectionParameters {
        ProjectionParameters::new(self.start_lon, self.start_lat, self.grid_km, self.altitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_json() {
        let json = r#"{
            "data": "eJwzBAAAMgAy",
            "xdim": 480,
            "ydim": 480,
            "gridKm": 1.0,
            "startLon": 124.5,
            "startLat": 33.0,
            "altitude": 1.5
        }"#;

        let product: CappiProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.shape(), GridShape::new(480, 480));

        let params = product.projection();
        assert_eq!(params.origin_longitude, 124.5);
        assert_eq!(params.origin_latitude, 33.0);
        assert_eq!(params.grid_spacing_km, 1.0);
        assert_eq!(params.altitude_km, 1.5);
    }

    #[test]
    fn test_product_altitude_defaults_to_zero() {
        let json = r#"{"data":"","xdim":1,"ydim":1,"gridKm":0.5,"startLon":127.0,"startLat":37.0}"#;
        let product: CappiProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.altitude, 0.0);
    }
}
