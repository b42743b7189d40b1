//! GeoJSON output for projected radar samples.
//!
//! Every [`SamplePoint`] becomes a `Feature` with `Point` geometry and a
//! single `value` property:
//!
//! ```json
//! {"type":"FeatureCollection","features":[
//!   {"type":"Feature","geometry":{"type":"Point","coordinates":[127.0,37.0]},"properties":{"value":1.0}}
//! ]}
//! ```
//!
//! See: <https://datatracker.ietf.org/doc/html/rfc7946>

use radar_common::{RadarResult, SamplePoint};
use serde::{Deserialize, Serialize};

/// A GeoJSON FeatureCollection of sample points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Optional bounding box as [west, south, east, north].
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bbox: Option<[f64; 4]>,

    /// Array of features.
    pub features: Vec<PointFeature>,
}

impl PointCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            bbox: None,
            features: Vec::new(),
        }
    }

    /// Add a feature to the collection.
    pub fn with_feature(mut self, feature: PointFeature) -> Self {
        self.features.push(feature);
        self
    }

    /// Attach the computed bounding box as the `bbox` member.
    pub fn with_bbox(mut self) -> Self {
        self.bbox = self.bbox();
        self
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Bounding box of all feature coordinates, or None when empty.
    pub fn bbox(&self) -> Option<[f64; 4]> {
        let mut coords = self.features.iter().map(PointFeature::coordinates);
        let [lon, lat] = coords.next()?;
        let init = [lon, lat, lon, lat];

        Some(coords.fold(init, |[w, s, e, n], [lon, lat]| {
            [w.min(lon), s.min(lat), e.max(lon), n.max(lat)]
        }))
    }

    /// Recover the sample points, in feature order.
    pub fn to_samples(&self) -> Vec<SamplePoint> {
        self.features.iter().map(PointFeature::to_sample).collect()
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> RadarResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> RadarResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a collection previously written by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> RadarResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for PointCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[SamplePoint]> for PointCollection {
    fn from(points: &[SamplePoint]) -> Self {
        to_point_collection(points)
    }
}

impl From<Vec<SamplePoint>> for PointCollection {
    fn from(points: Vec<SamplePoint>) -> Self {
        to_point_collection(&points)
    }
}

/// A GeoJSON Feature with Point geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointFeature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    pub geometry: PointGeometry,

    pub properties: PointProperties,
}

impl PointFeature {
    /// Create a new feature at `lon`, `lat` carrying `value`.
    pub fn point(lon: f64, lat: f64, value: f64) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: PointGeometry::point(lon, lat),
            properties: PointProperties { value },
        }
    }

    /// Coordinates as [longitude, latitude].
    pub fn coordinates(&self) -> [f64; 2] {
        match self.geometry {
            PointGeometry::Point { coordinates } => coordinates,
        }
    }

    pub fn to_sample(&self) -> SamplePoint {
        let [lon, lat] = self.coordinates();
        SamplePoint::new(lon, lat, self.properties.value)
    }
}

impl From<&SamplePoint> for PointFeature {
    fn from(p: &SamplePoint) -> Self {
        PointFeature::point(p.longitude, p.latitude, p.value)
    }
}

/// GeoJSON geometry of a sample feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PointGeometry {
    /// A point geometry.
    Point {
        /// Coordinates as [longitude, latitude].
        coordinates: [f64; 2],
    },
}

impl PointGeometry {
    /// Create a point geometry.
    pub fn point(lon: f64, lat: f64) -> Self {
        PointGeometry::Point {
            coordinates: [lon, lat],
        }
    }
}

/// Properties of a sample feature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PointProperties {
    /// The sample value (reflectivity, rain rate, ...).
    pub value: f64,
}

/// Wrap each sample as a Point feature, preserving order.
pub fn to_point_collection(points: &[SamplePoint]) -> PointCollection {
    PointCollection {
        features: points.iter().map(PointFeature::from).collect(),
        ..PointCollection::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_collection_serialization() {
        let fc = PointCollection::new().with_feature(PointFeature::point(127.0, 37.0, 1.5));
        let json = serde_json::to_string(&fc).unwrap();

        assert_eq!(
            json,
            r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[127.0,37.0]},"properties":{"value":1.5}}]}"#
        );
    }

    #[test]
    fn test_empty_collection() {
        let fc = to_point_collection(&[]);
        assert!(fc.is_empty());
        assert_eq!(fc.bbox(), None);
        assert_eq!(fc.to_json().unwrap(), r#"{"type":"FeatureCollection","features":[]}"#);
    }

    #[test]
    fn test_bbox() {
        let points = vec![
            SamplePoint::new(127.0, 37.0, 1.0),
            SamplePoint::new(128.5, 36.5, 2.0),
            SamplePoint::new(126.0, 38.0, 3.0),
        ];
        let fc = PointCollection::from(points).with_bbox();
        assert_eq!(fc.bbox, Some([126.0, 36.5, 128.5, 38.0]));

        let json = fc.to_json().unwrap();
        assert!(json.contains(r#""bbox":[126.0,36.5,128.5,38.0]"#));
    }

    #[test]
    fn test_parse_foreign_geojson() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [126.5, 33.25]},
                "properties": {"value": -3}
            }]
        }"#;

        let fc = PointCollection::from_json(json).unwrap();
        assert_eq!(fc.to_samples(), vec![SamplePoint::new(126.5, 33.25, -3.0)]);
    }

    #[test]
    fn test_parse_rejects_non_point_geometry() {
        let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]},"properties":{"value":1}}]}"#;
        assert!(PointCollection::from_json(json).is_err());
    }
}
