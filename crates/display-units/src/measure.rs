//! Distance and area labels for the measuring tools.
//!
//! Values switch to kilometers above a per-tool threshold and are rounded
//! to two decimals in the displayed unit.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Measured lines longer than this many meters are shown in km.
const MEASURED_LENGTH_KM_THRESHOLD_M: f64 = 100.0;

/// Plain distances longer than this many meters are shown in km.
const LENGTH_KM_THRESHOLD_M: f64 = 1000.0;

/// Areas larger than this many square meters are shown in km².
const AREA_KM2_THRESHOLD_M2: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meters,
    Kilometers,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
        }
    }

    /// Markup suffix used by the dashboard tooltips.
    pub fn html(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeters,
    SquareKilometers,
}

impl AreaUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "m²",
            AreaUnit::SquareKilometers => "km²",
        }
    }

    /// Markup suffix used by the dashboard tooltips.
    pub fn html(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => " m<sup>2</sup>",
            AreaUnit::SquareKilometers => " km<sup>2</sup>",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rounded value in a display unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement<U> {
    pub value: f64,
    pub unit: U,
}

impl<U: fmt::Display> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Area and equivalent radius of a drawn circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleMeasurement {
    pub area: Measurement<AreaUnit>,
    pub radius: Measurement<LengthUnit>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn length_with_threshold(meters: f64, threshold: f64) -> Measurement<LengthUnit> {
    if meters > threshold {
        Measurement {
            value: round2(meters / 1000.0),
            unit: LengthUnit::Kilometers,
        }
    } else {
        Measurement {
            value: round2(meters),
            unit: LengthUnit::Meters,
        }
    }
}

/// Label for a line drawn with the measuring tool (km above 100 m).
pub fn format_measured_length(meters: f64) -> Measurement<LengthUnit> {
    length_with_threshold(meters, MEASURED_LENGTH_KM_THRESHOLD_M)
}

/// Label for a plain distance (km above 1000 m).
pub fn format_length(meters: f64) -> Measurement<LengthUnit> {
    length_with_threshold(meters, LENGTH_KM_THRESHOLD_M)
}

/// Label for a polygon area (km² above 10 000 m²).
pub fn format_area(square_meters: f64) -> Measurement<AreaUnit> {
    if square_meters > AREA_KM2_THRESHOLD_M2 {
        Measurement {
            value: round2(square_meters / 1_000_000.0),
            unit: AreaUnit::SquareKilometers,
        }
    } else {
        Measurement {
            value: round2(square_meters),
            unit: AreaUnit::SquareMeters,
        }
    }
}

/// Label for a drawn circle given its (geodesic) area.
///
/// The radius is derived from the area, so it reflects the circle's true
/// size on the ground rather than its projected radius.
pub fn format_circle(area_m2: f64) -> CircleMeasurement {
    let radius_m = (area_m2 / PI).sqrt();
    CircleMeasurement {
        area: format_area(area_m2),
        radius: format_length(radius_m),
    }
}

/// Compact route-distance label: whole meters below 1 km, one decimal km
/// otherwise, e.g. `"850m"` or `"12.3km"`.
pub fn format_km_or_m(total_meters: f64) -> String {
    let kilometers = total_meters / 1000.0;
    if kilometers < 1.0 {
        format!("{}m", total_meters)
    } else if is_exact_tenths_tie(kilometers) {
        // Exact ties round up; `{:.1}` would round them to even.
        format!("{:.1}km", (kilometers * 10.0).ceil() / 10.0)
    } else {
        format!("{:.1}km", kilometers)
    }
}

/// True when `value` lies exactly halfway between two tenths.
///
/// Such a value is `(2k + 1) / 20`, which is only representable when it is
/// an odd number of quarters. Scaling by 4 is exact.
fn is_exact_tenths_tie(value: f64) -> bool {
    let quarters = value * 4.0;
    quarters.fract() == 0.0 && quarters % 2.0 == 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_length_threshold() {
        assert_eq!(
            format_measured_length(100.0),
            Measurement {
                value: 100.0,
                unit: LengthUnit::Meters
            }
        );
        assert_eq!(
            format_measured_length(100.5),
            Measurement {
                value: 0.1,
                unit: LengthUnit::Kilometers
            }
        );
        assert_eq!(format_measured_length(12.344).value, 12.34);
    }

    #[test]
    fn test_length_threshold() {
        assert_eq!(format_length(1000.0).unit, LengthUnit::Meters);
        assert_eq!(format_length(1000.0).value, 1000.0);
        let km = format_length(2340.0);
        assert_eq!(km.unit, LengthUnit::Kilometers);
        assert_eq!(km.value, 2.34);
    }

    #[test]
    fn test_area_threshold() {
        assert_eq!(format_area(10_000.0).unit, AreaUnit::SquareMeters);
        let km2 = format_area(2_500_000.0);
        assert_eq!(km2.unit, AreaUnit::SquareKilometers);
        assert_eq!(km2.value, 2.5);
        assert_eq!(format_area(10_001.0).value, 0.01);
    }

    #[test]
    fn test_circle() {
        // r = 2 km
        let c = format_circle(PI * 2000.0 * 2000.0);
        assert_eq!(c.area.unit, AreaUnit::SquareKilometers);
        assert_eq!(c.area.value, 12.57);
        assert_eq!(c.radius.unit, LengthUnit::Kilometers);
        assert_eq!(c.radius.value, 2.0);
    }

    #[test]
    fn test_small_circle_in_meters() {
        let c = format_circle(PI * 50.0 * 50.0);
        assert_eq!(c.area.unit, AreaUnit::SquareMeters);
        assert_eq!(c.radius.unit, LengthUnit::Meters);
        assert_eq!(c.radius.value, 50.0);
    }

    #[test]
    fn test_km_or_m() {
        assert_eq!(format_km_or_m(850.0), "850m");
        assert_eq!(format_km_or_m(999.5), "999.5m");
        assert_eq!(format_km_or_m(1000.0), "1.0km");
        assert_eq!(format_km_or_m(1250.0), "1.3km");
        assert_eq!(format_km_or_m(12_340.0), "12.3km");
    }

    #[test]
    fn test_km_or_m_rounds_stored_value() {
        // 1.15, 4.35 and 1.45 are stored just below the tie.
        assert_eq!(format_km_or_m(1150.0), "1.1km");
        assert_eq!(format_km_or_m(4350.0), "4.3km");
        assert_eq!(format_km_or_m(1450.0), "1.4km");
        // 1.05 is stored just above it.
        assert_eq!(format_km_or_m(1050.0), "1.1km");
    }

    #[test]
    fn test_km_or_m_exact_ties_round_up() {
        assert_eq!(format_km_or_m(1250.0), "1.3km");
        assert_eq!(format_km_or_m(2750.0), "2.8km");
        assert_eq!(format_km_or_m(16_250.0), "16.3km");
        assert!(is_exact_tenths_tie(1.25));
        assert!(!is_exact_tenths_tie(1.15));
        assert!(!is_exact_tenths_tie(1.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format_area(2_500_000.0).to_string(), "2.5 km²");
        assert_eq!(format_length(420.0).to_string(), "420 m");
        assert_eq!(AreaUnit::SquareKilometers.html(), " km<sup>2</sup>");
    }
}
