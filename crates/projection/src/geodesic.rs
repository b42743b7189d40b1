//! Great-circle geodesy on a spherical Earth.
//!
//! These are the spherical direct/inverse problems used by web mapping
//! libraries for "move N km on bearing B" and "distance between A and B".
//! At radar ranges (a few hundred km) the spherical model agrees with the
//! ellipsoid to well within display precision.

use radar_common::GeoCoord;

/// Mean Earth radius in kilometers (IUGG R1, as used by the dashboard's
/// mapping library).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Bearing pointing north, in degrees.
pub const NORTH: f64 = 0.0;

/// Bearing pointing east, in degrees.
pub const EAST: f64 = 90.0;

/// Calculate the point reached by travelling `distance_km` from `origin` on
/// the initial bearing `bearing_deg` (0 = north, 90 = east).
///
/// A zero distance returns `origin` unchanged. The resulting longitude is
/// not wrapped into [-180, 180].
pub fn destination(origin: GeoCoord, distance_km: f64, bearing_deg: f64) -> GeoCoord {
    if distance_km == 0.0 {
        return origin;
    }

    let lat_rad = origin.lat.to_radians();
    let lon_rad = origin.lon.to_radians();
    let bearing_rad = bearing_deg.to_radians();

    let angular_dist = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat_rad.sin() * angular_dist.cos()
        + lat_rad.cos() * angular_dist.sin() * bearing_rad.cos())
    .asin();

    let lon2 = lon_rad
        + (bearing_rad.sin() * angular_dist.sin() * lat_rad.cos())
            .atan2(angular_dist.cos() - lat_rad.sin() * lat2.sin());

    GeoCoord::new(lon2.to_degrees(), lat2.to_degrees())
}

/// Great-circle distance between two points, in kilometers (haversine).
pub fn haversine_distance_km(a: GeoCoord, b: GeoCoord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial bearing from `a` to `b` in degrees, normalized to [0, 360).
pub fn initial_bearing_deg(a: GeoCoord, b: GeoCoord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    x.atan2(y).to_degrees().rem_euclid(360.0)
}
