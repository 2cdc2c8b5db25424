//! Great-circle distance between station coordinates
//!
//! Implements the haversine formula on a sphere of Earth's equatorial radius.
//! Pure and total: NaN inputs propagate rather than being rejected, which the
//! matcher relies on to fail proximity checks conservatively.

use crate::app::models::Station;
use crate::constants::EARTH_RADIUS_METERS;

/// A latitude/longitude point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// GeoJSON-style `[longitude, latitude]` pair
impl From<[f64; 2]> for Coord {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<&Station> for Coord {
    fn from(station: &Station) -> Self {
        Self {
            latitude: station.latitude,
            longitude: station.longitude,
        }
    }
}

/// Great-circle distance between two points in meters.
///
/// Haversine on a sphere of radius 6,378,137 m; oblateness is not modeled.
pub fn distance(a: impl Into<Coord>, b: impl Into<Coord>) -> f64 {
    let a = a.into();
    let b = b.into();

    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}
