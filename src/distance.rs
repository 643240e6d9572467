//! Great circle distance
use crate::position::GeoPosition;

/// Mean Earth radius, in km
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great circle distance between two positions, in km,
/// using the haversine formula on a sphere of [EARTH_RADIUS_KM].
/// Returns NaN if any coordinate is NaN: callers must never
/// consider a NaN distance as a valid minimum.
pub fn haversine_km(a: GeoPosition, b: GeoPosition) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
