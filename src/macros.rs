//! Macros and helpers

/// Builds a [crate::position::GeoPosition] from coordinates in decimal degrees
#[macro_export]
macro_rules! position {
    ($lat: expr, $lon: expr) => {
        $crate::position::GeoPosition::new($lat, $lon)
    };
}
