//! Geographic positions
use crate::distance::haversine_km;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic position, in decimal degrees.
/// Range is nominally [-90, 90] x [-180, 180] but is not enforced:
/// sourcetables are free text and unknown coordinates are NaN.
#[derive(Default, Copy, Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive
    pub longitude: f64,
}

impl From<(f64, f64)> for GeoPosition {
    fn from(latlon: (f64, f64)) -> Self {
        Self::new(latlon.0, latlon.1)
    }
}

impl From<GeoPosition> for (f64, f64) {
    fn from(pos: GeoPosition) -> Self {
        (pos.latitude, pos.longitude)
    }
}

impl GeoPosition {
    /// Builds Self from coordinates in decimal degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
    /// Returns true if both coordinates are actual numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
    /// Great circle distance to other position, in km
    pub fn distance_km(&self, rhs: &Self) -> f64 {
        haversine_km(*self, *rhs)
    }
}

impl std::fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.2}°, {:.2}°", self.latitude, self.longitude)
    }
}

impl std::str::FromStr for GeoPosition {
    type Err = std::num::ParseFloatError;
    /// Parses a "latitude,longitude" description, in decimal degrees
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = content.split_once(',').unwrap_or((content, ""));
        let latitude = f64::from_str(lat.trim())?;
        let longitude = f64::from_str(lon.trim())?;
        Ok(Self::new(latitude, longitude))
    }
}

/// Anything that is located on Earth
pub trait Positioned {
    /// Returns position of Self
    fn position(&self) -> GeoPosition;
}

impl Positioned for GeoPosition {
    fn position(&self) -> GeoPosition {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> GeoPosition {
        (**self).position()
    }
}
