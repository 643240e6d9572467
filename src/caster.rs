//! `CAS` records: caster description
use std::str::FromStr;

use crate::{
    error::ParsingError,
    fields::{fmt_float, fmt_int, Fields},
    position::{GeoPosition, Positioned},
    types::RecordType,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// NTRIP caster description (`CAS` record)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CasterRecord {
    /// Caster internet host
    pub host: String,
    /// Caster port
    pub port: Option<i64>,
    /// Caster identifier, usually a name
    pub identifier: String,
    /// Institution or agency operating the caster
    pub operator: String,
    /// 1 when the caster accepts NMEA sentences
    pub nmea: Option<i64>,
    /// ISO 3166 country code
    pub country: String,
    /// Latitude in decimal degrees
    #[cfg_attr(feature = "serde", serde(with = "crate::fields::nan_as_null"))]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[cfg_attr(feature = "serde", serde(with = "crate::fields::nan_as_null"))]
    pub longitude: f64,
    /// Fallback caster host
    pub fallback_host: String,
    /// Fallback caster port
    pub fallback_port: Option<i64>,
    /// Free text
    pub misc_info: String,
}

impl Default for CasterRecord {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: None,
            identifier: String::new(),
            operator: String::new(),
            nmea: None,
            country: String::new(),
            latitude: f64::NAN,
            longitude: f64::NAN,
            fallback_host: String::new(),
            fallback_port: None,
            misc_info: String::new(),
        }
    }
}

impl CasterRecord {
    pub(crate) fn from_fields(fields: &Fields) -> Self {
        Self {
            host: fields.text(1),
            port: fields.int(2),
            identifier: fields.text(3),
            operator: fields.text(4),
            nmea: fields.int(5),
            country: fields.text(6),
            latitude: fields.float(7),
            longitude: fields.float(8),
            fallback_host: fields.text(9),
            fallback_port: fields.int(10),
            misc_info: fields.text(11),
        }
    }
    /// Returns "host:port" address of this caster,
    /// if port is known and is a valid TCP port
    pub fn address(&self) -> Option<String> {
        let port = u16::try_from(self.port?).ok()?;
        Some(format!("{}:{}", self.host, port))
    }
    /// Returns "host:port" address of the fallback caster, if defined
    pub fn fallback_address(&self) -> Option<String> {
        if self.fallback_host.is_empty() {
            return None;
        }
        let port = u16::try_from(self.fallback_port?).ok()?;
        Some(format!("{}:{}", self.fallback_host, port))
    }
}

impl Positioned for CasterRecord {
    fn position(&self) -> GeoPosition {
        GeoPosition::new(self.latitude, self.longitude)
    }
}

impl FromStr for CasterRecord {
    type Err = ParsingError;
    /// Parses a single `CAS` line, whatever its field count
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        RecordType::expect(line, RecordType::Caster)?;
        Ok(Self::from_fields(&Fields::split(line)))
    }
}

impl std::fmt::Display for CasterRecord {
    /// Formats Self as a `CAS` sourcetable line
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{};{};{};{};{};{};{};{};{};{};{};{}",
            RecordType::Caster,
            self.host,
            fmt_int(&self.port),
            self.identifier,
            self.operator,
            fmt_int(&self.nmea),
            self.country,
            fmt_float(self.latitude),
            fmt_float(self.longitude),
            self.fallback_host,
            fmt_int(&self.fallback_port),
            self.misc_info,
        )
    }
}
