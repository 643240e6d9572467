//! `STR` records: GNSS correction streams
use std::str::FromStr;

use strum_macros::{Display, FromRepr};

use crate::{
    error::ParsingError,
    fields::{fmt_flag, fmt_float, fmt_int, Fields},
    position::{GeoPosition, Positioned},
    types::RecordType,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Carrier phase information, as published in the `carrier` field
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, FromRepr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Carrier {
    /// No carrier phase information
    #[strum(serialize = "none")]
    Unavailable = 0,
    /// L1 carrier phase
    #[strum(serialize = "L1")]
    L1 = 1,
    /// L1 and L2 carrier phase
    #[strum(serialize = "L1+L2")]
    L1L2 = 2,
}

/// Solution type, as published in the `solution` field
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, FromRepr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Solution {
    /// Corrections from a single reference station
    #[strum(serialize = "single base")]
    SingleBase = 0,
    /// Network (virtual reference station) corrections
    #[strum(serialize = "network")]
    Network = 1,
}

/// One GNSS correction stream (`STR` record).
///
/// Numeric fields that could not be interpreted are represented
/// by a sentinel: NaN for coordinates, [None] for integer codes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct StreamRecord {
    /// Mount point: stream identifier within a caster
    pub mount_point: String,
    /// Human readable name, usually the site
    pub identifier: String,
    /// Data format, for example "RTCM 3.2"
    pub format: String,
    /// Message types & update rates
    pub format_details: String,
    /// Carrier phase code, see [Self::carrier_kind]
    pub carrier: Option<i64>,
    /// Navigation systems, for example "GPS+GLO+GAL"
    pub nav_system: String,
    /// Network name
    pub network: String,
    /// ISO 3166 country code
    pub country: String,
    /// Latitude in decimal degrees
    #[cfg_attr(feature = "serde", serde(with = "crate::fields::nan_as_null"))]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[cfg_attr(feature = "serde", serde(with = "crate::fields::nan_as_null"))]
    pub longitude: f64,
    /// 1 when the client must send NMEA sentences
    pub nmea: Option<i64>,
    /// Solution code, see [Self::solution_kind]
    pub solution: Option<i64>,
    /// Generator hardware / software
    pub generator: String,
    /// Compression / encryption algorithm
    pub encryption: String,
    /// Authentication scheme (N, B, D)
    #[cfg_attr(feature = "serde", serde(alias = "network_transport"))]
    pub network_transport: String,
    /// True when access to this stream is charged
    pub has_fees_applied: bool,
    /// Bitrate in bits per second
    pub bitrate: Option<i64>,
    /// Free text
    pub misc_info: String,
    /// Place name this stream resolves to.
    /// Never set by the parser, see [crate::enrichment].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub place: Option<String>,
}

impl Default for StreamRecord {
    fn default() -> Self {
        Self {
            mount_point: String::new(),
            identifier: String::new(),
            format: String::new(),
            format_details: String::new(),
            carrier: None,
            nav_system: String::new(),
            network: String::new(),
            country: String::new(),
            latitude: f64::NAN,
            longitude: f64::NAN,
            nmea: None,
            solution: None,
            generator: String::new(),
            encryption: String::new(),
            network_transport: String::new(),
            has_fees_applied: false,
            bitrate: None,
            misc_info: String::new(),
            place: None,
        }
    }
}

impl StreamRecord {
    /// Maps the fields of a `STR` line, by position.
    /// Missing fields are considered empty.
    pub(crate) fn from_fields(fields: &Fields) -> Self {
        Self {
            mount_point: fields.text(1),
            identifier: fields.text(2),
            format: fields.text(3),
            format_details: fields.text(4),
            carrier: fields.int(5),
            nav_system: fields.text(6),
            network: fields.text(7),
            country: fields.text(8),
            latitude: fields.float(9),
            longitude: fields.float(10),
            nmea: fields.int(11),
            solution: fields.int(12),
            generator: fields.text(13),
            encryption: fields.text(14),
            network_transport: fields.text(15),
            has_fees_applied: fields.flag(16),
            bitrate: fields.int(17),
            misc_info: fields.text(18),
            place: None,
        }
    }
    /// Copies Self with given place name attached
    pub fn with_place(&self, place: Option<String>) -> Self {
        let mut s = self.clone();
        s.place = place;
        s
    }
    /// Returns the carrier phase description, if the code is known
    pub fn carrier_kind(&self) -> Option<Carrier> {
        let code = u8::try_from(self.carrier?).ok()?;
        Carrier::from_repr(code)
    }
    /// Returns the solution type, if the code is known
    pub fn solution_kind(&self) -> Option<Solution> {
        let code = u8::try_from(self.solution?).ok()?;
        Solution::from_repr(code)
    }
    /// Returns true if the caster expects NMEA GGA sentences
    /// from the client (usually for network solutions)
    pub fn requires_nmea(&self) -> bool {
        self.nmea == Some(1)
    }
}

impl Positioned for StreamRecord {
    fn position(&self) -> GeoPosition {
        GeoPosition::new(self.latitude, self.longitude)
    }
}

impl FromStr for StreamRecord {
    type Err = ParsingError;
    /// Parses a single `STR` line. No minimal field count is
    /// enforced here, see [crate::parser::Parser] for that.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        RecordType::expect(line, RecordType::Stream)?;
        Ok(Self::from_fields(&Fields::split(line)))
    }
}

impl std::fmt::Display for StreamRecord {
    /// Formats Self as a `STR` sourcetable line
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{};{};{};{};{};{};{};{};{};{};{};",
            RecordType::Stream,
            self.mount_point,
            self.identifier,
            self.format,
            self.format_details,
            fmt_int(&self.carrier),
            self.nav_system,
            self.network,
            self.country,
            fmt_float(self.latitude),
            fmt_float(self.longitude),
        )?;
        write!(
            f,
            "{};{};{};{};{};{};{};{}",
            fmt_int(&self.nmea),
            fmt_int(&self.solution),
            self.generator,
            self.encryption,
            self.network_transport,
            fmt_flag(self.has_fees_applied),
            fmt_int(&self.bitrate),
            self.misc_info,
        )
    }
}
