#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * ntrip-sourcetable: NTRIP sourcetable parsing & analysis.
 * This package is shipped under the MPL-2.0 License.
 *
 * The library is organized leaf first:
 *   record models (stream, caster, network) -> parser -> queries
 *   (distance, nearest / ranking, duplicate places).
 */

#[macro_use]
pub(crate) mod macros;

pub mod caster;
pub mod distance;
pub mod duplicates;
pub mod enrichment;
pub mod nearest;
pub mod network;
pub mod parser;
pub mod position;
pub mod stream;
pub mod types;

mod error;
mod fields;
mod reader;

#[cfg(test)]
mod tests;

use std::{
    io::{BufWriter, Read, Write},
    path::Path,
    str::FromStr,
};

use caster::CasterRecord;
use duplicates::DuplicatePlace;
use enrichment::PlaceResolver;
use network::NetworkRecord;
use parser::Parser;
use position::GeoPosition;
use reader::BufferedReader;
use stream::StreamRecord;

pub use error::{Error, ParsingError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        caster::CasterRecord,
        distance::{haversine_km, EARTH_RADIUS_KM},
        duplicates::{find_duplicate_places, DuplicatePlace, PlaceGroups},
        enrichment::{enrich_streams, from_fn, Paced, PlaceResolver},
        error::{Error, ParsingError},
        nearest::{nearest, nearest_with_distance, rank},
        network::{Authentication, NetworkRecord},
        parser::{Diagnostic, Parser, SingletonPolicy, MIN_STREAM_FIELDS},
        position::{GeoPosition, Positioned},
        stream::{Carrier, Solution, StreamRecord},
        types::RecordType,
        SourceTable,
    };
}

/// Marker closing a sourcetable, as served by NTRIP casters
pub const END_OF_SOURCETABLE: &str = "ENDSOURCETABLE";

/// [SourceTable] is the aggregate produced by parsing
/// an NTRIP sourcetable: every stream in order of appearance,
/// plus at most one caster and one network description.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SourceTable {
    /// `STR` records, in order of appearance
    pub streams: Vec<StreamRecord>,
    /// `CAS` record, if any
    pub caster: Option<CasterRecord>,
    /// `NET` record, if any
    pub network: Option<NetworkRecord>,
}

impl FromStr for SourceTable {
    type Err = ParsingError;
    /// Parses a sourcetable with the default (strict) [Parser]
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Parser::default().parse(content)
    }
}

impl SourceTable {
    /// Parses given sourcetable file with the default [Parser].
    /// With the `flate2` feature, `.gz` files are transparently decompressed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_file_with(path, &Parser::default())
    }

    /// Parses given sourcetable file with a custom [Parser]
    pub fn from_file_with<P: AsRef<Path>>(path: P, parser: &Parser) -> Result<Self, Error> {
        let content = Self::read_content(path.as_ref())?;
        let table = parser.parse(&content)?;
        Ok(table)
    }

    /// Same as [Self::from_file_with], with an observer receiving
    /// every [parser::Diagnostic] raised while parsing.
    pub fn from_file_observed<P, F>(path: P, parser: &Parser, observer: F) -> Result<Self, Error>
    where
        P: AsRef<Path>,
        F: FnMut(parser::Diagnostic),
    {
        let content = Self::read_content(path.as_ref())?;
        let table = parser.parse_with(&content, observer)?;
        Ok(table)
    }

    fn read_content(path: &Path) -> Result<String, Error> {
        let mut reader = BufferedReader::new(path)?;
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(content)
    }

    /// Writes Self into given file, in sourcetable format
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let fd = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(fd);
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }

    /// Returns true if this table does not describe anything
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty() && self.caster.is_none() && self.network.is_none()
    }

    /// Returns first stream published under given mount point
    pub fn stream(&self, mount_point: &str) -> Option<&StreamRecord> {
        self.streams.iter().find(|s| s.mount_point == mount_point)
    }

    /// Returns the stream nearest to given position.
    /// Streams with unknown coordinates are never selected.
    pub fn nearest_stream(&self, position: GeoPosition) -> Option<&StreamRecord> {
        nearest::nearest(&self.streams, position)
    }

    /// Returns the stream nearest to given position, with its distance in km
    pub fn nearest_stream_with_distance(
        &self,
        position: GeoPosition,
    ) -> Option<(&StreamRecord, f64)> {
        nearest::nearest_with_distance(&self.streams, position)
    }

    /// Returns all streams sorted by increasing distance to given position (in km).
    /// Streams with unknown coordinates come last.
    pub fn ranked_streams(&self, position: GeoPosition) -> Vec<(&StreamRecord, f64)> {
        nearest::rank(&self.streams, position)
    }

    /// Returns the places shared by more than one stream.
    /// Only meaningful once streams have been enriched, see [Self::with_places].
    pub fn duplicate_places(&self) -> Vec<DuplicatePlace> {
        duplicates::find_duplicate_places(&self.streams)
    }

    /// Returns a copy of Self where each stream carries the place
    /// returned by given [PlaceResolver].
    pub fn with_places<R: PlaceResolver>(&self, resolver: &mut R) -> Self {
        Self {
            streams: enrichment::enrich_streams(&self.streams, resolver),
            caster: self.caster.clone(),
            network: self.network.clone(),
        }
    }
}

impl std::fmt::Display for SourceTable {
    /// Formats Self as a sourcetable, closed by [END_OF_SOURCETABLE]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(caster) = &self.caster {
            writeln!(f, "{}", caster)?;
        }
        if let Some(network) = &self.network {
            writeln!(f, "{}", network)?;
        }
        for stream in self.streams.iter() {
            writeln!(f, "{}", stream)?;
        }
        writeln!(f, "{}", END_OF_SOURCETABLE)
    }
}
