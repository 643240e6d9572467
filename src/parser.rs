//! Sourcetable parser
use std::str::FromStr;

use crate::{
    caster::CasterRecord, error::ParsingError, fields::Fields, network::NetworkRecord,
    stream::StreamRecord, types::RecordType, SourceTable,
};

#[cfg(feature = "log")]
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimal number of fields (keyword included) a `STR` line
/// must have to be accepted by a strict [Parser]: from the keyword
/// up to the NMEA flag.
pub const MIN_STREAM_FIELDS: usize = 12;

/// Describes how a second `CAS` or `NET` record is handled.
/// A table holds at most one of each.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SingletonPolicy {
    /// Latest record overwrites the previous one
    #[default]
    LastWins,
    /// First record is kept, following ones are dropped
    FirstWins,
    /// Parsing fails
    Reject,
}

impl std::fmt::Display for SingletonPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::LastWins => write!(f, "last"),
            Self::FirstWins => write!(f, "first"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for SingletonPolicy {
    type Err = ParsingError;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        match content.trim().to_lowercase().as_str() {
            "last" | "last-wins" => Ok(Self::LastWins),
            "first" | "first-wins" => Ok(Self::FirstWins),
            "reject" | "error" => Ok(Self::Reject),
            _ => Err(ParsingError::SingletonPolicy(content.to_string())),
        }
    }
}

/// Non fatal events raised while parsing.
/// Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// `STR` line with too few fields was dropped
    RejectedStream {
        line: usize,
        fields: usize,
        expected: usize,
    },
    /// Another `CAS` record was encountered
    DuplicateCaster { line: usize, policy: SingletonPolicy },
    /// Another `NET` record was encountered
    DuplicateNetwork { line: usize, policy: SingletonPolicy },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::RejectedStream {
                line,
                fields,
                expected,
            } => write!(
                f,
                "line {}: stream rejected, {} fields (expecting at least {})",
                line, fields, expected
            ),
            Self::DuplicateCaster { line, policy } => {
                write!(f, "line {}: duplicate caster ({})", line, policy)
            },
            Self::DuplicateNetwork { line, policy } => {
                write!(f, "line {}: duplicate network ({})", line, policy)
            },
        }
    }
}

/// Sourcetable [Parser]. The default parser is strict:
/// `STR` lines need at least [MIN_STREAM_FIELDS] fields
/// and the last `CAS` / `NET` record wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parser {
    /// Minimal number of fields for a `STR` line to be accepted
    pub min_stream_fields: usize,
    /// Handling of repeated `CAS` and `NET` records
    pub singleton_policy: SingletonPolicy,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            min_stream_fields: MIN_STREAM_FIELDS,
            singleton_policy: SingletonPolicy::default(),
        }
    }
}

impl Parser {
    /// Builds a strict [Parser]
    pub fn new() -> Self {
        Self::default()
    }
    /// Builds a [Parser] accepting any `STR` line
    pub fn lenient() -> Self {
        Self::default().with_min_stream_fields(0)
    }
    /// Copies Self with a custom `STR` field count requirement
    pub fn with_min_stream_fields(&self, min_stream_fields: usize) -> Self {
        let mut s = *self;
        s.min_stream_fields = min_stream_fields;
        s
    }
    /// Copies Self with a custom [SingletonPolicy]
    pub fn with_singleton_policy(&self, policy: SingletonPolicy) -> Self {
        let mut s = *self;
        s.singleton_policy = policy;
        s
    }

    /// Parses given sourcetable content.
    /// This only fails on repeated `CAS` / `NET` records
    /// with [SingletonPolicy::Reject].
    pub fn parse(&self, content: &str) -> Result<SourceTable, ParsingError> {
        self.parse_with(content, |_| {})
    }

    /// Parses given sourcetable content, every [Diagnostic]
    /// is handed to `observer` in order of appearance.
    pub fn parse_with<F>(&self, content: &str, mut observer: F) -> Result<SourceTable, ParsingError>
    where
        F: FnMut(Diagnostic),
    {
        let mut table = SourceTable::default();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;

            let record_type = match RecordType::from_line(line) {
                Some(record_type) => record_type,
                None => {
                    #[cfg(feature = "log")]
                    if !line.trim().is_empty() {
                        debug!("line {}: not a record, ignored", line_number);
                    }
                    continue;
                },
            };

            let fields = Fields::split(line);

            match record_type {
                RecordType::Stream => {
                    if fields.len() < self.min_stream_fields {
                        let diagnostic = Diagnostic::RejectedStream {
                            line: line_number,
                            fields: fields.len(),
                            expected: self.min_stream_fields,
                        };
                        #[cfg(feature = "log")]
                        warn!("{}", diagnostic);
                        observer(diagnostic);
                        continue;
                    }
                    table.streams.push(StreamRecord::from_fields(&fields));
                },
                RecordType::Caster => {
                    let caster = CasterRecord::from_fields(&fields);
                    if table.caster.is_some() {
                        if self.singleton_policy == SingletonPolicy::Reject {
                            return Err(ParsingError::DuplicateCaster(line_number));
                        }
                        let diagnostic = Diagnostic::DuplicateCaster {
                            line: line_number,
                            policy: self.singleton_policy,
                        };
                        #[cfg(feature = "log")]
                        warn!("{}", diagnostic);
                        observer(diagnostic);
                    }
                    self.store(&mut table.caster, caster);
                },
                RecordType::Network => {
                    let network = NetworkRecord::from_fields(&fields);
                    if table.network.is_some() {
                        if self.singleton_policy == SingletonPolicy::Reject {
                            return Err(ParsingError::DuplicateNetwork(line_number));
                        }
                        let diagnostic = Diagnostic::DuplicateNetwork {
                            line: line_number,
                            policy: self.singleton_policy,
                        };
                        #[cfg(feature = "log")]
                        warn!("{}", diagnostic);
                        observer(diagnostic);
                    }
                    self.store(&mut table.network, network);
                },
            }
        }

        #[cfg(feature = "log")]
        debug!(
            "parsed {} stream(s), caster: {}, network: {}",
            table.streams.len(),
            table.caster.is_some(),
            table.network.is_some()
        );

        Ok(table)
    }

    /// Stores a singleton record according to our policy
    fn store<T>(&self, slot: &mut Option<T>, record: T) {
        match self.singleton_policy {
            SingletonPolicy::FirstWins if slot.is_some() => {},
            _ => *slot = Some(record),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn singleton_policy_parsing() {
        for (content, expected) in [
            ("last", SingletonPolicy::LastWins),
            ("first", SingletonPolicy::FirstWins),
            ("reject", SingletonPolicy::Reject),
            ("Last-Wins", SingletonPolicy::LastWins),
            ("error", SingletonPolicy::Reject),
        ] {
            assert_eq!(SingletonPolicy::from_str(content), Ok(expected));
        }
        assert!(SingletonPolicy::from_str("random").is_err());
        for policy in [
            SingletonPolicy::LastWins,
            SingletonPolicy::FirstWins,
            SingletonPolicy::Reject,
        ] {
            assert_eq!(SingletonPolicy::from_str(&policy.to_string()), Ok(policy));
        }
    }
    #[test]
    fn parser_builder() {
        let parser = Parser::default();
        assert_eq!(parser.min_stream_fields, MIN_STREAM_FIELDS);
        assert_eq!(parser.singleton_policy, SingletonPolicy::LastWins);
        assert_eq!(Parser::new(), parser);

        let parser = Parser::lenient().with_singleton_policy(SingletonPolicy::FirstWins);
        assert_eq!(parser.min_stream_fields, 0);
        assert_eq!(parser.singleton_policy, SingletonPolicy::FirstWins);
    }
    #[test]
    fn diagnostic_display() {
        let diagnostic = Diagnostic::RejectedStream {
            line: 3,
            fields: 3,
            expected: 12,
        };
        assert_eq!(
            diagnostic.to_string(),
            "line 3: stream rejected, 3 fields (expecting at least 12)"
        );
        let diagnostic = Diagnostic::DuplicateCaster {
            line: 7,
            policy: SingletonPolicy::FirstWins,
        };
        assert_eq!(diagnostic.to_string(), "line 7: duplicate caster (first)");
    }
}
