//! Sourcetable record types
use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes all record types this library understands.
/// Other sourcetable entries are not part of our contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecordType {
    /// Correction stream, published under a mount point
    #[strum(serialize = "STR")]
    Stream,
    /// Caster description
    #[strum(serialize = "CAS")]
    Caster,
    /// Network description
    #[strum(serialize = "NET")]
    Network,
}

impl RecordType {
    /// Identifies the record type of a sourcetable line, from its
    /// keyword prefix (`STR;`, `CAS;`, `NET;`). Keyword must be
    /// terminated by a semicolon: `STR` alone is not a record.
    pub fn from_line(line: &str) -> Option<Self> {
        let (keyword, _) = line.split_once(';')?;
        Self::from_str(keyword).ok()
    }

    /// Same as [Self::from_line] but fails with a [ParsingError]
    pub(crate) fn expect(line: &str, expected: Self) -> Result<(), ParsingError> {
        match Self::from_line(line) {
            Some(found) if found == expected => Ok(()),
            Some(found) => Err(ParsingError::RecordTypeMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            }),
            None => Err(ParsingError::UnknownRecordType(
                line.split(';').next().unwrap_or_default().to_string(),
            )),
        }
    }
}
