//! `NET` records: network description
use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::{
    error::ParsingError,
    fields::{fmt_flag, Fields},
    types::RecordType,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Authentication scheme, as published in `authentication` fields
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Authentication {
    /// Free access
    #[strum(serialize = "N")]
    Open,
    /// HTTP basic authentication
    #[strum(serialize = "B")]
    Basic,
    /// HTTP digest authentication
    #[strum(serialize = "D")]
    Digest,
}

/// Network description (`NET` record)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct NetworkRecord {
    /// Network identifier
    pub identifier: String,
    /// Institution or agency operating the network
    pub operator: String,
    /// Authentication scheme, see [Self::authentication_scheme]
    pub authentication: String,
    /// True when access to this network is charged
    pub has_fees_applied: bool,
    /// Network information web page
    pub website_url: String,
    /// Stream information web page
    pub stream_url: String,
    /// Registration web page or mail address
    pub registration_url: String,
    /// Free text
    pub misc_info: String,
}

impl NetworkRecord {
    pub(crate) fn from_fields(fields: &Fields) -> Self {
        Self {
            identifier: fields.text(1),
            operator: fields.text(2),
            authentication: fields.text(3),
            has_fees_applied: fields.flag(4),
            website_url: fields.text(5),
            stream_url: fields.text(6),
            registration_url: fields.text(7),
            misc_info: fields.text(8),
        }
    }
    /// Interprets the authentication field
    pub fn authentication_scheme(&self) -> Option<Authentication> {
        Authentication::from_str(&self.authentication).ok()
    }
}

impl FromStr for NetworkRecord {
    type Err = ParsingError;
    /// Parses a single `NET` line, whatever its field count
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        RecordType::expect(line, RecordType::Network)?;
        Ok(Self::from_fields(&Fields::split(line)))
    }
}

impl std::fmt::Display for NetworkRecord {
    /// Formats Self as a `NET` sourcetable line
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{};{};{};{};{};{};{};{};{}",
            RecordType::Network,
            self.identifier,
            self.operator,
            self.authentication,
            fmt_flag(self.has_fees_applied),
            self.website_url,
            self.stream_url,
            self.registration_url,
            self.misc_info,
        )
    }
}
