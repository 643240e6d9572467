//! Positional field access & lenient numeric coercion.
//!
//! Sourcetable fields are free text. Numbers are interpreted
//! from their leading numeric content; anything that does not
//! start like a number becomes a sentinel ([f64::NAN] or [None]).
use std::str::FromStr;

/// Literal marking a "fees applied" field
pub(crate) const FEES_MARKER: &str = "Y";

/// Semicolon separated fields of a single sourcetable line.
/// Index 0 is the record keyword.
#[derive(Debug, Clone)]
pub(crate) struct Fields<'a> {
    items: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Splits given line on every semicolon
    pub fn split(line: &'a str) -> Self {
        Self {
            items: line.split(';').collect(),
        }
    }
    /// Number of fields, keyword included
    pub fn len(&self) -> usize {
        self.items.len()
    }
    /// Field content, empty when out of range
    pub fn text(&self, index: usize) -> String {
        self.items
            .get(index)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
    /// Integer field, see [parse_int]
    pub fn int<T: FromStr>(&self, index: usize) -> Option<T> {
        parse_int(self.items.get(index)?)
    }
    /// Floating point field, see [parse_float]
    pub fn float(&self, index: usize) -> f64 {
        self.items
            .get(index)
            .map(|s| parse_float(s))
            .unwrap_or(f64::NAN)
    }
    /// Boolean field: true only for the exact [FEES_MARKER]
    pub fn flag(&self, index: usize) -> bool {
        self.items.get(index) == Some(&FEES_MARKER)
    }
}

/// Parses the leading base-10 integer of given content:
/// leading whitespaces are skipped, an optional sign is accepted
/// and parsing stops at the first non digit.
/// Returns None when no digit is found, or the value does not fit in T.
pub(crate) fn parse_int<T: FromStr>(content: &str) -> Option<T> {
    let content = content.trim_start();
    let sign = match content.chars().next() {
        Some('+') | Some('-') => 1,
        _ => 0,
    };
    let digits = content[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(content.len() - sign);
    if digits == 0 {
        return None;
    }
    T::from_str(&content[..sign + digits]).ok()
}

/// Parses the longest leading decimal literal of given content
/// (sign, integer part, fractional part, exponent), or `Infinity`.
/// Returns [f64::NAN] when content does not start like a number.
pub(crate) fn parse_float(content: &str) -> f64 {
    let content = content.trim_start();
    let bytes = content.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if content[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer = count_digits(&bytes[end..]);
    end += integer;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = count_digits(&bytes[end + 1..]);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }

    if integer + fraction == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if digits > 0 {
            end = exp + digits;
        }
    }

    f64::from_str(&content[..end]).unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Writes an optional integer field, empty when unknown
pub(crate) fn fmt_int<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// Writes a floating point field, empty when unknown
pub(crate) fn fmt_float(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

/// Writes a boolean field
pub(crate) fn fmt_flag(value: bool) -> &'static str {
    if value {
        FEES_MARKER
    } else {
        "N"
    }
}

/// Serdes of floating point fields: the NaN sentinel
/// is exposed as `null`, and `null` is read back as NaN.
#[cfg(feature = "serde")]
pub(crate) mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.unwrap_or(f64::NAN))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn leading_integer() {
        for (content, expected) in [
            ("2101", Some(2101)),
            ("  42", Some(42)),
            ("-3", Some(-3)),
            ("+7", Some(7)),
            ("9600bps", Some(9600)),
            ("12.5", Some(12)),
            ("", None),
            ("abc", None),
            ("-", None),
            ("- 3", None),
            (" ", None),
        ] {
            assert_eq!(parse_int::<i32>(content), expected, "failed for \"{}\"", content);
        }
    }
    #[test]
    fn leading_integer_overflow() {
        assert_eq!(parse_int::<u16>("70000"), None);
        assert_eq!(parse_int::<u16>("-1"), None);
        assert_eq!(parse_int::<u32>("4294967295"), Some(u32::MAX));
        assert_eq!(parse_int::<i64>("5000000000"), Some(5_000_000_000));
    }
    #[test]
    fn leading_float() {
        for (content, expected) in [
            ("52.40", 52.4),
            ("16.93", 16.93),
            ("-33.5", -33.5),
            ("+1.5", 1.5),
            ("  7", 7.0),
            ("5.", 5.0),
            (".5", 0.5),
            ("1e3", 1000.0),
            ("1.5E-2", 0.015),
            ("2e", 2.0),
            ("2e+", 2.0),
            ("12.5N", 12.5),
            ("1.2.3", 1.2),
        ] {
            let parsed = parse_float(content);
            assert!(
                (parsed - expected).abs() < 1.0E-12,
                "failed for \"{}\": got {}",
                content,
                parsed
            );
        }
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }
    #[test]
    fn leading_float_sentinel() {
        for content in ["", " ", "abc", ".", "-", "+.", "e5", "N52"] {
            assert!(parse_float(content).is_nan(), "failed for \"{}\"", content);
        }
    }
    #[test]
    fn positional_access() {
        let fields = Fields::split("CAS;host.example;2101;;Y");
        assert_eq!(fields.len(), 5);
        assert_eq!(fields.text(1), "host.example");
        assert_eq!(fields.int::<u16>(2), Some(2101));
        assert_eq!(fields.text(3), "");
        assert!(fields.flag(4));
        assert_eq!(fields.text(10), "");
        assert_eq!(fields.int::<u16>(10), None);
        assert!(fields.float(10).is_nan());
        assert!(!fields.flag(10));
    }
    #[test]
    fn fees_marker() {
        for (content, expected) in [("Y", true), ("N", false), ("", false), ("y", false), ("Y ", false), ("YES", false)] {
            let line = format!("NET;{}", content);
            assert_eq!(Fields::split(&line).flag(1), expected, "failed for \"{}\"", content);
        }
    }
}
