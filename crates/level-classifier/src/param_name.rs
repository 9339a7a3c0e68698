//! Compound parameter identifiers.
//!
//! A parameter is requested as a delimited list of positional fields:
//!
//! ```text
//! name:producer:geometry:level type:level:forecast type:forecast number
//! T-K:ECG:1001:2:850:3:12
//! ```
//!
//! Only the name is mandatory. Numeric fields are read on demand; an absent
//! field falls back to the caller's default or is an error.

use std::fmt;
use std::str::FromStr;

use export_common::{ExportError, ExportResult};
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;

const OP: &str = "parse_parameter_name";

/// Field positions within a compound identifier.
pub mod positions {
    pub const NAME: usize = 0;
    pub const PRODUCER: usize = 1;
    pub const GEOMETRY_ID: usize = 2;
    pub const LEVEL_TYPE_ID: usize = 3;
    pub const LEVEL: usize = 4;
    pub const FORECAST_TYPE: usize = 5;
    pub const FORECAST_NUMBER: usize = 6;
}

/// How non-numeric text in a numeric field is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericParsing {
    /// Leading integer of the text, or 0 when there is none
    #[default]
    Lenient,
    /// The whole field must be an integer
    Strict,
}

impl FromStr for NumericParsing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown numeric parsing mode: {other}")),
        }
    }
}

impl fmt::Display for NumericParsing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Leading integer of `text`: optional sign followed by digits.
///
/// Anything else yields 0. Values beyond the i32 range saturate.
fn leading_int(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Splits compound parameter identifiers into fields.
#[derive(Debug, Clone)]
pub struct ParameterNameParser {
    delimiter: char,
    numeric_parsing: NumericParsing,
}

impl Default for ParameterNameParser {
    fn default() -> Self {
        Self::new(':', NumericParsing::Lenient)
    }
}

impl ParameterNameParser {
    pub fn new(delimiter: char, numeric_parsing: NumericParsing) -> Self {
        Self {
            delimiter,
            numeric_parsing,
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.param_delimiter, config.numeric_parsing)
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn numeric_parsing(&self) -> NumericParsing {
        self.numeric_parsing
    }

    pub fn parse(&self, identifier: &str) -> ParameterName {
        ParameterName {
            identifier: identifier.to_string(),
            fields: identifier
                .split(self.delimiter)
                .map(|field| field.trim().to_string())
                .collect(),
            numeric_parsing: self.numeric_parsing,
        }
    }
}

/// A parsed compound parameter identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterName {
    identifier: String,
    fields: Vec<String>,
    numeric_parsing: NumericParsing,
}

impl ParameterName {
    /// Parse with the default delimiter and lenient numbers.
    pub fn parse(identifier: &str) -> Self {
        ParameterNameParser::default().parse(identifier)
    }

    /// The identifier as given.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `position`; empty fields count as absent.
    pub fn field(&self, position: usize) -> Option<&str> {
        self.fields
            .get(position)
            .map(String::as_str)
            .filter(|field| !field.is_empty())
    }

    pub fn name(&self) -> &str {
        self.field(positions::NAME).unwrap_or_default()
    }

    pub fn producer(&self) -> Option<&str> {
        self.field(positions::PRODUCER)
    }

    pub fn geometry_id(&self, default: Option<i32>) -> ExportResult<i32> {
        self.numeric(positions::GEOMETRY_ID, "geometry id", default)
    }

    pub fn level_type_id(&self, default: Option<i32>) -> ExportResult<i32> {
        self.numeric(positions::LEVEL_TYPE_ID, "level type id", default)
    }

    pub fn level(&self, default: Option<i32>) -> ExportResult<i32> {
        self.numeric(positions::LEVEL, "level", default)
    }

    pub fn forecast_type(&self, default: Option<i32>) -> ExportResult<i32> {
        self.numeric(positions::FORECAST_TYPE, "forecast type", default)
    }

    pub fn forecast_number(&self, default: Option<i32>) -> ExportResult<i32> {
        self.numeric(positions::FORECAST_NUMBER, "forecast number", default)
    }

    fn numeric(
        &self,
        position: usize,
        field: &'static str,
        default: Option<i32>,
    ) -> ExportResult<i32> {
        let Some(text) = self.field(position) else {
            return default
                .ok_or_else(|| ExportError::missing_field(OP, field, self.identifier.as_str()));
        };

        match self.numeric_parsing {
            NumericParsing::Lenient => Ok(leading_int(text)),
            NumericParsing::Strict => text.parse().map_err(|_| {
                ExportError::configuration(
                    OP,
                    self.identifier.as_str(),
                    format!("{field} is not an integer: '{text}'"),
                )
            }),
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("850"), 850);
        assert_eq!(leading_int("-12"), -12);
        assert_eq!(leading_int("+7"), 7);
        assert_eq!(leading_int("  42abc"), 42);
        assert_eq!(leading_int("85x0"), 85);
        assert_eq!(leading_int("abc"), 0);
        assert_eq!(leading_int("-"), 0);
        assert_eq!(leading_int("99999999999"), i32::MAX);
        assert_eq!(leading_int("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_full_identifier() {
        let param = ParameterName::parse("T-K:ECG:1001:2:850:3:12");

        assert_eq!(param.name(), "T-K");
        assert_eq!(param.producer(), Some("ECG"));
        assert_eq!(param.geometry_id(None).unwrap(), 1001);
        assert_eq!(param.level_type_id(None).unwrap(), 2);
        assert_eq!(param.level(None).unwrap(), 850);
        assert_eq!(param.forecast_type(None).unwrap(), 3);
        assert_eq!(param.forecast_number(Some(-1)).unwrap(), 12);
    }

    #[test]
    fn test_missing_fields() {
        let param = ParameterName::parse("T-K:ECG");

        assert_eq!(param.geometry_id(Some(-1)).unwrap(), -1);
        assert_eq!(param.level(Some(0)).unwrap(), 0);

        let err = param.level_type_id(None).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("level type id"));
        assert_eq!(err.value(), "T-K:ECG");
    }

    #[test]
    fn test_empty_field_is_absent() {
        let param = ParameterName::parse("T-K::::500");

        assert_eq!(param.producer(), None);
        assert_eq!(param.geometry_id(Some(7)).unwrap(), 7);
        assert_eq!(param.level(None).unwrap(), 500);
    }

    #[test]
    fn test_strict_parsing() {
        let parser = ParameterNameParser::new(':', NumericParsing::Strict);
        let param = parser.parse("T-K:ECG:abc:2:85x0");

        let err = param.geometry_id(Some(0)).unwrap_err();
        assert!(matches!(err, ExportError::Configuration { .. }));
        assert!(err.to_string().contains("geometry id"));
        assert_eq!(param.level_type_id(None).unwrap(), 2);
        assert!(param.level(None).is_err());
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = ParameterNameParser::new(';', NumericParsing::Lenient);
        let param = parser.parse("Temperature;HIRLAM;1096");
        assert_eq!(param.producer(), Some("HIRLAM"));
        assert_eq!(param.geometry_id(None).unwrap(), 1096);
    }

    #[test]
    fn test_numeric_parsing_from_str() {
        assert_eq!("Strict".parse::<NumericParsing>(), Ok(NumericParsing::Strict));
        assert_eq!(" lenient ".parse::<NumericParsing>(), Ok(NumericParsing::Lenient));
        assert!("fuzzy".parse::<NumericParsing>().is_err());
    }
}
