//! Sample records and loose numeric parsing
//!
//! A [`DataPoint`] is one sampling instant as delivered by a data-source
//! connector: an opaque timestamp plus an open map of raw values. Raw values
//! arrive as JSON numbers, numeric text, or empty/missing entries, so every
//! read goes through [`parse_loose_number`] and a [`ParseFailurePolicy`].

use crate::error::{ForecastError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One timestamped record of variable values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Opaque label; never used arithmetically
    #[serde(default, deserialize_with = "timestamp_from_any")]
    pub timestamp: String,
    /// Raw values keyed by variable name
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

impl DataPoint {
    /// Create an empty record for the given timestamp
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insert of a raw value
    pub fn with_value(mut self, variable: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(variable.into(), value.into());
        self
    }

    /// Raw value for a variable, if present
    pub fn get(&self, variable: &str) -> Option<&Value> {
        self.values.get(variable)
    }

    /// Best-effort interpretation of the timestamp label.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and
    /// plain dates. Display only; the algorithms index records by position.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

fn timestamp_from_any<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}

/// What to do with a value that does not parse as a number.
///
/// The strategies differ here: regression drops the sample, moving average
/// and persistence substitute zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailurePolicy {
    /// Missing, unparseable and non-finite values are excluded
    Drop,
    /// Missing and unparseable values become `0.0`; infinities pass through
    CoerceZero,
}

impl ParseFailurePolicy {
    /// Resolve a raw value under this policy. `None` means "exclude".
    pub fn resolve(&self, raw: Option<&Value>) -> Option<f64> {
        let parsed = raw.and_then(parse_loose_number);
        match self {
            ParseFailurePolicy::Drop => parsed.filter(|v| v.is_finite()),
            ParseFailurePolicy::CoerceZero => {
                Some(parsed.filter(|v| !v.is_nan()).unwrap_or(0.0))
            }
        }
    }
}

/// Interpret a raw value as a number.
///
/// JSON numbers pass through. Strings are parsed by their leading numeric
/// prefix, so `"12.5abc"` yields `12.5`. Everything else yields `None`.
pub fn parse_loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_prefix(s),
        _ => None,
    }
}

/// Parse the longest numeric prefix of `text`.
///
/// Grammar: optional leading whitespace, optional sign, then either
/// `Infinity` or digits with an optional fraction and optional exponent.
pub fn parse_numeric_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let digit_run = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_len = digit_run(pos);
    let int_part = &s[pos..pos + int_len];
    pos += int_len;

    let mut frac_part = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_len = digit_run(pos + 1);
        frac_part = &s[pos + 1..pos + 1 + frac_len];
        pos += 1 + frac_len;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        let exp_sign = match bytes.get(exp_pos) {
            Some(b'-') => {
                exp_pos += 1;
                "-"
            }
            Some(b'+') => {
                exp_pos += 1;
                ""
            }
            _ => "",
        };
        let exp_len = digit_run(exp_pos);
        if exp_len > 0 {
            exponent = format!("e{}{}", exp_sign, &s[exp_pos..exp_pos + exp_len]);
        }
    }

    let normalized = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part },
        exponent
    );
    normalized.parse::<f64>().ok()
}

/// Materializes record sequences from JSON or CSV exports
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Parse a JSON array of record objects
    pub fn from_json_str(json: &str) -> Result<Vec<DataPoint>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of record objects from a reader
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<DataPoint>> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a JSON array of record objects from a file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Vec<DataPoint>> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Parse CSV with a header row.
    ///
    /// The `timestamp` column (case-insensitive) becomes the timestamp, falling
    /// back to the first column. Every other cell is kept as raw text.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<DataPoint>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(ForecastError::DataError(
                "CSV input has no header row".to_string(),
            ));
        }

        let time_index = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case("timestamp"))
            .unwrap_or(0);

        let mut points = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let mut point = DataPoint::new(record.get(time_index).unwrap_or_default());
            for (index, (header, cell)) in headers.iter().zip(record.iter()).enumerate() {
                if index != time_index {
                    point
                        .values
                        .insert(header.to_string(), Value::String(cell.to_string()));
                }
            }
            points.push(point);
        }

        Ok(points)
    }

    /// Load CSV with a header row from a file
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<DataPoint>> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Load by file extension: `.csv` goes through the CSV reader, anything
    /// else is treated as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DataPoint>> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            Self::from_csv_file(path)
        } else {
            Self::from_json_file(path)
        }
    }
}
