//! Lexical adapters: pure conversions between raw XML text and typed values.
//!
//! Each adapter is a stateless unit struct. [`AdapterKind`] names them so
//! declarative record tables can refer to an adapter without generics.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::diagnostics::DiagnosticKind;

/// Result of a lexical conversion. Failures are reportable diagnostics.
pub type AdaptResult<T> = std::result::Result<T, DiagnosticKind>;

/// A parse/format function pair between raw text and `Self::Value`.
///
/// `format(parse(s))` is a fixed point of the canonical lexical space:
/// parsing it again yields the same value.
pub trait LexicalAdapter {
    type Value;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Convert raw element or attribute text into a value.
    fn parse(&self, raw: &str) -> AdaptResult<Self::Value>;

    /// Convert a value into its canonical lexical form.
    fn format(&self, value: &Self::Value) -> AdaptResult<String>;
}

fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Replace runs of XML whitespace by a single space and trim both ends.
///
/// # Examples
/// ```
/// use descriptor_codec::adapter::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  com.acme\n\t  Bean "), "com.acme Bean");
/// ```
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split(is_xml_whitespace)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim leading and trailing XML whitespace.
#[must_use]
pub fn trim_whitespace(raw: &str) -> &str {
    raw.trim_matches(is_xml_whitespace)
}

/// `xsd:token`-style collapsing, used for most descriptor strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapsedStringAdapter;

impl LexicalAdapter for CollapsedStringAdapter {
    type Value = String;

    fn name(&self) -> &'static str {
        "CollapsedStringAdapter"
    }

    fn parse(&self, raw: &str) -> AdaptResult<String> {
        Ok(collapse_whitespace(raw))
    }

    fn format(&self, value: &String) -> AdaptResult<String> {
        Ok(value.clone())
    }
}

/// Trims surrounding whitespace but keeps inner spacing (url patterns).
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimStringAdapter;

impl LexicalAdapter for TrimStringAdapter {
    type Value = String;

    fn name(&self) -> &'static str {
        "TrimStringAdapter"
    }

    fn parse(&self, raw: &str) -> AdaptResult<String> {
        Ok(trim_whitespace(raw).to_string())
    }

    fn format(&self, value: &String) -> AdaptResult<String> {
        Ok(value.clone())
    }
}

/// XML Schema boolean: `true`, `false`, `1`, `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanAdapter;

impl LexicalAdapter for BooleanAdapter {
    type Value = bool;

    fn name(&self) -> &'static str {
        "BooleanAdapter"
    }

    fn parse(&self, raw: &str) -> AdaptResult<bool> {
        match collapse_whitespace(raw).as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(DiagnosticKind::adapter(
                self.name(),
                raw,
                "expected true, false, 1 or 0",
            )),
        }
    }

    fn format(&self, value: &bool) -> AdaptResult<String> {
        Ok(if *value { "true" } else { "false" }.to_string())
    }
}

/// Signed integer with surrounding whitespace allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerAdapter;

impl LexicalAdapter for IntegerAdapter {
    type Value = i64;

    fn name(&self) -> &'static str {
        "IntegerAdapter"
    }

    fn parse(&self, raw: &str) -> AdaptResult<i64> {
        trim_whitespace(raw)
            .parse::<i64>()
            .map_err(|e| DiagnosticKind::adapter(self.name(), raw, e.to_string()))
    }

    fn format(&self, value: &i64) -> AdaptResult<String> {
        Ok(value.to_string())
    }
}

/// Servlet `load-on-startup`: an integer, where `true` means 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOnStartupAdapter;

impl LexicalAdapter for LoadOnStartupAdapter {
    type Value = i64;

    fn name(&self) -> &'static str {
        "LoadOnStartupAdapter"
    }

    fn parse(&self, raw: &str) -> AdaptResult<i64> {
        let trimmed = trim_whitespace(raw);
        if trimmed.eq_ignore_ascii_case("true") {
            return Ok(1);
        }
        trimmed
            .parse::<i64>()
            .map_err(|e| DiagnosticKind::adapter(self.name(), raw, e.to_string()))
    }

    fn format(&self, value: &i64) -> AdaptResult<String> {
        Ok(value.to_string())
    }
}

/// One `<amount><unit>` term of a duration.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DURATION_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*([A-Za-z]+)").expect("valid regex"));

/// What may remain between duration terms.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DURATION_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[\s,]|\band\b)*$").expect("valid regex"));

const NANOS_PER_UNIT: &[(u128, &str)] = &[
    (86_400_000_000_000, "day"),
    (3_600_000_000_000, "hour"),
    (60_000_000_000, "minute"),
    (1_000_000_000, "second"),
    (1_000_000, "millisecond"),
    (1_000, "microsecond"),
    (1, "nanosecond"),
];

fn unit_nanos(unit: &str) -> Option<u64> {
    let nanos = match unit.to_ascii_lowercase().as_str() {
        "ns" | "nanosecond" | "nanoseconds" => 1,
        "us" | "microsecond" | "microseconds" => 1_000,
        "ms" | "millisecond" | "milliseconds" => 1_000_000,
        "s" | "sec" | "secs" | "second" | "seconds" => 1_000_000_000,
        "m" | "min" | "mins" | "minute" | "minutes" => 60_000_000_000,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600_000_000_000,
        "d" | "day" | "days" => 86_400_000_000_000,
        _ => return None,
    };
    Some(nanos)
}

/// Human-readable durations such as `1 hour and 30 minutes` or `500ms`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationAdapter;

impl LexicalAdapter for DurationAdapter {
    type Value = Duration;

    fn name(&self) -> &'static str {
        "DurationAdapter"
    }

    fn parse(&self, raw: &str) -> AdaptResult<Duration> {
        let fail = |reason: &str| DiagnosticKind::adapter(self.name(), raw, reason);

        if trim_whitespace(raw).is_empty() {
            return Err(fail("empty duration"));
        }
        let leftover = DURATION_TERM.replace_all(raw, "");
        if !DURATION_SEPARATORS.is_match(&leftover) {
            return Err(fail("expected terms like '30 seconds' or '1 hour and 5 minutes'"));
        }
        if !DURATION_TERM.is_match(raw) {
            return Err(fail("no duration terms"));
        }

        let mut total = Duration::ZERO;
        for caps in DURATION_TERM.captures_iter(raw) {
            let amount: u64 = caps[1].parse().map_err(|_| fail("amount out of range"))?;
            let unit = unit_nanos(&caps[2])
                .ok_or_else(|| fail(format!("unknown time unit '{}'", &caps[2]).as_str()))?;
            let nanos = amount
                .checked_mul(unit)
                .ok_or_else(|| fail("duration out of range"))?;
            total = total
                .checked_add(Duration::from_nanos(nanos))
                .ok_or_else(|| fail("duration out of range"))?;
        }
        Ok(total)
    }

    fn format(&self, value: &Duration) -> AdaptResult<String> {
        Ok(format_duration(*value))
    }
}

/// Canonical form: the largest unit that divides the value exactly.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use descriptor_codec::adapter::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(90)), "90 seconds");
/// assert_eq!(format_duration(Duration::from_secs(120)), "2 minutes");
/// assert_eq!(format_duration(Duration::from_secs(86_400)), "1 day");
/// ```
#[must_use]
pub fn format_duration(value: Duration) -> String {
    let nanos = value.as_nanos();
    if nanos == 0 {
        return "0 seconds".to_string();
    }
    for &(unit, name) in NANOS_PER_UNIT {
        if nanos % unit == 0 {
            let amount = nanos / unit;
            let plural = if amount == 1 { "" } else { "s" };
            return format!("{amount} {name}{plural}");
        }
    }
    format!("{nanos} nanoseconds")
}

/// A dynamically typed adapted value, produced by [`AdapterKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    #[serde(serialize_with = "serialize_duration")]
    Duration(Duration),
    /// Canonical token of an enumeration.
    Token(String),
}

fn serialize_duration<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_duration(*value))
}

impl Scalar {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Duration(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Token(t) => Some(t),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Duration(_) => "duration",
            Self::Token(_) => "token",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Token(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Duration(d) => write!(f, "{}", format_duration(*d)),
        }
    }
}

/// Names an adapter for declarative tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    CollapsedString,
    TrimString,
    Boolean,
    Integer,
    LoadOnStartup,
    Duration,
}

impl AdapterKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CollapsedString => CollapsedStringAdapter.name(),
            Self::TrimString => TrimStringAdapter.name(),
            Self::Boolean => BooleanAdapter.name(),
            Self::Integer => IntegerAdapter.name(),
            Self::LoadOnStartup => LoadOnStartupAdapter.name(),
            Self::Duration => DurationAdapter.name(),
        }
    }

    /// Parse raw text with the named adapter.
    pub fn parse(&self, raw: &str) -> AdaptResult<Scalar> {
        match self {
            Self::CollapsedString => CollapsedStringAdapter.parse(raw).map(Scalar::Text),
            Self::TrimString => TrimStringAdapter.parse(raw).map(Scalar::Text),
            Self::Boolean => BooleanAdapter.parse(raw).map(Scalar::Bool),
            Self::Integer => IntegerAdapter.parse(raw).map(Scalar::Int),
            Self::LoadOnStartup => LoadOnStartupAdapter.parse(raw).map(Scalar::Int),
            Self::Duration => DurationAdapter.parse(raw).map(Scalar::Duration),
        }
    }

    /// Format a scalar with the named adapter.
    ///
    /// A scalar of the wrong shape (e.g. text for a boolean adapter) is
    /// reported as an adapter error.
    pub fn format(&self, value: &Scalar) -> AdaptResult<String> {
        let mismatch = || {
            DiagnosticKind::adapter(
                self.name(),
                &value.to_string(),
                format!("cannot format a {} value", value.type_name()),
            )
        };
        match (self, value) {
            (Self::CollapsedString, Scalar::Text(s)) => CollapsedStringAdapter.format(s),
            (Self::TrimString, Scalar::Text(s)) => TrimStringAdapter.format(s),
            (Self::Boolean, Scalar::Bool(b)) => BooleanAdapter.format(b),
            (Self::Integer, Scalar::Int(i)) => IntegerAdapter.format(i),
            (Self::LoadOnStartup, Scalar::Int(i)) => LoadOnStartupAdapter.format(i),
            (Self::Duration, Scalar::Duration(d)) => DurationAdapter.format(d),
            _ => Err(mismatch()),
        }
    }
}
