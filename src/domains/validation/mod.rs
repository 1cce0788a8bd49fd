//! Shared input validation for all resource domains.
//!
//! Query parameters arrive as optional strings and bodies as loosely typed
//! JSON, so every domain needs the same small set of coercions: deciding
//! whether a value counts as "provided", parsing integers the lenient way
//! clients expect, and parsing timestamps. They live here so the wording
//! and semantics stay identical across routes.

mod error;

pub use error::ValidationError;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde_json::{Map, Value};

/// Whether a JSON value counts as provided.
///
/// Missing, `null`, `false`, `0` and `""` are all treated as absent.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Return the query parameter only if it is non-empty.
pub fn present_param(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Borrow a value as a JSON object.
///
/// Arrays are rejected even though they are "objects" in some clients'
/// type systems.
pub fn as_object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.and_then(Value::as_object)
}

/// Parse the leading integer of a string.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit, and trailing input is ignored (`"30years"` is 30). Returns
/// `None` when no digit is found or the value overflows `i64`.
pub fn parse_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let sign_len = usize::from(matches!(trimmed.as_bytes().first(), Some(b'-' | b'+')));

    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    trimmed[..sign_len + digits_len].parse().ok()
}

/// Parse a client-supplied timestamp.
///
/// Strings may be RFC 3339, ISO date-times with or without seconds (a `T` or
/// a space between date and time, `Z` or a `+HH:MM` offset, UTC when the
/// offset is missing), bare `YYYY-MM-DD`, `YYYY-MM` or `YYYY` dates, or
/// RFC 2822. Numbers are milliseconds since the Unix epoch.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_string(s),
        Value::Number(n) => {
            let millis = n.as_f64().filter(|f| f.is_finite())?;
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        _ => None,
    }
}

const DATE_TIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn parse_date_string(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    let (local, offset) = split_offset(input);
    for pattern in DATE_TIME_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(local, pattern) {
            return match offset {
                Some(offset) => offset
                    .from_local_datetime(&naive)
                    .single()
                    .map(|dt| dt.with_timezone(&Utc)),
                None => Some(naive.and_utc()),
            };
        }
    }

    if let Some(date) = parse_calendar_date(input) {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    DateTime::parse_from_rfc2822(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Split a trailing `Z`, `+HH:MM` or `+HHMM` offset off a date-time.
fn split_offset(input: &str) -> (&str, Option<FixedOffset>) {
    if let Some(local) = input.strip_suffix(['Z', 'z']) {
        return (local, FixedOffset::east_opt(0));
    }

    for len in [6, 5] {
        let Some(split) = input.len().checked_sub(len) else {
            continue;
        };
        let (Some(local), Some(suffix)) = (input.get(..split), input.get(split..)) else {
            continue;
        };
        if let Some(offset) = parse_offset(suffix) {
            return (local, Some(offset));
        }
    }

    (input, None)
}

fn parse_offset(suffix: &str) -> Option<FixedOffset> {
    let sign = match suffix.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let rest = &suffix[1..];
    if !rest.is_ascii() {
        return None;
    }
    let (hours, minutes) = match rest.len() {
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        4 => (&rest[..2], &rest[2..]),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`; missing parts default to the first.
fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    let is_digits = |part: &str, len: usize| {
        part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = input.split('-');
    let year = parts.next().filter(|y| is_digits(*y, 4))?.parse().ok()?;
    let month = match parts.next() {
        None => 1,
        Some(m) if is_digits(m, 2) => m.parse().ok()?,
        Some(_) => return None,
    };
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Format an instant as ISO-8601 UTC with millisecond precision.
pub fn to_iso_string(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
