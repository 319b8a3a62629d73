//! Raw-value coercion and display formatting.
//!
//! Raw scalars arrive as JSON values and are interpreted against the
//! column's declared [`DataKind`] before being rendered with its display
//! format string. Formats are the host's masks: `g` for general display,
//! `#,0`-style numeric masks, and `yyyy`/`MM`/`dd` date token masks.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use slicer_model::{ColumnMetadata, DataKind, TypedValue};

/// Display format applied when a column declares none.
pub const GENERAL_FORMAT: &str = "g";

/// Declared kind and display format for a tree level. Total: out-of-range
/// levels and undeclared columns fall back to text with the general format.
pub fn type_of(columns: &[ColumnMetadata], level: usize) -> (DataKind, &str) {
    let Some(column) = columns.get(level) else {
        return (DataKind::Text, GENERAL_FORMAT);
    };
    (
        column.kind.unwrap_or_default(),
        column.format.as_deref().unwrap_or(GENERAL_FORMAT),
    )
}

/// Interpret a raw scalar against its declared kind.
///
/// Date/time values are only parsed when `full` is requested; display paths
/// pass `full = false` and receive the raw value unchanged, since the
/// formatter can render it without a parsed date. Values the declared kind
/// cannot absorb fall through as raw rather than fault.
pub fn coerce(raw: &Value, kind: DataKind, full: bool) -> TypedValue {
    match kind {
        DataKind::DateTime if full => match parse_date(raw) {
            Some(date) => TypedValue::Date(date),
            None => TypedValue::Raw(raw.clone()),
        },
        DataKind::DateTime => TypedValue::Raw(raw.clone()),
        DataKind::Numeric => match as_number(raw) {
            Some(number) => TypedValue::Number(number),
            None => TypedValue::Raw(raw.clone()),
        },
        DataKind::Text => TypedValue::Text(text_of(raw)),
    }
}

/// Render a typed value with a display format mask.
///
/// Numeric masks may emit grouping commas; callers that use the result as an
/// identifier component strip them afterwards.
pub fn format_value(value: &TypedValue, format: &str) -> String {
    match value {
        TypedValue::Number(number) => format_number(*number, format),
        TypedValue::Date(date) => format_date(*date, format),
        TypedValue::Text(text) => text.clone(),
        TypedValue::Raw(raw) => format_raw(raw, format),
    }
}

/// A raw passthrough value still renders by its shape: numbers through the
/// numeric mask, parseable dates through the date mask, the rest generally.
fn format_raw(raw: &Value, format: &str) -> String {
    if let Some(number) = raw.as_f64() {
        return format_number(number, format);
    }
    if is_date_mask(format) {
        if let Some(date) = parse_date(raw) {
            return format_date(date, format);
        }
    }
    text_of(raw)
}

fn text_of(raw: &Value) -> String {
    match raw {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

fn as_number(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Parse a raw date value: RFC 3339, common ISO shapes, or epoch
/// milliseconds.
fn parse_date(raw: &Value) -> Option<NaiveDateTime> {
    match raw {
        Value::String(text) => {
            let text = text.trim();
            if let Ok(date) = DateTime::parse_from_rfc3339(text) {
                return Some(date.naive_utc());
            }
            if let Ok(date) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(date);
            }
            if let Ok(date) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
                return Some(date);
            }
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        }
        Value::Number(number) => {
            let millis = number.as_i64()?;
            DateTime::from_timestamp_millis(millis).map(|date| date.naive_utc())
        }
        _ => None,
    }
}

fn format_number(number: f64, format: &str) -> String {
    if !is_numeric_mask(format) {
        return trim_trailing_zeros(number);
    }
    let decimals = mask_decimals(format);
    let grouped = format.contains(',');
    let rendered = format!("{number:.decimals$}");
    if grouped {
        group_thousands(&rendered)
    } else {
        rendered
    }
}

fn is_numeric_mask(format: &str) -> bool {
    !is_date_mask(format) && format.chars().any(|ch| ch == '#' || ch == '0')
}

fn is_date_mask(format: &str) -> bool {
    ["yyyy", "yy", "MM", "dd", "HH", "hh", "mm", "ss"]
        .iter()
        .any(|token| format.contains(token))
}

/// Decimal places demanded by a numeric mask: placeholder count after the
/// last decimal point.
fn mask_decimals(format: &str) -> usize {
    match format.rsplit_once('.') {
        Some((_, fraction)) => fraction.chars().filter(|ch| *ch == '0' || *ch == '#').count(),
        None => 0,
    }
}

/// Insert grouping commas into the integer part of a rendered number.
fn group_thousands(rendered: &str) -> String {
    let (number, fraction) = match rendered.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rendered, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn trim_trailing_zeros(number: f64) -> String {
    let rendered = format!("{number}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

fn format_date(date: NaiveDateTime, format: &str) -> String {
    if !is_date_mask(format) {
        return date.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    date.format(&translate_date_mask(format)).to_string()
}

/// Translate host date tokens into a chrono format string. Unknown
/// characters pass through literally; `%` is escaped.
fn translate_date_mask(mask: &str) -> String {
    const TOKENS: [(&str, &str); 13] = [
        ("yyyy", "%Y"),
        ("yy", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("M", "%-m"),
        ("dd", "%d"),
        ("d", "%-d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("tt", "%p"),
    ];
    let mut translated = String::with_capacity(mask.len() * 2);
    let mut rest = mask;
    'outer: while !rest.is_empty() {
        for (token, replacement) in TOKENS {
            if let Some(remaining) = rest.strip_prefix(token) {
                translated.push_str(replacement);
                rest = remaining;
                continue 'outer;
            }
        }
        let Some(ch) = rest.chars().next() else {
            break;
        };
        if ch == '%' {
            translated.push_str("%%");
        } else {
            translated.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }
    translated
}
