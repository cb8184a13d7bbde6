use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Parse an encounter `date` string into a calendar date.
///
/// Stored values are nominally ISO-8601 dates (`"2025-12-04"`), but older
/// records carry full date-times. Accepted, in order:
///
/// * `%Y-%m-%d`
/// * RFC 3339 date-times (a trailing `Z` is normalised to `+00:00`)
/// * `%Y-%m-%dT%H:%M:%S` / `%Y-%m-%d %H:%M:%S`, with optional fractions
///
/// A date-time is reduced to the calendar date as written; no timezone
/// conversion is applied, so grouping matches what the record says.
///
/// Returns `None` for empty or unparsable input — bad dates are a
/// data-quality issue, not a failure.
pub fn parse_encounter_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    // Replace trailing 'Z' with '+00:00' for RFC 3339 compatibility.
    let normalised = if let Some(stripped) = trimmed.strip_suffix('Z') {
        format!("{}+00:00", stripped)
    } else {
        trimmed.to_string()
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalised) {
        return Some(dt.date_naive());
    }

    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    debug!("could not parse encounter date \"{}\"", raw);
    None
}

/// Format the `YYYY-MM` month key for a date.
///
/// Lexicographic order of these keys equals chronological order.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
