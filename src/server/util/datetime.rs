//! Timestamp normalization for text-stored datetime columns.
//!
//! The database keeps every calendar timestamp in a TEXT column, and years of
//! writes from different tools left those columns holding a mix of layouts:
//! minute-precision forms, space- and `T`-separated forms, and fractional
//! seconds of varying width. This module is the single boundary through which
//! such text becomes a [`NaiveDateTime`] and back. `normalize` tries a fixed,
//! ordered list of layouts and returns the first success; `render` always
//! writes the one canonical layout, so data funneled through this module
//! converges over time.
//!
//! Both functions are pure and total over their inputs. No timezone is ever
//! inferred; values are naive wall-clock timestamps, exactly as written.

use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::server::error::timestamp::MalformedTimestamp;

/// Ordered layout attempts tried by [`normalize`]. First match wins.
///
/// The order is load-bearing: a minute-precision value must resolve at the
/// first attempt and never fall through to the `:00`-appending second one,
/// and a fractional value must be tried with its fraction intact before the
/// fraction-stripping fifth attempt discards precision.
const ATTEMPTS: [fn(&str) -> Option<NaiveDateTime>; 6] = [
    // 1. Minute precision, space separator.
    |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok(),
    // 2. Same layout promoted to second precision by appending ":00".
    |s| NaiveDateTime::parse_from_str(&format!("{s}:00"), "%Y-%m-%d %H:%M:%S").ok(),
    // 3. Space separator with a fractional suffix of one to seven digits,
    //    the high-precision form SQL Server datetime2 columns export.
    |s| {
        if !(1..=7).contains(&fraction_digits(s)?) {
            return None;
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").ok()
    },
    // 4. Second precision, T separator.
    |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok(),
    // 5. Any trailing fraction stripped, then second precision with a space.
    |s| NaiveDateTime::parse_from_str(strip_fraction(s), "%Y-%m-%d %H:%M:%S").ok(),
    // 6. chrono's own ISO-8601 parse, T separator, up to nine fraction
    //    digits. This is the attempt that reads `render` output back.
    |s| NaiveDateTime::from_str(s).ok(),
];

/// Parses mixed-layout timestamp text into a canonical [`NaiveDateTime`].
///
/// Trims the input, then tries each layout in [`ATTEMPTS`] in order and
/// returns the first success. Absent input and input that is blank after
/// trimming are "no value", not errors, mirroring a SQL NULL in the backing
/// column.
///
/// Calendar fields are validated, never wrapped: a month of 13 or an hour of
/// 99 fails every attempt. Sub-second precision is preserved exactly as
/// parsed.
///
/// # Arguments
/// - `raw` - The stored or submitted timestamp text, if any
///
/// # Returns
/// - `Ok(Some(NaiveDateTime))` - One of the layouts matched
/// - `Ok(None)` - Input was absent or blank
/// - `Err(MalformedTimestamp)` - Every layout failed; the error carries the
///   untrimmed input text and the number of attempts made
pub fn normalize(raw: Option<&str>) -> Result<Option<NaiveDateTime>, MalformedTimestamp> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    for attempt in ATTEMPTS {
        if let Some(ts) = attempt(trimmed) {
            return Ok(Some(ts));
        }
    }

    Err(MalformedTimestamp {
        raw: raw.to_string(),
        attempts: ATTEMPTS.len(),
    })
}

/// Renders a canonical timestamp back into text for storage or transport.
///
/// Always uses the single layout `%Y-%m-%dT%H:%M:%S%.f`: `T`-separated,
/// second precision, with the fractional part omitted when it is zero and
/// printed at three, six, or nine digits otherwise. Every rendered value
/// normalizes back to the same timestamp.
///
/// # Arguments
/// - `ts` - The timestamp to render, if any
///
/// # Returns
/// - `Some(String)` - Canonical text for the given timestamp
/// - `None` - Input was `None`; the column stays NULL
pub fn render(ts: Option<NaiveDateTime>) -> Option<String> {
    ts.map(render_value)
}

/// Renders a timestamp that is known to be present.
///
/// Same canonical layout as [`render`], for NOT NULL columns and response
/// fields where wrapping in `Option` would only add an impossible branch.
pub fn render_value(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Returns the digit count of a trailing `.digits` fraction, if the text ends
/// in one.
fn fraction_digits(s: &str) -> Option<usize> {
    let (_, frac) = s.rsplit_once('.')?;
    if !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()) {
        Some(frac.len())
    } else {
        None
    }
}

/// Strips a trailing `.digits` fraction, returning the text unchanged when no
/// such suffix exists.
fn strip_fraction(s: &str) -> &str {
    match s.rsplit_once('.') {
        Some((head, frac)) if !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()) => head,
        _ => s,
    }
}
