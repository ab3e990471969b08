//! Recognition and decoding of the two text micro-formats embedded in
//! scrape logs: card header lines and pipe-delimited price rows.
//!
//! Recognition (cheap marker checks) is separate from decoding (strict
//! pattern match). Callers treat decode failures as skippable noise, not
//! fatal errors.

use crate::error::{Result, TrackerError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "Card Name [rarity] - Condition <quantity>"
    static ref HEADER_RE: Regex =
        Regex::new(r"^(.*?)\s+\[.*?\]\s+-\s+(.*?)\s+<(\d+)>$").unwrap();
}

/// Decoded card header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHeader {
    pub name: String,
    pub condition: String,
    pub quantity: u32,
}

/// Cheap pre-check: a line is a candidate card header iff it carries all of
/// the header grammar's literal markers.
pub fn is_card_header(line: &str) -> bool {
    ['[', ']', '<', '>', '-'].iter().all(|m| line.contains(*m))
}

/// Decode a card header line into name, condition and quantity.
///
/// Surrounding whitespace is trimmed; the captured name and condition are
/// trimmed as well. A line that passed [`is_card_header`] can still fail
/// here (e.g. missing quantity angle brackets).
pub fn parse_header(line: &str) -> Result<CardHeader> {
    let caps = HEADER_RE
        .captures(line.trim())
        .ok_or_else(|| TrackerError::UnparseableHeader(line.to_string()))?;

    let quantity = caps[3]
        .parse()
        .map_err(|_| TrackerError::UnparseableHeader(line.to_string()))?;

    Ok(CardHeader {
        name: caps[1].trim().to_string(),
        condition: caps[2].trim().to_string(),
        quantity,
    })
}

/// A line is a candidate data row iff it is pipe-bordered, has at least four
/// pipes and one digit, and is not a table label or border row.
pub fn is_data_row(line: &str) -> bool {
    line.starts_with('|')
        && line.ends_with('|')
        && line.matches('|').count() >= 4
        && line.chars().any(|c| c.is_ascii_digit())
        && !["Min", "Max", "---"].iter().any(|w| line.contains(w))
}

/// Decode a data row into `[min, max, mean, median]`.
///
/// Exactly four numeric fields are required; a row with any other field
/// count or a non-numeric field fails rather than truncating.
pub fn parse_row(line: &str) -> Result<[f64; 4]> {
    let inner = line.trim().trim_matches('|');
    let fields: Vec<&str> = inner.split('|').map(str::trim).collect();

    if fields.len() != 4 {
        return Err(TrackerError::UnparseableRow(line.to_string()));
    }

    let mut values = [0.0; 4];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| TrackerError::UnparseableRow(line.to_string()))?;
    }

    Ok(values)
}

/// Scan up to 9 lines past a header for its price row.
///
/// The bounded lookahead tolerates divider lines between a header and its
/// table. A recognized row that fails numeric decode does not consume the
/// window; scanning continues. Returns `None` if the window is exhausted.
pub fn find_price_row(lines: &[String], header_index: usize) -> Option<[f64; 4]> {
    let end = (header_index + 10).min(lines.len());

    for raw in &lines[header_index + 1..end] {
        let candidate = raw.trim();
        if is_data_row(candidate) {
            if let Ok(values) = parse_row(candidate) {
                return Some(values);
            }
        }
    }

    None
}
