//! Card price history extraction from append-only pricing logs.
//!
//! Each scrape appends one bordered table per list to the log, stamped with
//! a date line directly above the table's top border. The extractor finds
//! every row mentioning a card, walks backward to the table's date stamp,
//! and computes fixed-window diffs against the most recent point.

use crate::error::{Result, TrackerError};
use crate::models::{HistoryPoint, WindowDiff, LOOKBACK_WINDOWS};
use chrono::{Duration, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

/// Divider marking the top and bottom of each appended table block.
/// Every data row has exactly two of these above it.
const TABLE_BORDER: &str = "--------";

lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap();
    static ref DIGITS_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// Line indices of every occurrence of the raw card name.
///
/// Exact case-sensitive substring match; callers pass the name exactly as
/// stored in the log.
pub fn find_occurrences(card_name: &str, lines: &[String]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(card_name))
        .map(|(i, _)| i)
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum BorderScan {
    SeekingFirstBorder,
    SeekingSecondBorder,
}

/// Recover the date stamped above the table containing `line_index`.
///
/// Walks backward counting border rows; the stamp sits on the line
/// immediately above the second border found. Reaching start-of-file first
/// means the log is structurally incompatible with the extractor.
pub fn date_for_occurrence(line_index: usize, lines: &[String]) -> Result<NaiveDate> {
    let mut state = BorderScan::SeekingFirstBorder;
    let mut index = line_index;

    let top_border = loop {
        if index == 0 {
            return Err(TrackerError::MalformedHistory { line: line_index });
        }
        index -= 1;

        if lines[index].contains(TABLE_BORDER) {
            match state {
                BorderScan::SeekingFirstBorder => state = BorderScan::SeekingSecondBorder,
                BorderScan::SeekingSecondBorder => break index,
            }
        }
    };

    if top_border == 0 {
        // Nothing above the top border to carry a stamp
        return Err(TrackerError::MalformedHistory { line: line_index });
    }

    let stamp_line = top_border - 1;
    let stamp = DATE_RE
        .find(&lines[stamp_line])
        .ok_or(TrackerError::NoDateStamp { line: stamp_line })?;

    NaiveDate::parse_from_str(stamp.as_str(), "%Y-%m-%d")
        .map_err(|_| TrackerError::NoDateStamp { line: stamp_line })
}

/// Extract the price value from a history table row.
///
/// Takes the field after the second pipe and returns its first run of
/// digits. The literal `1st` is stripped before digit extraction: the
/// edition label carries no digits itself but can abut the price in some
/// historical formats.
pub fn value_from_row(line: &str) -> Result<i64> {
    let field = line
        .splitn(3, '|')
        .nth(2)
        .ok_or_else(|| TrackerError::UnparseableRow(line.to_string()))?;

    let cleaned = field.replace("1st", "");
    let digits = DIGITS_RE
        .find(&cleaned)
        .ok_or_else(|| TrackerError::UnparseableRow(line.to_string()))?;

    digits
        .as_str()
        .parse()
        .map_err(|_| TrackerError::UnparseableRow(line.to_string()))
}

/// Convert occurrence indices into ordered history points.
///
/// Values of 1 or less are treated as missing data and dropped. Order
/// follows the log, which is assumed chronological; no re-sorting.
pub fn to_points(indices: &[usize], lines: &[String]) -> Result<Vec<HistoryPoint>> {
    let mut points = Vec::new();

    for &index in indices {
        let value = value_from_row(&lines[index])?;
        let date = date_for_occurrence(index, lines)?;
        if value > 1 {
            points.push(HistoryPoint { date, value });
        }
    }

    Ok(points)
}

/// Find and convert every history point for a card in one pass.
pub fn points_for_card(card_name: &str, lines: &[String]) -> Result<Vec<HistoryPoint>> {
    let occurrences = find_occurrences(card_name, lines);
    let points = to_points(&occurrences, lines)?;

    if points.is_empty() {
        return Err(TrackerError::NoHistory(card_name.to_string()));
    }

    Ok(points)
}

/// Change from the latest point to the point nearest `latest - window_days`.
///
/// Linear scan over all points keeping the smallest absolute date distance;
/// on equal distance the earlier-indexed point wins. The percentage divides
/// by the historical value and is rounded to one decimal place; a zero
/// historical value yields 0.0.
pub fn nearest_window_diff(points: &[HistoryPoint], window_days: i64) -> Result<WindowDiff> {
    let last = points
        .last()
        .ok_or_else(|| TrackerError::NoHistory(String::new()))?;
    let target = last.date - Duration::days(window_days);

    let mut closest_index = 0;
    let mut closest_distance = (points[0].date - target).num_days().abs();

    for (index, point) in points.iter().enumerate() {
        let distance = (point.date - target).num_days().abs();
        // Strict less-than keeps the first-seen point on ties
        if distance < closest_distance {
            closest_distance = distance;
            closest_index = index;
        }
    }

    let closest = &points[closest_index];
    let diff = last.value - closest.value;
    let percent_diff = if closest.value == 0 {
        0.0
    } else {
        round_one_decimal(diff as f64 / closest.value as f64 * 100.0)
    };

    Ok(WindowDiff {
        window_days,
        closest_date: closest.date,
        closest_index,
        diff,
        percent_diff,
    })
}

/// One [`WindowDiff`] per fixed lookback window, in table order.
pub fn window_report(points: &[HistoryPoint]) -> Result<Vec<WindowDiff>> {
    LOOKBACK_WINDOWS
        .iter()
        .map(|(days, _)| nearest_window_diff(points, *days))
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
