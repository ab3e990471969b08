use chrono::NaiveDate;

/// Price statistics for one card listing at a single point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub min_price: f64,
    pub max_price: f64,
    pub mean_price: f64,
    pub median_price: f64,
    pub quantity: u32,
}

/// One parsed snapshot entry: composite card key plus its statistics.
///
/// The key is `"<name> - <condition>"` and is unique within a snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotRecord {
    pub card_key: String,
    pub stats: PriceStats,
}

/// Comparison of one card between two snapshot dates.
#[derive(Debug, Clone)]
pub struct CardEntry {
    pub name: String,
    pub condition: String,
    pub date1: NaiveDate,
    pub date2: NaiveDate,
    pub date1_stats: PriceStats,
    pub date2_stats: PriceStats,
    pub min_diff: f64,
    pub max_diff: f64,
    pub mean_diff: f64,
    pub median_diff: f64,
    pub min_percent: f64,
    pub max_percent: f64,
    pub mean_percent: f64,
    pub median_percent: f64,
    pub quantity_diff: i64,
}

/// A single (date, value) price observation recovered from a history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub value: i64,
}

/// Change from the most recent history point to the point nearest to
/// `most recent date - window_days`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowDiff {
    pub window_days: i64,
    pub closest_date: NaiveDate,
    pub closest_index: usize,
    pub diff: i64,
    pub percent_diff: f64,
}

/// Fixed lookback windows, in days, with their report labels.
pub const LOOKBACK_WINDOWS: [(i64, &str); 9] = [
    (7, "1W"),
    (14, "2W"),
    (30, "1M"),
    (60, "2M"),
    (90, "3M"),
    (180, "6M"),
    (365, "1Y"),
    (730, "2Y"),
    (1460, "4Y"),
];

/// Returns the report label for a lookback window (e.g. 30 -> "1M").
pub fn window_label(days: i64) -> Option<&'static str> {
    LOOKBACK_WINDOWS
        .iter()
        .find(|(d, _)| *d == days)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_label_known_windows() {
        assert_eq!(window_label(7), Some("1W"));
        assert_eq!(window_label(365), Some("1Y"));
        assert_eq!(window_label(1460), Some("4Y"));
    }

    #[test]
    fn test_window_label_unknown_window() {
        assert_eq!(window_label(45), None);
    }
}
