//! Snapshot loading and two-date price comparison.
//!
//! A snapshot is one dated text file produced by the scraper, holding one
//! bordered price table per card plus free-text noise (blank lines,
//! "Missing Data for:" notices, "Sum of ..." aggregates). Comparison
//! intersects two snapshots on card key, keeping the first file's order.

use crate::error::{Result, TrackerError};
use crate::models::{CardEntry, PriceStats, SnapshotRecord};
use crate::table_text;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename prefix used by the scraper for the main binder list.
pub const DEFAULT_PREFIX: &str = "max_rarity_binder";

/// Read-only snapshot location config: root directory plus filename prefix.
///
/// Snapshot paths derive deterministically from the date:
/// `<root>/<YYYY>/<MM-Mon>/<DD>/<prefix>-<YYYY-MM-DD>.txt`.
pub struct SnapshotStore {
    base_path: PathBuf,
    prefix: String,
}

impl SnapshotStore {
    pub fn new<P: Into<PathBuf>>(base_path: P, prefix: &str) -> Self {
        Self {
            base_path: base_path.into(),
            prefix: prefix.to_string(),
        }
    }

    /// Resolve a `YYYY-MM-DD` date string to its snapshot path.
    pub fn resolve_path(&self, date: &str) -> Result<(NaiveDate, PathBuf)> {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| TrackerError::InvalidDate(date.to_string()))?;

        let filename = format!("{}-{}.txt", self.prefix, parsed.format("%Y-%m-%d"));
        let path = self
            .base_path
            .join(parsed.format("%Y").to_string())
            .join(parsed.format("%m-%b").to_string())
            .join(parsed.format("%d").to_string())
            .join(filename);

        Ok((parsed, path))
    }

    /// True if a snapshot file exists for the given date.
    pub fn snapshot_exists(&self, date: &str) -> bool {
        self.resolve_path(date)
            .map(|(_, path)| path.exists())
            .unwrap_or(false)
    }

    /// Parse one snapshot file into its ordered card records.
    ///
    /// A missing file is fatal; individual malformed entries inside the
    /// file are skipped, since scrape logs routinely contain partially
    /// corrupted entries.
    pub fn parse_snapshot(&self, path: &Path) -> Result<Vec<SnapshotRecord>> {
        if !path.exists() {
            return Err(TrackerError::SnapshotNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        Ok(parse_lines(&lines))
    }

    /// Compare card prices between two snapshot dates.
    ///
    /// Entries are emitted in the first snapshot's file order, only for
    /// card keys present in both snapshots.
    pub fn compare(&self, date1: &str, date2: &str) -> Result<Vec<CardEntry>> {
        let (d1, path1) = self.resolve_path(date1)?;
        let (d2, path2) = self.resolve_path(date2)?;

        let first = self.parse_snapshot(&path1)?;
        let second = self.parse_snapshot(&path2)?;

        let lookup: HashMap<&str, &PriceStats> = second
            .iter()
            .map(|record| (record.card_key.as_str(), &record.stats))
            .collect();

        let entries = first
            .iter()
            .filter_map(|record| {
                lookup
                    .get(record.card_key.as_str())
                    .map(|after| build_entry(&record.card_key, d1, d2, &record.stats, after))
            })
            .collect();

        Ok(entries)
    }
}

/// Extract all card records from snapshot lines, in file order.
pub fn parse_lines(lines: &[String]) -> Vec<SnapshotRecord> {
    let mut records = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        // Noise: blank lines, scraper notices, aggregate sums
        if line.is_empty() || line.starts_with("Missing Data") || line.starts_with("Sum of") {
            continue;
        }

        if !table_text::is_card_header(line) {
            continue;
        }

        let header = match table_text::parse_header(line) {
            Ok(header) => header,
            Err(e) => {
                log::debug!("Skipping unparseable header at line {}: {}", i + 1, e);
                continue;
            }
        };

        match table_text::find_price_row(lines, i) {
            Some([min, max, mean, median]) => records.push(SnapshotRecord {
                card_key: format!("{} - {}", header.name, header.condition),
                stats: PriceStats {
                    min_price: min,
                    max_price: max,
                    mean_price: mean,
                    median_price: median,
                    quantity: header.quantity,
                },
            }),
            None => log::warn!(
                "No price row found for '{}' near line {}",
                header.name,
                i + 1
            ),
        }
    }

    records
}

/// Split a card key into name and condition on the last `" - "`.
pub fn split_card_key(card_key: &str) -> (String, String) {
    match card_key.rsplit_once(" - ") {
        Some((name, condition)) => (name.to_string(), condition.to_string()),
        None => (card_key.to_string(), "Unknown".to_string()),
    }
}

fn percent_change(diff: f64, before: f64) -> f64 {
    // A zero baseline must never divide
    if before == 0.0 {
        0.0
    } else {
        diff / before * 100.0
    }
}

fn build_entry(
    card_key: &str,
    date1: NaiveDate,
    date2: NaiveDate,
    before: &PriceStats,
    after: &PriceStats,
) -> CardEntry {
    let (name, condition) = split_card_key(card_key);

    let min_diff = after.min_price - before.min_price;
    let max_diff = after.max_price - before.max_price;
    let mean_diff = after.mean_price - before.mean_price;
    let median_diff = after.median_price - before.median_price;

    CardEntry {
        name,
        condition,
        date1,
        date2,
        date1_stats: before.clone(),
        date2_stats: after.clone(),
        min_diff,
        max_diff,
        mean_diff,
        median_diff,
        min_percent: percent_change(min_diff, before.min_price),
        max_percent: percent_change(max_diff, before.max_price),
        mean_percent: percent_change(mean_diff, before.mean_price),
        median_percent: percent_change(median_diff, before.median_price),
        quantity_diff: after.quantity as i64 - before.quantity as i64,
    }
}
