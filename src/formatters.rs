//! Text report and CSV rendering for comparison and trend results.

use crate::error::Result;
use crate::models::{window_label, CardEntry, WindowDiff};
use serde::Serialize;

/// Direction indicator for a price change.
pub fn direction_arrow(value: f64) -> &'static str {
    if value > 0.0 {
        "↑"
    } else if value < 0.0 {
        "↓"
    } else {
        "→"
    }
}

/// Render the full comparison report as display text.
pub fn format_comparison_report(entries: &[CardEntry]) -> String {
    if entries.is_empty() {
        return "No comparison data to display\n".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!("{}\n", "=".repeat(100)));
    output.push_str("CARD PRICE COMPARISON REPORT\n");
    output.push_str(&format!(
        "Date 1: {} | Date 2: {}\n",
        entries[0].date1, entries[0].date2
    ));
    output.push_str(&format!("{}\n", "=".repeat(100)));

    for entry in entries {
        output.push_str(&format!("\n{}\n", "-".repeat(80)));
        output.push_str(&format!("Card: {}\n", entry.name));
        output.push_str(&format!("Condition: {}\n", entry.condition));
        output.push_str(&format!("{}\n", "-".repeat(80)));

        output.push_str(&format!(
            "{:<10} {:<10} {:<10} {:<10} {:<10} {:<10}\n",
            "Metric", "Date1", "Date2", "Diff", "%Change", "Direction"
        ));
        output.push_str(&format!("{}\n", "-".repeat(70)));

        let metrics = [
            (
                "Min",
                entry.date1_stats.min_price,
                entry.date2_stats.min_price,
                entry.min_diff,
                entry.min_percent,
            ),
            (
                "Max",
                entry.date1_stats.max_price,
                entry.date2_stats.max_price,
                entry.max_diff,
                entry.max_percent,
            ),
            (
                "Mean",
                entry.date1_stats.mean_price,
                entry.date2_stats.mean_price,
                entry.mean_diff,
                entry.mean_percent,
            ),
            (
                "Median",
                entry.date1_stats.median_price,
                entry.date2_stats.median_price,
                entry.median_diff,
                entry.median_percent,
            ),
        ];

        for (metric, before, after, diff, percent) in metrics {
            output.push_str(&format!(
                "{:<10} {:<10} {:<10} {:<10} {:<10} {}\n",
                metric,
                format!("${:.0}", before),
                format!("${:.0}", after),
                format!("${:.0}", diff),
                format!("{:.1}%", percent),
                direction_arrow(diff)
            ));
        }

        output.push_str(&format!(
            "\nQuantity: {} → {} (Diff: {:+})\n",
            entry.date1_stats.quantity, entry.date2_stats.quantity, entry.quantity_diff
        ));
    }

    output
}

/// One-line summary for a single lookback window, e.g.
/// `1W: +100 (+100.0%) ↑ - 2024-01-01`.
pub fn format_window_summary(diff: &WindowDiff) -> String {
    let label = window_label(diff.window_days)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}D", diff.window_days));

    let change = if diff.percent_diff > 0.0 {
        format!("+{} (+{:.1}%) ↑", diff.diff, diff.percent_diff)
    } else if diff.percent_diff < 0.0 {
        format!("{} ({:.1}%) ↓", diff.diff, diff.percent_diff)
    } else {
        format!("{} ({:.1}%)", diff.diff, diff.percent_diff)
    };

    format!("{}: {} - {}", label, change, diff.closest_date)
}

/// Render the per-window trend report for one card.
pub fn format_trend_report(card_name: &str, diffs: &[WindowDiff]) -> String {
    let mut output = format!("Price trend for {}\n", card_name);
    for diff in diffs {
        output.push_str(&format_window_summary(diff));
        output.push('\n');
    }
    output
}

/// CSV row layout consumed by external reporting.
#[derive(Debug, Serialize)]
struct ComparisonRow {
    card_name: String,
    condition: String,
    date1: String,
    date2: String,
    date1_min: f64,
    date1_max: f64,
    date1_mean: f64,
    date1_median: f64,
    date1_quantity: u32,
    date2_min: f64,
    date2_max: f64,
    date2_mean: f64,
    date2_median: f64,
    date2_quantity: u32,
    min_diff: f64,
    max_diff: f64,
    mean_diff: f64,
    median_diff: f64,
    min_percent: f64,
    max_percent: f64,
    mean_percent: f64,
    median_percent: f64,
    quantity_diff: i64,
}

impl From<&CardEntry> for ComparisonRow {
    fn from(entry: &CardEntry) -> Self {
        ComparisonRow {
            card_name: entry.name.clone(),
            condition: entry.condition.clone(),
            date1: entry.date1.to_string(),
            date2: entry.date2.to_string(),
            date1_min: entry.date1_stats.min_price,
            date1_max: entry.date1_stats.max_price,
            date1_mean: entry.date1_stats.mean_price,
            date1_median: entry.date1_stats.median_price,
            date1_quantity: entry.date1_stats.quantity,
            date2_min: entry.date2_stats.min_price,
            date2_max: entry.date2_stats.max_price,
            date2_mean: entry.date2_stats.mean_price,
            date2_median: entry.date2_stats.median_price,
            date2_quantity: entry.date2_stats.quantity,
            min_diff: entry.min_diff,
            max_diff: entry.max_diff,
            mean_diff: entry.mean_diff,
            median_diff: entry.median_diff,
            min_percent: entry.min_percent,
            max_percent: entry.max_percent,
            mean_percent: entry.mean_percent,
            median_percent: entry.median_percent,
            quantity_diff: entry.quantity_diff,
        }
    }
}

/// Render comparison entries as CSV text with the export column set.
pub fn comparison_to_csv(entries: &[CardEntry]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(vec![]);

    for entry in entries {
        wtr.serialize(ComparisonRow::from(entry))?;
    }

    let data = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}
