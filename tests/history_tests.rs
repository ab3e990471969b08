use chrono::NaiveDate;
use price_tracker::price_history::{
    date_for_occurrence, find_occurrences, nearest_window_diff, points_for_card, to_points,
    window_report,
};
use price_tracker::{format_trend_report, format_window_summary, read_lines, TrackerError};
use std::io::Write;
use tempfile::NamedTempFile;

// Test fixtures - sorted pricing log blocks as the scraper appends them

fn table_block(list_name: &str, stamp: &str, rows: &[(&str, i64)]) -> String {
    let mut block = String::new();
    block.push_str(&format!("{} - {}\n", list_name, stamp));
    block.push_str("+---------------------------+-------+\n");
    block.push_str("|            Card           | Price |\n");
    block.push_str("+---------------------------+-------+\n");
    for (card, price) in rows {
        block.push_str(&format!("| {} | {} |\n", card, price));
    }
    block.push_str("+---------------------------+-------+\n");
    block
}

fn sample_log() -> Vec<String> {
    let mut content = String::new();
    content.push_str(&table_block(
        "max rarity binder",
        "2024-01-01",
        &[("Stardust Dragon Ghost 1st", 100), ("Necro Gardna", 45)],
    ));
    content.push_str(&table_block(
        "max rarity binder",
        "2024-04-01",
        &[("Stardust Dragon Ghost 1st", 150), ("Necro Gardna", 0)],
    ));
    content.push_str(&table_block(
        "max rarity binder",
        "2025-01-01",
        &[("Stardust Dragon Ghost 1st", 200), ("Necro Gardna", 52)],
    ));
    content.lines().map(|l| l.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_find_occurrences_across_blocks() {
    let log = sample_log();
    let occurrences = find_occurrences("Stardust Dragon Ghost 1st", &log);
    assert_eq!(occurrences.len(), 3);
}

#[test]
fn test_date_recovery_per_block() {
    let log = sample_log();
    let occurrences = find_occurrences("Necro Gardna", &log);

    assert_eq!(date_for_occurrence(occurrences[0], &log).unwrap(), date(2024, 1, 1));
    assert_eq!(date_for_occurrence(occurrences[1], &log).unwrap(), date(2024, 4, 1));
    assert_eq!(date_for_occurrence(occurrences[2], &log).unwrap(), date(2025, 1, 1));
}

#[test]
fn test_to_points_filters_zero_value_rows() {
    let log = sample_log();
    let occurrences = find_occurrences("Necro Gardna", &log);
    let points = to_points(&occurrences, &log).unwrap();

    // The 2024-04-01 row holds 0 (missing data) and must be dropped
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, date(2024, 1, 1));
    assert_eq!(points[0].value, 45);
    assert_eq!(points[1].date, date(2025, 1, 1));
    assert_eq!(points[1].value, 52);
}

#[test]
fn test_one_year_window_nearest_point() {
    let log = sample_log();
    let points = points_for_card("Stardust Dragon Ghost 1st", &log).unwrap();

    // target = 2025-01-01 - 365d = 2024-01-02; 2024-01-01 wins at 1 day
    let diff = nearest_window_diff(&points, 365).unwrap();

    assert_eq!(diff.closest_index, 0);
    assert_eq!(diff.closest_date, date(2024, 1, 1));
    assert_eq!(diff.diff, 100);
    assert_eq!(diff.percent_diff, 100.0);
}

#[test]
fn test_window_report_and_formatting() {
    let log = sample_log();
    let points = points_for_card("Stardust Dragon Ghost 1st", &log).unwrap();
    let report = window_report(&points).unwrap();

    assert_eq!(report.len(), 9);

    // Short windows all resolve to the most recent point: no change
    let week = &report[0];
    assert_eq!(week.window_days, 7);
    assert_eq!(week.diff, 0);
    assert_eq!(format_window_summary(week), "1W: 0 (0.0%) - 2025-01-01");

    let year = report.iter().find(|d| d.window_days == 365).unwrap();
    assert_eq!(format_window_summary(year), "1Y: +100 (+100.0%) ↑ - 2024-01-01");

    let text = format_trend_report("Stardust Dragon Ghost 1st", &report);
    assert!(text.starts_with("Price trend for Stardust Dragon Ghost 1st\n"));
    assert_eq!(text.lines().count(), 10);
}

#[test]
fn test_card_missing_from_log() {
    let log = sample_log();
    assert!(matches!(
        points_for_card("Blue-Eyes White Dragon", &log),
        Err(TrackerError::NoHistory(_))
    ));
}

#[test]
fn test_occurrence_above_first_table_is_malformed() {
    let mut log = vec!["Necro Gardna mentioned before any table".to_string()];
    log.extend(sample_log());

    let occurrences = find_occurrences("Necro Gardna", &log);
    assert!(matches!(
        date_for_occurrence(occurrences[0], &log),
        Err(TrackerError::MalformedHistory { .. })
    ));
}

#[test]
fn test_read_lines_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "line one\nline two\n").unwrap();

    let lines = read_lines(file.path().to_str().unwrap()).unwrap();
    assert_eq!(lines, vec!["line one".to_string(), "line two".to_string()]);
}

#[test]
fn test_read_lines_missing_file() {
    assert!(read_lines("/this/file/does/not/exist.txt").is_err());
}
