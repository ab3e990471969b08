pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod price_history;
pub mod snapshot_compare;
pub mod table_text;

// Re-export commonly used items
pub use error::{Result, TrackerError};
pub use formatters::{
    comparison_to_csv, format_comparison_report, format_trend_report, format_window_summary,
};
pub use io::{export_comparison_csv, read_lines};
pub use models::{
    window_label, CardEntry, HistoryPoint, PriceStats, SnapshotRecord, WindowDiff,
    LOOKBACK_WINDOWS,
};
pub use price_history::{
    find_occurrences, nearest_window_diff, points_for_card, window_report,
};
pub use snapshot_compare::{SnapshotStore, DEFAULT_PREFIX};
pub use table_text::{parse_header, parse_row, CardHeader};
