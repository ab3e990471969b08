use crate::error::Result;
use crate::formatters;
use crate::models::CardEntry;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Read a whole text file into lines, preserving file order.
pub fn read_lines(path: &str) -> std::result::Result<Vec<String>, io::Error> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);
    reader.lines().collect()
}

/// Write comparison entries as a CSV file under `output_dir`.
///
/// The filename follows the compared dates
/// (`comparison_<date1>_vs_<date2>.csv`); with no entries it falls back to
/// today's date. Returns the path written.
pub fn export_comparison_csv(entries: &[CardEntry], output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let filename = match entries.first() {
        Some(entry) => format!("comparison_{}_vs_{}.csv", entry.date1, entry.date2),
        None => format!(
            "comparison_{}.csv",
            chrono::Local::now().format("%Y-%m-%d")
        ),
    };

    let filepath = output_dir.join(filename);
    let csv_text = formatters::comparison_to_csv(entries)?;

    let mut file = File::create(&filepath)?;
    file.write_all(csv_text.as_bytes())?;

    log::info!("Results exported to: {}", filepath.display());
    Ok(filepath)
}
