//! CLI output formatting and CSV export.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use matprod_core::Matrix;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a matrix for display, truncating beyond `limit` rows/columns.
#[must_use]
pub fn format_matrix(m: &Matrix, limit: usize) -> String {
    let mut out = String::new();
    for i in 0..m.rows().min(limit) {
        out.push('[');
        for j in 0..m.cols().min(limit) {
            if j > 0 {
                out.push_str(", ");
            }
            out.push_str(&m.get(i, j).to_string());
        }
        if m.cols() > limit {
            out.push_str(", ...");
        }
        out.push_str("]\n");
    }
    if m.rows() > limit {
        out.push_str("...\n");
    }
    out
}

/// One CSV export record, following the
/// `method,workers,matrix-dimension,date,elapsed-millis` schema.
#[derive(Debug, Clone)]
pub struct CsvEntry {
    pub method: String,
    pub workers: usize,
    pub dimension: usize,
    pub elapsed_millis: u128,
}

/// Append run entries to a CSV file, writing the header first when the file
/// does not exist yet.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_csv(path: &Path, entries: &[CsvEntry]) -> io::Result<()> {
    let fresh = !path.exists();
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    if fresh {
        writeln!(file, "method,workers,matrix-dimension,date,elapsed-millis")?;
    }
    let date = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S");
    for entry in entries {
        writeln!(
            file,
            "{},{},{},{},{}",
            entry.method, entry.workers, entry.dimension, date, entry.elapsed_millis
        )?;
    }
    Ok(())
}
