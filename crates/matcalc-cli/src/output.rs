//! CLI output formatting.

use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use matcalc_core::Matrix;

/// Format a matrix as tab-separated rows under a `Matrix NAME (nxn):` header.
#[must_use]
pub fn format_matrix(name: &str, matrix: &Matrix) -> String {
    let n = matrix.size();
    let mut out = format!("Matrix {name} ({n}x{n}):\n");
    for row in matrix.rows() {
        for value in row {
            out.push_str(&value.to_string());
            out.push('\t');
        }
        out.push('\n');
    }
    out
}

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

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a byte count as `N bytes (x.xx KB / y.yy MB)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    let mb = kb / 1024.0;
    format!("{} bytes ({kb:.2} KB / {mb:.2} MB)", format_number(bytes))
}

/// Write a matrix to a file, one row per line, values separated by spaces.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, matrix: &Matrix) -> io::Result<()> {
    let path = path.as_ref();
    let mut file = BufWriter::new(std::fs::File::create(path)?);
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(file, "{}", line.join(" "))?;
    }
    file.flush()?;
    tracing::debug!(path = %path.display(), size = matrix.size(), "product written");
    Ok(())
}
