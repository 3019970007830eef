//! File exporters — pretty-printed JSON arrays and RFC-4180 CSV.

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// Write a slice of records as a pretty-printed JSON array.
///
/// Creates parent directories as needed. Partial collections are written
/// exactly like complete ones.
pub fn write_json_pretty<T: Serialize>(path: &Path, records: &[T]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json + "\n")
}

/// Quote a CSV field when it contains a delimiter, quote, CR or LF.
///
/// Embedded quotes are doubled per RFC 4180.
pub fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write rows as CSV with a fixed header line.
pub fn write_csv<I>(path: &Path, header: &[&str], rows: I) -> std::io::Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "{}", header.join(","))?;
    for row in rows {
        let line: Vec<String> = row.iter().map(|f| csv_field(f)).collect();
        writeln!(w, "{}", line.join(","))?;
    }
    w.flush()
}
