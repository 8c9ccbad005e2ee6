use std::path::Path;

use serde::Serialize;

use crate::error::{PortalError, PortalResult};

/// Serializes rows as CSV: a header line built from the first row's field
/// names, then one line per row. Fields containing commas, quotes or line
/// breaks are quoted (RFC 4180). No rows means empty output.
pub fn to_csv<T: Serialize>(rows: &[T]) -> PortalResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| PortalError::Io(e.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|e| PortalError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn write_csv_file<T: Serialize>(path: &Path, rows: &[T]) -> PortalResult<usize> {
    let body = to_csv(rows)?;
    std::fs::write(path, body)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "CSV export written");
    Ok(rows.len())
}
