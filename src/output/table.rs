//! Writes the result table produced by [`crate::core::result::result_table`]
//! to a tab-separated file.

use std::path::Path;

use crate::core::result::ResultRow;
use crate::error::{PargenfsError, Result};

/// Writes `rows` (header included) as a tab-separated file at `path`.
pub fn write_table(path: impl AsRef<Path>, rows: &[ResultRow]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| PargenfsError::io(path, std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| PargenfsError::io(path, std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    }
    writer
        .flush()
        .map_err(|e| PargenfsError::io(path, e))
}
