//! Delimited-text loading with delimiter detection.
//!
//! The exports arrive as either comma- or semicolon-separated text and
//! the caller never says which. Comma is tried first; if that parse
//! errors or collapses the header into a single column, the file is
//! re-read as semicolon-separated. A file that fails both ways is a
//! `Delimiter` error naming the path.

use crate::error::{Result, SourceError};
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

/// Primary delimiter convention.
const PRIMARY_DELIMITER: u8 = b',';

/// Fallback when the primary parse fails.
const SECONDARY_DELIMITER: u8 = b';';

/// A parsed export: normalized headers plus raw rows in file order.
///
/// Headers are lower-cased and trimmed here so schema resolution and
/// every later stage can match on exact strings. The records themselves
/// are untouched; normalization into typed records happens downstream
/// and never mutates this table.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<StringRecord>,
}

impl RawTable {
    /// Parse in-memory delimited text with an explicit delimiter.
    ///
    /// Rows whose field count differs from the header are a parse error,
    /// which is what lets delimiter detection reject the wrong convention.
    pub fn parse(data: &str, delimiter: u8) -> Result<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .from_reader(data.as_bytes());
        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let records = reader
            .records()
            .collect::<std::result::Result<Vec<StringRecord>, _>>()?;
        Ok(RawTable { headers, records })
    }

    /// Read an export file, detecting its delimiter.
    pub fn read(path: &Path) -> Result<RawTable> {
        let data = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match RawTable::parse(&data, PRIMARY_DELIMITER) {
            Ok(table) if table.headers.len() > 1 => Ok(table),
            _ => {
                log::debug!(
                    "comma parse failed for {}, retrying as semicolon-delimited",
                    path.display()
                );
                match RawTable::parse(&data, SECONDARY_DELIMITER) {
                    Ok(table) if table.headers.len() > 1 => Ok(table),
                    _ => Err(SourceError::Delimiter {
                        path: path.to_path_buf(),
                    }),
                }
            }
        }
    }
}
