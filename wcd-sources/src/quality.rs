//! Water-quality status records.

use crate::error::Result;
use crate::loader::RawTable;
use crate::schema::{ColumnMap, QUALITY_SCHEMA};
use crate::status::{classify, Rgba, StatusBucket};
use csv::StringRecord;
use serde::Serialize;
use wcd_utils::numbers::parse_number_lenient;

/// A normalized water-quality measurement point.
///
/// The status string is kept verbatim (trimmed) for display; the bucket
/// and color are derived on demand so classification stays a pure
/// function of the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityRecord {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
}

impl QualityRecord {
    /// Status bucket for this record.
    pub fn bucket(&self) -> StatusBucket {
        classify(&self.status)
    }

    /// Marker color for this record.
    pub fn color(&self) -> Rgba {
        self.bucket().color()
    }

    /// Normalize a loaded table into quality records.
    ///
    /// Same contract as the crayfish normalization: coordinates must
    /// coerce or the row is dropped; everything else degrades to an
    /// empty string. The location column is optional at schema level.
    pub fn from_table(table: &RawTable) -> Result<Vec<QualityRecord>> {
        let columns = QUALITY_SCHEMA.resolve(&table.headers)?;
        let mut records = Vec::with_capacity(table.records.len());
        let mut dropped = 0usize;
        for record in &table.records {
            match Self::from_record(record, &columns) {
                Some(quality) => records.push(quality),
                None => dropped += 1,
            }
        }
        log::info!(
            "normalized {} water-quality records ({} rows without coordinates dropped)",
            records.len(),
            dropped
        );
        Ok(records)
    }

    fn from_record(record: &StringRecord, columns: &ColumnMap) -> Option<QualityRecord> {
        let field = |canonical: &str| {
            columns
                .index_of(canonical)
                .and_then(|i| record.get(i))
                .unwrap_or("")
        };
        let latitude = parse_number_lenient(field("latitude"))?;
        let longitude = parse_number_lenient(field("longitude"))?;
        Some(QualityRecord {
            location: field("location").trim().to_string(),
            latitude,
            longitude,
            status: field("status").trim().to_string(),
        })
    }
}
