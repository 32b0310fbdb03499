//! Crayfish sighting records.

use crate::error::Result;
use crate::loader::RawTable;
use crate::schema::{ColumnMap, CRAYFISH_SCHEMA};
use chrono::{Datelike, NaiveDate};
use csv::StringRecord;
use serde::Serialize;
use wcd_utils::dates::parse_date_lenient;
use wcd_utils::numbers::parse_number_lenient;

/// A single normalized crayfish sighting.
///
/// A record only exists when both coordinates coerced to finite numbers;
/// count and date may still be missing. Records without a date carry no
/// year/month and therefore feed the map but not the time-based
/// aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrayfishObservation {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub count: Option<f64>,
    pub date: Option<NaiveDate>,
}

impl CrayfishObservation {
    /// Calendar year of the sighting, when the date parsed.
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// Calendar month (1-12) of the sighting, when the date parsed.
    pub fn month(&self) -> Option<u32> {
        self.date.map(|d| d.month())
    }

    /// Normalize a loaded table into sighting records.
    ///
    /// Resolves the crayfish schema against the table headers, coerces
    /// numeric and date fields (failed coercion means a missing value,
    /// never an error), and drops rows lacking either coordinate. The
    /// input table is not modified.
    pub fn from_table(table: &RawTable) -> Result<Vec<CrayfishObservation>> {
        let columns = CRAYFISH_SCHEMA.resolve(&table.headers)?;
        let mut observations = Vec::with_capacity(table.records.len());
        let mut dropped = 0usize;
        for record in &table.records {
            match Self::from_record(record, &columns) {
                Some(observation) => observations.push(observation),
                None => dropped += 1,
            }
        }
        log::info!(
            "normalized {} crayfish observations ({} rows without coordinates dropped)",
            observations.len(),
            dropped
        );
        Ok(observations)
    }

    fn from_record(record: &StringRecord, columns: &ColumnMap) -> Option<CrayfishObservation> {
        let field = |canonical: &str| {
            columns
                .index_of(canonical)
                .and_then(|i| record.get(i))
                .unwrap_or("")
        };
        let latitude = parse_number_lenient(field("latitude"))?;
        let longitude = parse_number_lenient(field("longitude"))?;
        Some(CrayfishObservation {
            location: field("location").trim().to_string(),
            latitude,
            longitude,
            count: parse_number_lenient(field("count")),
            date: parse_date_lenient(field("date")),
        })
    }
}
