//! Shared source loading for the commands.

use anyhow::Context;
use std::path::Path;
use wcd_data::monthly::max_year;
use wcd_data::summary::EARLIEST_YEAR;
use wcd_sources::loader::RawTable;
use wcd_sources::observation::CrayfishObservation;
use wcd_sources::quality::QualityRecord;

/// Load and normalize the crayfish observations export.
pub fn load_crayfish(path: &Path) -> anyhow::Result<Vec<CrayfishObservation>> {
    let table = RawTable::read(path)
        .with_context(|| format!("loading crayfish observations from {}", path.display()))?;
    let observations = CrayfishObservation::from_table(&table)?;
    Ok(observations)
}

/// Load and normalize the water-quality status export.
pub fn load_quality(path: &Path) -> anyhow::Result<Vec<QualityRecord>> {
    let table = RawTable::read(path)
        .with_context(|| format!("loading water-quality records from {}", path.display()))?;
    let records = QualityRecord::from_table(&table)?;
    Ok(records)
}

/// Pick the year a command works on: the explicit request if given,
/// otherwise the latest dated year (never below the selector minimum).
pub fn resolve_year(
    observations: &[CrayfishObservation],
    requested: Option<i32>,
) -> anyhow::Result<i32> {
    match requested {
        Some(year) => Ok(year),
        None => max_year(observations)
            .map(|year| year.max(EARLIEST_YEAR))
            .context("no dated observations to pick a default year from"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    // Test processes run from the package root, so the shared fixtures
    // live one level up.
    const CRAYFISH_FIXTURE: &str = "../fixtures/crayfish_observations.csv";
    const QUALITY_FIXTURE: &str = "../fixtures/water_quality.csv";

    #[test]
    fn crayfish_fixture_loads_and_drops_coordinate_less_rows() {
        let observations = load_crayfish(Path::new(CRAYFISH_FIXTURE)).unwrap();
        // 15 data rows, one of them without a latitude.
        assert_eq!(observations.len(), 14);
    }

    #[test]
    fn quality_fixture_is_semicolon_delimited_and_loads() {
        let records = load_quality(Path::new(QUALITY_FIXTURE)).unwrap();
        // 8 data rows, one of them without a latitude.
        assert_eq!(records.len(), 7);
        assert!(records.iter().any(|r| r.status == "Potential stress"));
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = load_crayfish(Path::new("does_not_exist.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("does_not_exist.csv"));
    }

    #[test]
    fn default_year_is_the_latest_in_the_data() {
        let observations = load_crayfish(Path::new(CRAYFISH_FIXTURE)).unwrap();
        assert_eq!(resolve_year(&observations, None).unwrap(), 2025);
        assert_eq!(resolve_year(&observations, Some(2023)).unwrap(), 2023);
    }

    #[test]
    fn default_year_fails_without_dated_observations() {
        assert!(resolve_year(&[], None).is_err());
    }
}
