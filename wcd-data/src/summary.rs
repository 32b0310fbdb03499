//! Per-year KPI summary.
//!
//! Three headline values for the selected year: the total count, the
//! average per month with sightings, and the location with the highest
//! yearly sum. A year with no dated records produces total 0, no
//! average, and no best location — never a panic.

use crate::monthly::{max_year, monthly_totals};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use wcd_sources::observation::CrayfishObservation;

/// Lower bound of the year selector. Observations before this exist in
/// some exports but are too sparse to chart.
pub const EARLIEST_YEAR: i32 = 2010;

/// Location names longer than this are shortened for the metric tile.
const DISPLAY_NAME_MAX: usize = 25;

/// Headline values for one selected year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub total: f64,
    /// Total divided by the number of months with at least one record;
    /// `None` when the year has no dated records at all.
    pub average: Option<f64>,
    pub best_location: Option<BestLocation>,
}

/// The location with the highest summed count in the selected year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestLocation {
    pub location: String,
    pub display_name: String,
    pub total: f64,
}

/// Compute the KPI summary for `year`.
///
/// The average divides by the number of months that actually have
/// records, not by 12. Best-location ties resolve to the alphabetically
/// first name: totals accumulate in key order and the descending sort is
/// stable.
pub fn summarize_year(observations: &[CrayfishObservation], year: i32) -> YearSummary {
    let months = monthly_totals(observations, year);
    let total: f64 = months.values().sum();
    let average = if months.is_empty() {
        None
    } else {
        Some(total / months.len() as f64)
    };

    let mut by_location: BTreeMap<&str, f64> = BTreeMap::new();
    for obs in observations {
        if obs.year() == Some(year) {
            *by_location.entry(obs.location.as_str()).or_insert(0.0) +=
                obs.count.unwrap_or(0.0);
        }
    }
    let best_location = by_location
        .into_iter()
        .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
        .next()
        .map(|(location, location_total)| BestLocation {
            location: location.to_string(),
            display_name: truncate_display_name(location),
            total: location_total,
        });

    YearSummary {
        year,
        total,
        average,
        best_location,
    }
}

/// Year range the dashboard lets the user select: the fixed lower bound
/// through the latest year present in the data. `None` when nothing is
/// dated.
pub fn year_bounds(observations: &[CrayfishObservation]) -> Option<(i32, i32)> {
    max_year(observations).map(|latest| (EARLIEST_YEAR, latest.max(EARLIEST_YEAR)))
}

/// Shorten a location name for the metric tile: names over 25 characters
/// become their first 22 characters plus an ellipsis.
pub fn truncate_display_name(name: &str) -> String {
    if name.chars().count() <= DISPLAY_NAME_MAX {
        name.to_string()
    } else {
        let head: String = name.chars().take(DISPLAY_NAME_MAX - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(location: &str, count: Option<f64>, date: &str) -> CrayfishObservation {
        CrayfishObservation {
            location: location.to_string(),
            latitude: 52.1,
            longitude: 4.8,
            count,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
        }
    }

    #[test]
    fn totals_and_average_use_present_months_only() {
        let observations = vec![
            obs("A", Some(3.0), "2020-03-05"),
            obs("A", Some(5.0), "2020-03-20"),
            obs("B", Some(1.0), "2020-04-01"),
        ];
        let summary = summarize_year(&observations, 2020);
        assert_eq!(summary.total, 9.0);
        // Two months have records, so the divisor is 2, not 12.
        assert_eq!(summary.average, Some(4.5));
        let best = summary.best_location.unwrap();
        assert_eq!(best.location, "A");
        assert_eq!(best.total, 8.0);
    }

    #[test]
    fn empty_year_yields_defined_fallbacks() {
        let observations = vec![obs("A", Some(3.0), "2020-03-05")];
        let summary = summarize_year(&observations, 2021);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.average, None);
        assert_eq!(summary.best_location, None);
    }

    #[test]
    fn tied_locations_resolve_alphabetically() {
        let observations = vec![
            obs("Westeinder", Some(4.0), "2020-05-01"),
            obs("Botshol", Some(4.0), "2020-06-01"),
        ];
        let best = summarize_year(&observations, 2020).best_location.unwrap();
        assert_eq!(best.location, "Botshol");
    }

    #[test]
    fn other_years_do_not_leak_into_the_summary() {
        let observations = vec![
            obs("A", Some(3.0), "2020-03-05"),
            obs("B", Some(50.0), "2019-03-05"),
        ];
        let best = summarize_year(&observations, 2020).best_location.unwrap();
        assert_eq!(best.location, "A");
    }

    #[test]
    fn long_names_truncate_for_display() {
        let name = "Amstelveense Poel bij de Handweg";
        assert!(name.chars().count() > 25);
        let display = truncate_display_name(name);
        assert_eq!(display, "Amstelveense Poel bij ...");
        assert_eq!(display.chars().count(), 25);
        assert_eq!(truncate_display_name("Sloterplas"), "Sloterplas");
    }

    #[test]
    fn year_bounds_span_fixed_minimum_to_latest() {
        let observations = vec![
            obs("A", Some(1.0), "2019-01-01"),
            obs("A", Some(1.0), "2024-01-01"),
        ];
        assert_eq!(year_bounds(&observations), Some((EARLIEST_YEAR, 2024)));
        assert_eq!(year_bounds(&[]), None);
    }
}
