//! Monthly grouping of sightings.
//!
//! Both the chart (one selected year, month numbers) and the forecast
//! input (a multi-year window, month-start dates) sum counts per
//! calendar month. A month with no underlying records is absent from the
//! result, never zero-filled; the KPI average depends on that. A month
//! whose records all lack a count is present with total 0.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use wcd_sources::observation::CrayfishObservation;
use wcd_utils::dates::month_start;

/// One point of a windowed monthly series, labeled by month start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: NaiveDate,
    pub total: f64,
}

/// Sum counts per month (1-12) for the selected year.
///
/// Only dated observations participate. Absent months are absent.
pub fn monthly_totals(observations: &[CrayfishObservation], year: i32) -> BTreeMap<u32, f64> {
    let mut totals = BTreeMap::new();
    for obs in observations {
        if obs.year() == Some(year) {
            if let Some(month) = obs.month() {
                *totals.entry(month).or_insert(0.0) += obs.count.unwrap_or(0.0);
            }
        }
    }
    totals
}

/// Sum counts per month-start date over an inclusive date window.
///
/// This is the forecast input: no smoothing, no interpolation, no gap
/// filling. Months without records inside the window simply do not
/// appear, and the forecaster has to tolerate (or reject) the gaps.
pub fn monthly_series(
    observations: &[CrayfishObservation],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<MonthlyPoint> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for obs in observations {
        if let Some(date) = obs.date {
            if start <= date && date <= end {
                *totals.entry(month_start(date)).or_insert(0.0) += obs.count.unwrap_or(0.0);
            }
        }
    }
    totals
        .into_iter()
        .map(|(month, total)| MonthlyPoint { month, total })
        .collect()
}

/// Latest calendar year with at least one dated observation.
pub fn max_year(observations: &[CrayfishObservation]) -> Option<i32> {
    observations.iter().filter_map(|o| o.year()).max()
}
