//! Monthly forecast interface and baseline model.
//!
//! The forecasting model is a collaborator behind a single-method trait:
//! hand it the windowed monthly series and a horizon, get back the same
//! months plus `horizon` future months, each with a point estimate and
//! an uncertainty band. The pipeline never looks inside the fit, which
//! keeps it testable against a stub.

use crate::monthly::MonthlyPoint;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use wcd_utils::dates::month_start;

/// Errors from forecast fitting.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ForecastError {
    /// The historical series has no points to fit on.
    #[error("cannot fit a forecast on an empty series")]
    EmptySeries,
}

/// One month of an extended series: point estimate plus band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub month: NaiveDate,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Capability interface over the forecasting model.
///
/// Implementations must return the historical months followed by
/// `horizon` future months, in ascending order.
pub trait Forecaster {
    fn fit_and_forecast(
        &self,
        series: &[MonthlyPoint],
        horizon: u32,
    ) -> Result<Vec<ForecastPoint>, ForecastError>;
}

/// Seasonal-naive baseline model.
///
/// A future month repeats the most recent observed value for the same
/// calendar month, falling back to the series mean when that month was
/// never observed. The band is ±z·σ·√k around the estimate (σ the
/// population standard deviation of the historical totals, k the number
/// of months past the last observation), with the lower bound clamped at
/// zero since counts cannot go negative. Historical months echo their
/// observed value with a zero-width band.
pub struct SeasonalNaiveForecaster {
    /// Band half-width in standard deviations. 1.96 approximates a 95%
    /// interval.
    pub interval_z: f64,
}

impl Default for SeasonalNaiveForecaster {
    fn default() -> Self {
        SeasonalNaiveForecaster { interval_z: 1.96 }
    }
}

impl Forecaster for SeasonalNaiveForecaster {
    fn fit_and_forecast(
        &self,
        series: &[MonthlyPoint],
        horizon: u32,
    ) -> Result<Vec<ForecastPoint>, ForecastError> {
        if series.is_empty() {
            return Err(ForecastError::EmptySeries);
        }

        let n = series.len() as f64;
        let mean = series.iter().map(|p| p.total).sum::<f64>() / n;
        let variance = series
            .iter()
            .map(|p| (p.total - mean).powi(2))
            .sum::<f64>()
            / n;
        let sigma = variance.sqrt();

        // Latest observed total per calendar month; the series arrives in
        // ascending order, so later entries overwrite earlier ones.
        let mut latest_by_month: HashMap<u32, f64> = HashMap::new();
        for point in series {
            latest_by_month.insert(point.month.month(), point.total);
        }

        let mut extended: Vec<ForecastPoint> = series
            .iter()
            .map(|p| ForecastPoint {
                month: p.month,
                value: p.total,
                lower: p.total,
                upper: p.total,
            })
            .collect();

        let last_month = series[series.len() - 1].month;
        for k in 1..=horizon {
            let month = last_month
                .checked_add_months(Months::new(k))
                .expect("month arithmetic stays in range");
            let value = latest_by_month
                .get(&month.month())
                .copied()
                .unwrap_or(mean);
            let spread = self.interval_z * sigma * f64::from(k).sqrt();
            extended.push(ForecastPoint {
                month,
                value,
                lower: (value - spread).max(0.0),
                upper: value + spread,
            });
        }
        Ok(extended)
    }
}

/// An extended series split for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastView {
    pub history: Vec<ForecastPoint>,
    pub future: Vec<ForecastPoint>,
}

/// Partition an extended series at the start of the month containing
/// `today`. Months strictly before it form the historical segment; the
/// partial current month and everything after are the future segment,
/// which is the only part whose band gets drawn.
pub fn split_at_current_month(points: Vec<ForecastPoint>, today: NaiveDate) -> ForecastView {
    let boundary = month_start(today);
    let (history, future) = points.into_iter().partition(|p| p.month < boundary);
    ForecastView { history, future }
}
