//! Monthly forecast command.

use crate::sources;
use anyhow::Context;
use chrono::Local;
use serde_json::json;
use std::path::Path;
use wcd_data::forecast::{split_at_current_month, Forecaster, ForecastView, SeasonalNaiveForecaster};
use wcd_data::monthly::monthly_series;
use wcd_utils::dates::parse_date;

/// Assemble the forecast payload. The band belongs to the future
/// segment only; the front end draws the history as a plain line.
pub fn forecast_payload(view: &ForecastView, horizon: u32) -> serde_json::Value {
    json!({
        "history": view.history,
        "future": view.future,
        "config": {
            "title": "Verwachting aantal Crayfish per maand",
            "horizonMonths": horizon,
            "bandSegment": "future",
        },
    })
}

pub fn run_forecast(
    crayfish_csv: &Path,
    start: &str,
    end: &str,
    horizon: u32,
) -> anyhow::Result<()> {
    let start = parse_date(start).context("invalid --start date")?;
    let end = parse_date(end).context("invalid --end date")?;
    anyhow::ensure!(start <= end, "--start must not be after --end");

    let observations = sources::load_crayfish(crayfish_csv)?;
    let series = monthly_series(&observations, start, end);
    log::info!(
        "forecast input: {} monthly points between {} and {}",
        series.len(),
        start,
        end
    );

    let extended = SeasonalNaiveForecaster::default()
        .fit_and_forecast(&series, horizon)
        .context("fitting the monthly forecast")?;
    let view = split_at_current_month(extended, Local::now().naive_local().date());
    println!(
        "{}",
        serde_json::to_string_pretty(&forecast_payload(&view, horizon))?
    );
    Ok(())
}
