//! Monthly chart command.

use crate::sources;
use serde_json::json;
use std::path::Path;
use wcd_data::monthly::monthly_totals;
use wcd_sources::observation::CrayfishObservation;
use wcd_utils::dates::month_abbreviation;

/// Assemble the chart payload: month-ordered (label, count) pairs plus
/// the line-chart config. Months without records are absent from the
/// data array, matching the KPI average's divisor.
pub fn chart_payload(observations: &[CrayfishObservation], year: i32) -> serde_json::Value {
    let months = monthly_totals(observations, year);
    let data: Vec<serde_json::Value> = months
        .iter()
        .map(|(&month, &total)| {
            json!({
                "month": month,
                "label": month_abbreviation(month),
                "count": total,
            })
        })
        .collect();
    json!({
        "data": data,
        "config": {
            "title": format!("Aantal Crayfish per Maand in {year}"),
            "xAxisLabel": "Maand",
            "yAxisLabel": "Aantal Crayfish",
            "color": "teal",
        },
    })
}

pub fn run_chart(crayfish_csv: &Path, year: Option<i32>) -> anyhow::Result<()> {
    let observations = sources::load_crayfish(crayfish_csv)?;
    let year = sources::resolve_year(&observations, year)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&chart_payload(&observations, year))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_observations() -> Vec<CrayfishObservation> {
        sources::load_crayfish(Path::new("../fixtures/crayfish_observations.csv")).unwrap()
    }

    #[test]
    fn chart_data_is_month_ordered_with_dutch_labels() {
        let payload = chart_payload(&fixture_observations(), 2023);
        let data = payload["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["label"], "Apr");
        assert_eq!(data[0]["count"], 8.0);
        assert_eq!(data[1]["label"], "Mei");
        assert_eq!(data[2]["label"], "Jul");
        assert_eq!(data[2]["count"], 2.0);
    }

    #[test]
    fn absent_months_are_not_zero_filled() {
        let payload = chart_payload(&fixture_observations(), 2024);
        let labels: Vec<&str> = payload["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["Mei", "Jun", "Jul", "Aug"]);
    }

    #[test]
    fn empty_year_gives_an_empty_data_array() {
        let payload = chart_payload(&fixture_observations(), 2011);
        assert!(payload["data"].as_array().unwrap().is_empty());
        assert_eq!(payload["config"]["title"], "Aantal Crayfish per Maand in 2011");
    }
}
