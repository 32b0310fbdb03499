//! KPI summary command.

use crate::sources;
use serde_json::json;
use std::path::Path;
use wcd_data::summary::{summarize_year, YearSummary};

/// Assemble the summary payload: the typed values plus the three metric
/// tiles the dashboard header shows.
pub fn summary_payload(summary: &YearSummary) -> serde_json::Value {
    let year = summary.year;
    let average_text = summary
        .average
        .map(|a| format!("{a:.2}"))
        .unwrap_or_else(|| "Geen data".to_string());
    let (best_text, best_delta) = match &summary.best_location {
        Some(best) => (
            best.display_name.clone(),
            Some(format!("{} Gespot", best.total)),
        ),
        None => ("Geen data".to_string(), None),
    };
    json!({
        "summary": summary,
        "metrics": [
            {
                "label": format!("Totaal aantal in {year}"),
                "value": format!("{}", summary.total),
            },
            {
                "label": format!("Gemiddeld per maand in {year}"),
                "value": average_text,
            },
            {
                "label": format!("Beste locatie in {year}"),
                "value": best_text,
                "delta": best_delta,
            },
        ],
    })
}

pub fn run_summary(crayfish_csv: &Path, year: Option<i32>) -> anyhow::Result<()> {
    let observations = sources::load_crayfish(crayfish_csv)?;
    let year = sources::resolve_year(&observations, year)?;
    let summary = summarize_year(&observations, year);
    log::info!("summary for {}: total {}", year, summary.total);
    println!("{}", serde_json::to_string_pretty(&summary_payload(&summary))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn fixture_summary(year: i32) -> YearSummary {
        let observations =
            sources::load_crayfish(Path::new("../fixtures/crayfish_observations.csv")).unwrap();
        summarize_year(&observations, year)
    }

    #[test]
    fn fixture_year_2023_kpis() {
        let summary = fixture_summary(2023);
        // April 8 + May 4 + July 2 across three months.
        assert_eq!(summary.total, 14.0);
        assert_eq!(summary.average, Some(14.0 / 3.0));
        assert_eq!(summary.best_location.unwrap().location, "Sloterplas");
    }

    #[test]
    fn payload_for_an_empty_year_reads_geen_data() {
        let summary = fixture_summary(2010);
        let payload = summary_payload(&summary);
        assert_eq!(payload["summary"]["total"], 0.0);
        assert!(payload["summary"]["average"].is_null());
        assert_eq!(payload["metrics"][1]["value"], "Geen data");
        assert_eq!(payload["metrics"][2]["value"], "Geen data");
        assert!(payload["metrics"][2]["delta"].is_null());
    }

    #[test]
    fn payload_metrics_name_the_year() {
        let payload = summary_payload(&fixture_summary(2024));
        assert_eq!(payload["metrics"][0]["label"], "Totaal aantal in 2024");
        assert_eq!(payload["metrics"][2]["delta"], "8 Gespot");
    }
}
