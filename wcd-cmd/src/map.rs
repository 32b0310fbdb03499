//! Combined map command.

use crate::sources;
use serde_json::json;
use std::path::Path;
use wcd_data::map::{build_map_view, MapView};
use wcd_data::spatial::aggregate_points;
use wcd_sources::status::StatusBucket;

/// Assemble the map payload: the view model plus the legend line the
/// dashboard shows under the map.
pub fn map_payload(view: &MapView) -> serde_json::Value {
    json!({
        "view": view,
        "legend": format!(
            "Water quality: {} = green, {} = yellow, {} = red",
            StatusBucket::Good.label(),
            StatusBucket::PotentialStress.label(),
            StatusBucket::InDanger.label(),
        ),
    })
}

/// Build and print the combined map view.
///
/// The quality layer fails independently: a broken quality export is
/// logged and the map still renders the sightings layer. A broken
/// crayfish export aborts the command.
pub fn run_map(crayfish_csv: &Path, quality_csv: &Path) -> anyhow::Result<()> {
    let observations = sources::load_crayfish(crayfish_csv)?;
    let quality = match sources::load_quality(quality_csv) {
        Ok(records) => records,
        Err(err) => {
            log::warn!("water-quality layer unavailable: {err:#}");
            Vec::new()
        }
    };
    let points = aggregate_points(&observations);
    let view = build_map_view(&points, &quality);
    println!("{}", serde_json::to_string_pretty(&map_payload(&view))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_map_view_has_both_layers() {
        let observations =
            sources::load_crayfish(Path::new("../fixtures/crayfish_observations.csv")).unwrap();
        let quality =
            sources::load_quality(Path::new("../fixtures/water_quality.csv")).unwrap();
        let view = build_map_view(&aggregate_points(&observations), &quality);

        // 14 surviving rows collapse into 9 distinct surveyed spots:
        // the two near-duplicate Sloterplas rows merge, as do the exact
        // repeats at Nieuwe Meer and Botshol.
        assert_eq!(view.crayfish.len(), 9);
        assert_eq!(view.quality.len(), 7);

        let sloterplas = view
            .crayfish
            .iter()
            .find(|p| p.location == "Sloterplas")
            .unwrap();
        assert_eq!(sloterplas.total, 10.0);
    }

    #[test]
    fn payload_includes_legend() {
        let view = build_map_view(&[], &[]);
        let payload = map_payload(&view);
        assert_eq!(
            payload["legend"],
            "Water quality: OK = green, Potential stress = yellow, In danger = red"
        );
        assert_eq!(payload["view"]["zoom"], 10);
    }
}
