//! Spatial deduplication of sightings.
//!
//! Repeated surveys of the same spot report coordinates that wobble by
//! fractions of a meter. Grouping on the location name plus coordinates
//! snapped to 5 decimal places collapses those near-duplicates into one
//! point per surveyed spot, with counts summed.

use serde::Serialize;
use std::collections::BTreeMap;
use wcd_sources::observation::CrayfishObservation;
use wcd_utils::numbers::{scale_coordinate, unscale_coordinate};

/// A spatially-deduplicated sighting group: the unit the map renders.
///
/// The coordinates are the rounded (5-decimal) values that formed the
/// group key, not any particular raw coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatePoint {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub total: f64,
}

/// Group observations by (location, rounded latitude, rounded longitude)
/// and sum their counts.
///
/// Missing counts contribute 0, so a spot whose rows all lack a count
/// still appears on the map. Counts are summed as given; negative values
/// pass through untouched. Input order does not affect the result, and
/// the output is sorted by key for determinism.
pub fn aggregate_points(observations: &[CrayfishObservation]) -> Vec<AggregatePoint> {
    let mut totals: BTreeMap<(String, i64, i64), f64> = BTreeMap::new();
    for obs in observations {
        let key = (
            obs.location.clone(),
            scale_coordinate(obs.latitude),
            scale_coordinate(obs.longitude),
        );
        *totals.entry(key).or_insert(0.0) += obs.count.unwrap_or(0.0);
    }
    totals
        .into_iter()
        .map(|((location, lat, lon), total)| AggregatePoint {
            location,
            latitude: unscale_coordinate(lat),
            longitude: unscale_coordinate(lon),
            total,
        })
        .collect()
}
