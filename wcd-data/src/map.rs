//! Combined map view model.
//!
//! The map overlays the deduplicated crayfish points and the
//! status-colored water-quality points. This module only assembles the
//! data the renderer needs — coordinates, weights, colors, hover text.
//! Layer styling lives entirely on the rendering side.

use crate::spatial::AggregatePoint;
use serde::Serialize;
use wcd_sources::quality::QualityRecord;
use wcd_sources::status::{Rgba, StatusBucket};

/// View center when there is nothing to plot: central Amsterdam.
pub const DEFAULT_CENTER: (f64, f64) = (52.37, 4.90);

/// Default zoom level for the combined view.
pub const DEFAULT_ZOOM: u8 = 10;

/// Everything the map renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub crayfish: Vec<CrayfishMarker>,
    pub quality: Vec<QualityMarker>,
}

/// One aggregated sighting point. `total` doubles as the heat weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrayfishMarker {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub total: f64,
    pub hover: String,
}

/// One water-quality point with its derived bucket and color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityMarker {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub bucket: StatusBucket,
    pub color: Rgba,
    pub hover: String,
}

/// Assemble the combined view. The center is the arithmetic mean of all
/// plotted coordinates across both layers, falling back to the default
/// center when neither layer has points.
pub fn build_map_view(points: &[AggregatePoint], quality: &[QualityRecord]) -> MapView {
    let latitudes = points
        .iter()
        .map(|p| p.latitude)
        .chain(quality.iter().map(|q| q.latitude));
    let longitudes = points
        .iter()
        .map(|p| p.longitude)
        .chain(quality.iter().map(|q| q.longitude));
    let count = points.len() + quality.len();
    let (latitude, longitude) = if count == 0 {
        DEFAULT_CENTER
    } else {
        (
            latitudes.sum::<f64>() / count as f64,
            longitudes.sum::<f64>() / count as f64,
        )
    };

    let crayfish = points
        .iter()
        .map(|p| CrayfishMarker {
            location: p.location.clone(),
            latitude: p.latitude,
            longitude: p.longitude,
            total: p.total,
            hover: format!("Locatie: {}\nAantal: {}", p.location, p.total),
        })
        .collect();
    let quality = quality
        .iter()
        .map(|q| QualityMarker {
            location: q.location.clone(),
            latitude: q.latitude,
            longitude: q.longitude,
            status: q.status.clone(),
            bucket: q.bucket(),
            color: q.color(),
            hover: format!("Locatie: {}\nStatus: {}", q.location, q.status),
        })
        .collect();

    MapView {
        latitude,
        longitude,
        zoom: DEFAULT_ZOOM,
        crayfish,
        quality,
    }
}
