//! Aggregation and view-model derivation for the crayfish dashboard.
//!
//! Everything in this crate is a pure transform over the normalized
//! records from `wcd-sources`: spatial deduplication for the map,
//! monthly grouping for the chart and forecast, and the per-year KPI
//! summary. Nothing here performs I/O; results are recomputed from the
//! inputs on every call.

pub mod forecast;
pub mod map;
pub mod monthly;
pub mod spatial;
pub mod summary;
