//! Declared schemas for the two source exports.
//!
//! Each export has a fixed set of canonical fields, and each canonical
//! field an ordered list of accepted source-column spellings. Headers
//! are matched after lower-casing and trimming, so the alias lists only
//! carry lower-case entries. Resolution happens once per load and fails
//! with a named error when a required field has no alias in the header,
//! instead of letting an absent column surface later as a bad row.

use crate::error::{Result, SourceError};
use std::collections::HashMap;

/// A canonical dashboard field and the source-column names that map to it.
pub struct FieldSpec {
    /// Internal name the rest of the pipeline uses.
    pub canonical: &'static str,
    /// Accepted header spellings, lower-case, in preference order.
    pub aliases: &'static [&'static str],
    /// Whether resolution fails when no alias is present.
    pub required: bool,
}

/// The declared schema of one source export.
pub struct SourceSchema {
    /// Dataset name used in error messages and logs.
    pub dataset: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Schema of the crayfish sightings export.
pub static CRAYFISH_SCHEMA: SourceSchema = SourceSchema {
    dataset: "crayfish",
    fields: &[
        FieldSpec {
            canonical: "location",
            aliases: &["location", "locatie"],
            required: true,
        },
        FieldSpec {
            canonical: "latitude",
            aliases: &["latitude", "lat", "wgs84_lat"],
            required: true,
        },
        FieldSpec {
            canonical: "longitude",
            aliases: &["longitude", "lon", "lng", "wgs84_lon"],
            required: true,
        },
        FieldSpec {
            canonical: "count",
            aliases: &["count", "aantal"],
            required: true,
        },
        FieldSpec {
            canonical: "date",
            aliases: &["date", "datum"],
            required: true,
        },
    ],
};

/// Schema of the water-quality status export.
///
/// The location column is optional: some exports carry coordinates and
/// status only, and the map can render those without a name.
pub static QUALITY_SCHEMA: SourceSchema = SourceSchema {
    dataset: "water quality",
    fields: &[
        FieldSpec {
            canonical: "location",
            aliases: &["location", "locatie", "location_code"],
            required: false,
        },
        FieldSpec {
            canonical: "latitude",
            aliases: &["latitude", "lat", "wgs84_lat"],
            required: true,
        },
        FieldSpec {
            canonical: "longitude",
            aliases: &["longitude", "lon", "lng", "wgs84_lon"],
            required: true,
        },
        FieldSpec {
            canonical: "status",
            aliases: &["status", "overall_status_weighted"],
            required: true,
        },
    ],
};

/// Canonical field name → column index, for one resolved header row.
#[derive(Debug)]
pub struct ColumnMap {
    indices: HashMap<&'static str, usize>,
}

impl ColumnMap {
    /// Column index of a canonical field, if its alias was present.
    pub fn index_of(&self, canonical: &str) -> Option<usize> {
        self.indices.get(canonical).copied()
    }
}

impl SourceSchema {
    /// Resolve normalized (lower-cased, trimmed) headers against this schema.
    ///
    /// The first matching alias wins. Missing optional fields are simply
    /// absent from the resulting map; a missing required field fails with
    /// the dataset, field, and alias list in the message.
    pub fn resolve(&self, headers: &[String]) -> Result<ColumnMap> {
        let mut indices = HashMap::new();
        for field in self.fields {
            let index = field
                .aliases
                .iter()
                .find_map(|alias| headers.iter().position(|h| h == alias));
            match index {
                Some(i) => {
                    indices.insert(field.canonical, i);
                }
                None if field.required => {
                    return Err(SourceError::MissingColumn {
                        dataset: self.dataset,
                        canonical: field.canonical,
                        aliases: field.aliases.join(", "),
                    });
                }
                None => {}
            }
        }
        Ok(ColumnMap { indices })
    }

    /// Looks up a field spec by canonical name. Returns `None` if not declared.
    pub fn find_field(&self, canonical: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.canonical == canonical)
    }
}
