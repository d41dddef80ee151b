//! Gallery grouping builder.
//!
//! Turns the content store into the brand-indexed view model behind the
//! portfolio's brand filter UI: classified projects grouped per brand,
//! a catch-all bucket for unbranded one-offs, and guaranteed-present empty
//! groups for the allowlisted flagship brands.

use indexmap::IndexMap;
use serde::Serialize;

use crate::brands;
use crate::store::{ContentStore, MediaItem};

/// Service category whose unclassified projects fall into the catch-all
/// group instead of disappearing from the brand view.
pub const SPECIALS_SERVICE: &str = "Specials";

/// Label of the catch-all pseudo-brand group. Always sorts last.
pub const SPECIALS_GROUP: &str = "Specials";

/// Brands that always render as filter options, even with zero projects.
pub const ALWAYS_SHOW_BRANDS: &[&str] = &[
    "Aston Martin",
    "Audi",
    "BMW",
    "Bentley",
    "Ferrari",
    "Jaguar",
    "Lamborghini",
    "McLaren",
    "Mercedes",
    "Porsche",
    "Range Rover",
    "Rolls Royce",
    "Tesla",
];

/// A project as rendered inside a brand group, tagged with its service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandExample {
    pub project_id: String,
    pub name: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub media: Vec<MediaItem>,
}

/// Derived, non-persisted brand bucket. Rebuilt on every read.
#[derive(Debug, Clone, Serialize)]
pub struct BrandGroup {
    pub brand: String,
    pub examples: Vec<BrandExample>,
}

/// Build the ordered brand group list for the filter UI.
///
/// - Classified projects group under their brand, preserving first-seen
///   order within each group.
/// - Unclassified projects in the [`SPECIALS_SERVICE`] category go to the
///   catch-all group; unclassified projects elsewhere appear in no group.
/// - Every `allowlist` brand is present, empty if necessary.
/// - Groups sort alphabetically, with the catch-all forced last.
pub fn build_brand_groups(store: &ContentStore, allowlist: &[&str]) -> Vec<BrandGroup> {
    let mut groups: IndexMap<String, Vec<BrandExample>> = IndexMap::new();
    let mut specials: Vec<BrandExample> = Vec::new();

    for (service, project) in store.iter_projects() {
        let example = BrandExample {
            project_id: project.id.clone(),
            name: project.name.clone(),
            service: service.name.clone(),
            description: project.description.clone(),
            location: project.location.clone(),
            media: project.media.clone(),
        };

        match brands::classify(&project.name) {
            Some(brand) => groups.entry(brand.to_string()).or_default().push(example),
            None if service.name == SPECIALS_SERVICE => specials.push(example),
            None => {}
        }
    }

    for brand in allowlist {
        groups.entry((*brand).to_string()).or_default();
    }

    let mut out: Vec<BrandGroup> = groups
        .into_iter()
        .map(|(brand, examples)| BrandGroup { brand, examples })
        .collect();
    out.sort_by(|a, b| a.brand.cmp(&b.brand));

    if !specials.is_empty() {
        out.push(BrandGroup {
            brand: SPECIALS_GROUP.to_string(),
            examples: specials,
        });
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
