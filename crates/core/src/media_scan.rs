//! Media directory scan filter.
//!
//! The admin "organize media" view needs to know which files in the media
//! directory are not yet referenced by any project. Directory listing is
//! the API layer's job; the classification and exclusion logic here is pure.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::store::MediaKind;

/// A media file present on disk but not referenced by the content store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnorganizedFile {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// Filter a directory listing down to unorganized media files.
///
/// `referenced` holds lowercased basenames already used by the store (see
/// `ContentStore::media_basenames`). Files with unknown extensions are not
/// media and are dropped silently.
pub fn unorganized(files: &[String], referenced: &HashSet<String>) -> Vec<UnorganizedFile> {
    files
        .iter()
        .filter_map(|name| {
            let ext = Path::new(name).extension()?.to_str()?;
            let kind = MediaKind::from_extension(ext)?;
            if referenced.contains(&name.to_lowercase()) {
                return None;
            }
            Some(UnorganizedFile {
                name: name.clone(),
                kind,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
