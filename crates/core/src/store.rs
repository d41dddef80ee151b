//! Content store model.
//!
//! The portfolio gallery is backed by a single hand/tool-maintained JSON
//! document of services, projects, and media items. The document is read at
//! startup and held in memory; the server never writes it back — the
//! operator exports a revised copy and redeploys.
//!
//! The wire format carries redundant `mediaIds` / `projectIds` arrays for
//! consumers of the document. They are derived from `media` / `projects` on
//! serialization and ignored on deserialization, so there is no parallel
//! array to keep in sync.

use std::collections::HashSet;
use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;

/// Media classification carried on every media item and used by the
/// directory scan to sort raw files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a file extension (without the dot, any case).
    ///
    /// Unknown extensions return `None` and are ignored by the media scan.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" | "avif" | "gif" => Some(MediaKind::Image),
            "mp4" | "webm" | "mov" | "m4v" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

/// A single image or video belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    /// Path under the deployed media root, e.g. `/media/gt3-rear.jpg`.
    pub src: String,
    pub alt: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// A detailing project: one vehicle, one job, an ordered set of media.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    /// Free-text name authored by the operator; the brand classifier
    /// pattern-matches on this.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

impl Project {
    /// Derived `mediaIds` array, emitted on serialization.
    pub fn media_ids(&self) -> Vec<&str> {
        self.media.iter().map(|m| m.id.as_str()).collect()
    }

    /// Trimmed, lowercased name: the secondary identity key used by the
    /// importer's duplicate detection.
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

impl Serialize for Project {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut len = 4; // id, name, mediaIds, media
        if self.description.is_some() {
            len += 1;
        }
        if self.location.is_some() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("Project", len)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        if let Some(description) = &self.description {
            state.serialize_field("description", description)?;
        }
        if let Some(location) = &self.location {
            state.serialize_field("location", location)?;
        }
        state.serialize_field("mediaIds", &self.media_ids())?;
        state.serialize_field("media", &self.media)?;
        state.end()
    }
}

/// A service category such as "Car Detailing" or "Ceramic Coating".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Service {
    /// Derived `projectIds` array, emitted on serialization.
    pub fn project_ids(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.id.as_str()).collect()
    }
}

impl Serialize for Service {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Service", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("projectIds", &self.project_ids())?;
        state.serialize_field("projects", &self.projects)?;
        state.end()
    }
}

/// Root of the content store document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStore {
    pub services: Vec<Service>,
}

impl ContentStore {
    /// Parse and validate a content store document.
    ///
    /// Rejects unparseable JSON, a missing `services` array, and duplicate
    /// project ids (ids are unique across the whole store, not per service).
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let store: ContentStore = serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("Invalid content store document: {e}")))?;
        store.validate()?;
        Ok(store)
    }

    /// Read and parse the store document from disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Check the global project-id uniqueness invariant.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for (_, project) in self.iter_projects() {
            if !seen.insert(project.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate project id '{}' in content store",
                    project.id
                )));
            }
        }
        Ok(())
    }

    /// Iterate every project together with its owning service.
    pub fn iter_projects(&self) -> impl Iterator<Item = (&Service, &Project)> {
        self.services
            .iter()
            .flat_map(|s| s.projects.iter().map(move |p| (s, p)))
    }

    pub fn project_count(&self) -> usize {
        self.services.iter().map(|s| s.projects.len()).sum()
    }

    /// Lowercased basenames of every media `src` referenced by the store.
    ///
    /// Used by the media scan to exclude files that are already organized.
    pub fn media_basenames(&self) -> HashSet<String> {
        self.iter_projects()
            .flat_map(|(_, p)| p.media.iter())
            .filter_map(|m| {
                Path::new(&m.src)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.to_lowercase())
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
