//! Import / merge reducer for the admin content tools.
//!
//! Pure transform over content store documents: no UI state, no I/O. The
//! API layer hands in the held store, the startup snapshot, and the
//! candidate document; this module returns the resulting store plus a
//! report of what was added and what was skipped as a duplicate.

use serde::{Deserialize, Serialize};

use crate::store::{ContentStore, Project, Service};

/// How a candidate document is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// Substitute the candidate wholesale, no duplicate detection.
    Replace,
    /// Fold novel candidate projects into the held store.
    Merge,
    /// Preview: return only the candidate projects that are novel relative
    /// to the startup snapshot. Does not modify anything.
    NewOnly,
}

/// Counts reported back to the operator after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
}

/// Duplicate test, scoped to one service: same project id, or same
/// trimmed/lowercased name. Name matching is deliberately broader than id
/// matching — operators often re-export the same logical project under a
/// fresh id.
fn is_duplicate(existing: &Service, candidate: &Project) -> bool {
    let candidate_name = candidate.normalized_name();
    existing
        .projects
        .iter()
        .any(|p| p.id == candidate.id || p.normalized_name() == candidate_name)
}

/// Apply `candidate` to `current` according to `mode`.
///
/// `original` is the startup snapshot of the on-disk store; only
/// [`ImportMode::NewOnly`] consults it, so repeated previews of a large
/// export stay stable while the operator merges pieces of it.
pub fn apply_import(
    current: &ContentStore,
    original: &ContentStore,
    candidate: ContentStore,
    mode: ImportMode,
) -> (ContentStore, ImportReport) {
    match mode {
        ImportMode::Replace => {
            let report = ImportReport {
                added: candidate.project_count(),
                skipped: 0,
            };
            (candidate, report)
        }
        ImportMode::Merge => merge_stores(current, &candidate),
        ImportMode::NewOnly => filter_new_only(original, &candidate),
    }
}

/// Fold candidate services/projects into `current`.
///
/// Unknown service ids are appended whole; for known service ids each
/// candidate project is appended unless it is a duplicate. The derived
/// `projectIds` array tracks appends automatically.
pub fn merge_stores(
    current: &ContentStore,
    candidate: &ContentStore,
) -> (ContentStore, ImportReport) {
    let mut merged = current.clone();
    let mut report = ImportReport::default();

    for cand_service in &candidate.services {
        match merged.services.iter_mut().find(|s| s.id == cand_service.id) {
            None => {
                report.added += cand_service.projects.len();
                merged.services.push(cand_service.clone());
            }
            Some(existing) => {
                for project in &cand_service.projects {
                    if is_duplicate(existing, project) {
                        report.skipped += 1;
                    } else {
                        existing.projects.push(project.clone());
                        report.added += 1;
                    }
                }
            }
        }
    }

    (merged, report)
}

/// Reduce `candidate` to the projects that are novel relative to `original`.
///
/// Services with no novel projects are dropped from the result.
pub fn filter_new_only(
    original: &ContentStore,
    candidate: &ContentStore,
) -> (ContentStore, ImportReport) {
    let mut report = ImportReport::default();
    let mut services = Vec::new();

    for cand_service in &candidate.services {
        let existing = original.services.iter().find(|s| s.id == cand_service.id);

        let novel: Vec<Project> = cand_service
            .projects
            .iter()
            .filter(|project| match existing {
                Some(service) if is_duplicate(service, project) => {
                    report.skipped += 1;
                    false
                }
                _ => {
                    report.added += 1;
                    true
                }
            })
            .cloned()
            .collect();

        if !novel.is_empty() {
            services.push(Service {
                id: cand_service.id.clone(),
                name: cand_service.name.clone(),
                projects: novel,
            });
        }
    }

    (ContentStore { services }, report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn store(raw: &str) -> ContentStore {
        ContentStore::from_json(raw).unwrap()
    }

    fn base() -> ContentStore {
        store(
            r#"{"services": [
                { "id": "detailing", "name": "Car Detailing", "projects": [
                    { "id": "p1", "name": "Porsche 911 GT3" },
                    { "id": "p2", "name": "Audi RS6" }
                ] }
            ]}"#,
        )
    }

    // -- Merge ---------------------------------------------------------------

    #[test]
    fn merge_skips_duplicate_id_in_same_service() {
        let candidate = store(
            r#"{"services": [
                { "id": "detailing", "name": "Car Detailing", "projects": [
                    { "id": "p1", "name": "Completely Different Name" }
                ] }
            ]}"#,
        );

        let (merged, report) = merge_stores(&base(), &candidate);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.added, 0);
        assert_eq!(merged.project_count(), 2);
    }

    #[test]
    fn merge_skips_duplicate_name_case_and_whitespace_insensitive() {
        let candidate = store(
            r#"{"services": [
                { "id": "detailing", "name": "Car Detailing", "projects": [
                    { "id": "p99", "name": "  porsche 911 gt3  " }
                ] }
            ]}"#,
        );

        let (merged, report) = merge_stores(&base(), &candidate);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.added, 0);
        assert_eq!(merged.project_count(), 2);
    }

    #[test]
    fn merge_appends_novel_projects_to_known_service() {
        let candidate = store(
            r#"{"services": [
                { "id": "detailing", "name": "Car Detailing", "projects": [
                    { "id": "p3", "name": "Bentley Continental GT" }
                ] }
            ]}"#,
        );

        let (merged, report) = merge_stores(&base(), &candidate);
        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 0);

        let service = &merged.services[0];
        assert_eq!(service.project_ids(), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn merge_appends_unknown_service_whole() {
        let candidate = store(
            r#"{"services": [
                { "id": "coating", "name": "Ceramic Coating", "projects": [
                    { "id": "p10", "name": "Tesla Model S" },
                    { "id": "p11", "name": "BMW M4" }
                ] }
            ]}"#,
        );

        let (merged, report) = merge_stores(&base(), &candidate);
        assert_eq!(report.added, 2);
        assert_eq!(merged.services.len(), 2);
    }

    #[test]
    fn merge_same_name_in_different_service_is_not_a_duplicate() {
        // Duplicate detection is scoped per service.
        let candidate = store(
            r#"{"services": [
                { "id": "coating", "name": "Ceramic Coating", "projects": [
                    { "id": "p10", "name": "Porsche 911 GT3" }
                ] }
            ]}"#,
        );

        let (merged, report) = merge_stores(&base(), &candidate);
        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(merged.project_count(), 3);
    }

    #[test]
    fn merge_dedupes_within_the_candidate_itself() {
        let candidate = store(
            r#"{"services": [
                { "id": "detailing", "name": "Car Detailing", "projects": [
                    { "id": "p3", "name": "Bentley Continental GT" },
                    { "id": "p4", "name": "bentley continental gt" }
                ] }
            ]}"#,
        );

        let (_, report) = merge_stores(&base(), &candidate);
        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 1);
    }

    // -- New-only filter -----------------------------------------------------

    #[test]
    fn new_only_filters_against_the_original_snapshot() {
        let original = base();

        // Current has already merged p3; the preview must still be computed
        // against the startup snapshot, so p3 stays "novel".
        let candidate = store(
            r#"{"services": [
                { "id": "detailing", "name": "Car Detailing", "projects": [
                    { "id": "p1", "name": "Porsche 911 GT3" },
                    { "id": "p3", "name": "Bentley Continental GT" }
                ] }
            ]}"#,
        );

        let mut current = original.clone();
        let (after_merge, _) = merge_stores(&current, &candidate);
        current = after_merge;

        let (preview, report) = apply_import(&current, &original, candidate, ImportMode::NewOnly);
        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(preview.project_count(), 1);
        assert_eq!(preview.services[0].projects[0].id, "p3");
    }

    #[test]
    fn new_only_drops_services_with_no_novel_projects() {
        let candidate = store(
            r#"{"services": [
                { "id": "detailing", "name": "Car Detailing", "projects": [
                    { "id": "p1", "name": "Porsche 911 GT3" }
                ] }
            ]}"#,
        );

        let (preview, report) = filter_new_only(&base(), &candidate);
        assert!(preview.services.is_empty());
        assert_eq!(report.skipped, 1);
        assert_eq!(report.added, 0);
    }

    // -- Replace -------------------------------------------------------------

    #[test]
    fn replace_is_idempotent() {
        let candidate = store(
            r#"{"services": [
                { "id": "coating", "name": "Ceramic Coating", "projects": [
                    { "id": "p10", "name": "Tesla Model S" }
                ] }
            ]}"#,
        );

        let (first, r1) =
            apply_import(&base(), &base(), candidate.clone(), ImportMode::Replace);
        let (second, r2) = apply_import(&first, &base(), candidate, ImportMode::Replace);

        assert_eq!(first, second);
        assert_eq!(r1, r2);
        assert_eq!(r1.added, 1);
        assert_eq!(r1.skipped, 0);
    }

    #[test]
    fn replace_bypasses_duplicate_detection() {
        let candidate = base();
        let (replaced, report) = apply_import(&base(), &base(), candidate, ImportMode::Replace);
        assert_eq!(replaced, base());
        assert_eq!(report.added, 2);
        assert_eq!(report.skipped, 0);
    }
}
