//! Per-fragment fetch and document stamping, shared by both stores

use std::time::Duration;

use chrono::Utc;
use curriculum_client::{FetchError, FragmentSource};
use curriculum_model::{namespace_areas, Area, Curriculum, CurriculumDocument, CurriculumMetadata, FragmentCode};
use tracing::{debug, error, warn};

use crate::config::MetadataConfig;

/// Fetch one fragment and namespace its areas under the fragment's code.
pub(crate) async fn fetch_namespaced(
    source: &dyn FragmentSource,
    source_name: &str,
    timeout: Duration,
) -> Result<Vec<Area>, FetchError> {
    let code = FragmentCode::from_source_name(source_name);
    let fragment = source.fetch_fragment(source_name, timeout).await?;
    let areas = namespace_areas(fragment.curriculum_data.areas, &code);
    debug!(source = %source_name, code = %code, areas = areas.len(), "Fragment namespaced");
    Ok(areas)
}

/// Log a per-fragment failure at the level its class deserves.
pub(crate) fn log_fragment_failure(source_name: &str, err: &FetchError) {
    match err {
        FetchError::Timeout { .. } => {
            error!(source = %source_name, error = %err, "Timeout loading fragment: file too large or server slow")
        }
        FetchError::Malformed { .. } => {
            error!(source = %source_name, error = %err, "Invalid fragment, skipping")
        }
        _ => warn!(source = %source_name, error = %err, "Failed to load fragment, skipping"),
    }
}

/// Wrap merged areas in a document stamped with the assembly time.
pub fn stamp_document(areas: Vec<Area>, metadata: &MetadataConfig) -> CurriculumDocument {
    let now = Utc::now();
    let total_atomic_skills = areas.iter().map(|a| a.total_skills).sum();

    CurriculumDocument {
        format_version: metadata.format_version.clone(),
        export_date: now.to_rfc3339(),
        app_version: metadata.app_version.clone(),
        curriculum_data: Curriculum {
            metadata: CurriculumMetadata {
                start_date: metadata.start_date.clone(),
                duration: metadata.duration.clone(),
                daily_study_hours: metadata.daily_study_hours.clone(),
                total_atomic_skills,
                version: metadata.version.clone(),
                last_updated: now.format("%Y-%m-%d").to_string(),
                institution: metadata.institution.clone(),
                based_on: metadata.based_on.clone(),
            },
            areas,
            infographics: None,
            settings: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_document_shape() {
        let document = stamp_document(vec![], &MetadataConfig::default());
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value["formatVersion"], "1.0");
        assert_eq!(value["appVersion"], "2.0.0");
        assert!(value["curriculumData"]["infographics"].is_null());
        assert!(value["curriculumData"]["settings"].is_null());
        assert_eq!(value["curriculumData"]["metadata"]["totalAtomicSkills"], 0);
        assert_eq!(document.curriculum_data.metadata.last_updated.len(), 10);
        assert!(document.export_date.starts_with(&document.curriculum_data.metadata.last_updated));
    }
}
