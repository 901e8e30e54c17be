//! Fragment listing resolution

use std::collections::HashSet;

use curriculum_client::FragmentSource;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::config::{CurriculumConfig, ListingMode};
use crate::error::{CurriculumError, Result};

/// Resolve the fragment names to load, in listing order, without
/// duplicates or excluded names.
///
/// Only a failed index under `listing = "index"` is an error; the fallback
/// mode degrades to probing the static list.
pub async fn resolve_sources(source: &dyn FragmentSource, config: &CurriculumConfig) -> Result<Vec<String>> {
    let names = match config.source.listing {
        ListingMode::Static => config.source.static_sources.clone(),
        ListingMode::Index => {
            let index = source
                .fetch_index()
                .await
                .map_err(|e| CurriculumError::AssemblyFailed(format!("source listing: {}", e)))?;
            info!(files = index.files.len(), "Using curriculum index");
            index.files
        }
        ListingMode::IndexWithFallback => match source.fetch_index().await {
            Ok(index) => {
                info!(files = index.files.len(), "Using curriculum index");
                index.files
            }
            Err(e) => {
                warn!(error = %e, "No curriculum index found, probing built-in list");
                probe_static_sources(source, config).await
            }
        },
    };

    let mut seen = HashSet::new();
    Ok(names
        .into_iter()
        .filter(|name| {
            if config.is_excluded(name) {
                warn!(source = %name, "Skipping excluded fragment");
                return false;
            }
            seen.insert(name.clone())
        })
        .collect())
}

/// Keep the static names that exist and are not larger than
/// `max_fragment_bytes`. A fragment that declares no size is kept.
async fn probe_static_sources(source: &dyn FragmentSource, config: &CurriculumConfig) -> Vec<String> {
    let max_bytes = config.fetch.max_fragment_bytes;

    let candidates: Vec<String> = config
        .source
        .static_sources
        .iter()
        .filter(|name| !config.is_excluded(name))
        .cloned()
        .collect();
    let existing: Vec<String> = stream::iter(candidates)
        .map(|name| async move {
            let probed = source.probe_size(&name).await;
            (name, probed)
        })
        .buffered(config.fetch.concurrency())
        .filter_map(|(name, probed)| async move {
            match probed {
                Ok(Some(size)) if size > max_bytes => {
                    warn!(source = %name, size_mb = size / 1024 / 1024, "Skipping fragment: too large");
                    None
                }
                Ok(_) => Some(name),
                Err(e) => {
                    debug!(source = %name, error = %e, "Fragment not found");
                    None
                }
            }
        })
        .collect()
        .await;

    info!(files = existing.len(), "Discovered curriculum fragments");
    existing
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_client::{FetchError, MockFragmentSource};
    use serde_json::json;

    fn body() -> serde_json::Value {
        json!({ "curriculumData": { "areas": [] } })
    }

    fn config(listing: ListingMode, statics: &[&str]) -> CurriculumConfig {
        let mut config = CurriculumConfig::default();
        config.source.listing = listing;
        config.source.static_sources = statics.iter().map(|s| s.to_string()).collect();
        config
    }

    #[tokio::test]
    async fn test_index_listing_dedupes_and_excludes() {
        let source = MockFragmentSource::new().with_index(["AT-17", "IS-15", "AT-17", "RJ-72 - 72 - B"]);
        let mut config = config(ListingMode::Index, &[]);
        config.source.excluded_sources = vec!["RJ-72 - 72".to_string()];

        let names = resolve_sources(&source, &config).await.unwrap();
        assert_eq!(names, vec!["AT-17", "IS-15"]);
    }

    #[tokio::test]
    async fn test_default_config_drops_oversized_fragments() {
        let source = MockFragmentSource::new().with_index([
            "RJ-72 - 72 - Desenvolvimento, Construção e Teste de Sistema Aeroespacial A (Notas 2 e 3).json",
            "AT-17 - 17 - Vetores.json",
            "RJ-78 - 78 - Valores, Empreendedorismo e Liderança.json",
            "SP-65 - 65 - Navegação.json",
            "RJ-73 - 73 - Projeto.json",
        ]);
        let mut config = CurriculumConfig::default();
        config.source.listing = ListingMode::Index;

        let names = resolve_sources(&source, &config).await.unwrap();
        assert_eq!(names, vec!["AT-17 - 17 - Vetores.json", "RJ-73 - 73 - Projeto.json"]);
    }

    #[tokio::test]
    async fn test_index_listing_failure_is_assembly_failure() {
        let source = MockFragmentSource::new();
        let err = resolve_sources(&source, &config(ListingMode::Index, &[])).await.unwrap_err();
        assert!(matches!(err, CurriculumError::AssemblyFailed(_)));
    }

    #[tokio::test]
    async fn test_fallback_probes_static_list() {
        let source = MockFragmentSource::new()
            .with_index_failure(FetchError::NotJson {
                source_name: "index.json".into(),
                content_type: "text/html".into(),
            })
            .with_fragment("AT-17", body())
            .with_sized_fragment("RJ-22", body(), 3 * 1024 * 1024)
            .with_sized_fragment("IS-15", body(), 1024);

        let names = resolve_sources(
            &source,
            &config(ListingMode::IndexWithFallback, &["AT-17", "RJ-22", "XX-01", "IS-15"]),
        )
        .await
        .unwrap();

        assert_eq!(names, vec!["AT-17", "IS-15"]);
        assert_eq!(source.probe_count("XX-01"), 1);
        assert_eq!(source.total_fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_static_listing_skips_index() {
        let source = MockFragmentSource::new().with_index(["AT-17"]);
        let names = resolve_sources(&source, &config(ListingMode::Static, &["IS-15"])).await.unwrap();
        assert_eq!(names, vec!["IS-15"]);
        assert_eq!(source.index_count(), 0);
    }
}
