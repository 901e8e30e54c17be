//! Curriculum store (eager assembly)
//!
//! Fetches every listed fragment, namespaces each one, merges the areas into
//! one document and flattens it into the aggregate cache. The document is
//! memoized until `clear_cache`.
//!
//! Concurrent callers share one in-flight assembly: the memo is a
//! `OnceCell`, so whoever arrives while assembly runs awaits the same
//! result. A failed assembly leaves the cell empty and the next call
//! retries.

use std::sync::Arc;

use async_trait::async_trait;
use curriculum_client::FragmentSource;
use curriculum_model::{CurriculumDocument, Difficulty, Discipline, SpecificSkill};
use futures::stream::{self, StreamExt};
use tokio::sync::{OnceCell, RwLock};
use tracing::{info, instrument};

use crate::assembly::{fetch_namespaced, log_fragment_failure, stamp_document};
use crate::cache::AggregateCache;
use crate::config::CurriculumConfig;
use crate::error::{CurriculumError, Result};
use crate::listing::resolve_sources;
use crate::loader::CurriculumLoader;

type DocumentCell = Arc<OnceCell<Arc<CurriculumDocument>>>;

/// Eagerly assembled curriculum with an id-keyed cache.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use curriculum_client::HttpFragmentSource;
/// use curriculum_sdk::{CurriculumConfig, CurriculumLoader, CurriculumStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CurriculumConfig::default();
/// let source = Arc::new(HttpFragmentSource::new(config.http_source())?);
/// let store = CurriculumStore::new(source, config);
///
/// let document = store.load_curriculum().await?;
/// let skill = store.load_skill("AT-17.1.1.1").await?;
/// # Ok(())
/// # }
/// ```
pub struct CurriculumStore {
    source: Arc<dyn FragmentSource>,
    config: CurriculumConfig,
    document: RwLock<DocumentCell>,
    cache: RwLock<Arc<AggregateCache>>,
}

impl CurriculumStore {
    pub fn new(source: Arc<dyn FragmentSource>, config: CurriculumConfig) -> Self {
        Self {
            source,
            config,
            document: RwLock::new(Arc::new(OnceCell::new())),
            cache: RwLock::new(Arc::new(AggregateCache::default())),
        }
    }

    pub fn config(&self) -> &CurriculumConfig {
        &self.config
    }

    /// Current aggregate cache
    pub async fn cache(&self) -> Arc<AggregateCache> {
        self.cache.read().await.clone()
    }

    #[instrument(skip(self, cell))]
    async fn assemble(&self, cell: &DocumentCell) -> Result<Arc<CurriculumDocument>> {
        let names = resolve_sources(self.source.as_ref(), &self.config).await?;
        info!(fragments = names.len(), source = %self.source.describe(), "Assembling curriculum");

        let timeout = self.config.fetch.full_timeout();
        let source = self.source.as_ref();
        let fragments: Vec<_> = stream::iter(names.iter().cloned())
            .map(|name| async move {
                let outcome = fetch_namespaced(source, &name, timeout).await;
                (name, outcome)
            })
            .buffered(self.config.fetch.concurrency())
            .collect()
            .await;

        let mut areas = Vec::new();
        let mut failed = 0usize;
        for (name, outcome) in fragments {
            match outcome {
                Ok(fragment_areas) => areas.extend(fragment_areas),
                Err(e) => {
                    failed += 1;
                    log_fragment_failure(&name, &e);
                }
            }
        }

        let document = Arc::new(stamp_document(areas, &self.config.metadata));
        let cache = Arc::new(AggregateCache::build(&document));
        info!(
            fragments = names.len(),
            failed,
            disciplines = cache.discipline_count(),
            skills = cache.skill_count(),
            "Curriculum assembled"
        );

        // A clear_cache during assembly retires this cell; its result must
        // not repopulate the cache.
        let current = self.document.read().await;
        if Arc::ptr_eq(&current, cell) {
            *self.cache.write().await = cache;
        }

        Ok(document)
    }
}

#[async_trait]
impl CurriculumLoader for CurriculumStore {
    async fn load_curriculum(&self) -> Result<Arc<CurriculumDocument>> {
        let cell = self.document.read().await.clone();
        let document = cell.get_or_try_init(|| self.assemble(&cell)).await?;
        Ok(document.clone())
    }

    async fn load_discipline(&self, id: &str) -> Result<Arc<Discipline>> {
        if let Some(discipline) = self.cache().await.discipline(id) {
            return Ok(discipline);
        }

        self.load_curriculum().await?;
        self.cache()
            .await
            .discipline(id)
            .ok_or_else(|| CurriculumError::discipline_not_found(id))
    }

    async fn load_skill(&self, id: &str) -> Result<Arc<SpecificSkill>> {
        if let Some(skill) = self.cache().await.skill(id) {
            return Ok(skill);
        }

        self.load_curriculum().await?;
        self.cache()
            .await
            .skill(id)
            .ok_or_else(|| CurriculumError::skill_not_found(id))
    }

    async fn get_all_disciplines(&self) -> Vec<Arc<Discipline>> {
        self.cache().await.disciplines()
    }

    async fn get_all_skills(&self) -> Vec<Arc<SpecificSkill>> {
        self.cache().await.skills()
    }

    async fn get_skills_by_discipline(&self, discipline_id: &str) -> Vec<Arc<SpecificSkill>> {
        self.cache().await.skills_of(discipline_id)
    }

    async fn search_skills(&self, query: &str) -> Vec<Arc<SpecificSkill>> {
        self.cache().await.search_skills(query)
    }

    async fn get_skills_by_difficulty(&self, difficulty: Difficulty) -> Vec<Arc<SpecificSkill>> {
        self.cache().await.skills_by_difficulty(difficulty)
    }

    async fn clear_cache(&self) {
        let mut document = self.document.write().await;
        *document = Arc::new(OnceCell::new());
        *self.cache.write().await = Arc::new(AggregateCache::default());
        info!("Curriculum cache cleared");
    }

    async fn is_loaded(&self) -> bool {
        self.document.read().await.initialized()
    }
}
