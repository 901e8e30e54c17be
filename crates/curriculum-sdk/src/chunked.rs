//! Progressive curriculum store
//!
//! Discovery probes every listed fragment. Fragments above the size
//! threshold become metadata stubs (`is_chunked`, zero counts) and are
//! fetched only when their discipline is first requested; every other
//! fragment is fetched during discovery and flattened into chunk maps
//! straight away.
//!
//! Skill lookups never fetch: a skill resolves only once its discipline
//! has been loaded.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use curriculum_client::FragmentSource;
use curriculum_model::{
    area_for_prefix, title_from_source_name, Area, CurriculumDocument, Difficulty, Discipline, FragmentCode,
    SpecificSkill,
};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tokio::sync::{watch, Mutex, OnceCell, RwLock};
use tracing::{debug, info, instrument};

use crate::assembly::{fetch_namespaced, log_fragment_failure, stamp_document};
use crate::chunks::{ChunkMarker, DisciplineChunks};
use crate::config::CurriculumConfig;
use crate::error::{CurriculumError, Result};
use crate::listing::resolve_sources;
use crate::loader::CurriculumLoader;
use crate::progress::{LoadingProgress, LoadingStage, ProgressReporter};

/// What discovery learned about one fragment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineMeta {
    pub source_name: String,
    pub code: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_skills: usize,
    pub total_topics: usize,
    pub is_chunked: bool,
    pub size_bytes: Option<u64>,
    pub chunk_ids: Vec<String>,
}

impl DisciplineMeta {
    fn deferred(source_name: &str, code: &FragmentCode, size_bytes: Option<u64>) -> Self {
        Self {
            source_name: source_name.to_string(),
            code: code.to_string(),
            id: code.to_string(),
            name: title_from_source_name(source_name),
            description: String::new(),
            total_skills: 0,
            total_topics: 0,
            is_chunked: true,
            size_bytes,
            chunk_ids: ChunkMarker::ALL
                .iter()
                .map(|marker| format!("{}:{}", code, marker.as_str()))
                .collect(),
        }
    }

    fn loaded(source_name: &str, code: &FragmentCode, size_bytes: Option<u64>, chunks: &FragmentChunks) -> Self {
        let first = chunks.disciplines.first();
        Self {
            source_name: source_name.to_string(),
            code: code.to_string(),
            id: first.map(|d| d.id().to_string()).unwrap_or_else(|| code.to_string()),
            name: first
                .map(|d| d.name().to_string())
                .unwrap_or_else(|| title_from_source_name(source_name)),
            description: first.map(|d| d.description().to_string()).unwrap_or_default(),
            total_skills: chunks.disciplines.iter().map(|d| d.skill_count()).sum(),
            total_topics: chunks.disciplines.iter().map(|d| d.topic_count()).sum(),
            is_chunked: false,
            size_bytes,
            chunk_ids: Vec::new(),
        }
    }

    /// Placeholder discipline shown until the fragment is loaded
    fn stub(&self) -> Discipline {
        Discipline {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            total_skills: self.total_skills,
            main_topics: Vec::new(),
            is_chunked: self.is_chunked,
        }
    }
}

/// Chunk maps of every discipline in one fragment, plus the rebuilt trees
#[derive(Debug)]
struct FragmentChunks {
    disciplines: Vec<DisciplineChunks>,
    views: Vec<Arc<Discipline>>,
}

impl FragmentChunks {
    fn from_areas(areas: &[Area], is_chunked: bool) -> Self {
        let disciplines: Vec<DisciplineChunks> = areas
            .iter()
            .flat_map(|a| a.disciplines.iter())
            .map(DisciplineChunks::from_discipline)
            .collect();
        let views = disciplines.iter().map(|d| Arc::new(d.reconstruct(is_chunked))).collect();
        Self { disciplines, views }
    }

    fn is_fully_loaded(&self) -> bool {
        self.disciplines.iter().all(DisciplineChunks::is_fully_loaded)
    }

    /// Index of the discipline `id` names; the bare fragment code names the first.
    fn position(&self, code: &FragmentCode, id: &str) -> Option<usize> {
        if id == code.as_str() {
            return (!self.disciplines.is_empty()).then_some(0);
        }
        self.disciplines.iter().position(|d| d.id() == id)
    }
}

#[derive(Debug)]
struct CatalogEntry {
    code: FragmentCode,
    meta: DisciplineMeta,
}

#[derive(Debug, Default)]
struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    fn owner_of(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.code.owns(id))
    }
}

type CatalogCell = Arc<OnceCell<Arc<Catalog>>>;
type ChunkSlot = Arc<OnceCell<Arc<FragmentChunks>>>;

/// Progressive curriculum store.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use curriculum_client::HttpFragmentSource;
/// use curriculum_sdk::{ChunkedCurriculumStore, CurriculumConfig, CurriculumLoader};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CurriculumConfig::default();
/// let source = Arc::new(HttpFragmentSource::new(config.http_source())?);
/// let store = ChunkedCurriculumStore::new(source, config);
///
/// let mut progress = store.subscribe_progress();
/// tokio::spawn(async move {
///     while progress.changed().await.is_ok() {
///         println!("{:?}", *progress.borrow());
///     }
/// });
///
/// store.load_curriculum().await?;
/// let discipline = store.load_discipline("IS-15").await?;
/// # Ok(())
/// # }
/// ```
pub struct ChunkedCurriculumStore {
    source: Arc<dyn FragmentSource>,
    config: CurriculumConfig,
    progress: ProgressReporter,
    catalog: RwLock<CatalogCell>,
    slots: Mutex<HashMap<FragmentCode, ChunkSlot>>,
}

impl ChunkedCurriculumStore {
    pub fn new(source: Arc<dyn FragmentSource>, config: CurriculumConfig) -> Self {
        Self {
            source,
            config,
            progress: ProgressReporter::new(),
            catalog: RwLock::new(Arc::new(OnceCell::new())),
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &CurriculumConfig {
        &self.config
    }

    /// Progress updates; dropping the receiver unsubscribes.
    pub fn subscribe_progress(&self) -> watch::Receiver<LoadingProgress> {
        self.progress.subscribe()
    }

    pub fn progress(&self) -> LoadingProgress {
        self.progress.snapshot()
    }

    /// Discovered fragments in listing order; empty before discovery
    pub async fn disciplines_meta(&self) -> Vec<DisciplineMeta> {
        match self.current_catalog().await {
            Some(catalog) => catalog.entries.iter().map(|e| e.meta.clone()).collect(),
            None => Vec::new(),
        }
    }

    /// Whether a discipline's content has been loaded
    pub async fn is_discipline_loaded(&self, id: &str) -> bool {
        let Some(catalog) = self.current_catalog().await else {
            return false;
        };
        let Some(entry) = catalog.owner_of(id) else {
            return false;
        };
        let slots = self.slots.lock().await;
        Self::loaded(&slots, &entry.code)
            .map(|chunks| chunks.position(&entry.code, id).is_some())
            .unwrap_or(false)
    }

    async fn current_catalog(&self) -> Option<Arc<Catalog>> {
        self.catalog.read().await.get().cloned()
    }

    async fn ensure_catalog(&self) -> Result<Arc<Catalog>> {
        Ok(self.ensure_catalog_cell().await?.1)
    }

    /// The catalog together with the cell it was read from
    async fn ensure_catalog_cell(&self) -> Result<(CatalogCell, Arc<Catalog>)> {
        let cell = self.catalog.read().await.clone();
        let catalog = cell.get_or_try_init(|| self.discover(&cell)).await?.clone();
        Ok((cell, catalog))
    }

    fn loaded(slots: &HashMap<FragmentCode, ChunkSlot>, code: &FragmentCode) -> Option<Arc<FragmentChunks>> {
        slots
            .get(code)
            .and_then(|slot| slot.get())
            .filter(|chunks| chunks.is_fully_loaded())
            .cloned()
    }

    /// Every loaded fragment, in catalog order
    async fn loaded_fragments(&self) -> Vec<Arc<FragmentChunks>> {
        let Some(catalog) = self.current_catalog().await else {
            return Vec::new();
        };
        let slots = self.slots.lock().await;
        catalog
            .entries
            .iter()
            .filter_map(|e| Self::loaded(&slots, &e.code))
            .collect()
    }

    fn loaded_skills(fragments: &[Arc<FragmentChunks>]) -> impl Iterator<Item = Arc<SpecificSkill>> + '_ {
        fragments
            .iter()
            .flat_map(|f| f.disciplines.iter())
            .flat_map(|d| d.skills())
    }

    #[instrument(skip(self, cell))]
    async fn discover(&self, cell: &CatalogCell) -> Result<Arc<Catalog>> {
        self.progress.begin(LoadingStage::Discovering, 0);
        let names = resolve_sources(self.source.as_ref(), &self.config).await?;
        info!(fragments = names.len(), source = %self.source.describe(), "Discovering curriculum");

        self.progress.begin(LoadingStage::LoadingMetadata, names.len());
        let discovered: Vec<_> = stream::iter(names.iter().cloned())
            .map(|name| async move {
                let found = self.discover_fragment(&name).await;
                (name, found)
            })
            .buffered(self.config.fetch.concurrency())
            .inspect(|(name, _)| self.progress.advance(name))
            .collect()
            .await;

        let mut catalog = Catalog::default();
        let mut essential = Vec::new();
        for (_, found) in discovered.into_iter() {
            let Some((entry, chunks)) = found else { continue };
            if let Some(chunks) = chunks {
                essential.push((entry.code.clone(), entry.meta.source_name.clone(), chunks));
            }
            catalog.entries.push(entry);
        }

        let deferred = catalog.entries.iter().filter(|e| e.meta.is_chunked).count();
        self.progress.begin(LoadingStage::LoadingChunks, essential.len());

        // Retired by clear_cache while discovering: publish nothing.
        let current = self.catalog.read().await;
        if Arc::ptr_eq(&current, cell) {
            let mut slots = self.slots.lock().await;
            for (code, source_name, chunks) in essential {
                slots.insert(code, Arc::new(OnceCell::new_with(Some(Arc::new(chunks)))));
                self.progress.advance(&source_name);
            }
        }

        self.progress.complete(catalog.entries.len());
        info!(
            disciplines = catalog.entries.len(),
            deferred,
            "Curriculum structure ready"
        );
        Ok(Arc::new(catalog))
    }

    /// Probe one fragment and either defer it or load it in full.
    /// `None` when it cannot be used at all.
    async fn discover_fragment(&self, source_name: &str) -> Option<(CatalogEntry, Option<FragmentChunks>)> {
        let code = FragmentCode::from_source_name(source_name);
        let size = match self.source.probe_size(source_name).await {
            Ok(size) => size,
            Err(e) => {
                log_fragment_failure(source_name, &e);
                return None;
            }
        };

        if size.is_some_and(|bytes| bytes > self.config.chunking.size_threshold_bytes) {
            debug!(source = %source_name, size, "Deferring large fragment");
            let meta = DisciplineMeta::deferred(source_name, &code, size);
            return Some((CatalogEntry { code, meta }, None));
        }

        match fetch_namespaced(self.source.as_ref(), source_name, self.config.fetch.full_timeout()).await {
            Ok(areas) => {
                let chunks = FragmentChunks::from_areas(&areas, false);
                let meta = DisciplineMeta::loaded(source_name, &code, size, &chunks);
                Some((CatalogEntry { code, meta }, Some(chunks)))
            }
            Err(e) => {
                log_fragment_failure(source_name, &e);
                None
            }
        }
    }

    /// Slot for `code`, or `None` once `cell` has been retired by
    /// `clear_cache`.
    async fn slot(&self, cell: &CatalogCell, code: &FragmentCode) -> Option<ChunkSlot> {
        let current = self.catalog.read().await;
        if !Arc::ptr_eq(&current, cell) {
            return None;
        }
        let slot = self
            .slots
            .lock()
            .await
            .entry(code.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();
        Some(slot)
    }

    #[instrument(skip(self, entry), fields(source = %entry.meta.source_name))]
    async fn fetch_chunks(&self, entry: &CatalogEntry) -> Result<Arc<FragmentChunks>> {
        let areas = fetch_namespaced(
            self.source.as_ref(),
            &entry.meta.source_name,
            self.config.fetch.chunk_timeout(),
        )
        .await
        .map_err(|e| {
            log_fragment_failure(&entry.meta.source_name, &e);
            CurriculumError::from(e)
        })?;

        let chunks = FragmentChunks::from_areas(&areas, entry.meta.is_chunked);
        info!(
            code = %entry.code,
            skills = chunks.disciplines.iter().map(|d| d.skill_count()).sum::<usize>(),
            "Discipline loaded"
        );
        Ok(Arc::new(chunks))
    }

    /// Area tree from the area lookup table; loaded fragments contribute
    /// their full disciplines, deferred ones their stubs.
    async fn structure(&self, catalog: &Catalog) -> Vec<Area> {
        let slots = self.slots.lock().await;
        let mut areas: Vec<Area> = Vec::new();

        for entry in &catalog.entries {
            let info = area_for_prefix(entry.code.area_prefix());
            let disciplines: Vec<Discipline> = match Self::loaded(&slots, &entry.code) {
                Some(chunks) => chunks.views.iter().map(|d| d.as_ref().clone()).collect(),
                None => vec![entry.meta.stub()],
            };

            let area = match areas.iter_mut().position(|a| a.id == info.id) {
                Some(i) => &mut areas[i],
                None => {
                    areas.push(Area {
                        id: info.id.to_string(),
                        name: info.name.to_string(),
                        description: info.description.to_string(),
                        total_skills: 0,
                        percentage: 0.0,
                        disciplines: Vec::new(),
                    });
                    let last = areas.len() - 1;
                    &mut areas[last]
                }
            };
            area.total_skills += disciplines.iter().map(|d| d.total_skills).sum::<usize>();
            area.disciplines.extend(disciplines);
        }

        areas
    }
}

#[async_trait]
impl CurriculumLoader for ChunkedCurriculumStore {
    /// Current snapshot: deferred disciplines appear as stubs until loaded.
    async fn load_curriculum(&self) -> Result<Arc<CurriculumDocument>> {
        let catalog = self.ensure_catalog().await?;
        let areas = self.structure(&catalog).await;
        Ok(Arc::new(stamp_document(areas, &self.config.metadata)))
    }

    async fn load_discipline(&self, id: &str) -> Result<Arc<Discipline>> {
        loop {
            let (cell, catalog) = self.ensure_catalog_cell().await?;
            let entry = catalog
                .owner_of(id)
                .ok_or_else(|| CurriculumError::discipline_not_found(id))?;

            let Some(slot) = self.slot(&cell, &entry.code).await else {
                debug!(id, "Catalog cleared during load; rediscovering");
                continue;
            };
            let chunks = slot.get_or_try_init(|| self.fetch_chunks(entry)).await?;

            return chunks
                .position(&entry.code, id)
                .map(|i| chunks.views[i].clone())
                .ok_or_else(|| CurriculumError::discipline_not_found(id));
        }
    }

    async fn load_skill(&self, id: &str) -> Result<Arc<SpecificSkill>> {
        let fragments = self.loaded_fragments().await;
        fragments
            .iter()
            .flat_map(|f| f.disciplines.iter())
            .find_map(|d| d.skill(id))
            .ok_or_else(|| CurriculumError::skill_not_found(id))
    }

    async fn get_all_disciplines(&self) -> Vec<Arc<Discipline>> {
        let Some(catalog) = self.current_catalog().await else {
            return Vec::new();
        };
        let slots = self.slots.lock().await;
        catalog
            .entries
            .iter()
            .flat_map(|entry| match Self::loaded(&slots, &entry.code) {
                Some(chunks) => chunks.views.clone(),
                None => vec![Arc::new(entry.meta.stub())],
            })
            .collect()
    }

    async fn get_all_skills(&self) -> Vec<Arc<SpecificSkill>> {
        let fragments = self.loaded_fragments().await;
        Self::loaded_skills(&fragments).collect()
    }

    async fn get_skills_by_discipline(&self, discipline_id: &str) -> Vec<Arc<SpecificSkill>> {
        let Some(catalog) = self.current_catalog().await else {
            return Vec::new();
        };
        let Some(entry) = catalog.owner_of(discipline_id) else {
            return Vec::new();
        };
        let slots = self.slots.lock().await;
        Self::loaded(&slots, &entry.code)
            .and_then(|chunks| {
                chunks
                    .position(&entry.code, discipline_id)
                    .map(|i| chunks.disciplines[i].skills())
            })
            .unwrap_or_default()
    }

    async fn search_skills(&self, query: &str) -> Vec<Arc<SpecificSkill>> {
        let lower = query.to_lowercase();
        let fragments = self.loaded_fragments().await;
        Self::loaded_skills(&fragments)
            .filter(|s| s.matches_query(&lower))
            .collect()
    }

    async fn get_skills_by_difficulty(&self, difficulty: Difficulty) -> Vec<Arc<SpecificSkill>> {
        let fragments = self.loaded_fragments().await;
        Self::loaded_skills(&fragments)
            .filter(|s| s.difficulty == Some(difficulty))
            .collect()
    }

    async fn clear_cache(&self) {
        let mut catalog = self.catalog.write().await;
        *catalog = Arc::new(OnceCell::new());
        self.slots.lock().await.clear();
        self.progress.reset();
        info!("Chunked curriculum cache cleared");
    }

    async fn is_loaded(&self) -> bool {
        self.catalog.read().await.initialized()
    }
}
