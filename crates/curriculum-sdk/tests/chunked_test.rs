//! Progressive store integration tests

use std::sync::Arc;
use std::time::Duration;

use curriculum_client::MockFragmentSource;
use curriculum_sdk::{ChunkedCurriculumStore, CurriculumConfig, CurriculumLoader, ListingMode, LoadingStage};
use serde_json::{json, Value};

const LARGE: &str = "IS-15 - 15 - Mecânica  I.json";
const SMALL: &str = "AT-17 - 17 - Vetores  e  Geometria  Analítica.json";

fn fragment(skill_count: usize) -> Value {
    let skills: Vec<Value> = (1..=skill_count)
        .map(|i| json!({ "id": format!("1.1.{}", i), "name": format!("Habilidade {}", i) }))
        .collect();
    json!({ "curriculumData": { "areas": [{
        "id": "area",
        "disciplines": [{
            "id": "disc",
            "name": "Disciplina",
            "mainTopics": [{ "id": "1", "atomicTopics": [{ "id": "1.1", "specificSkills": skills }] }]
        }]
    }]}})
}

fn chunked_over(source: MockFragmentSource) -> (Arc<MockFragmentSource>, ChunkedCurriculumStore) {
    let source = Arc::new(source);
    let mut config = CurriculumConfig::default();
    config.source.listing = ListingMode::Index;
    config.chunking.size_threshold_bytes = 1024 * 1024;
    (source.clone(), ChunkedCurriculumStore::new(source, config))
}

fn mixed_source() -> MockFragmentSource {
    MockFragmentSource::new()
        .with_sized_fragment(LARGE, fragment(7), 3 * 1024 * 1024)
        .with_fragment(SMALL, fragment(2))
        .with_full_index()
}

#[tokio::test]
async fn test_large_fragment_deferred_until_requested() {
    let (source, store) = chunked_over(mixed_source());

    let document = store.load_curriculum().await.unwrap();
    let stub = document.find_discipline("IS-15").unwrap();
    assert!(stub.is_chunked);
    assert_eq!(stub.total_skills, 0);
    assert_eq!(source.fetch_count(LARGE), 0);
    assert_eq!(source.probe_count(LARGE), 1);

    let small = document.find_discipline("AT-17.disc").unwrap();
    assert!(!small.is_chunked);
    assert_eq!(small.total_skills, 2);

    let loaded = store.load_discipline("IS-15").await.unwrap();
    assert_eq!(loaded.id, "IS-15.disc");
    assert_eq!(loaded.total_skills, 7);
    assert_eq!(source.fetch_count(LARGE), 1);

    let document = store.load_curriculum().await.unwrap();
    assert_eq!(document.find_discipline("IS-15.disc").unwrap().total_skills, 7);
    assert!(document.find_discipline("IS-15").is_none());
    assert_eq!(document.curriculum_data.metadata.total_atomic_skills, 9);
}

#[tokio::test]
async fn test_skill_lookup_requires_loaded_discipline() {
    let (_, store) = chunked_over(mixed_source());
    store.load_curriculum().await.unwrap();

    let err = store.load_skill("IS-15.1.1.3").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(store.get_skills_by_discipline("IS-15.disc").await.is_empty());

    store.load_discipline("IS-15.disc").await.unwrap();
    let skill = store.load_skill("IS-15.1.1.3").await.unwrap();
    assert_eq!(skill.name, "Habilidade 3");
    assert_eq!(store.get_skills_by_discipline("IS-15.disc").await.len(), 7);
}

#[tokio::test]
async fn test_small_fragments_load_once() {
    let (source, store) = chunked_over(mixed_source());

    store.load_curriculum().await.unwrap();
    let small = store.load_discipline("AT-17.disc").await.unwrap();
    assert_eq!(small.total_skills, 2);
    store.load_skill("AT-17.1.1.1").await.unwrap();

    assert_eq!(source.fetch_count(SMALL), 1);
    assert_eq!(source.index_count(), 1);
}

#[tokio::test]
async fn test_concurrent_discipline_loads_coalesce() {
    let (source, store) = chunked_over(mixed_source().with_delay(Duration::from_millis(50)));

    let (a, b) = tokio::join!(store.load_discipline("IS-15"), store.load_discipline("IS-15.disc"));

    assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
    assert_eq!(source.fetch_count(LARGE), 1);
    assert_eq!(source.index_count(), 1);
}

#[tokio::test]
async fn test_timed_out_discipline_load_is_retried() {
    let source = Arc::new(
        MockFragmentSource::new()
            .with_sized_fragment(LARGE, fragment(7), 3 * 1024 * 1024)
            .with_full_index()
            .with_delay(Duration::from_millis(1500)),
    );
    let mut config = CurriculumConfig::default();
    config.source.listing = ListingMode::Index;
    config.fetch.chunk_timeout_secs = 1;
    let store = ChunkedCurriculumStore::new(source.clone(), config);

    let err = store.load_discipline("IS-15").await.unwrap_err();
    assert!(!err.is_not_found());
    assert!(!store.is_discipline_loaded("IS-15").await);

    store.load_discipline("IS-15").await.unwrap_err();
    assert_eq!(source.fetch_count(LARGE), 2);
    assert_eq!(source.index_count(), 1);
}

#[tokio::test]
async fn test_unreachable_fragment_is_left_out() {
    let (_, store) = chunked_over(
        MockFragmentSource::new()
            .with_fragment(SMALL, fragment(2))
            .with_index([SMALL, "XT-01 - 01 - Oficinas.json"]),
    );

    store.load_curriculum().await.unwrap();
    let meta = store.disciplines_meta().await;
    assert_eq!(meta.len(), 1);
    assert_eq!(meta[0].code, "AT-17");
    assert!(store.load_discipline("XT-01").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_progress_stages() {
    let (_, store) = chunked_over(mixed_source());
    let mut rx = store.subscribe_progress();
    assert_eq!(rx.borrow_and_update().stage, LoadingStage::Discovering);

    store.load_curriculum().await.unwrap();

    assert!(rx.has_changed().unwrap());
    let progress = rx.borrow_and_update().clone();
    assert_eq!(progress.stage, LoadingStage::Complete);
    assert_eq!(progress.total, 2);
    assert_eq!(progress.percentage(), 100.0);

    store.clear_cache().await;
    assert_eq!(store.progress().stage, LoadingStage::Discovering);
}

#[tokio::test]
async fn test_clear_cache_forgets_loaded_disciplines() {
    let (source, store) = chunked_over(mixed_source());

    store.load_discipline("IS-15").await.unwrap();
    store.clear_cache().await;
    assert!(!store.is_loaded().await);
    assert!(store.get_all_disciplines().await.is_empty());

    store.load_curriculum().await.unwrap();
    assert!(!store.is_discipline_loaded("IS-15").await);
    assert_eq!(source.fetch_count(SMALL), 2);

    store.load_discipline("IS-15").await.unwrap();
    assert_eq!(source.fetch_count(LARGE), 2);
}

#[tokio::test]
async fn test_search_covers_loaded_disciplines_only() {
    let (_, store) = chunked_over(mixed_source());
    store.load_curriculum().await.unwrap();

    assert_eq!(store.search_skills("habilidade").await.len(), 2);
    store.load_discipline("IS-15").await.unwrap();
    assert_eq!(store.search_skills("habilidade").await.len(), 9);
    assert_eq!(store.get_all_skills().await.len(), 9);
    assert_eq!(store.get_all_disciplines().await.len(), 2);
}
