//! Eager store integration tests against the in-memory fragment source

use std::sync::Arc;
use std::time::Duration;

use curriculum_client::MockFragmentSource;
use curriculum_model::Difficulty;
use curriculum_sdk::{CurriculumConfig, CurriculumLoader, CurriculumStore, ListingMode};
use serde_json::{json, Value};

fn fragment(skill_id: &str, prerequisites: Value) -> Value {
    json!({ "curriculumData": { "areas": [{
        "id": "area",
        "name": "Área",
        "disciplines": [{
            "id": "disc",
            "name": "Disciplina",
            "description": "Descrição",
            "mainTopics": [{
                "id": "1",
                "name": "Tópico",
                "atomicTopics": [{
                    "id": "1.0",
                    "name": "Tópico atômico",
                    "individualConcepts": [{
                        "id": "c1",
                        "specificSkills": [{
                            "id": skill_id,
                            "name": "Produto vetorial",
                            "difficulty": "intermediate",
                            "prerequisites": prerequisites
                        }]
                    }],
                    "specificSkills": [{ "id": "direct", "name": "Norma de vetores" }]
                }]
            }]
        }]
    }]}})
}

fn index_config() -> CurriculumConfig {
    let mut config = CurriculumConfig::default();
    config.source.listing = ListingMode::Index;
    config
}

fn store_over(source: MockFragmentSource) -> (Arc<MockFragmentSource>, CurriculumStore) {
    let source = Arc::new(source);
    (source.clone(), CurriculumStore::new(source, index_config()))
}

#[tokio::test]
async fn test_two_fragment_merge() {
    let (_, store) = store_over(
        MockFragmentSource::new()
            .with_fragment("AAA", fragment("1.1", json!([])))
            .with_fragment("BBB", fragment("1.1", json!(["1.1"])))
            .with_full_index(),
    );

    let document = store.load_curriculum().await.unwrap();
    assert_eq!(document.areas().len(), 2);

    let aaa = store.load_skill("AAA.1.1").await.unwrap();
    let bbb = store.load_skill("BBB.1.1").await.unwrap();
    assert_ne!(aaa.id, bbb.id);
    assert_eq!(bbb.prerequisites, vec![Some("BBB.1.1".to_string())]);
    assert_eq!(aaa.concept_id.as_deref(), Some("AAA.c1"));

    let discipline = store.load_discipline("BBB.disc").await.unwrap();
    assert_eq!(discipline.total_skills, 2);
}

#[tokio::test]
async fn test_fragments_fetched_once() {
    let (source, store) = store_over(
        MockFragmentSource::new()
            .with_fragment("AAA", fragment("1.1", json!([])))
            .with_fragment("BBB", fragment("1.1", json!([])))
            .with_full_index(),
    );

    store.load_curriculum().await.unwrap();
    store.load_curriculum().await.unwrap();
    store.load_discipline("AAA.disc").await.unwrap();
    store.load_skill("BBB.direct").await.unwrap();

    assert_eq!(source.fetch_count("AAA"), 1);
    assert_eq!(source.fetch_count("BBB"), 1);
    assert_eq!(source.index_count(), 1);
}

#[tokio::test]
async fn test_concurrent_loads_share_one_assembly() {
    let (source, store) = store_over(
        MockFragmentSource::new()
            .with_fragment("AAA", fragment("1.1", json!([])))
            .with_delay(Duration::from_millis(50))
            .with_full_index(),
    );

    let (a, b, c) = tokio::join!(
        store.load_curriculum(),
        store.load_curriculum(),
        store.load_skill("AAA.1.1"),
    );

    assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
    assert!(c.is_ok());
    assert_eq!(source.fetch_count("AAA"), 1);
    assert_eq!(source.index_count(), 1);
}

#[tokio::test]
async fn test_partial_failure_tolerance() {
    let names: Vec<String> = (1..=10).map(|i| format!("AT-{:02} - {:02} - Disciplina.json", i, i)).collect();

    let mut source = MockFragmentSource::new().with_index(names.clone());
    for (i, name) in names.iter().enumerate() {
        source = if i == 3 || i == 7 {
            source.with_status(name.clone(), 500)
        } else {
            source.with_fragment(name.clone(), fragment("1.1", json!([])))
        };
    }
    let (_, store) = store_over(source);

    let document = store.load_curriculum().await.unwrap();
    assert_eq!(document.areas().len(), 8);
    assert!(document.find_area("AT-04.area").is_none());
    assert!(document.find_area("AT-05.area").is_some());
    assert_eq!(store.get_all_disciplines().await.len(), 8);
}

#[tokio::test]
async fn test_malformed_fragment_is_skipped() {
    let (_, store) = store_over(
        MockFragmentSource::new()
            .with_fragment("AAA", fragment("1.1", json!([])))
            .with_fragment("BBB", json!({ "curriculumData": { "disciplines": [] } }))
            .with_full_index(),
    );

    let document = store.load_curriculum().await.unwrap();
    assert_eq!(document.areas().len(), 1);
    assert!(store.load_discipline("BBB.disc").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_totals_consistent_after_assembly() {
    let (_, store) = store_over(
        MockFragmentSource::new()
            .with_fragment("AAA", fragment("1.1", json!([])))
            .with_fragment("BBB", fragment("2.1", json!(["", null])))
            .with_full_index(),
    );

    let document = store.load_curriculum().await.unwrap();
    for area in document.areas() {
        let area_skills: usize = area.disciplines.iter().map(|d| d.skills().count()).sum();
        assert_eq!(area.total_skills, area_skills);
        for discipline in &area.disciplines {
            assert_eq!(discipline.total_skills, discipline.skills().count());
            for topic in &discipline.main_topics {
                assert_eq!(topic.total_skills, topic.skill_count());
            }
        }
    }
    assert_eq!(document.curriculum_data.metadata.total_atomic_skills, 4);

    let skill = store.load_skill("BBB.2.1").await.unwrap();
    assert_eq!(skill.prerequisites, vec![Some(String::new()), None]);
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let (source, store) = store_over(
        MockFragmentSource::new()
            .with_fragment("AAA", fragment("1.1", json!([])))
            .with_full_index(),
    );

    store.load_curriculum().await.unwrap();
    store.clear_cache().await;
    assert!(!store.is_loaded().await);
    assert!(store.get_all_disciplines().await.is_empty());

    store.load_curriculum().await.unwrap();
    assert_eq!(source.fetch_count("AAA"), 2);
    assert_eq!(store.get_all_disciplines().await.len(), 1);
}

#[tokio::test]
async fn test_read_api() {
    let (_, store) = store_over(
        MockFragmentSource::new()
            .with_fragment("AAA", fragment("1.1", json!([])))
            .with_full_index(),
    );
    store.load_curriculum().await.unwrap();

    assert_eq!(store.get_all_skills().await.len(), 2);
    assert_eq!(store.get_skills_by_discipline("AAA.disc").await.len(), 2);
    assert!(store.get_skills_by_discipline("ZZZ.disc").await.is_empty());
    assert_eq!(store.search_skills("VETORIAL").await.len(), 1);
    assert_eq!(store.get_skills_by_difficulty(Difficulty::Intermediate).await.len(), 1);

    let results = store.search("disciplina").await;
    assert_eq!(results.disciplines.len(), 1);
    assert!(store.search("   ").await.is_empty());

    let summaries = store.formatted_skills_for_discipline("AAA.disc").await;
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[1].difficulty, Difficulty::Beginner);
    assert_eq!(summaries[1].estimated_time, "1h");

    let batch = store
        .load_disciplines(&["AAA.disc".to_string(), "AAA.nope".to_string()])
        .await;
    assert_eq!(batch.loaded.len(), 1);
    assert_eq!(batch.failed.len(), 1);
    assert_eq!(batch.failed[0].0, "AAA.nope");

    let validation = store.validate().await.unwrap();
    assert!(validation.is_valid);
}

#[tokio::test]
async fn test_zero_concurrency_still_assembles() {
    let source = Arc::new(
        MockFragmentSource::new()
            .with_fragment("AAA", fragment("1.1", json!([])))
            .with_fragment("BBB", fragment("1.1", json!([])))
            .with_full_index(),
    );
    let mut config = index_config();
    config.fetch.max_concurrent_fetches = 0;
    let store = CurriculumStore::new(source.clone(), config);

    let document = tokio::time::timeout(Duration::from_secs(5), store.load_curriculum())
        .await
        .expect("assembly stalled")
        .unwrap();
    assert_eq!(document.areas().len(), 2);
    assert_eq!(source.total_fetch_count(), 2);
}
