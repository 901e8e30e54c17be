//! Command rendering against the in-memory fragment source

use std::sync::Arc;

use curriculum_cli::{progress_line, run, Command};
use curriculum_client::MockFragmentSource;
use curriculum_sdk::{
    ChunkedCurriculumStore, CurriculumConfig, CurriculumStore, ListingMode, LoadingProgress, LoadingStage,
};
use serde_json::{json, Value};

const VETORES: &str = "AT-17 - 17 - Vetores.json";
const MECANICA: &str = "IS-15 - 15 - Mecânica I.json";

fn fragment(discipline: &str) -> Value {
    json!({ "curriculumData": { "areas": [{
        "id": "area",
        "name": "Área",
        "disciplines": [{
            "id": "disc",
            "name": format!("1.2: {}", discipline),
            "mainTopics": [{ "id": "1", "atomicTopics": [{ "id": "1", "specificSkills": [
                { "id": "1", "name": "Produto escalar", "difficulty": "advanced", "estimatedTime": "2h" },
                { "id": "2", "name": "Produto vetorial", "prerequisites": ["1"] }
            ]}]}]
        }]
    }]}})
}

fn config() -> CurriculumConfig {
    let mut config = CurriculumConfig::default();
    config.source.listing = ListingMode::Index;
    config.chunking.size_threshold_bytes = 1024 * 1024;
    config
}

fn source() -> Arc<MockFragmentSource> {
    Arc::new(
        MockFragmentSource::new()
            .with_fragment(VETORES, fragment("Vetores"))
            .with_sized_fragment(MECANICA, fragment("Mecânica I"), 4 * 1024 * 1024)
            .with_full_index(),
    )
}

#[tokio::test]
async fn test_summary_counts() {
    let store = CurriculumStore::new(source(), config());

    let report = run(&store, &Command::Summary, false).await.unwrap();
    assert!(report.success);
    assert_eq!(report.json["areaCount"], 2);
    assert_eq!(report.json["disciplineCount"], 2);
    assert_eq!(report.json["metadata"]["totalAtomicSkills"], 4);
    assert!(report.text.contains("AT-17.disc"));

    let areas = report.json["areas"].as_array().unwrap();
    assert_eq!(areas[0]["icon"], "📐");
    assert_eq!(areas[0]["color"], "#ef4444");
    assert_eq!(areas[1]["icon"], "🔬");
    assert!(report.text.contains("📐 Área"));
}

#[tokio::test]
async fn test_chunked_summary_styles_areas() {
    let store = ChunkedCurriculumStore::new(source(), config());

    let report = run(&store, &Command::Summary, true).await.unwrap();
    let areas = report.json["areas"].as_array().unwrap();
    assert_eq!(areas[0]["id"], "area-at");
    assert_eq!(areas[0]["color"], "#ef4444");
    assert_eq!(areas[1]["id"], "area-is");
    assert_eq!(areas[1]["color"], "#f97316");
}

#[tokio::test]
async fn test_validate_reports_success() {
    let store = CurriculumStore::new(source(), config());

    let report = run(&store, &Command::Validate, false).await.unwrap();
    assert!(report.success);
    assert_eq!(report.json["isValid"], true);
    assert!(report.text.starts_with("valid"));
}

#[tokio::test]
async fn test_validate_fails_on_empty_curriculum() {
    let store = CurriculumStore::new(Arc::new(MockFragmentSource::new().with_index(Vec::<String>::new())), config());

    let report = run(&store, &Command::Validate, false).await.unwrap();
    assert!(!report.success);
    assert!(report.text.contains("MISSING_AREAS"));
}

#[tokio::test]
async fn test_discipline_uses_clean_name() {
    let store = CurriculumStore::new(source(), config());

    let report = run(&store, &Command::Discipline { id: "AT-17.disc".to_string() }, false)
        .await
        .unwrap();
    assert_eq!(report.json["discipline"]["name"], "Vetores");
    assert_eq!(report.json["skills"].as_array().unwrap().len(), 2);
    assert_eq!(report.json["skills"][1]["prerequisites"], json!(["AT-17.1"]));
}

#[tokio::test]
async fn test_search_finds_skills() {
    let store = CurriculumStore::new(source(), config());

    let report = run(&store, &Command::Search { query: "vetorial".to_string() }, false)
        .await
        .unwrap();
    assert_eq!(report.json["skills"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_chunked_skill_loads_its_discipline() {
    let store = ChunkedCurriculumStore::new(source(), config());

    let report = run(&store, &Command::Skill { id: "IS-15.1".to_string() }, true)
        .await
        .unwrap();
    assert_eq!(report.json["summary"]["difficulty"], "advanced");
    assert_eq!(report.json["summary"]["estimatedTime"], "2h");

    let err = run(&store, &Command::Skill { id: "IS-15.9".to_string() }, true)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_progress_line() {
    let progress = LoadingProgress {
        loaded: 1,
        total: 4,
        stage: LoadingStage::LoadingMetadata,
        current_file: Some(VETORES.to_string()),
    };
    assert_eq!(progress_line(&progress), format!("[loading-metadata] 1/4 (25%) {}", VETORES));
}
