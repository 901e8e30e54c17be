//! Namespacing and validation over realistic fragment bodies

use curriculum_model::{
    namespace_areas, validate, validate_prerequisites, CurriculumDocument, FragmentCode,
    FragmentDocument, ValidationCode,
};
use serde_json::json;

fn fragment_body(discipline: &str, skill_id: &str, prerequisites: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "curriculumData": { "areas": [{
            "id": "area-1",
            "name": "Matemática",
            "description": "",
            "disciplines": [{
                "id": "disc-1",
                "name": discipline,
                "description": "",
                "mainTopics": [{
                    "id": "1",
                    "name": "Tópico",
                    "description": "",
                    "atomicTopics": [{
                        "id": "1.1",
                        "name": "Atômico",
                        "description": "",
                        "individualConcepts": [{
                            "id": "1.1.1",
                            "name": "Conceito",
                            "description": "",
                            "specificSkills": [{
                                "id": skill_id,
                                "name": "Habilidade",
                                "description": "Resolver sistemas lineares",
                                "difficulty": "intermediate",
                                "prerequisites": prerequisites
                            }]
                        }]
                    }]
                }]
            }]
        }]}
    }))
    .unwrap()
}

#[test]
fn test_two_fragment_merge_keeps_ids_apart() {
    let mut areas = Vec::new();
    for (name, prerequisites) in [("AAA", json!([])), ("BBB", json!(["1.1"]))] {
        let body = fragment_body(name, "1.1", prerequisites);
        let fragment = FragmentDocument::from_slice(&body).unwrap();
        let code = FragmentCode::from_source_name(name);
        areas.extend(namespace_areas(fragment.curriculum_data.areas, &code));
    }

    let document: CurriculumDocument = serde_json::from_value(json!({
        "formatVersion": "1.0",
        "exportDate": "2025-01-01T00:00:00Z",
        "appVersion": "2.0.0",
        "curriculumData": {
            "metadata": {
                "startDate": "2025-01-01",
                "duration": "1 Semestre",
                "dailyStudyHours": "6-8 hours",
                "totalAtomicSkills": 2,
                "version": "2.0",
                "lastUpdated": "2025-01-01",
                "institution": "ITA",
                "basedOn": "CC201"
            },
            "areas": serde_json::to_value(&areas).unwrap(),
            "infographics": null,
            "settings": null
        }
    }))
    .unwrap();

    let aaa = document.find_skill("AAA.1.1").expect("AAA skill");
    let bbb = document.find_skill("BBB.1.1").expect("BBB skill");
    assert!(aaa.prerequisites.is_empty());
    assert_eq!(bbb.prerequisites, vec![Some("BBB.1.1".to_string())]);
    assert_eq!(bbb.concept_id.as_deref(), Some("BBB.1.1.1"));

    assert!(validate_prerequisites(bbb, &["BBB.1.1"]));
    assert!(!validate_prerequisites(bbb, &["AAA.1.1"]));

    for discipline in document.disciplines() {
        assert_eq!(discipline.total_skills, discipline.skill_count());
    }

    let result = validate(&serde_json::to_value(&document).unwrap());
    assert!(result.is_valid, "{:?}", result.errors);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_recalculate_repairs_stale_totals() {
    let body = fragment_body("AT-27", "s", json!([]));
    let fragment = FragmentDocument::from_slice(&body).unwrap();
    let mut areas = namespace_areas(fragment.curriculum_data.areas, &FragmentCode::from_source_name("AT-27"));
    areas[0].total_skills = 40;
    areas[0].disciplines[0].total_skills = 40;

    areas[0].recalculate_total_skills();
    assert_eq!(areas[0].total_skills, 1);
    assert_eq!(areas[0].disciplines[0].total_skills, 1);
}

#[test]
fn test_validator_flags_discipline_without_topics() {
    let result = validate(&json!({ "curriculumData": { "areas": [
        { "id": "AT-1.a", "name": "A", "disciplines": [{ "id": "AT-1.d", "name": "D" }] }
    ]}}));
    assert!(!result.is_valid);
    assert!(result.has_error(ValidationCode::MissingTopics));
    assert_eq!(result.errors[0].path, "curriculumData.areas[0].disciplines[0].mainTopics");
}
