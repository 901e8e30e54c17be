//! Fragment wire format
//!
//! Shapes as they appear in a source JSON document, before namespacing.
//! An atomic topic may carry skills under `individualConcepts[].specificSkills`,
//! directly under `specificSkills`, or both. Missing children are `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::{AtomicExpansion, Difficulty};

/// Top-level `{ "curriculumData": { "areas": [...] } }`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentDocument {
    pub curriculum_data: FragmentCurriculum,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FragmentCurriculum {
    pub areas: Vec<RawArea>,
}

impl FragmentDocument {
    /// Parse a fragment body, checking for the `curriculumData.areas` shape
    /// before decoding the tree.
    pub fn from_value(value: Value) -> Result<Self, FragmentShapeError> {
        let has_areas = value
            .get("curriculumData")
            .and_then(|c| c.get("areas"))
            .map(Value::is_array)
            .unwrap_or(false);
        if !has_areas {
            return Err(FragmentShapeError::MissingAreas);
        }
        serde_json::from_value(value).map_err(|e| FragmentShapeError::Invalid(e.to_string()))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, FragmentShapeError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| FragmentShapeError::NotJson(e.to_string()))?;
        Self::from_value(value)
    }
}

/// Why a body could not be read as a fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentShapeError {
    NotJson(String),
    MissingAreas,
    Invalid(String),
}

impl std::fmt::Display for FragmentShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotJson(e) => write!(f, "invalid JSON: {}", e),
            Self::MissingAreas => f.write_str("missing curriculumData.areas"),
            Self::Invalid(e) => write!(f, "unexpected fragment shape: {}", e),
        }
    }
}

impl std::error::Error for FragmentShapeError {}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArea {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub disciplines: Option<Vec<RawDiscipline>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDiscipline {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub main_topics: Option<Vec<RawMainTopic>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMainTopic {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub atomic_topics: Option<Vec<RawAtomicTopic>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAtomicTopic {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub individual_concepts: Option<Vec<RawConcept>>,
    #[serde(default)]
    pub specific_skills: Option<Vec<RawSkill>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConcept {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specific_skills: Option<Vec<RawSkill>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkill {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub estimated_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub status: Option<String>,
    #[serde(default)]
    pub prerequisites: Option<Vec<Value>>,
    #[serde(default)]
    pub atomic_expansion: Option<Value>,
}

impl RawSkill {
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.as_deref().and_then(Difficulty::parse)
    }

    /// Expansion content, dropped if it does not match the expected shape
    pub fn expansion(&self) -> Option<AtomicExpansion> {
        self.atomic_expansion
            .as_ref()
            .filter(|v| v.is_object())
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Prerequisite slots with falsy entries (null, false, "", 0) as `None`
    /// or empty string, everything else as its string form.
    pub fn prerequisite_slots(&self) -> Vec<Option<String>> {
        self.prerequisites
            .iter()
            .flatten()
            .map(|p| match p {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
                _ => None,
            })
            .collect()
    }
}

/// Ids appear as strings in most fragments and as numbers in a few.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_areas_is_rejected() {
        let err = FragmentDocument::from_value(json!({ "curriculumData": {} })).unwrap_err();
        assert_eq!(err, FragmentShapeError::MissingAreas);

        let err = FragmentDocument::from_value(json!({ "areas": [] })).unwrap_err();
        assert_eq!(err, FragmentShapeError::MissingAreas);
    }

    #[test]
    fn test_html_body_is_not_json() {
        let err = FragmentDocument::from_slice(b"<!doctype html><html></html>").unwrap_err();
        assert!(matches!(err, FragmentShapeError::NotJson(_)));
    }

    #[test]
    fn test_numeric_ids_and_both_skill_placements() {
        let doc = FragmentDocument::from_value(json!({
            "curriculumData": { "areas": [{
                "id": 1,
                "name": "Matemática",
                "disciplines": [{
                    "id": "d1",
                    "mainTopics": [{
                        "id": "1",
                        "atomicTopics": [{
                            "id": "1.1",
                            "individualConcepts": [{
                                "id": "1.1.1",
                                "specificSkills": [{ "id": "1.1.1.1", "prerequisites": ["", null] }]
                            }],
                            "specificSkills": [{ "id": "1.1.2" }]
                        }]
                    }]
                }]
            }]}
        }))
        .unwrap();

        let area = &doc.curriculum_data.areas[0];
        assert_eq!(area.id, "1");
        let atomic = &area.disciplines.as_ref().unwrap()[0].main_topics.as_ref().unwrap()[0]
            .atomic_topics
            .as_ref()
            .unwrap()[0];
        assert_eq!(atomic.specific_skills.as_ref().unwrap().len(), 1);
        let concept_skill = &atomic.individual_concepts.as_ref().unwrap()[0]
            .specific_skills
            .as_ref()
            .unwrap()[0];
        assert_eq!(concept_skill.prerequisite_slots(), vec![Some(String::new()), None]);
    }

    #[test]
    fn test_malformed_expansion_is_dropped() {
        let skill: RawSkill = serde_json::from_value(json!({
            "id": "s", "atomicExpansion": "see notes"
        }))
        .unwrap();
        assert!(skill.expansion().is_none());
    }
}
