//! Structural validation
//!
//! Works on the JSON form of a document so that partially built or
//! hand-written documents can be checked too. Problems are returned as data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{CurriculumDocument, SpecificSkill};

/// Machine-readable problem code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    MissingCurriculumData,
    MissingAreas,
    MissingAreaId,
    MissingTopics,
    EmptyArea,
    EmptyTopic,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCurriculumData => "MISSING_CURRICULUM_DATA",
            Self::MissingAreas => "MISSING_AREAS",
            Self::MissingAreaId => "MISSING_AREA_ID",
            Self::MissingTopics => "MISSING_TOPICS",
            Self::EmptyArea => "EMPTY_AREA",
            Self::EmptyTopic => "EMPTY_TOPIC",
        }
    }
}

impl std::fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One error or warning, with a dotted path to the offending node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: ValidationCode,
    pub message: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn has_error(&self, code: ValidationCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn has_warning(&self, code: ValidationCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// Validate an assembled document.
pub fn validate_document(document: &CurriculumDocument) -> ValidationResult {
    let value = serde_json::to_value(document).unwrap_or(Value::Null);
    validate(&value)
}

/// Validate a document in JSON form.
///
/// Errors: missing `curriculumData`, missing or empty `areas`, an area
/// without `id`, a discipline without `mainTopics`.
/// Warnings: an area without disciplines, a main topic without atomic topics.
pub fn validate(document: &Value) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let Some(data) = document.get("curriculumData").filter(|d| d.is_object()) else {
        errors.push(issue(
            ValidationCode::MissingCurriculumData,
            "Curriculum data not found".to_string(),
            "curriculumData".to_string(),
        ));
        return finish(errors, warnings);
    };

    let areas = non_empty_array(data.get("areas"));
    if areas.is_none() {
        errors.push(issue(
            ValidationCode::MissingAreas,
            "No knowledge areas found".to_string(),
            "curriculumData.areas".to_string(),
        ));
    }

    for (area_index, area) in areas.into_iter().flatten().enumerate() {
        let area_path = format!("curriculumData.areas[{}]", area_index);

        if !has_id(area) {
            errors.push(issue(
                ValidationCode::MissingAreaId,
                format!("Area {} has no id", area_index),
                format!("{}.id", area_path),
            ));
        }

        let disciplines = non_empty_array(area.get("disciplines"));
        if disciplines.is_none() {
            warnings.push(issue(
                ValidationCode::EmptyArea,
                format!("Area {} has no disciplines", display_name(area)),
                format!("{}.disciplines", area_path),
            ));
        }

        for (disc_index, discipline) in disciplines.into_iter().flatten().enumerate() {
            let disc_path = format!("{}.disciplines[{}]", area_path, disc_index);

            let topics = non_empty_array(discipline.get("mainTopics"));
            if topics.is_none() {
                errors.push(issue(
                    ValidationCode::MissingTopics,
                    format!("Discipline {} has no topics", display_name(discipline)),
                    format!("{}.mainTopics", disc_path),
                ));
            }

            for (topic_index, topic) in topics.into_iter().flatten().enumerate() {
                if non_empty_array(topic.get("atomicTopics")).is_none() {
                    warnings.push(issue(
                        ValidationCode::EmptyTopic,
                        format!("Topic {} has no atomic topics", display_name(topic)),
                        format!("{}.mainTopics[{}].atomicTopics", disc_path, topic_index),
                    ));
                }
            }
        }
    }

    finish(errors, warnings)
}

/// True iff every prerequisite slot of `skill` is in `completed`.
/// A skill without prerequisites is always unlocked.
pub fn validate_prerequisites<S: AsRef<str>>(skill: &SpecificSkill, completed: &[S]) -> bool {
    skill.prerequisites.iter().all(|prerequisite| {
        prerequisite
            .as_deref()
            .map(|id| completed.iter().any(|c| c.as_ref() == id))
            .unwrap_or(false)
    })
}

fn issue(code: ValidationCode, message: String, path: String) -> ValidationIssue {
    ValidationIssue { code, message, path }
}

fn finish(errors: Vec<ValidationIssue>, warnings: Vec<ValidationIssue>) -> ValidationResult {
    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    value.and_then(Value::as_array).filter(|a| !a.is_empty())
}

fn has_id(node: &Value) -> bool {
    match node.get("id") {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(_)) => true,
        _ => false,
    }
}

fn display_name(node: &Value) -> &str {
    node.get("name").and_then(Value::as_str).unwrap_or("(unnamed)")
}
