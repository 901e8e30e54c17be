//! Display-ready summaries of disciplines and skills

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::areas::{discipline_color, discipline_icon};
use crate::types::{Difficulty, Discipline, LearningStep, SpecificSkill};

static SECTION_NUMBER: OnceLock<Regex> = OnceLock::new();
static COURSE_CODE: OnceLock<Regex> = OnceLock::new();

pub const DEFAULT_ESTIMATED_TIME: &str = "1h";

/// Strip leading `"1.2: "` numbering, then a leading `"CSI-12: "` code.
pub fn clean_discipline_name(name: &str) -> String {
    let section = SECTION_NUMBER
        .get_or_init(|| Regex::new(r"^[\d.]+:\s*").expect("valid section-number pattern"));
    let course = COURSE_CODE
        .get_or_init(|| Regex::new(r"^CSI-\d+:\s*").expect("valid course-code pattern"));
    let name = section.replace(name, "");
    course.replace(&name, "").into_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_skills: usize,
    pub icon: String,
    pub color: String,
}

impl DisciplineSummary {
    /// Enumerated skills win over the stored total, which is zero for
    /// deferred disciplines.
    pub fn from_discipline(discipline: &Discipline) -> Self {
        let counted = discipline.skill_count();
        Self {
            id: discipline.id.clone(),
            name: clean_discipline_name(&discipline.name),
            description: discipline.description.clone(),
            total_skills: if counted > 0 { counted } else { discipline.total_skills },
            icon: discipline_icon(&discipline.id).to_string(),
            color: discipline_color(&discipline.id).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub prerequisites: Vec<String>,
    pub steps: Vec<LearningStep>,
    pub practical_example: String,
}

impl SkillSummary {
    pub fn from_skill(skill: &SpecificSkill) -> Self {
        let expansion = skill.atomic_expansion.as_ref();
        Self {
            id: skill.id.clone(),
            name: skill.name.clone(),
            description: skill.description.clone(),
            difficulty: skill.difficulty.unwrap_or(Difficulty::Beginner),
            estimated_time: skill
                .estimated_time
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_ESTIMATED_TIME.to_string()),
            prerequisites: skill.prerequisite_ids().map(String::from).collect(),
            steps: expansion.map(|e| e.steps.clone()).unwrap_or_default(),
            practical_example: expansion
                .map(|e| e.practical_example.clone())
                .unwrap_or_default(),
        }
    }
}
