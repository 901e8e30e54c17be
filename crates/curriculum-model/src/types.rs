//! Canonical curriculum tree
//!
//! Six levels: document → area → discipline → main topic → atomic topic → skill.
//! Skills are normalized at ingest: every skill hangs off its atomic topic,
//! and skills that came from an individual concept carry that concept's id
//! in `concept_id`. Downstream code iterates one list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Assembled curriculum document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumDocument {
    pub format_version: String,
    /// RFC 3339 timestamp of assembly
    pub export_date: String,
    pub app_version: String,
    pub curriculum_data: Curriculum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    pub metadata: CurriculumMetadata,
    pub areas: Vec<Area>,
    /// Always null in assembled documents
    #[serde(default)]
    pub infographics: Option<Value>,
    /// Always null in assembled documents
    #[serde(default)]
    pub settings: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumMetadata {
    pub start_date: String,
    pub duration: String,
    pub daily_study_hours: String,
    pub total_atomic_skills: usize,
    pub version: String,
    /// Date portion (YYYY-MM-DD) of the assembly time
    pub last_updated: String,
    pub institution: String,
    pub based_on: String,
}

/// Top-level knowledge domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_skills: usize,
    #[serde(default)]
    pub percentage: f64,
    pub disciplines: Vec<Discipline>,
}

/// One discipline per source fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_skills: usize,
    pub main_topics: Vec<MainTopic>,
    /// Set by the progressive loader for fragments whose body is deferred
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_chunked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainTopic {
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_skills: usize,
    pub atomic_topics: Vec<AtomicTopic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicTopic {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub individual_concepts: Vec<IndividualConcept>,
    /// Every skill under this topic, whichever placement it had in the source
    #[serde(default)]
    pub skills: Vec<SpecificSkill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualConcept {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Leaf of the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Owning concept, when the skill was listed under one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Ids of skills that must be completed first. Empty or null slots
    /// are kept as they were in the source.
    #[serde(default)]
    pub prerequisites: Vec<Option<String>>,
    #[serde(default)]
    pub atomic_expansion: Option<AtomicExpansion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Parse a difficulty label, accepting the Portuguese labels some
    /// fragments use.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "beginner" | "iniciante" | "básico" | "basico" => Some(Self::Beginner),
            "intermediate" | "intermediário" | "intermediario" => Some(Self::Intermediate),
            "advanced" | "avançado" | "avancado" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown difficulty: {}", s))
    }
}

/// Step-by-step expansion of a skill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AtomicExpansion {
    pub steps: Vec<LearningStep>,
    pub practical_example: String,
    pub final_verifications: Vec<String>,
    pub assessment_criteria: Vec<String>,
    pub cross_curricular_connections: Vec<String>,
    pub real_world_application: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningStep {
    pub step_number: u32,
    pub title: String,
    pub sub_steps: Vec<String>,
    pub verification: String,
    pub estimated_time: String,
    pub materials: Vec<String>,
    pub tips: String,
    pub learning_objective: String,
    pub common_mistakes: Vec<String>,
}

// =============================================================================
// Traversal
// =============================================================================

impl CurriculumDocument {
    pub fn areas(&self) -> &[Area] {
        &self.curriculum_data.areas
    }

    pub fn disciplines(&self) -> impl Iterator<Item = &Discipline> {
        self.curriculum_data.areas.iter().flat_map(|a| a.disciplines.iter())
    }

    pub fn skills(&self) -> impl Iterator<Item = &SpecificSkill> {
        self.disciplines().flat_map(Discipline::skills)
    }

    pub fn find_area(&self, id: &str) -> Option<&Area> {
        self.curriculum_data.areas.iter().find(|a| a.id == id)
    }

    pub fn find_discipline(&self, id: &str) -> Option<&Discipline> {
        self.disciplines().find(|d| d.id == id)
    }

    pub fn find_main_topic(&self, id: &str) -> Option<&MainTopic> {
        self.disciplines()
            .flat_map(|d| d.main_topics.iter())
            .find(|t| t.id == id)
    }

    pub fn find_atomic_topic(&self, id: &str) -> Option<&AtomicTopic> {
        self.disciplines()
            .flat_map(|d| d.atomic_topics())
            .find(|t| t.id == id)
    }

    pub fn find_concept(&self, id: &str) -> Option<&IndividualConcept> {
        self.disciplines()
            .flat_map(|d| d.atomic_topics())
            .flat_map(|t| t.individual_concepts.iter())
            .find(|c| c.id == id)
    }

    pub fn find_skill(&self, id: &str) -> Option<&SpecificSkill> {
        self.skills().find(|s| s.id == id)
    }

    /// Recompute every derived `total_skills` from the leaves, and the
    /// document's `total_atomic_skills` from the areas.
    pub fn recalculate_total_skills(&mut self) {
        for area in &mut self.curriculum_data.areas {
            area.recalculate_total_skills();
        }
        self.curriculum_data.metadata.total_atomic_skills = self
            .curriculum_data
            .areas
            .iter()
            .map(|a| a.total_skills)
            .sum();
    }
}

impl Area {
    pub fn skill_count(&self) -> usize {
        self.disciplines.iter().map(Discipline::skill_count).sum()
    }

    pub fn recalculate_total_skills(&mut self) {
        for discipline in &mut self.disciplines {
            discipline.recalculate_total_skills();
        }
        self.total_skills = self.disciplines.iter().map(|d| d.total_skills).sum();
    }
}

impl Discipline {
    pub fn atomic_topics(&self) -> impl Iterator<Item = &AtomicTopic> {
        self.main_topics.iter().flat_map(|t| t.atomic_topics.iter())
    }

    pub fn skills(&self) -> impl Iterator<Item = &SpecificSkill> {
        self.atomic_topics().flat_map(|t| t.skills.iter())
    }

    pub fn skill_count(&self) -> usize {
        self.atomic_topics().map(|t| t.skills.len()).sum()
    }

    pub fn recalculate_total_skills(&mut self) {
        for topic in &mut self.main_topics {
            topic.recalculate_total_skills();
        }
        self.total_skills = self.main_topics.iter().map(|t| t.total_skills).sum();
    }
}

impl MainTopic {
    pub fn skill_count(&self) -> usize {
        self.atomic_topics.iter().map(|t| t.skills.len()).sum()
    }

    pub fn recalculate_total_skills(&mut self) {
        self.total_skills = self.skill_count();
    }
}

impl AtomicTopic {
    /// Skills listed under the given concept
    pub fn skills_of_concept<'a>(
        &'a self,
        concept_id: &'a str,
    ) -> impl Iterator<Item = &'a SpecificSkill> {
        self.skills
            .iter()
            .filter(move |s| s.concept_id.as_deref() == Some(concept_id))
    }
}

impl SpecificSkill {
    /// Non-empty prerequisite ids
    pub fn prerequisite_ids(&self) -> impl Iterator<Item = &str> {
        self.prerequisites
            .iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
    }

    /// Case-insensitive substring match over name and description.
    /// `lower_query` must already be lowercased.
    pub fn matches_query(&self, lower_query: &str) -> bool {
        self.name.to_lowercase().contains(lower_query)
            || self.description.to_lowercase().contains(lower_query)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(Difficulty::parse))
}
