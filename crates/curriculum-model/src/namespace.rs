//! Id namespacing
//!
//! Every id in a fragment is rewritten to `"{code}.{local-id}"`, where `code`
//! is derived from the fragment's own source name. Prerequisite references
//! are rewritten with the same code, so a prerequisite always points inside
//! the fragment it came from. Empty and null prerequisite slots are left as
//! they are.
//!
//! Namespacing is also where the tree is normalized: skills found under
//! individual concepts and skills found directly on an atomic topic end up
//! in the atomic topic's single `skills` list, and every `total_skills` is
//! computed from the leaves.

use crate::types::{AtomicTopic, Area, Discipline, IndividualConcept, MainTopic, SpecificSkill};
use crate::wire::{RawArea, RawAtomicTopic, RawDiscipline, RawMainTopic, RawSkill};

/// Unique code of a source fragment, e.g. `AT-17`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentCode(String);

impl FragmentCode {
    /// First whitespace-delimited token of the source name.
    ///
    /// `"AT-17 - 17 - Vetores e Geometria Analítica.json"` → `AT-17`
    pub fn from_source_name(source_name: &str) -> Self {
        let trimmed = source_name.trim();
        let token = trimmed.split_whitespace().next().unwrap_or(trimmed);
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-letter area prefix: the code up to its first `-`
    pub fn area_prefix(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    pub fn prefix_id(&self, local_id: &str) -> String {
        format!("{}.{}", self.0, local_id)
    }

    /// Whether `id` is this code or an id namespaced under it
    pub fn owns(&self, id: &str) -> bool {
        id == self.0
            || id
                .strip_prefix(self.0.as_str())
                .map(|rest| rest.starts_with('.'))
                .unwrap_or(false)
    }
}

impl std::fmt::Display for FragmentCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable title from a source name such as
/// `"AT-17 - 17 - Vetores  e  Geometria  Analítica.json"`.
///
/// Takes the third ` - ` segment when present, strips `.json` and collapses
/// runs of whitespace.
pub fn title_from_source_name(source_name: &str) -> String {
    let stem = source_name.trim().trim_end_matches(".json");
    let segments: Vec<&str> = stem.splitn(3, " - ").collect();
    let title = segments.last().copied().unwrap_or(stem);
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Namespace and normalize the areas of one fragment.
pub fn namespace_areas(areas: Vec<RawArea>, code: &FragmentCode) -> Vec<Area> {
    areas.into_iter().map(|area| namespace_area(area, code)).collect()
}

fn namespace_area(area: RawArea, code: &FragmentCode) -> Area {
    let disciplines: Vec<Discipline> = area
        .disciplines
        .unwrap_or_default()
        .into_iter()
        .map(|d| namespace_discipline(d, code))
        .collect();

    Area {
        id: code.prefix_id(&area.id),
        name: area.name,
        description: area.description,
        total_skills: disciplines.iter().map(|d| d.total_skills).sum(),
        percentage: area.percentage.unwrap_or(0.0),
        disciplines,
    }
}

/// Namespace one discipline subtree.
pub fn namespace_discipline(discipline: RawDiscipline, code: &FragmentCode) -> Discipline {
    let main_topics: Vec<MainTopic> = discipline
        .main_topics
        .unwrap_or_default()
        .into_iter()
        .map(|t| namespace_main_topic(t, code))
        .collect();

    Discipline {
        id: code.prefix_id(&discipline.id),
        name: discipline.name,
        description: discipline.description,
        total_skills: main_topics.iter().map(|t| t.total_skills).sum(),
        main_topics,
        is_chunked: false,
    }
}

fn namespace_main_topic(topic: RawMainTopic, code: &FragmentCode) -> MainTopic {
    let atomic_topics: Vec<AtomicTopic> = topic
        .atomic_topics
        .unwrap_or_default()
        .into_iter()
        .map(|t| namespace_atomic_topic(t, code))
        .collect();

    MainTopic {
        id: code.prefix_id(&topic.id),
        name: topic.name,
        description: topic.description,
        total_skills: atomic_topics.iter().map(|t| t.skills.len()).sum(),
        atomic_topics,
    }
}

fn namespace_atomic_topic(topic: RawAtomicTopic, code: &FragmentCode) -> AtomicTopic {
    let mut concepts = Vec::new();
    let mut skills = Vec::new();

    for concept in topic.individual_concepts.unwrap_or_default() {
        let concept_id = code.prefix_id(&concept.id);
        for skill in concept.specific_skills.unwrap_or_default() {
            skills.push(namespace_skill(skill, code, Some(concept_id.clone())));
        }
        concepts.push(IndividualConcept {
            id: concept_id,
            name: concept.name,
            description: concept.description,
        });
    }

    for skill in topic.specific_skills.unwrap_or_default() {
        skills.push(namespace_skill(skill, code, None));
    }

    AtomicTopic {
        id: code.prefix_id(&topic.id),
        name: topic.name,
        description: topic.description,
        individual_concepts: concepts,
        skills,
    }
}

fn namespace_skill(skill: RawSkill, code: &FragmentCode, concept_id: Option<String>) -> SpecificSkill {
    let prerequisites = skill
        .prerequisite_slots()
        .into_iter()
        .map(|slot| namespace_prerequisite(slot, code))
        .collect();

    SpecificSkill {
        id: code.prefix_id(&skill.id),
        difficulty: skill.difficulty(),
        atomic_expansion: skill.expansion(),
        name: skill.name,
        description: skill.description,
        concept_id,
        estimated_time: skill.estimated_time,
        status: skill.status,
        prerequisites,
    }
}

// Cross-fragment references are re-prefixed with the current code too.
fn namespace_prerequisite(slot: Option<String>, code: &FragmentCode) -> Option<String> {
    match slot {
        Some(id) if !id.is_empty() => Some(code.prefix_id(&id)),
        other => other,
    }
}
