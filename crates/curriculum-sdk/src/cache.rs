//! Aggregate cache
//!
//! Flat id-keyed views of an assembled document. A cache is built in one
//! pass from a document and never patched afterwards; a fresh assembly
//! builds a fresh cache and swaps it in whole.

use std::collections::HashMap;
use std::sync::Arc;

use curriculum_model::{CurriculumDocument, Difficulty, Discipline, SpecificSkill};

/// Insertion-ordered map; a repeated id replaces the earlier entry in place.
#[derive(Debug)]
struct OrderedIndex<T> {
    order: Vec<String>,
    by_id: HashMap<String, Arc<T>>,
}

impl<T> Default for OrderedIndex<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<T> OrderedIndex<T> {
    fn insert(&mut self, id: &str, value: Arc<T>) {
        if self.by_id.insert(id.to_string(), value).is_none() {
            self.order.push(id.to_string());
        }
    }

    fn get(&self, id: &str) -> Option<Arc<T>> {
        self.by_id.get(id).cloned()
    }

    fn values(&self) -> impl Iterator<Item = &Arc<T>> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    fn len(&self) -> usize {
        self.by_id.len()
    }
}

#[derive(Debug, Default)]
pub struct AggregateCache {
    disciplines: OrderedIndex<Discipline>,
    skills: OrderedIndex<SpecificSkill>,
    skills_by_discipline: HashMap<String, Vec<String>>,
}

impl AggregateCache {
    /// Flatten a document: every discipline, and every skill under it.
    pub fn build(document: &CurriculumDocument) -> Self {
        let mut cache = Self::default();
        for discipline in document.disciplines() {
            cache.insert_discipline(discipline);
        }
        cache
    }

    /// Build from a list of disciplines.
    pub fn from_disciplines<'a>(disciplines: impl IntoIterator<Item = &'a Discipline>) -> Self {
        let mut cache = Self::default();
        for discipline in disciplines {
            cache.insert_discipline(discipline);
        }
        cache
    }

    fn insert_discipline(&mut self, discipline: &Discipline) {
        self.disciplines.insert(&discipline.id, Arc::new(discipline.clone()));

        let mut skill_ids = Vec::new();
        for skill in discipline.skills() {
            self.skills.insert(&skill.id, Arc::new(skill.clone()));
            skill_ids.push(skill.id.clone());
        }
        self.skills_by_discipline.insert(discipline.id.clone(), skill_ids);
    }

    pub fn discipline(&self, id: &str) -> Option<Arc<Discipline>> {
        self.disciplines.get(id)
    }

    pub fn skill(&self, id: &str) -> Option<Arc<SpecificSkill>> {
        self.skills.get(id)
    }

    pub fn disciplines(&self) -> Vec<Arc<Discipline>> {
        self.disciplines.values().cloned().collect()
    }

    pub fn skills(&self) -> Vec<Arc<SpecificSkill>> {
        self.skills.values().cloned().collect()
    }

    /// Skills of one discipline; empty for an unknown id
    pub fn skills_of(&self, discipline_id: &str) -> Vec<Arc<SpecificSkill>> {
        self.skills_by_discipline
            .get(discipline_id)
            .map(|ids| ids.iter().filter_map(|id| self.skills.get(id)).collect())
            .unwrap_or_default()
    }

    /// Case-insensitive substring match over name and description
    pub fn search_skills(&self, query: &str) -> Vec<Arc<SpecificSkill>> {
        let query = query.to_lowercase();
        self.skills
            .values()
            .filter(|s| s.matches_query(&query))
            .cloned()
            .collect()
    }

    pub fn skills_by_difficulty(&self, difficulty: Difficulty) -> Vec<Arc<SpecificSkill>> {
        self.skills
            .values()
            .filter(|s| s.difficulty == Some(difficulty))
            .cloned()
            .collect()
    }

    pub fn discipline_count(&self) -> usize {
        self.disciplines.len()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disciplines.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_model::{namespace_areas, FragmentCode, FragmentDocument};
    use serde_json::json;

    fn discipline(code: &str) -> Discipline {
        let fragment = FragmentDocument::from_value(json!({
            "curriculumData": { "areas": [{
                "id": "a",
                "disciplines": [{
                    "id": "d",
                    "name": "Álgebra Linear",
                    "mainTopics": [{ "id": "1", "atomicTopics": [{
                        "id": "1.1",
                        "individualConcepts": [{ "id": "c", "specificSkills": [
                            { "id": "s1", "name": "Matrizes inversas", "difficulty": "advanced" }
                        ]}],
                        "specificSkills": [
                            { "id": "s2", "name": "Determinantes", "description": "Regra de Sarrus" }
                        ]
                    }]}]
                }]
            }]}
        }))
        .unwrap();
        namespace_areas(fragment.curriculum_data.areas, &FragmentCode::from_source_name(code))
            .remove(0)
            .disciplines
            .remove(0)
    }

    #[test]
    fn test_both_skill_placements_are_cached() {
        let d = discipline("AT-27");
        let cache = AggregateCache::from_disciplines([&d]);

        assert!(cache.discipline("AT-27.d").is_some());
        assert!(cache.skill("AT-27.s1").is_some());
        assert!(cache.skill("AT-27.s2").is_some());
        assert_eq!(cache.skills_of("AT-27.d").len(), 2);
        assert!(cache.skills_of("AT-99.d").is_empty());
    }

    #[test]
    fn test_search_and_difficulty() {
        let a = discipline("AT-27");
        let b = discipline("AT-55");
        let cache = AggregateCache::from_disciplines([&a, &b]);

        let hits: Vec<_> = cache.search_skills("SARRUS").iter().map(|s| s.id.clone()).collect();
        assert_eq!(hits, vec!["AT-27.s2", "AT-55.s2"]);
        assert_eq!(cache.skills_by_difficulty(Difficulty::Advanced).len(), 2);
        assert!(cache.skills_by_difficulty(Difficulty::Beginner).is_empty());
        assert_eq!(cache.skill_count(), 4);
    }
}
