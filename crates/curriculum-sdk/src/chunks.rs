//! Per-discipline chunk maps
//!
//! A loaded discipline is kept as flat maps (topics, atomic topics, concepts,
//! skills) plus the set of chunks that have arrived. The discipline tree is
//! rebuilt from the maps on demand.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use curriculum_model::{AtomicTopic, Discipline, IndividualConcept, MainTopic, SpecificSkill};

/// Which parts of a discipline have been loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkMarker {
    Metadata,
    Topics,
    Complete,
}

impl ChunkMarker {
    pub const ALL: [ChunkMarker; 3] = [Self::Metadata, Self::Topics, Self::Complete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Topics => "topics",
            Self::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone)]
struct TopicChunk {
    id: String,
    name: String,
    description: String,
    atomic_topic_ids: Vec<String>,
}

#[derive(Debug, Clone)]
struct AtomicTopicChunk {
    id: String,
    name: String,
    description: String,
    concept_ids: Vec<String>,
    skill_ids: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DisciplineChunks {
    id: String,
    name: String,
    description: String,
    markers: HashSet<ChunkMarker>,
    topics: Vec<TopicChunk>,
    atomic_topics: HashMap<String, AtomicTopicChunk>,
    concepts: HashMap<String, IndividualConcept>,
    skills: HashMap<String, Arc<SpecificSkill>>,
}

impl DisciplineChunks {
    /// Flatten a fully fetched discipline; every marker is set.
    pub fn from_discipline(discipline: &Discipline) -> Self {
        let mut chunks = Self {
            id: discipline.id.clone(),
            name: discipline.name.clone(),
            description: discipline.description.clone(),
            ..Default::default()
        };

        for topic in &discipline.main_topics {
            let mut atomic_topic_ids = Vec::with_capacity(topic.atomic_topics.len());
            for atomic in &topic.atomic_topics {
                atomic_topic_ids.push(atomic.id.clone());
                chunks.insert_atomic_topic(atomic);
            }
            chunks.topics.push(TopicChunk {
                id: topic.id.clone(),
                name: topic.name.clone(),
                description: topic.description.clone(),
                atomic_topic_ids,
            });
        }

        chunks.markers.extend(ChunkMarker::ALL);
        chunks
    }

    fn insert_atomic_topic(&mut self, atomic: &AtomicTopic) {
        let concept_ids = atomic.individual_concepts.iter().map(|c| c.id.clone()).collect();
        let skill_ids = atomic.skills.iter().map(|s| s.id.clone()).collect();

        for concept in &atomic.individual_concepts {
            self.concepts.insert(concept.id.clone(), concept.clone());
        }
        for skill in &atomic.skills {
            self.skills.insert(skill.id.clone(), Arc::new(skill.clone()));
        }

        self.atomic_topics.insert(
            atomic.id.clone(),
            AtomicTopicChunk {
                id: atomic.id.clone(),
                name: atomic.name.clone(),
                description: atomic.description.clone(),
                concept_ids,
                skill_ids,
            },
        );
    }

    pub fn has(&self, marker: ChunkMarker) -> bool {
        self.markers.contains(&marker)
    }

    /// `Complete`, or `Metadata` and `Topics` with at least one skill
    pub fn is_fully_loaded(&self) -> bool {
        self.has(ChunkMarker::Complete)
            || (self.has(ChunkMarker::Metadata) && self.has(ChunkMarker::Topics) && !self.skills.is_empty())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn skill(&self, id: &str) -> Option<Arc<SpecificSkill>> {
        self.skills.get(id).cloned()
    }

    /// Skills in tree order
    pub fn skills(&self) -> Vec<Arc<SpecificSkill>> {
        self.topics
            .iter()
            .flat_map(|t| t.atomic_topic_ids.iter())
            .filter_map(|id| self.atomic_topics.get(id))
            .flat_map(|a| a.skill_ids.iter())
            .filter_map(|id| self.skills.get(id).cloned())
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Rebuild the discipline tree, with totals computed from the leaves.
    pub fn reconstruct(&self, is_chunked: bool) -> Discipline {
        let main_topics: Vec<MainTopic> = self
            .topics
            .iter()
            .map(|topic| {
                let atomic_topics: Vec<AtomicTopic> = topic
                    .atomic_topic_ids
                    .iter()
                    .filter_map(|id| self.atomic_topics.get(id))
                    .map(|atomic| self.rebuild_atomic_topic(atomic))
                    .collect();
                MainTopic {
                    id: topic.id.clone(),
                    name: topic.name.clone(),
                    description: topic.description.clone(),
                    total_skills: atomic_topics.iter().map(|a| a.skills.len()).sum(),
                    atomic_topics,
                }
            })
            .collect();

        Discipline {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            total_skills: main_topics.iter().map(|t| t.total_skills).sum(),
            main_topics,
            is_chunked,
        }
    }

    fn rebuild_atomic_topic(&self, atomic: &AtomicTopicChunk) -> AtomicTopic {
        AtomicTopic {
            id: atomic.id.clone(),
            name: atomic.name.clone(),
            description: atomic.description.clone(),
            individual_concepts: atomic
                .concept_ids
                .iter()
                .filter_map(|id| self.concepts.get(id).cloned())
                .collect(),
            skills: atomic
                .skill_ids
                .iter()
                .filter_map(|id| self.skills.get(id).map(|s| s.as_ref().clone()))
                .collect(),
        }
    }
}
