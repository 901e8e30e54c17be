//! Consumer-facing read API
//!
//! Both stores implement `CurriculumLoader`; presentation helpers, search,
//! batch loading and validation are provided on top of the required
//! methods.

use std::sync::Arc;

use async_trait::async_trait;
use curriculum_model::{
    validate_document, CurriculumDocument, Difficulty, Discipline, DisciplineSummary, SkillSummary,
    SpecificSkill, ValidationResult,
};
use futures::future::join_all;
use serde::Serialize;
use tracing::warn;

use crate::error::{CurriculumError, Result};

/// Disciplines and skills matching a query
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub disciplines: Vec<Arc<Discipline>>,
    pub skills: Vec<Arc<SpecificSkill>>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.disciplines.is_empty() && self.skills.is_empty()
    }
}

/// Outcome of a batch discipline load
#[derive(Debug, Default)]
pub struct BatchLoad {
    pub loaded: Vec<Arc<Discipline>>,
    pub failed: Vec<(String, CurriculumError)>,
}

#[async_trait]
pub trait CurriculumLoader: Send + Sync {
    /// Assemble (or return the already assembled) curriculum.
    async fn load_curriculum(&self) -> Result<Arc<CurriculumDocument>>;

    async fn load_discipline(&self, id: &str) -> Result<Arc<Discipline>>;

    async fn load_skill(&self, id: &str) -> Result<Arc<SpecificSkill>>;

    async fn get_all_disciplines(&self) -> Vec<Arc<Discipline>>;

    async fn get_all_skills(&self) -> Vec<Arc<SpecificSkill>>;

    /// Empty for an unknown or not yet loaded discipline
    async fn get_skills_by_discipline(&self, discipline_id: &str) -> Vec<Arc<SpecificSkill>>;

    /// Case-insensitive substring match over skill name and description
    async fn search_skills(&self, query: &str) -> Vec<Arc<SpecificSkill>>;

    async fn get_skills_by_difficulty(&self, difficulty: Difficulty) -> Vec<Arc<SpecificSkill>>;

    /// Forget everything; the next load starts from scratch.
    async fn clear_cache(&self);

    async fn is_loaded(&self) -> bool;

    async fn formatted_disciplines(&self) -> Vec<DisciplineSummary> {
        self.get_all_disciplines()
            .await
            .iter()
            .map(|d| DisciplineSummary::from_discipline(d))
            .collect()
    }

    async fn formatted_skills_for_discipline(&self, discipline_id: &str) -> Vec<SkillSummary> {
        self.get_skills_by_discipline(discipline_id)
            .await
            .iter()
            .map(|s| SkillSummary::from_skill(s))
            .collect()
    }

    /// Disciplines and skills whose name or description contain `query`.
    /// A blank query matches nothing.
    async fn search(&self, query: &str) -> SearchResults {
        let query = query.trim();
        if query.is_empty() {
            return SearchResults::default();
        }

        let lower = query.to_lowercase();
        let disciplines = self
            .get_all_disciplines()
            .await
            .into_iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&lower) || d.description.to_lowercase().contains(&lower)
            })
            .collect();

        SearchResults {
            disciplines,
            skills: self.search_skills(query).await,
        }
    }

    /// Load several disciplines concurrently, reporting each failure.
    async fn load_disciplines(&self, ids: &[String]) -> BatchLoad {
        let outcomes = join_all(ids.iter().map(|id| self.load_discipline(id))).await;

        let mut batch = BatchLoad::default();
        for (id, outcome) in ids.iter().zip(outcomes) {
            match outcome {
                Ok(discipline) => batch.loaded.push(discipline),
                Err(e) => batch.failed.push((id.clone(), e)),
            }
        }
        batch
    }

    /// Warm a discipline; failures are logged, not returned.
    async fn prefetch_discipline(&self, id: &str) {
        if let Err(e) = self.load_discipline(id).await {
            warn!(discipline = %id, error = %e, "Prefetch failed");
        }
    }

    /// Validate the current curriculum.
    async fn validate(&self) -> Result<ValidationResult> {
        let document = self.load_curriculum().await?;
        Ok(validate_document(&document))
    }
}
