//! Curriculum data model
//!
//! Pure types and transformations, no I/O:
//! - the six-level curriculum tree (`types`)
//! - the raw fragment shape as served (`wire`)
//! - id namespacing and skill normalization (`namespace`)
//! - structural validation (`validate`)
//! - area and discipline-family lookup tables (`areas`)
//! - display summaries (`presentation`)
//!
//! # Example
//!
//! ```rust
//! use curriculum_model::{namespace_areas, FragmentCode, FragmentDocument};
//!
//! let body = br#"{"curriculumData":{"areas":[{"id":"a","disciplines":[]}]}}"#;
//! let fragment = FragmentDocument::from_slice(body).unwrap();
//! let code = FragmentCode::from_source_name("AT-17 - 17 - Vetores.json");
//! let areas = namespace_areas(fragment.curriculum_data.areas, &code);
//! assert_eq!(areas[0].id, "AT-17.a");
//! ```

pub mod areas;
pub mod namespace;
pub mod presentation;
pub mod types;
pub mod validate;
pub mod wire;

pub use areas::{area_color, area_for_prefix, area_icon, AreaCode, AreaInfo, DisciplineFamily};
pub use namespace::{namespace_areas, namespace_discipline, title_from_source_name, FragmentCode};
pub use presentation::{clean_discipline_name, DisciplineSummary, SkillSummary};
pub use types::*;
pub use validate::{
    validate, validate_document, validate_prerequisites, ValidationCode, ValidationIssue,
    ValidationResult,
};
pub use wire::{FragmentDocument, FragmentShapeError, RawArea};
