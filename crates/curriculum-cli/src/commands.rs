//! Subcommand execution
//!
//! Each command runs against any `CurriculumLoader` and produces both a
//! text rendering and a JSON value; `main` prints whichever was asked for.

use std::fmt::Write;

use curriculum_model::{
    area_color, area_icon, Area, DisciplineSummary, FragmentCode, SkillSummary, ValidationIssue,
};
use curriculum_sdk::{CurriculumLoader, LoadingProgress, Result};
use serde_json::{json, Value};

use crate::config::Command;

/// Rendered command result
#[derive(Debug, Clone)]
pub struct Report {
    pub text: String,
    pub json: Value,
    /// `false` maps to exit status 1
    pub success: bool,
}

impl Report {
    fn ok(text: String, json: Value) -> Self {
        Self { text, json, success: true }
    }
}

/// Run one command. `chunked` loads a skill's discipline before looking
/// the skill up, since the progressive loader never fetches for skills.
pub async fn run(loader: &dyn CurriculumLoader, command: &Command, chunked: bool) -> Result<Report> {
    match command {
        Command::Summary => summary(loader).await,
        Command::Validate => validate(loader).await,
        Command::Search { query } => search(loader, query).await,
        Command::Discipline { id } => discipline(loader, id).await,
        Command::Skill { id } => {
            if chunked {
                let code = FragmentCode::from_source_name(id.split('.').next().unwrap_or(id));
                loader.prefetch_discipline(code.as_str()).await;
            }
            skill(loader, id).await
        }
    }
}

async fn summary(loader: &dyn CurriculumLoader) -> Result<Report> {
    let document = loader.load_curriculum().await?;
    let metadata = &document.curriculum_data.metadata;
    let discipline_count = document.disciplines().count();

    let mut text = String::new();
    let _ = writeln!(text, "{} ({})", metadata.institution, metadata.version);
    let _ = writeln!(
        text,
        "{} areas, {} disciplines, {} skills",
        document.areas().len(),
        discipline_count,
        metadata.total_atomic_skills
    );
    for area in document.areas() {
        let _ = writeln!(text);
        let _ = writeln!(
            text,
            "{} {}  [{}]  {} skills",
            area_style(area).0,
            area.name,
            area.id,
            area.total_skills
        );
        for discipline in &area.disciplines {
            let deferred = if discipline.is_chunked && discipline.main_topics.is_empty() {
                "  (not loaded)"
            } else {
                ""
            };
            let _ = writeln!(
                text,
                "  {:<28} {:>5}  {}{}",
                discipline.id, discipline.total_skills, discipline.name, deferred
            );
        }
    }

    let areas: Vec<Value> = document
        .areas()
        .iter()
        .map(|area| {
            let (icon, color) = area_style(area);
            json!({
                "id": area.id,
                "name": area.name,
                "icon": icon,
                "color": color,
                "totalSkills": area.total_skills,
                "disciplines": area.disciplines.iter().map(DisciplineSummary::from_discipline).collect::<Vec<_>>(),
            })
        })
        .collect();

    Ok(Report::ok(
        text,
        json!({
            "metadata": metadata,
            "areaCount": document.areas().len(),
            "disciplineCount": discipline_count,
            "areas": areas,
        }),
    ))
}

/// Icon and colour of an area, keyed by its first discipline's prefix
fn area_style(area: &Area) -> (&'static str, &'static str) {
    let code = area.disciplines.first().map(|d| FragmentCode::from_source_name(&d.id));
    let prefix = code.as_ref().map(|c| c.area_prefix()).unwrap_or_default();
    (area_icon(prefix), area_color(prefix))
}

fn write_issues(text: &mut String, label: &str, issues: &[ValidationIssue]) {
    for issue in issues {
        let _ = writeln!(text, "{} {} at {}: {}", label, issue.code.as_str(), issue.path, issue.message);
    }
}

async fn validate(loader: &dyn CurriculumLoader) -> Result<Report> {
    let result = loader.validate().await?;

    let mut text = String::new();
    write_issues(&mut text, "error", &result.errors);
    write_issues(&mut text, "warning", &result.warnings);
    let _ = writeln!(
        text,
        "{}: {} errors, {} warnings",
        if result.is_valid { "valid" } else { "invalid" },
        result.errors.len(),
        result.warnings.len()
    );

    Ok(Report {
        text,
        json: json!(result),
        success: result.is_valid,
    })
}

async fn search(loader: &dyn CurriculumLoader, query: &str) -> Result<Report> {
    loader.load_curriculum().await?;
    let results = loader.search(query).await;

    let mut text = String::new();
    let _ = writeln!(
        text,
        "{} disciplines, {} skills match \"{}\"",
        results.disciplines.len(),
        results.skills.len(),
        query
    );
    for discipline in &results.disciplines {
        let _ = writeln!(text, "  discipline {}  {}", discipline.id, discipline.name);
    }
    for skill in &results.skills {
        let _ = writeln!(text, "  skill {}  {}", skill.id, skill.name);
    }

    Ok(Report::ok(text, json!(results)))
}

async fn discipline(loader: &dyn CurriculumLoader, id: &str) -> Result<Report> {
    let discipline = loader.load_discipline(id).await?;
    let summary = DisciplineSummary::from_discipline(&discipline);
    let skills = loader.formatted_skills_for_discipline(&discipline.id).await;

    let mut text = String::new();
    let _ = writeln!(text, "{} {}  [{}]", summary.icon, summary.name, summary.id);
    if !summary.description.is_empty() {
        let _ = writeln!(text, "{}", summary.description);
    }
    let _ = writeln!(text, "{} topics, {} skills", discipline.main_topics.len(), summary.total_skills);
    for skill in &skills {
        let _ = writeln!(
            text,
            "  {:<24} {:<12} {:>4}  {}",
            skill.id,
            skill.difficulty.as_str(),
            skill.estimated_time,
            skill.name
        );
    }

    Ok(Report::ok(text, json!({ "discipline": summary, "skills": skills })))
}

async fn skill(loader: &dyn CurriculumLoader, id: &str) -> Result<Report> {
    let skill = loader.load_skill(id).await?;
    let summary = SkillSummary::from_skill(&skill);

    let mut text = String::new();
    let _ = writeln!(text, "{}  [{}]", summary.name, summary.id);
    if !summary.description.is_empty() {
        let _ = writeln!(text, "{}", summary.description);
    }
    let _ = writeln!(text, "difficulty: {}", summary.difficulty);
    let _ = writeln!(text, "estimated time: {}", summary.estimated_time);
    if !summary.prerequisites.is_empty() {
        let _ = writeln!(text, "prerequisites: {}", summary.prerequisites.join(", "));
    }
    for step in &summary.steps {
        let _ = writeln!(text, "  {}. {}", step.step_number, step.title);
    }

    Ok(Report::ok(text, json!({ "summary": summary, "skill": skill })))
}

/// One stderr line per progress update
pub fn progress_line(progress: &LoadingProgress) -> String {
    match &progress.current_file {
        Some(file) => format!(
            "[{}] {}/{} ({:.0}%) {}",
            progress.stage,
            progress.loaded,
            progress.total,
            progress.percentage(),
            file
        ),
        None => format!(
            "[{}] {}/{} ({:.0}%)",
            progress.stage,
            progress.loaded,
            progress.total,
            progress.percentage()
        ),
    }
}
