use crate::config::DecideConfig;
use crate::error::Result;
use crate::framework::{parse_ratings, DecisionFramework};
use crate::output::{self, field, OutputFormat};
use crate::profile::StakeholderProfile;
use crate::project::{Milestone, Project};
use crate::store::RecordSet;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct StakeholderView<'a> {
    #[serde(flatten)]
    profile: &'a StakeholderProfile,
    influence_score: f64,
}

#[derive(Serialize)]
struct FrameworkView<'a> {
    #[serde(flatten)]
    framework: &'a DecisionFramework,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
}

#[derive(Serialize)]
struct ProjectView<'a> {
    #[serde(flatten)]
    project: &'a Project,
    today: NaiveDate,
    next_milestone: Option<&'a Milestone>,
    overdue: Vec<&'a Milestone>,
}

pub fn stakeholder(dir: &Path, config: &DecideConfig, id: &str, format: OutputFormat) -> Result<()> {
    let set = RecordSet::<StakeholderProfile>::load(&dir.join(&config.stakeholders))?;
    println!("{}", render_stakeholder(set.get(id)?, format)?);
    Ok(())
}

pub fn framework(
    dir: &Path,
    config: &DecideConfig,
    name: &str,
    rates: &[String],
    format: OutputFormat,
) -> Result<()> {
    let set = RecordSet::<DecisionFramework>::load(&dir.join(&config.frameworks))?;
    let fw = set.get(name)?;
    let score = if rates.is_empty() {
        None
    } else {
        Some(fw.score(&parse_ratings(rates)?)?)
    };
    println!("{}", render_framework(fw, score, format)?);
    Ok(())
}

pub fn project(
    dir: &Path,
    config: &DecideConfig,
    id: &str,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    let set = RecordSet::<Project>::load(&dir.join(&config.projects))?;
    println!("{}", render_project(set.get(id)?, today, format)?);
    Ok(())
}

pub fn render_stakeholder(profile: &StakeholderProfile, format: OutputFormat) -> Result<String> {
    let score = profile.influence_score();
    if format != OutputFormat::Table {
        return output::to_structured(
            &StakeholderView {
                profile,
                influence_score: score,
            },
            format,
        );
    }

    let c = &profile.communication;
    let i = &profile.influence;
    let mut lines = vec![
        field("Stakeholder", &profile.id),
        field("Name", &profile.name),
        field("Role", &profile.role),
        field("Authority", profile.authority_level),
        field(
            "Communication",
            format!("{}, {}, {}", c.channel, c.frequency, c.detail),
        ),
        field(
            "Influence",
            format!(
                "authority {:.2}, expertise {:.2}, network {:.2}",
                i.authority, i.expertise, i.network
            ),
        ),
        field("Score", format!("{:.2}", score)),
    ];
    if !profile.interests.is_empty() {
        lines.push(field("Interests", profile.interests.join(", ")));
    }
    Ok(lines.join("\n"))
}

pub fn render_framework(
    framework: &DecisionFramework,
    score: Option<f64>,
    format: OutputFormat,
) -> Result<String> {
    if format != OutputFormat::Table {
        return output::to_structured(&FrameworkView { framework, score }, format);
    }

    let mut lines = vec![field("Framework", &framework.name)];
    if !framework.description.is_empty() {
        lines.push(field("Description", &framework.description));
    }
    lines.push(field(
        "Scale",
        format!("{} to {}", framework.scale.min, framework.scale.max),
    ));
    lines.push(String::new());
    lines.push("Criteria:".to_string());
    for c in &framework.criteria {
        lines.push(format!("  {:<20} {:.2}", c.name, c.weight));
    }
    if let Some(score) = score {
        lines.push(String::new());
        lines.push(field("Score", format!("{:.2}", score)));
    }
    Ok(lines.join("\n"))
}

pub fn render_project(project: &Project, today: NaiveDate, format: OutputFormat) -> Result<String> {
    let next = project.next_milestone(today);
    let overdue = project.overdue(today);
    if format != OutputFormat::Table {
        return output::to_structured(
            &ProjectView {
                project,
                today,
                next_milestone: next,
                overdue,
            },
            format,
        );
    }

    let mut lines = vec![
        field("Project", &project.id),
        field("Name", &project.name),
        field("Owner", &project.owner),
        field("Framework", &project.framework),
        field(
            "Milestones",
            format!("{}/{} done", project.completed(), project.milestones.len()),
        ),
    ];
    match next {
        Some(m) => lines.push(field(
            "Next",
            format!("{} on {} ({} days)", m.name, m.due, m.days_until(today)),
        )),
        None => lines.push(field("Next", "(none)")),
    }
    for m in &overdue {
        lines.push(field(
            "Overdue",
            format!("{} was due {} ({} days late)", m.name, m.due, -m.days_until(today)),
        ));
    }
    if !project.stakeholders.is_empty() {
        lines.push(String::new());
        lines.push("Stakeholders:".to_string());
        for id in &project.stakeholders {
            lines.push(format!("  - {}", id));
        }
    }
    Ok(lines.join("\n"))
}
