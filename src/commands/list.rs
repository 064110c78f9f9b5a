use crate::config::DecideConfig;
use crate::error::Result;
use crate::framework::DecisionFramework;
use crate::output::{self, OutputFormat};
use crate::profile::StakeholderProfile;
use crate::project::Project;
use crate::store::RecordSet;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListKind {
    Stakeholders,
    Frameworks,
    Projects,
}

/// One line of a listing
#[derive(Debug, Serialize)]
pub struct Summary {
    pub key: String,
    pub name: String,
    pub detail: String,
}

pub fn run(dir: &Path, config: &DecideConfig, kind: ListKind, format: OutputFormat) -> Result<()> {
    let rows = summaries(dir, config, kind)?;
    println!("{}", render(kind, &rows, format)?);
    Ok(())
}

pub fn summaries(dir: &Path, config: &DecideConfig, kind: ListKind) -> Result<Vec<Summary>> {
    let rows = match kind {
        ListKind::Stakeholders => {
            let set = RecordSet::<StakeholderProfile>::load(&dir.join(&config.stakeholders))?;
            set.iter()
                .map(|p| Summary {
                    key: p.id.clone(),
                    name: p.name.clone(),
                    detail: format!("{} ({:.2})", p.authority_level, p.influence_score()),
                })
                .collect()
        }
        ListKind::Frameworks => {
            let set = RecordSet::<DecisionFramework>::load(&dir.join(&config.frameworks))?;
            set.iter()
                .map(|f| Summary {
                    key: f.name.clone(),
                    name: f.description.clone(),
                    detail: format!("{} criteria", f.criteria.len()),
                })
                .collect()
        }
        ListKind::Projects => {
            let set = RecordSet::<Project>::load(&dir.join(&config.projects))?;
            set.iter()
                .map(|p| Summary {
                    key: p.id.clone(),
                    name: p.name.clone(),
                    detail: format!("owner {}", p.owner),
                })
                .collect()
        }
    };
    Ok(rows)
}

pub fn render(kind: ListKind, rows: &[Summary], format: OutputFormat) -> Result<String> {
    if format != OutputFormat::Table {
        return output::to_structured(&rows, format);
    }
    if rows.is_empty() {
        return Ok("no records found".to_string());
    }

    let header = match kind {
        ListKind::Stakeholders => ("ID", "NAME", "AUTHORITY"),
        ListKind::Frameworks => ("NAME", "DESCRIPTION", "CRITERIA"),
        ListKind::Projects => ("ID", "NAME", "OWNER"),
    };
    let width = rows.iter().map(|r| r.key.chars().count()).max().unwrap_or(0).max(header.0.len());
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.1.len());
    let detail_width = rows
        .iter()
        .map(|r| r.detail.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.2.len());

    let mut lines = vec![format!(
        "{:<width$}  {:<name_width$}  {}",
        header.0, header.1, header.2
    )];
    lines.push("-".repeat(width + name_width + detail_width + 4));
    for r in rows {
        lines.push(format!("{:<width$}  {:<name_width$}  {}", r.key, r.name, r.detail));
    }
    Ok(lines.join("\n"))
}
