use crate::store::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Milestone {
    pub name: String,
    pub due: NaiveDate,
    #[serde(default)]
    pub done: bool,
}

impl Milestone {
    /// Days from `today` until due; negative once past due.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.due - today).num_days()
    }
}

/// A project tracked against a decision framework
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub framework: String,
    #[serde(default)]
    pub stakeholders: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Project {
    /// Earliest open milestone due on or after `today`
    pub fn next_milestone(&self, today: NaiveDate) -> Option<&Milestone> {
        self.milestones
            .iter()
            .filter(|m| !m.done && m.due >= today)
            .min_by_key(|m| m.due)
    }

    /// Open milestones already past due, earliest first
    pub fn overdue(&self, today: NaiveDate) -> Vec<&Milestone> {
        let mut late: Vec<_> = self
            .milestones
            .iter()
            .filter(|m| !m.done && m.due < today)
            .collect();
        late.sort_by_key(|m| m.due);
        late
    }

    pub fn completed(&self) -> usize {
        self.milestones.iter().filter(|m| m.done).count()
    }
}

impl Record for Project {
    const KIND: &'static str = "project";
    const SECTION: &'static str = "projects";

    fn key(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.id.trim().is_empty() {
            problems.push("id must not be empty".to_string());
        }
        if self.name.trim().is_empty() {
            problems.push("name must not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for m in &self.milestones {
            if !seen.insert(m.name.as_str()) {
                problems.push(format!("milestone '{}' listed twice", m.name));
            }
        }
        let mut members = HashSet::new();
        for id in &self.stakeholders {
            if !members.insert(id.as_str()) {
                problems.push(format!("stakeholder '{}' listed twice", id));
            }
        }
        problems
    }
}
