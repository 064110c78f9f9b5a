use crate::error::{DecideError, Result};
use crate::store::Record;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Inclusive rating range used when scoring options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Scale { min: 1.0, max: 5.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
}

/// A named set of weighted criteria for scoring decision options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecisionFramework {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scale: Scale,
    pub criteria: Vec<Criterion>,
}

impl DecisionFramework {
    pub fn criterion(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    /// Weighted score of one option. Every criterion must be rated exactly
    /// once, within the framework's scale.
    pub fn score(&self, ratings: &BTreeMap<String, f64>) -> Result<f64> {
        for name in ratings.keys() {
            if self.criterion(name).is_none() {
                return Err(DecideError::Usage(format!(
                    "framework '{}' has no criterion '{}'",
                    self.name, name
                )));
            }
        }

        let mut total = 0.0;
        for criterion in &self.criteria {
            let rating = ratings.get(&criterion.name).ok_or_else(|| {
                DecideError::Usage(format!("missing rating for criterion '{}'", criterion.name))
            })?;
            if !(self.scale.min..=self.scale.max).contains(rating) {
                return Err(DecideError::Usage(format!(
                    "rating {} for '{}' is outside the scale {}..{}",
                    rating, criterion.name, self.scale.min, self.scale.max
                )));
            }
            total += criterion.weight * rating;
        }
        Ok(total)
    }
}

impl Record for DecisionFramework {
    const KIND: &'static str = "framework";
    const SECTION: &'static str = "frameworks";

    fn key(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name must not be empty".to_string());
        }
        if !self.scale.min.is_finite() || !self.scale.max.is_finite() {
            problems.push(format!(
                "scale bounds must be finite, got {}..{}",
                self.scale.min, self.scale.max
            ));
        } else if self.scale.min >= self.scale.max {
            problems.push(format!(
                "scale min {} must be below max {}",
                self.scale.min, self.scale.max
            ));
        }
        if self.criteria.is_empty() {
            problems.push("at least one criterion is required".to_string());
            return problems;
        }

        let mut seen = HashSet::new();
        let mut sum = 0.0;
        for c in &self.criteria {
            if !seen.insert(c.name.as_str()) {
                problems.push(format!("criterion '{}' listed twice", c.name));
            }
            if !(c.weight > 0.0 && c.weight <= 1.0) {
                problems.push(format!(
                    "criterion '{}' weight must be in (0, 1], got {}",
                    c.name, c.weight
                ));
            }
            sum += c.weight;
        }
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            problems.push(format!("criteria weights must sum to 1, got {}", sum));
        }
        problems
    }
}

/// Parse `criterion=value` pairs as given on the command line.
pub fn parse_ratings(pairs: &[String]) -> Result<BTreeMap<String, f64>> {
    let mut ratings = BTreeMap::new();
    for pair in pairs {
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            DecideError::Usage(format!("rating '{}' must look like criterion=value", pair))
        })?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| DecideError::Usage(format!("rating '{}' has a non-numeric value", pair)))?;
        if ratings.insert(name.trim().to_string(), value).is_some() {
            return Err(DecideError::Usage(format!("criterion '{}' rated twice", name.trim())));
        }
    }
    Ok(ratings)
}
