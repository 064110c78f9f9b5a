//! Read-only keyed record sets backed by YAML files.
//!
//! Each file holds a single top-level section (for example `stakeholders:`)
//! containing a list of records. A set is loaded and validated once, then
//! only read.

use crate::config::DecideConfig;
use crate::error::{DecideError, Result};
use crate::framework::DecisionFramework;
use crate::profile::StakeholderProfile;
use crate::project::Project;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A record type that can live in a [`RecordSet`].
pub trait Record: DeserializeOwned + Serialize {
    /// Singular name used in messages ("stakeholder").
    const KIND: &'static str;
    /// Top-level YAML key holding the record list ("stakeholders").
    const SECTION: &'static str;

    fn key(&self) -> &str;

    /// Semantic checks beyond what deserialization enforces. Returns one
    /// message per problem; empty means valid.
    fn validate(&self) -> Vec<String>;
}

#[derive(Debug)]
pub struct RecordSet<T> {
    path: PathBuf,
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> RecordSet<T> {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DecideError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| DecideError::io(path, e))?;
        let set = Self::parse(path, &content)?;
        if set.is_empty() {
            warn!(path = %path.display(), section = T::SECTION, "record file has no entries");
        }
        debug!(
            path = %path.display(),
            kind = T::KIND,
            count = set.len(),
            "loaded records"
        );
        Ok(set)
    }

    /// Parse and validate `content`; `path` is only used in errors.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let invalid = |problems: Vec<String>| DecideError::InvalidSchema {
            path: path.to_path_buf(),
            problems,
        };

        let doc: Value = serde_yaml::from_str(content).map_err(|e| invalid(vec![e.to_string()]))?;
        let items = section_items(&doc, T::SECTION).map_err(|p| invalid(vec![p]))?;

        let mut records = Vec::with_capacity(items.len());
        let mut problems = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            match serde_yaml::from_value::<T>(item) {
                Ok(record) => {
                    for problem in record.validate() {
                        problems.push(format!("{} '{}': {}", T::KIND, record.key(), problem));
                    }
                    records.push(record);
                }
                Err(e) => problems.push(format!("{} #{}: {}", T::KIND, i + 1, e)),
            }
        }
        if !problems.is_empty() {
            return Err(invalid(problems));
        }

        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.key().to_string(), i).is_some() {
                return Err(DecideError::DuplicateKey {
                    path: path.to_path_buf(),
                    kind: T::KIND,
                    key: record.key().to_string(),
                });
            }
        }

        Ok(RecordSet {
            path: path.to_path_buf(),
            records,
            index,
        })
    }

    pub fn get(&self, key: &str) -> Result<&T> {
        self.index
            .get(key)
            .map(|&i| &self.records[i])
            .ok_or_else(|| DecideError::NotFound {
                kind: T::KIND,
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Records in file order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn section_items(doc: &Value, section: &str) -> std::result::Result<Vec<Value>, String> {
    let map = match doc {
        Value::Mapping(map) => map,
        Value::Null => return Err(format!("missing `{}` section", section)),
        _ => return Err("top level must be a mapping".into()),
    };

    for key in map.keys() {
        match key.as_str() {
            Some(k) if k == section => {}
            Some(k) => return Err(format!("unknown top-level key `{}`", k)),
            None => return Err("top-level keys must be strings".into()),
        }
    }

    match map.get(section) {
        None => Err(format!("missing `{}` section", section)),
        Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => Ok(items.clone()),
        Some(_) => Err(format!("`{}` must be a list", section)),
    }
}

/// All three record sets, loaded together and cross-checked.
#[derive(Debug)]
pub struct Catalog {
    pub stakeholders: RecordSet<StakeholderProfile>,
    pub frameworks: RecordSet<DecisionFramework>,
    pub projects: RecordSet<Project>,
}

impl Catalog {
    pub fn open(dir: &Path, config: &DecideConfig) -> Result<Self> {
        let catalog = Catalog {
            stakeholders: RecordSet::load(&dir.join(&config.stakeholders))?,
            frameworks: RecordSet::load(&dir.join(&config.frameworks))?,
            projects: RecordSet::load(&dir.join(&config.projects))?,
        };

        let problems = catalog.dangling_references();
        if !problems.is_empty() {
            return Err(DecideError::InvalidSchema {
                path: catalog.projects.path().to_path_buf(),
                problems,
            });
        }
        Ok(catalog)
    }

    /// Project references to stakeholders or frameworks that do not exist.
    fn dangling_references(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for project in self.projects.iter() {
            if !self.stakeholders.contains(&project.owner) {
                problems.push(format!(
                    "project '{}': owner '{}' is not a known stakeholder",
                    project.id, project.owner
                ));
            }
            for id in &project.stakeholders {
                if !self.stakeholders.contains(id) {
                    problems.push(format!(
                        "project '{}': stakeholder '{}' is not known",
                        project.id, id
                    ));
                }
            }
            if !self.frameworks.contains(&project.framework) {
                problems.push(format!(
                    "project '{}': framework '{}' is not known",
                    project.id, project.framework
                ));
            }
        }
        problems
    }
}
