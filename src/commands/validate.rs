use crate::config::DecideConfig;
use crate::error::Result;
use crate::store::Catalog;
use std::path::Path;

/// Load every record file and cross-check references between them
pub fn run(dir: &Path, config: &DecideConfig) -> Result<()> {
    let catalog = Catalog::open(dir, config)?;

    let rows = [
        (catalog.stakeholders.path(), count(catalog.stakeholders.len(), "stakeholder")),
        (catalog.frameworks.path(), count(catalog.frameworks.len(), "framework")),
        (catalog.projects.path(), count(catalog.projects.len(), "project")),
    ];
    for (path, summary) in rows {
        println!("  {:<40} {}", path.display().to_string(), summary);
    }
    println!("\nall records valid");
    Ok(())
}

fn count(n: usize, kind: &str) -> String {
    if n == 1 {
        format!("1 {}", kind)
    } else {
        format!("{} {}s", n, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_count_pluralizes() {
        assert_eq!(count(1, "project"), "1 project");
        assert_eq!(count(0, "project"), "0 projects");
        assert_eq!(count(3, "framework"), "3 frameworks");
    }

    #[test]
    fn test_validate_initialized_dir() {
        let dir = tempdir().unwrap();
        init::run(dir.path()).unwrap();
        run(dir.path(), &DecideConfig::default()).unwrap();
    }

    #[test]
    fn test_validate_reports_bad_framework() {
        let dir = tempdir().unwrap();
        init::run(dir.path()).unwrap();
        let path = dir.path().join("decision_frameworks.yaml");
        let broken = fs::read_to_string(&path).unwrap().replace("weight: 0.4", "weight: 0.9");
        fs::write(&path, broken).unwrap();

        let err = run(dir.path(), &DecideConfig::default()).unwrap_err();
        assert!(err.to_string().contains("framework 'weighted-scoring'"), "{err}");
    }
}
