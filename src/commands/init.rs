use crate::config::{self, DecideConfig, CONFIG_FILE};
use crate::error::{DecideError, Result};
use crate::templates;
use std::fs;
use std::path::Path;

/// Create the `.decide` directory with a config and sample record files.
/// Existing files are left untouched.
pub fn run(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| DecideError::io(dir, e))?;

    let config_path = dir.join(CONFIG_FILE);
    let config = if !config_path.exists() {
        let config = DecideConfig::default();
        config::write_config(&config_path, &config)?;
        println!("  created {}", config_path.display());
        config
    } else {
        println!("  exists  {}", config_path.display());
        config::read_config(&config_path)?
    };

    for (filename, content) in templates::sample_files(&config) {
        let path = dir.join(filename);
        if !path.exists() {
            fs::write(&path, content).map_err(|e| DecideError::io(&path, e))?;
            println!("  created {}", path.display());
        } else {
            println!("  exists  {}", path.display());
        }
    }

    println!("\ndecide initialized at {}", dir.display());
    Ok(())
}
