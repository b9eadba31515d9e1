use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{get_config_path, Config};

const HEADER: &str = "# gpa-calc configuration\n\
# theme: auto | dark | light\n\
# animation: count-up duration of the result (e.g. 1s, 750ms)\n";

/// Write the default configuration file.
///
/// If `path` is None, writes to ~/.config/gpa-calc/config.yaml. An existing
/// file is left alone unless `force` is set. Returns the path written.
pub fn write_default_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    ensure_parent_dir(&config_path)?;

    let yaml = serde_saphyr::to_string(&Config::with_defaults())
        .context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(&config_path)
        .with_context(|| format!("Failed to open atomic write file at {}", config_path.display()))?;
    file.write_all(HEADER.as_bytes())
        .and_then(|_| file.write_all(yaml.as_bytes()))
        .context("Failed to write config file")?;
    file.commit().context("Failed to save config file")?;

    Ok(config_path)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory at {}", dir.display()))?;
        }
    }
    Ok(())
}
