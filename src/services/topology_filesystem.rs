//! Topology file persistence (TOML or JSON, picked by extension).

use std::fs;
use std::path::Path;

use crate::domain::topology::check_branch_count;
use crate::domain::{AppError, TopologyFile};

/// Serialization format of a topology file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyFormat {
    Toml,
    Json,
}

impl TopologyFormat {
    /// `.json` files are JSON; anything else is TOML.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TopologyFormat::Json,
            _ => TopologyFormat::Toml,
        }
    }

    pub fn parse(&self, content: &str) -> Result<TopologyFile, AppError> {
        let file: TopologyFile = match self {
            TopologyFormat::Toml => toml::from_str(content)?,
            TopologyFormat::Json => serde_json::from_str(content)?,
        };
        check_branch_count(file.config.branch_count())?;
        Ok(file)
    }

    pub fn render(&self, file: &TopologyFile) -> Result<String, AppError> {
        match self {
            TopologyFormat::Toml => Ok(toml::to_string_pretty(file)?),
            TopologyFormat::Json => {
                let mut content = serde_json::to_string_pretty(file)?;
                content.push('\n');
                Ok(content)
            }
        }
    }
}

/// Load a topology file.
pub fn read_topology(path: &Path) -> Result<TopologyFile, AppError> {
    if !path.exists() {
        return Err(AppError::config_error(format!(
            "Topology file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let file = TopologyFormat::for_path(path).parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        variant = %file.variant,
        branches = file.config.branch_count(),
        "loaded topology"
    );
    Ok(file)
}

/// Write a topology file, creating parent directories as needed.
pub fn write_topology(path: &Path, file: &TopologyFile) -> Result<(), AppError> {
    let content = TopologyFormat::for_path(path).render(file)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "wrote topology");
    Ok(())
}
