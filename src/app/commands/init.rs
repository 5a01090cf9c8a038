use std::path::Path;

use crate::domain::{AppError, NetworkConfig, TopologyFile, Variant};
use crate::services::{read_topology, write_topology};

/// Options for the init command.
#[derive(Debug, Clone)]
pub struct InitOptions<'a> {
    pub path: &'a Path,
    pub variant: Variant,
    pub branches: usize,
    pub force: bool,
}

/// Write a topology file with empty hub fields and freshly defaulted branches.
pub fn execute(options: InitOptions<'_>) -> Result<TopologyFile, AppError> {
    if options.path.exists() && !options.force {
        return Err(AppError::TopologyExists(options.path.display().to_string()));
    }

    let config = NetworkConfig::new().with_branch_count(options.branches)?;
    let file = TopologyFile::new(options.variant, config);
    write_topology(options.path, &file)?;
    Ok(file)
}

/// Regenerate the branch list of an existing topology file.
///
/// Hub fields are kept; every branch entry is replaced by a fresh default.
pub fn resize(path: &Path, branches: usize) -> Result<TopologyFile, AppError> {
    let mut file = read_topology(path)?;
    file.config.set_branch_count(branches)?;
    write_topology(path, &file)?;
    Ok(file)
}
