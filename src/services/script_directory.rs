use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, check_file_stem};
use crate::ports::ScriptSink;

/// Writes each script to `<dir>/<stem>.txt`.
#[derive(Debug, Clone)]
pub struct DirectoryScriptSink {
    dir: PathBuf,
}

impl DirectoryScriptSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ScriptSink for DirectoryScriptSink {
    fn write_script(&mut self, file_stem: &str, content: &str) -> Result<PathBuf, AppError> {
        check_file_stem(file_stem)?;
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(format!("{}.txt", file_stem));
        fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote script");
        Ok(path)
    }
}
