use std::path::PathBuf;

use crate::domain::AppError;

/// Port for persisting generated scripts as downloadable text files.
pub trait ScriptSink {
    /// Store `content` under `<file_stem>.txt` and return where it landed.
    fn write_script(&mut self, file_stem: &str, content: &str) -> Result<PathBuf, AppError>;
}
