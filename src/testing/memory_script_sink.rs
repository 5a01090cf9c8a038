use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ScriptSink;

/// In-memory script sink recording every write in order.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MemoryScriptSink {
    pub written: Vec<(String, String)>,
    /// Fail on the write with this stem.
    pub fail_on: Option<String>,
}

#[allow(dead_code)]
impl MemoryScriptSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(stem: &str) -> Self {
        Self { written: Vec::new(), fail_on: Some(stem.to_string()) }
    }

    pub fn stems(&self) -> Vec<&str> {
        self.written.iter().map(|(stem, _)| stem.as_str()).collect()
    }

    pub fn content(&self, stem: &str) -> Option<&str> {
        self.written.iter().find(|(s, _)| s == stem).map(|(_, content)| content.as_str())
    }
}

impl ScriptSink for MemoryScriptSink {
    fn write_script(&mut self, file_stem: &str, content: &str) -> Result<PathBuf, AppError> {
        if self.fail_on.as_deref() == Some(file_stem) {
            return Err(AppError::InvalidFileName(file_stem.to_string()));
        }
        self.written.push((file_stem.to_string(), content.to_string()));
        Ok(PathBuf::from(format!("{}.txt", file_stem)))
    }
}
