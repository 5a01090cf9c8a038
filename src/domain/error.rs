use std::io;

use thiserror::Error;

/// Library-wide error type for mplsgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Variant name does not match any generator.
    #[error("Unknown variant '{0}': must be one of untagged, tagged")]
    UnknownVariant(String),

    /// Branch count outside the supported range.
    #[error("Branch count {count} is out of range: must be between 0 and {max}")]
    BranchCountOutOfRange { count: usize, max: usize },

    /// Branch number does not refer to an existing branch.
    #[error("Branch {index} does not exist (topology has {count} branch(es))")]
    BranchIndexOutOfRange { index: usize, count: usize },

    /// Output file name cannot be used as a file in the output directory.
    #[error("Invalid script file name '{0}': must be non-empty and contain no path separators")]
    InvalidFileName(String),

    /// Two scripts in one bundle would be written to the same file.
    #[error("Duplicate script file name '{0}': hub and branch names must be distinct")]
    DuplicateScript(String),

    /// Topology file already exists at the target location.
    #[error("Topology file already exists: {0} (use --force to overwrite)")]
    TopologyExists(String),

    /// Embedded template failed to load or render.
    #[error("Template error in '{template}': {reason}")]
    Template { template: String, reason: String },

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Interactive prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::Json(_)
            | AppError::UnknownVariant(_)
            | AppError::BranchCountOutOfRange { .. }
            | AppError::BranchIndexOutOfRange { .. }
            | AppError::InvalidFileName(_)
            | AppError::DuplicateScript(_) => io::ErrorKind::InvalidInput,
            AppError::TopologyExists(_) => io::ErrorKind::AlreadyExists,
            AppError::TomlSerialize(_)
            | AppError::Template { .. }
            | AppError::Clipboard(_)
            | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
