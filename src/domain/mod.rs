pub mod error;
pub mod script;
pub mod topology;
pub mod validation;
pub mod variant;

pub use error::AppError;
pub use script::{
    GeneratedScript, ScriptBundle, ScriptGenerator, ScriptTarget, check_file_stem,
};
pub use topology::{BranchOffice, MAX_BRANCHES, NetworkConfig, TopologyFile, sanitize_hub_ip};
pub use validation::{ValidationIssue, ValidationReport, validate_config};
pub use variant::{BranchField, HubField, NeighborKeying, Variant, VariantProfile};
