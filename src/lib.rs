//! mplsgen: hub-and-spoke MPLS/VPLS pseudowire script generation.
//!
//! A topology (one hub, up to ten branches) is checked for required fields and rendered
//! into one router script for the hub plus one per branch.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use domain::ScriptGenerator;
use services::EmbeddedScriptTemplateStore;

pub use app::commands::check::validate;
pub use app::commands::generate::GenerateOutcome;
pub use app::commands::list::VariantSummary;
pub use domain::{
    AppError, BranchOffice, GeneratedScript, MAX_BRANCHES, NetworkConfig, ScriptBundle,
    ScriptTarget, TopologyFile, ValidationIssue, ValidationReport, Variant, sanitize_hub_ip,
    validate_config,
};

fn embedded_generator() -> Result<ScriptGenerator, AppError> {
    ScriptGenerator::new(&EmbeddedScriptTemplateStore::new())
}

/// Render the hub script for `config` using the built-in skeleton.
pub fn generate_hub_script(config: &NetworkConfig, variant: Variant) -> Result<String, AppError> {
    embedded_generator()?.hub_script(config, variant)
}

/// Render the script for one branch of `config` using the built-in skeleton.
pub fn generate_branch_script(
    config: &NetworkConfig,
    branch: &BranchOffice,
    variant: Variant,
) -> Result<String, AppError> {
    embedded_generator()?.branch_script(config, branch, variant)
}

/// Render the hub script followed by every branch script.
///
/// Does not validate; pair with [`validate`] or [`validate_config`].
pub fn generate_bundle(config: &NetworkConfig, variant: Variant) -> Result<ScriptBundle, AppError> {
    embedded_generator()?.bundle(config, variant)
}
