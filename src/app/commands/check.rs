use crate::app::AppContext;
use crate::domain::validation::VALIDATION_TITLE;
use crate::domain::{NetworkConfig, TopologyFile, ValidationReport, Variant, validate_config};
use crate::ports::{Notice, Notifier, ScriptTemplateStore};

/// Check a topology and warn the operator when it is incomplete.
///
/// At most one notice is raised per call.
pub fn validate<N: Notifier>(notifier: &mut N, config: &NetworkConfig, variant: Variant) -> bool {
    report(notifier, config, variant).is_valid()
}

fn report<N: Notifier>(
    notifier: &mut N,
    config: &NetworkConfig,
    variant: Variant,
) -> ValidationReport {
    let report = validate_config(config, variant);
    if let Some(message) = report.summary() {
        tracing::debug!(variant = %variant, issues = report.issues.len(), "topology incomplete");
        notifier.notify(Notice::warning(VALIDATION_TITLE, message));
    }
    report
}

/// Execute the check command, returning every missing field.
pub fn execute<N, T>(ctx: &mut AppContext<N, T>, file: &TopologyFile) -> ValidationReport
where
    N: Notifier,
    T: ScriptTemplateStore,
{
    report(ctx.notifier_mut(), &file.config, file.variant)
}
