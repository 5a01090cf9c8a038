use std::collections::HashSet;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, ScriptBundle, ScriptTarget, TopologyFile, ValidationReport, check_file_stem,
};
use crate::ports::{ClipboardWriter, Notice, Notifier, ScriptSink, ScriptTemplateStore};

use super::check;

/// Result of a generate request.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// The topology is missing required fields; nothing was rendered.
    Incomplete(ValidationReport),
    Generated(ScriptBundle),
}

/// Validate the topology and, when complete, render every script.
pub fn execute<N, T>(
    ctx: &mut AppContext<N, T>,
    file: &TopologyFile,
) -> Result<GenerateOutcome, AppError>
where
    N: Notifier,
    T: ScriptTemplateStore,
{
    let report = check::execute(ctx, file);
    if !report.is_valid() {
        return Ok(GenerateOutcome::Incomplete(report));
    }

    let bundle = ctx.generator()?.bundle(&file.config, file.variant)?;
    Ok(GenerateOutcome::Generated(bundle))
}

fn check_file_stems(bundle: &ScriptBundle) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for script in bundle.scripts() {
        check_file_stem(&script.file_stem)?;
        if !seen.insert(script.file_stem.as_str()) {
            return Err(AppError::DuplicateScript(script.file_stem.clone()));
        }
    }
    Ok(())
}

/// Check every requested output of a bundle before any of them is produced.
///
/// File names are checked only when the scripts will be saved.
pub fn check_outputs(
    bundle: &ScriptBundle,
    saving: bool,
    copy_target: Option<ScriptTarget>,
) -> Result<(), AppError> {
    if saving {
        check_file_stems(bundle)?;
    }
    if let Some(target) = copy_target {
        bundle.get(target)?;
    }
    Ok(())
}

/// Write every script of the bundle through `sink`.
///
/// File names are checked for validity and collisions before anything is written.
pub fn save<S: ScriptSink>(sink: &mut S, bundle: &ScriptBundle) -> Result<Vec<PathBuf>, AppError> {
    check_file_stems(bundle)?;

    bundle
        .scripts()
        .map(|script| sink.write_script(&script.file_stem, &script.content))
        .collect()
}

/// Copy one script of the bundle to the clipboard.
pub fn copy<C, N>(
    clipboard: &mut C,
    notifier: &mut N,
    bundle: &ScriptBundle,
    target: ScriptTarget,
) -> Result<(), AppError>
where
    C: ClipboardWriter,
    N: Notifier,
{
    let script = bundle.get(target)?;
    clipboard.write_text(&script.content)?;
    notifier.notify(Notice::info("Script copied", format!("{} copied to the clipboard.", script.title)));
    Ok(())
}

/// Announce a finished run. Call once every requested output succeeded.
pub fn report_generated<N: Notifier>(notifier: &mut N, bundle: &ScriptBundle) {
    notifier.notify(Notice::info(
        "Scripts generated",
        format!("{} script(s) generated.", bundle.script_count()),
    ));
}
