//! Check and generate command implementations.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::{check, generate};
use crate::domain::{AppError, ScriptBundle, ScriptTarget};
use crate::ports::{Notice, Notifier};
use crate::services::{
    ArboardClipboard, ConsoleNotifier, DirectoryScriptSink, EmbeddedScriptTemplateStore,
    read_topology,
};

pub struct GenerateArgs {
    pub path: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub format: String,
    pub copy: Option<String>,
    pub wait_clipboard: bool,
    pub quiet: bool,
}

fn context() -> AppContext<ConsoleNotifier, EmbeddedScriptTemplateStore> {
    AppContext::new(ConsoleNotifier::new(), EmbeddedScriptTemplateStore::new())
}

/// Parse a clipboard target: `hub` or a 1-based branch number.
fn parse_target(value: &str) -> Result<ScriptTarget, AppError> {
    if value.eq_ignore_ascii_case("hub") {
        return Ok(ScriptTarget::Hub);
    }
    match value.parse::<usize>() {
        Ok(number) if number > 0 => Ok(ScriptTarget::Branch { number }),
        _ => Err(AppError::config_error(format!(
            "Invalid copy target '{}': use \"hub\" or a branch number",
            value
        ))),
    }
}

pub fn run_check(path: PathBuf) -> Result<i32, AppError> {
    let file = read_topology(&path)?;
    let mut ctx = context();

    let report = check::execute(&mut ctx, &file);
    if report.is_valid() {
        println!(
            "✅ {} is complete ({} topology, {} branch(es))",
            path.display(),
            file.variant,
            file.config.branch_count()
        );
        return Ok(0);
    }

    println!("Missing fields in {}:", path.display());
    for issue in &report.issues {
        println!("  • {}", issue);
    }
    Ok(1)
}

fn print_text(bundle: &ScriptBundle) {
    for (index, script) in bundle.scripts().enumerate() {
        if index > 0 {
            println!();
        }
        println!("# {} ({}.txt)", script.title, script.file_stem);
        println!("{}", script.content);
    }
}

/// Warning shown after a copy whose text dies with the process.
fn clipboard_hint(wait: bool) -> Option<&'static str> {
    if cfg!(target_os = "linux") && !wait {
        Some(
            "On Linux the copied script may be lost when mplsgen exits; \
             use --wait-clipboard to keep it until the clipboard is replaced.",
        )
    } else {
        None
    }
}

pub fn run_generate(args: GenerateArgs) -> Result<i32, AppError> {
    let target = args.copy.as_deref().map(parse_target).transpose()?;
    let file = read_topology(&args.path)?;
    let mut ctx = context();

    let bundle = match generate::execute(&mut ctx, &file)? {
        generate::GenerateOutcome::Generated(bundle) => bundle,
        generate::GenerateOutcome::Incomplete(_) => return Ok(1),
    };
    generate::check_outputs(&bundle, args.out_dir.is_some(), target)?;

    if !args.quiet {
        match args.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&bundle)?),
            _ => print_text(&bundle),
        }
    }

    if let Some(dir) = args.out_dir {
        let mut sink = DirectoryScriptSink::new(dir);
        let paths = generate::save(&mut sink, &bundle)?;
        eprintln!("✅ Wrote {} script(s) to {}", paths.len(), sink.dir().display());
    }

    if let Some(target) = target {
        let mut clipboard = ArboardClipboard::new()?.waiting(args.wait_clipboard);
        if args.wait_clipboard {
            eprintln!("Keeping the script on the clipboard until another program replaces it...");
        }
        generate::copy(&mut clipboard, ctx.notifier_mut(), &bundle, target)?;
        if let Some(hint) = clipboard_hint(args.wait_clipboard) {
            ctx.notifier_mut().notify(Notice::warning("Clipboard", hint));
        }
    }

    generate::report_generated(ctx.notifier_mut(), &bundle);
    Ok(0)
}
