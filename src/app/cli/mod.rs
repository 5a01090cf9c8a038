//! CLI Adapter.

mod form;
mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::commands::{init, list};
use crate::app::logging;
use crate::domain::{AppError, Variant};

#[derive(Parser)]
#[command(name = "mplsgen")]
#[command(version)]
#[command(
    about = "Generate hub-and-spoke MPLS/VPLS pseudowire router scripts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available script generators
    #[clap(visible_alias = "ls")]
    List,
    /// Create a topology file with defaulted branches
    #[clap(visible_alias = "i")]
    Init {
        /// Topology file to create (.toml or .json)
        path: PathBuf,
        /// Generator variant
        #[arg(short, long, default_value = "untagged", value_parser = ["untagged", "tagged"])]
        variant: String,
        /// Number of branches
        #[arg(short, long, default_value_t = 1)]
        branches: usize,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Replace the branch list with freshly defaulted entries
    Resize {
        /// Topology file to update
        path: PathBuf,
        /// New number of branches
        #[arg(short, long)]
        branches: usize,
    },
    /// Fill in a topology file interactively
    #[clap(visible_alias = "f")]
    Form {
        /// Generator variant (prompted when omitted)
        #[arg(short, long, value_parser = ["untagged", "tagged"])]
        variant: Option<String>,
        /// Topology file to write
        #[arg(short, long, default_value = "topology.toml")]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Report missing required fields
    #[clap(visible_alias = "c")]
    Check {
        /// Topology file to check
        path: PathBuf,
    },
    /// Render hub and branch scripts
    #[clap(visible_alias = "g")]
    Generate {
        /// Topology file to render
        path: PathBuf,
        /// Also write each script to <DIR>/<name>.txt
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
        /// Output format on stdout
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Copy one script to the clipboard: "hub" or a branch number
        #[arg(short, long, value_name = "TARGET")]
        copy: Option<String>,
        /// Stay running until the copied script is replaced on the clipboard (Linux)
        #[arg(long, requires = "copy")]
        wait_clipboard: bool,
        /// Do not print scripts on stdout
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::List => run_list().map(|_| 0),
        Commands::Init { path, variant, branches, force } => {
            run_init(path, &variant, branches, force).map(|_| 0)
        }
        Commands::Resize { path, branches } => run_resize(path, branches).map(|_| 0),
        Commands::Form { variant, output, force } => {
            form::run_form(variant.as_deref(), output, force).map(|_| 0)
        }
        Commands::Check { path } => generate::run_check(path),
        Commands::Generate { path, out_dir, format, copy, wait_clipboard, quiet } => {
            generate::run_generate(generate::GenerateArgs {
                path,
                out_dir,
                format,
                copy,
                wait_clipboard,
                quiet,
            })
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_list() -> Result<(), AppError> {
    println!("Available generators:");
    for summary in list::execute() {
        println!("  {} ({}) - {}", summary.name, summary.id, summary.display_name);
        println!("    {}", summary.description);
        println!("    hub fields: {}", summary.hub_fields.join(", "));
        println!("    branch fields: {}", summary.branch_fields.join(", "));
    }
    Ok(())
}

fn run_init(path: PathBuf, variant: &str, branches: usize, force: bool) -> Result<(), AppError> {
    let variant = Variant::parse(variant)?;
    let file = init::execute(init::InitOptions { path: &path, variant, branches, force })?;
    println!(
        "✅ Created {} topology at {} with {} branch(es)",
        file.variant,
        path.display(),
        file.config.branch_count()
    );
    Ok(())
}

fn run_resize(path: PathBuf, branches: usize) -> Result<(), AppError> {
    let file = init::resize(&path, branches)?;
    println!(
        "✅ Reset {} to {} defaulted branch(es); previous branch values were discarded",
        path.display(),
        file.config.branch_count()
    );
    Ok(())
}
