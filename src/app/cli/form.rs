//! Form command implementation.

use std::path::PathBuf;

use crate::app::commands::form;
use crate::domain::{AppError, Variant};
use crate::services::{DialoguerForm, write_topology};

pub fn run_form(variant: Option<&str>, output: PathBuf, force: bool) -> Result<(), AppError> {
    if output.exists() && !force {
        return Err(AppError::TopologyExists(output.display().to_string()));
    }
    let variant = variant.map(Variant::parse).transpose()?;

    let mut input = DialoguerForm::new();
    let Some(file) = form::execute(&mut input, variant)? else {
        println!("Cancelled; nothing written");
        return Ok(());
    };

    write_topology(&output, &file)?;
    println!("✅ Saved {} topology to {}", file.variant, output.display());
    println!("   Next: mplsgen generate {}", output.display());
    Ok(())
}
