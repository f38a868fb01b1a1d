//! Variants command - show active variants recorded by selections

use super::Context;
use crate::{CatalogError, cli::VariantsCommands, output};

type Result<T> = std::result::Result<T, CatalogError>;

/// Execute the variants command
///
/// # Errors
/// Returns an error if the session cannot be loaded or output fails
pub fn execute(ctx: &Context, command: &VariantsCommands) -> Result<()> {
    let session = ctx.load_session()?;

    match command {
        VariantsCommands::List => {
            if ctx.json() {
                println!("{}", output::to_json(&session.variants)?);
            } else if session.variants.is_empty() {
                if !ctx.quiet {
                    println!("No active variants.");
                }
            } else {
                println!("{}", output::variant_selection(&session.variants, ctx.quiet));
            }
        }
        VariantsCommands::Get { resource_type, name } => {
            match session.variants.get(*resource_type, name) {
                Some(variant) => println!("{variant}"),
                None => {
                    return Err(CatalogError::InvalidInput(format!(
                        "No active variant recorded for {resource_type} '{name}'"
                    )));
                }
            }
        }
    }
    Ok(())
}
