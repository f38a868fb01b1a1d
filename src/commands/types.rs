//! Types command - list the resource-type registry

use super::Context;
use crate::{CatalogError, output};

type Result<T> = std::result::Result<T, CatalogError>;

/// Execute the types command
///
/// # Errors
/// Returns an error if JSON serialization fails
pub fn execute(ctx: &Context) -> Result<()> {
    if ctx.json() {
        let descriptors: Vec<_> = ctx.registry.iter().collect();
        println!("{}", output::to_json(&descriptors)?);
        return Ok(());
    }

    if !ctx.quiet {
        println!("Resource types:");
    }
    println!("{}", output::registry(&ctx.registry, ctx.quiet));
    Ok(())
}
