//! Tags command - per-resource-type tag filters

use super::Context;
use crate::{CatalogError, cli::TagsCommands, output, resource::ResourceType, session::Session};

type Result<T> = std::result::Result<T, CatalogError>;

/// Execute the tags management command
///
/// # Errors
/// Returns an error if the session cannot be loaded or saved, or if a toggle
/// names a resource type the session does not track
pub fn execute(ctx: &Context, command: &TagsCommands) -> Result<()> {
    let mut session = ctx.load_session()?;

    match command {
        TagsCommands::Toggle { resource_type, tag } => {
            session.tags.toggle(*resource_type, tag)?;
            ctx.save_session(&session)?;
            if !ctx.quiet {
                let state = if session.tags.state().contains(*resource_type, tag) {
                    "on"
                } else {
                    "off"
                };
                println!("Tag '{tag}' for {resource_type} is now {state}");
            }
        }
        TagsCommands::List { resource_type } => list(ctx, &session, *resource_type)?,
        TagsCommands::Undo => {
            if session.tags.undo()? {
                ctx.save_session(&session)?;
                if !ctx.quiet {
                    println!("Reverted last tag change.");
                }
            } else if !ctx.quiet {
                println!("Nothing to undo.");
            }
        }
        TagsCommands::Clear => {
            session.tags.reset();
            ctx.save_session(&session)?;
            if !ctx.quiet {
                println!("Cleared all tag filters.");
            }
        }
    }
    Ok(())
}

fn list(ctx: &Context, session: &Session, only: Option<ResourceType>) -> Result<()> {
    let state = session.tags.state();

    if let Some(ty) = only
        && !state.tracks(ty)
    {
        return Err(CatalogError::InvalidInput(format!(
            "Resource type {ty} has no tag filters in this session"
        )));
    }

    if ctx.json() {
        println!("{}", output::to_json(state)?);
        return Ok(());
    }

    if !ctx.quiet {
        println!("Active tag filters:");
    }
    let rendered = output::tag_selection(state, only, ctx.quiet);
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
