//! Search command - render raw hits and act on a selected result

use super::Context;
use crate::{
    CatalogError, output,
    search::{HitFormat, Presentation, ResultEntry, ResultPresenter, load_hits},
};
use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};
use std::path::Path;

type Result<T> = std::result::Result<T, CatalogError>;

/// How the user picks a result, if at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Only render the list
    None,
    /// Take the N-th entry (1-based)
    Index(usize),
    /// Prompt for an entry
    Interactive,
}

/// Parameters for the search command
#[derive(Debug, Clone)]
pub struct SearchArgs<'a> {
    pub hits: &'a Path,
    pub query: &'a str,
    pub input: Option<HitFormat>,
    pub apply_filters: bool,
    pub pick: Pick,
}

/// Execute the search command
///
/// # Errors
/// Returns an error if the hits cannot be loaded, the session cannot be read
/// or written, the pick is out of range, or the selected entry's type has no
/// registry descriptor
pub fn execute(ctx: &Context, args: &SearchArgs<'_>) -> Result<()> {
    let hits = load_hits(args.hits, args.input)?;
    let mut session = ctx.load_session()?;
    let presenter = ResultPresenter::new(&ctx.registry);

    let presentation = if args.apply_filters {
        presenter.present_filtered(args.query, &hits, session.tags.state())
    } else {
        presenter.present(args.query, &hits)
    };

    if ctx.json() {
        println!("{}", output::to_json(&presentation)?);
    } else {
        for notice in output::rejected_notice(&presentation.rejected) {
            eprintln!("{notice}");
        }
        println!("{}", output::presentation(&presentation, &ctx.registry, ctx.quiet));
    }

    let Some(entry) = pick_entry(&presentation, args.pick, ctx.quiet)? else {
        return Ok(());
    };

    let mut paths = Vec::new();
    let selection = match presenter.select(entry, &mut session.variants, &mut paths) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("{} {e}", "Cannot open result:".red().bold());
            return Err(e.into());
        }
    };

    if selection.variant_recorded {
        ctx.save_session(&session)?;
    }

    if ctx.json() {
        println!("{}", output::to_json(&selection)?);
    } else if ctx.quiet {
        println!("{}", selection.path);
    } else {
        println!("\n{} {}", "Navigate to:".dimmed(), selection.path.bold());
        if selection.variant_recorded {
            println!(
                "{} {} '{}' -> {}",
                "Active variant:".dimmed(),
                entry.resource_type,
                entry.name,
                entry.variant
            );
        }
    }
    Ok(())
}

fn pick_entry<'p>(presentation: &'p Presentation, pick: Pick, quiet: bool) -> Result<Option<&'p ResultEntry>> {
    match pick {
        Pick::None => Ok(None),
        Pick::Index(n) => presentation
            .entries
            .get(n.wrapping_sub(1))
            .map(Some)
            .ok_or_else(|| {
                CatalogError::InvalidInput(format!(
                    "No result #{n}; the list has {} entr{}",
                    presentation.entries.len(),
                    if presentation.entries.len() == 1 { "y" } else { "ies" }
                ))
            }),
        Pick::Interactive => {
            if presentation.is_empty() {
                if !quiet {
                    println!("Nothing to select.");
                }
                return Ok(None);
            }
            let labels: Vec<String> = presentation
                .entries
                .iter()
                .map(|e| {
                    if e.variant.is_empty() {
                        format!("{} [{}]", e.name, e.resource_type)
                    } else {
                        format!("{} ({}) [{}]", e.name, e.variant, e.resource_type)
                    }
                })
                .collect();
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Open result")
                .items(&labels)
                .default(0)
                .interact_opt()?;
            Ok(choice.and_then(|i| presentation.entries.get(i)))
        }
    }
}
