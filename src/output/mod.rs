//! Output formatting for CLI display
//!
//! Renders result lists, tag selections and the type registry either as
//! colored text or, via [`to_json`], as JSON for scripts.

use crate::resource::{Registry, ResourceType, TypeRegistry};
use crate::search::{Presentation, RejectedHit, VariantSelectionStore};
use crate::tags::TagState;
use colored::Colorize;
use regex::RegexBuilder;
use serde::Serialize;

/// Emphasize every case-insensitive occurrence of `query` in `text`
#[must_use]
pub fn highlight(text: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return text.to_string();
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for found in pattern.find_iter(text) {
        out.push_str(&text[last..found.start()]);
        out.push_str(&found.as_str().bold().yellow().to_string());
        last = found.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Render a result list
///
/// The heading repeats the query verbatim. In quiet mode only
/// tab-separated `name variant type` rows are printed.
#[must_use]
pub fn presentation<R: TypeRegistry + ?Sized>(presentation: &Presentation, registry: &R, quiet: bool) -> String {
    let mut lines = Vec::with_capacity(presentation.entries.len() + 1);

    if !quiet {
        lines.push(format!(
            "{} {}",
            presentation.heading().dimmed(),
            presentation.query.bold()
        ));
    }

    for (i, entry) in presentation.entries.iter().enumerate() {
        if quiet {
            lines.push(format!("{}\t{}\t{}", entry.name, entry.variant, entry.resource_type));
            continue;
        }
        let kind = registry
            .descriptor(entry.resource_type)
            .map_or_else(|| entry.resource_type.to_string(), |d| d.display_name.clone());
        let variant = if entry.variant.is_empty() {
            String::new()
        } else {
            format!("  {}", entry.variant.dimmed())
        };
        lines.push(format!(
            "  {:>2}. {}{}  {}",
            i + 1,
            highlight(&entry.name, &presentation.query),
            variant,
            format!("[{kind}]").cyan()
        ));
    }

    lines.join("\n")
}

/// One warning line per hit left out of the list
#[must_use]
pub fn rejected_notice(rejected: &[RejectedHit]) -> Vec<String> {
    rejected
        .iter()
        .map(|r| format!("{} hit #{}: {}", "warning:".yellow().bold(), r.index, r.error))
        .collect()
}

/// Render active tags, optionally for a single type
#[must_use]
pub fn tag_selection(state: &TagState, only: Option<ResourceType>, quiet: bool) -> String {
    let mut lines = Vec::new();
    for ty in state.resource_types().filter(|ty| only.is_none_or(|o| o == *ty)) {
        let tags = state.tags(ty).into_iter().flatten();
        if quiet {
            lines.extend(tags.map(|tag| format!("{ty}\t{tag}")));
            continue;
        }
        let joined = tags.map(String::as_str).collect::<Vec<_>>().join(", ");
        if joined.is_empty() {
            lines.push(format!("  {ty} {}", "(no active tags)".dimmed()));
        } else {
            lines.push(format!("  {ty} [{}]", joined.green()));
        }
    }
    lines.join("\n")
}

/// Render recorded active variants
#[must_use]
pub fn variant_selection(variants: &VariantSelectionStore, quiet: bool) -> String {
    variants
        .iter()
        .map(|(ty, name, variant)| {
            if quiet {
                format!("{ty}\t{name}\t{variant}")
            } else {
                format!("  {ty} {name} -> {}", variant.green())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the resource-type registry
#[must_use]
pub fn registry(registry: &Registry, quiet: bool) -> String {
    registry
        .iter()
        .map(|d| {
            if quiet {
                format!("{}\t{}\t{}", d.resource_type, d.has_variants, d.url_path)
            } else {
                let variants = if d.has_variants { "variants" } else { "single" };
                format!(
                    "  {:<12} {:<14} /{:<15} {:<8} {}",
                    d.resource_type.to_string().bold(),
                    d.display_name,
                    d.url_path,
                    variants,
                    d.icon.dimmed()
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON for machine-readable output
///
/// # Errors
///
/// Returns `serde_json::Error` if `value` cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
