//! Interactive configuration wizard
//!
//! Backs `catalog-search config init`: prompts for the session state location
//! and the default output format, then saves the result.

use super::{CatalogConfig, OutputFormat};
use config::ConfigError;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

/// Prompt for the basic settings and save them
///
/// Existing registry overrides in `current` are kept.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The system data directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn interactive_setup(current: CatalogConfig) -> Result<CatalogConfig, ConfigError> {
    let theme = ColorfulTheme::default();
    let default_state = current.state_path()?;

    let state_path: String = Input::with_theme(&theme)
        .with_prompt("Session state file")
        .default(default_state.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let formats = ["text", "json"];
    let initial = match current.output_format {
        OutputFormat::Text => 0,
        OutputFormat::Json => 1,
    };
    let choice = Select::with_theme(&theme)
        .with_prompt("Default output format")
        .items(&formats)
        .default(initial)
        .interact()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let output_format = if choice == 1 { OutputFormat::Json } else { OutputFormat::Text };
    let config = apply_answers(current, PathBuf::from(state_path), output_format);
    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

/// Merge wizard answers into `current`, keeping every other setting
fn apply_answers(current: CatalogConfig, state_file: PathBuf, output_format: OutputFormat) -> CatalogConfig {
    CatalogConfig {
        state_file: Some(state_file),
        output_format,
        ..current
    }
}
