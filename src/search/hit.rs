//! Raw search hits and how they are loaded
//!
//! Hits come from the external search service as JSON objects with
//! capitalized keys (`Name`, `Variant`, `Type`). Lowercase keys are accepted
//! too. CSV exports carry the same columns, with optional tags separated by
//! `;` in a `Tags` column.

use super::error::InputError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One raw record returned by the search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Variant", alias = "variant", default)]
    pub variant: String,
    /// Canonical resource type or legacy type code
    #[serde(rename = "Type", alias = "type")]
    pub type_code: String,
    #[serde(rename = "Tags", alias = "tags", default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SearchHit {
    /// Create a hit without tags
    #[must_use]
    pub fn new(name: impl Into<String>, variant: impl Into<String>, type_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variant: variant.into(),
            type_code: type_code.into(),
            tags: Vec::new(),
        }
    }

    /// Attach tags to the hit
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Serialized layout of a hits file
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitFormat {
    /// JSON array of hit objects
    Json,
    /// CSV with a header row
    Csv,
}

impl HitFormat {
    /// Guess the format from a file extension, defaulting to JSON
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvHit {
    #[serde(rename = "Name", alias = "name")]
    name: String,
    #[serde(rename = "Variant", alias = "variant", default)]
    variant: String,
    #[serde(rename = "Type", alias = "type")]
    type_code: String,
    #[serde(rename = "Tags", alias = "tags", default)]
    tags: String,
}

impl From<CsvHit> for SearchHit {
    fn from(record: CsvHit) -> Self {
        let tags = record
            .tags
            .split(';')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            name: record.name,
            variant: record.variant,
            type_code: record.type_code,
            tags,
        }
    }
}

/// Parse hits from a reader
///
/// # Errors
///
/// Returns `InputError` if the input cannot be read or is not valid for
/// `format`.
pub fn read_hits<R: Read>(reader: R, format: HitFormat) -> Result<Vec<SearchHit>, InputError> {
    match format {
        HitFormat::Json => Ok(serde_json::from_reader(reader)?),
        HitFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
            let mut hits = Vec::new();
            for record in csv_reader.deserialize::<CsvHit>() {
                hits.push(record?.into());
            }
            Ok(hits)
        }
    }
}

/// Load hits from a file, inferring the format from the extension if not given
///
/// # Errors
///
/// Returns `InputError` if the file cannot be opened or parsed.
pub fn load_hits(path: &Path, format: Option<HitFormat>) -> Result<Vec<SearchHit>, InputError> {
    let format = format.unwrap_or_else(|| HitFormat::from_path(path));
    let file = File::open(path)?;
    let hits = read_hits(BufReader::new(file), format)?;
    tracing::debug!(path = %path.display(), count = hits.len(), "loaded search hits");
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_json_capitalized_keys() {
        let input = r#"[{"Name":"age","Variant":"v1","Type":"FEATURE"}]"#;
        let hits = read_hits(input.as_bytes(), HitFormat::Json).unwrap();
        assert_eq!(hits, vec![SearchHit::new("age", "v1", "FEATURE")]);
    }

    #[test]
    fn test_json_lowercase_keys_and_tags() {
        let input = r#"[{"name":"churn","variant":"","type":"\n","tags":["prod"]}]"#;
        let hits = read_hits(input.as_bytes(), HitFormat::Json).unwrap();
        assert_eq!(hits[0].type_code, "\u{0a}");
        assert_eq!(hits[0].tags, vec!["prod".to_string()]);
    }

    #[test]
    fn test_json_missing_variant_defaults_empty() {
        let input = r#"[{"Name":"admin","Type":"User"}]"#;
        let hits = read_hits(input.as_bytes(), HitFormat::Json).unwrap();
        assert_eq!(hits[0].variant, "");
    }

    #[test]
    fn test_json_invalid() {
        let result = read_hits("{".as_bytes(), HitFormat::Json);
        assert!(matches!(result, Err(InputError::Json(_))));
    }

    #[test]
    fn test_csv_with_tags() {
        let input = "Name,Variant,Type,Tags\nage,v1,Feature,pii; daily\nfraud,v2,Label,\n";
        let hits = read_hits(input.as_bytes(), HitFormat::Csv).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].tags, vec!["pii".to_string(), "daily".to_string()]);
        assert!(hits[1].tags.is_empty());
        assert_eq!(hits[1].type_code, "Label");
    }

    #[test]
    fn test_csv_without_tags_column() {
        let input = "name,variant,type\nage,v1,Feature\n";
        let hits = read_hits(input.as_bytes(), HitFormat::Csv).unwrap();
        assert_eq!(hits, vec![SearchHit::new("age", "v1", "Feature")]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(HitFormat::from_path(Path::new("hits.CSV")), HitFormat::Csv);
        assert_eq!(HitFormat::from_path(Path::new("hits.json")), HitFormat::Json);
        assert_eq!(HitFormat::from_path(Path::new("hits")), HitFormat::Json);
    }

    #[test]
    fn test_load_hits_from_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Name,Variant,Type").unwrap();
        writeln!(file, "age,v1,Feature").unwrap();
        file.flush().unwrap();

        let hits = load_hits(file.path(), None).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_load_hits_missing_file() {
        let result = load_hits(Path::new("definitely_missing_hits.json"), None);
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
