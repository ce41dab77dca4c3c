//! Hexagram and line texts.
//!
//! The analyzers only see the [`TextLookup`] trait. Misses are not errors:
//! a report built against an incomplete table simply carries empty strings.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED: &str = include_str!("../data/texts.json");

/// Result type for text-table loading.
pub type TextResult<T> = Result<T, TextError>;

/// Failures while loading a text table.
#[derive(Debug, Error)]
pub enum TextError {
    /// The file could not be read.
    #[error("failed to read text table: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not valid JSON of the expected shape.
    #[error("invalid text table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Name and judgment texts of one hexagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramText {
    /// Traditional name, e.g. 乾为天.
    #[serde(default)]
    pub name: String,
    /// Short gloss.
    #[serde(default)]
    pub meaning: String,
    /// Judgment text.
    #[serde(default)]
    pub description: String,
    /// Character of the hexagram.
    #[serde(default)]
    pub nature: String,
}

/// Source of hexagram and line texts keyed by `"{lower}_{upper}"`.
pub trait TextLookup {
    /// Texts for a hexagram.
    fn hexagram(&self, key: &str) -> Option<HexagramText>;

    /// Text of line `n` (1-based) of a hexagram.
    fn line(&self, key: &str, n: usize) -> Option<String>;
}

/// A lookup that knows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTexts;

impl TextLookup for EmptyTexts {
    fn hexagram(&self, _key: &str) -> Option<HexagramText> {
        None
    }

    fn line(&self, _key: &str, _n: usize) -> Option<String> {
        None
    }
}

/// An in-memory text table, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTable {
    #[serde(default)]
    hexagrams: BTreeMap<String, HexagramText>,
    #[serde(default)]
    lines: BTreeMap<String, BTreeMap<String, String>>,
}

impl TextTable {
    /// The table shipped with the crate, parsed on first use.
    pub fn bundled() -> &'static Self {
        static TABLE: OnceLock<TextTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            Self::from_json_str(BUNDLED).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "bundled text table failed to parse");
                Self::default()
            })
        })
    }

    /// Parse a table from JSON.
    pub fn from_json_str(json: &str) -> TextResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file.
    pub fn from_path(path: &Path) -> TextResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            hexagrams = table.hexagrams.len(),
            "loaded text table"
        );
        Ok(table)
    }

    /// Number of hexagrams with texts.
    pub fn len(&self) -> usize {
        self.hexagrams.len()
    }

    /// Whether the table has no hexagram texts.
    pub fn is_empty(&self) -> bool {
        self.hexagrams.is_empty()
    }
}

impl TextLookup for TextTable {
    fn hexagram(&self, key: &str) -> Option<HexagramText> {
        self.hexagrams.get(key).cloned()
    }

    fn line(&self, key: &str, n: usize) -> Option<String> {
        self.lines.get(key)?.get(&n.to_string()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_table_has_pure_hexagrams() {
        let table = TextTable::bundled();
        assert!(!table.is_empty());
        assert_eq!(table.hexagram("乾_乾").unwrap().name, "乾为天");
        assert_eq!(table.hexagram("坤_坤").unwrap().name, "坤为地");
        assert!(table.line("乾_乾", 1).is_some());
    }

    #[test]
    fn misses_are_none() {
        let table = TextTable::bundled();
        assert!(table.hexagram("无_无").is_none());
        assert!(table.line("乾_乾", 7).is_none());
        assert!(EmptyTexts.hexagram("乾_乾").is_none());
    }

    #[test]
    fn partial_entries_default_missing_fields() {
        let table =
            TextTable::from_json_str(r#"{"hexagrams": {"乾_乾": {"name": "Qian"}}}"#).unwrap();
        let text = table.hexagram("乾_乾").unwrap();
        assert_eq!(text.name, "Qian");
        assert!(text.description.is_empty());
        assert_eq!(table.line("乾_乾", 1), None);
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"hexagrams": {{}}, "lines": {{"坎_坎": {{"2": "坎有险"}}}}}}"#
        )
        .unwrap();
        let table = TextTable::from_path(file.path()).unwrap();
        assert_eq!(table.line("坎_坎", 2).as_deref(), Some("坎有险"));
        assert!(table.is_empty());
    }

    #[test]
    fn load_errors() {
        assert!(matches!(
            TextTable::from_path(Path::new("/nonexistent/texts.json")),
            Err(TextError::Io(_))
        ));
        assert!(matches!(
            TextTable::from_json_str("not json"),
            Err(TextError::Json(_))
        ));
    }
}
