//! Declarative table configuration.
//!
//! Every field has a default, so a config deserialized from a partial JSON
//! document (or built from `TableConfig::new()`) always resolves to something
//! usable. Unrecognized fields are kept in [`TableConfig::extra`] untouched.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;
use crate::rules::RuleSet;

/// Identifies a column either by zero-based index or by heading name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSpec {
    Index(usize),
    Name(String),
}

impl From<usize> for ColumnSpec {
    fn from(index: usize) -> Self {
        ColumnSpec::Index(index)
    }
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        ColumnSpec::Name(name.to_string())
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        ColumnSpec::Name(name)
    }
}

/// CSV export settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Whether the export button is emitted at all.
    pub enabled: bool,
    /// Name of the delivered artifact.
    pub filename: String,
    /// Whether the CSV starts with a heading row.
    pub include_headers: bool,
    /// Export button label.
    pub label: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            filename: "table-data.csv".into(),
            include_headers: true,
            label: "Export CSV".into(),
        }
    }
}

impl ExportOptions {
    /// Export enabled with all defaults.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn include_headers(mut self, include: bool) -> Self {
        self.include_headers = include;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Default filter debounce in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Full table configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Ordered column names. Expected unique.
    pub headings: Vec<String>,
    /// Ordered rows, each aligned to `headings`.
    pub data: Vec<Vec<Value>>,
    /// Columns to remove before anything else happens.
    pub hidden: Vec<ColumnSpec>,
    /// Per-cell transform rules. Closures, so never part of serde.
    #[serde(skip)]
    pub rules: RuleSet,
    /// CSV export settings.
    pub export: ExportOptions,
    /// Id of the document element the table mounts into.
    pub container: String,
    /// Table identity; generated when absent.
    pub id: Option<String>,
    /// Filter debounce in milliseconds.
    pub debounce_ms: u64,
    /// Fields this component does not recognize, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            headings: Vec::new(),
            data: Vec::new(),
            hidden: Vec::new(),
            rules: RuleSet::default(),
            export: ExportOptions::default(),
            container: String::new(),
            id: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            extra: serde_json::Map::new(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(mut self, id: impl Into<String>) -> Self {
        self.container = id.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headings = headings.into_iter().map(Into::into).collect();
        self
    }

    pub fn data(mut self, rows: Vec<Vec<Value>>) -> Self {
        self.data = rows;
        self
    }

    /// Hide a column by name or index.
    pub fn hide(mut self, spec: impl Into<ColumnSpec>) -> Self {
        self.hidden.push(spec.into());
        self
    }

    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn export(mut self, export: ExportOptions) -> Self {
        self.export = export;
        self
    }

    pub fn debounce_ms(mut self, millis: u64) -> Self {
        self.debounce_ms = millis;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_resolves_to_defaults() {
        let config: TableConfig = serde_json::from_str("{}").unwrap();
        assert!(config.headings.is_empty());
        assert!(config.data.is_empty());
        assert!(config.hidden.is_empty());
        assert!(!config.export.enabled);
        assert_eq!(config.export.filename, "table-data.csv");
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert!(config.id.is_none());
    }

    #[test]
    fn unknown_fields_pass_through() {
        let config: TableConfig = serde_json::from_str(
            r#"{ "headings": ["A"], "theme": "dark", "columns_resizable": true }"#,
        )
        .unwrap();
        assert_eq!(config.headings, vec!["A".to_string()]);
        assert_eq!(
            config.extra.get("theme"),
            Some(&serde_json::Value::String("dark".into()))
        );
        assert_eq!(
            config.extra.get("columns_resizable"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn hidden_accepts_names_and_indices() {
        let config: TableConfig =
            serde_json::from_str(r#"{ "hidden": ["Active", 2] }"#).unwrap();
        assert_eq!(
            config.hidden,
            vec![ColumnSpec::Name("Active".into()), ColumnSpec::Index(2)]
        );
    }
}
