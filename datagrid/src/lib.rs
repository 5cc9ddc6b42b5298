//! Interactive data table component
//!
//! Renders a tabular dataset into a [`griddom::Document`] container from a
//! declarative [`TableConfig`]: hides columns, applies per-cell transform
//! rules, formats typed cell values, filters live per column, dispatches
//! action buttons and linked checkboxes against a [`HandlerRegistry`], and
//! exports the visible rows as CSV.

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod model;
pub mod reduce;
pub mod registry;
pub mod render;
pub mod rules;

mod grid;

pub use config::{ColumnSpec, DEFAULT_DEBOUNCE_MS, ExportOptions, TableConfig};
pub use error::{GridError, RuleError};
pub use export::{CsvExport, ExportSink, FileSink};
pub use grid::{CheckedRow, DataGrid};
pub use model::{ActionCell, ActionCheckbox, LinkCell, Value};
pub use registry::HandlerRegistry;
pub use rules::{RuleFn, RuleSet};
