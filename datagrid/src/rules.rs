//! Per-cell transform rules.
//!
//! Rules rewrite processed cell values. They are keyed either by column
//! heading or by an exact (row, col) coordinate; the coordinate-keyed rule
//! runs after the heading-keyed one and therefore wins. A failing rule is
//! logged and its cell keeps the value it had before that rule ran.

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use crate::error::RuleError;
use crate::model::Value;

/// A transform rule.
///
/// Receives the current cell value, a snapshot of the full pre-transform
/// row, and the cell's (row, col) coordinates in processed space.
pub type RuleFn =
    Arc<dyn Fn(&Value, &[Value], usize, usize) -> Result<Value, RuleError> + Send + Sync>;

/// The set of transform rules for one table.
#[derive(Clone, Default)]
pub struct RuleSet {
    by_heading: HashMap<String, RuleFn>,
    by_cell: HashMap<(usize, usize), RuleFn>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule applied to every cell under the given heading.
    pub fn heading<F>(mut self, heading: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&Value, &[Value], usize, usize) -> Result<Value, RuleError>
            + Send
            + Sync
            + 'static,
    {
        self.by_heading.insert(heading.into(), Arc::new(rule));
        self
    }

    /// Add a rule applied to exactly one cell.
    pub fn cell<F>(mut self, row: usize, col: usize, rule: F) -> Self
    where
        F: Fn(&Value, &[Value], usize, usize) -> Result<Value, RuleError>
            + Send
            + Sync
            + 'static,
    {
        self.by_cell.insert((row, col), Arc::new(rule));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.by_heading.is_empty() && self.by_cell.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_heading.len() + self.by_cell.len()
    }

    /// Run the rules over every cell of `rows`, in place.
    ///
    /// `headings` must be index-aligned to the rows (both already
    /// column-reduced).
    pub fn apply(&self, headings: &[String], rows: &mut [Vec<Value>]) {
        if self.is_empty() {
            return;
        }

        for (row_index, row) in rows.iter_mut().enumerate() {
            let snapshot = row.clone();
            for (col_index, cell) in row.iter_mut().enumerate() {
                let heading = headings.get(col_index).map(String::as_str).unwrap_or("");

                if let Some(rule) = headings
                    .get(col_index)
                    .and_then(|h| self.by_heading.get(h))
                {
                    run_rule(rule, cell, &snapshot, row_index, col_index, heading);
                }
                if let Some(rule) = self.by_cell.get(&(row_index, col_index)) {
                    run_rule(rule, cell, &snapshot, row_index, col_index, heading);
                }
            }
        }
    }
}

fn run_rule(
    rule: &RuleFn,
    cell: &mut Value,
    row: &[Value],
    row_index: usize,
    col_index: usize,
    heading: &str,
) {
    match rule(cell, row, row_index, col_index) {
        Ok(next) => *cell = next,
        Err(err) => {
            warn!("transform rule failed at ({row_index},{col_index}) [{heading}]: {err}");
        }
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("heading_rules", &self.by_heading.len())
            .field("cell_rules", &self.by_cell.len())
            .finish()
    }
}
