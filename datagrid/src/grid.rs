//! The interactive data table component.
//!
//! Owns the whole pipeline: configuration is normalized once, raw rows are
//! column-reduced and cell-transformed into the processed dataset, and every
//! downstream view (emitted fragment, visible set, checked rows, CSV export)
//! derives from that dataset alone.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use std::time::Instant;

use griddom::{Document, Element, Event};
use log::debug;
use log::error;
use log::warn;

use crate::config::TableConfig;
use crate::error::GridError;
use crate::export::{self, CsvExport, ExportSink};
use crate::filter::FilterEngine;
use crate::model::Value;
use crate::reduce;
use crate::registry::HandlerRegistry;
use crate::render::{self, CellContext};

static NEXT_TABLE: AtomicU64 = AtomicU64::new(0);

fn generate_table_id() -> String {
    let id = NEXT_TABLE.fetch_add(1, Ordering::Relaxed);
    format!("grid-{id}")
}

/// A row whose linked checkbox is currently checked.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedRow {
    pub index: usize,
    pub data: Vec<Value>,
}

/// What an element id emitted by this table refers to.
enum Binding {
    Filter(usize),
    Action(usize, usize),
    Checkbox(usize, usize),
    Export,
}

/// An interactive data table bound to a document container.
pub struct DataGrid {
    id: String,
    config: TableConfig,
    /// Processed headings, index-aligned to `rows`.
    headings: Vec<String>,
    /// Processed rows, the canonical dataset.
    rows: Vec<Vec<Value>>,
    /// Rendered filter text per processed cell.
    texts: Vec<Vec<String>>,
    filter: FilterEngine,
    /// Check state per (row, col) of action cells with checkboxes.
    checked: HashMap<(usize, usize), bool>,
    registry: HandlerRegistry,
    sink: Option<Arc<dyn ExportSink>>,
    mounted: bool,
}

impl DataGrid {
    /// Build a table from a configuration and the handler registry its
    /// actions resolve against. The pipeline runs immediately; nothing is
    /// emitted until [`DataGrid::mount`].
    pub fn new(config: TableConfig, registry: HandlerRegistry) -> Self {
        let id = config.id.clone().unwrap_or_else(generate_table_id);
        let debounce = Duration::from_millis(config.debounce_ms);

        let mut grid = Self {
            id,
            config,
            headings: Vec::new(),
            rows: Vec::new(),
            texts: Vec::new(),
            filter: FilterEngine::new(0, 0, debounce),
            checked: HashMap::new(),
            registry,
            sink: None,
            mounted: false,
        };
        grid.rebuild();
        grid
    }

    /// Attach a delivery mechanism for the export button.
    pub fn with_sink(mut self, sink: Arc<dyn ExportSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The table's unique identity; prefixes every emitted element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Rebuild every derived view from the configured raw data.
    fn rebuild(&mut self) {
        let (headings, mut rows) = reduce::reduce(
            &self.config.headings,
            &self.config.data,
            &self.config.hidden,
        );
        self.config.rules.apply(&headings, &mut rows);

        self.texts = rows
            .iter()
            .map(|row| row.iter().map(render::filter_text).collect())
            .collect();

        self.filter.reset(headings.len(), rows.len());

        self.checked.clear();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Value::Action(action) = cell
                    && let Some(checkbox) = &action.checkbox
                {
                    self.checked.insert((r, c), checkbox.checked);
                }
            }
        }

        self.headings = headings;
        self.rows = rows;
        debug!(
            "table `{}` rebuilt: {} columns, {} rows",
            self.id,
            self.headings.len(),
            self.rows.len()
        );
    }

    /// Emit the fragment into the configured container.
    ///
    /// A missing container is logged and aborts the mount; the document and
    /// all accessors are left as they were.
    pub fn mount(&mut self, doc: &mut Document) -> Result<(), GridError> {
        let fragment = self.element();
        if let Err(err) = doc.mount(&self.config.container, fragment) {
            error!("table `{}` mount failed: {err}", self.id);
            return Err(err.into());
        }
        self.mounted = true;
        Ok(())
    }

    /// Replace the dataset wholesale and rebuild everything, keeping all
    /// other settings.
    pub fn update(&mut self, data: Vec<Vec<Value>>, doc: &mut Document) -> Result<(), GridError> {
        self.config.data = data;
        self.rebuild();
        if self.mounted {
            let fragment = self.element();
            if let Err(err) = doc.mount(&self.config.container, fragment) {
                error!("table `{}` re-mount failed: {err}", self.id);
                return Err(err.into());
            }
        }
        Ok(())
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// The dataset exactly as configured, before hiding and transforms.
    pub fn raw_data(&self) -> &[Vec<Value>] {
        &self.config.data
    }

    /// Processed headings (post-hide).
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    /// The processed dataset (post-hide, post-transform).
    pub fn data(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// The processed rows currently passing every active filter, in order.
    pub fn visible_data(&self) -> Vec<Vec<Value>> {
        self.filter
            .visible()
            .iter()
            .filter_map(|&r| self.rows.get(r).cloned())
            .collect()
    }

    /// Rows with at least one checked linked checkbox, ascending by index.
    pub fn checked_rows(&self) -> Vec<CheckedRow> {
        let mut indices: Vec<usize> = self
            .checked
            .iter()
            .filter(|&(_, &checked)| checked)
            .map(|(&(row, _), _)| row)
            .collect();
        indices.sort_unstable();
        indices.dedup();

        indices
            .into_iter()
            .filter_map(|index| {
                self.rows.get(index).map(|data| CheckedRow {
                    index,
                    data: data.clone(),
                })
            })
            .collect()
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route an event on one of this table's elements.
    ///
    /// Events targeting elements this table did not emit are ignored.
    pub fn handle_event(&mut self, event: &Event, doc: &mut Document) {
        match event {
            Event::Input { target, text } => {
                if let Some(Binding::Filter(col)) = self.parse_target(target) {
                    self.filter.input(col, text.clone(), Instant::now());
                }
            }
            Event::Click { target } => match self.parse_target(target) {
                Some(Binding::Action(row, col)) => self.activate(row, col, doc),
                Some(Binding::Export) => self.deliver_export(),
                _ => {}
            },
            Event::Toggle { target, checked } => {
                if let Some(Binding::Checkbox(row, col)) = self.parse_target(target) {
                    self.toggle(row, col, *checked, doc);
                }
            }
        }
    }

    /// Poll the filter debounce; re-emits the fragment when a recompute
    /// fired. Returns whether it did.
    pub fn tick(&mut self, doc: &mut Document) -> bool {
        let fired = self.filter.poll(Instant::now(), &self.texts);
        if fired {
            self.refresh(doc);
        }
        fired
    }

    /// Recompute visibility immediately, skipping any pending debounce.
    pub fn flush_filters(&mut self, doc: &mut Document) {
        self.filter.recompute(&self.texts);
        self.refresh(doc);
    }

    fn parse_target(&self, target: &str) -> Option<Binding> {
        let rest = target.strip_prefix(self.id.as_str())?.strip_prefix('-')?;

        if rest == "export" {
            return Some(Binding::Export);
        }
        if let Some(col) = rest.strip_prefix("filter-") {
            return col.parse().ok().map(Binding::Filter);
        }
        if let Some(coords) = rest.strip_prefix("action-") {
            return parse_coords(coords).map(|(r, c)| Binding::Action(r, c));
        }
        if let Some(coords) = rest.strip_prefix("check-") {
            return parse_coords(coords).map(|(r, c)| Binding::Checkbox(r, c));
        }
        None
    }

    /// Button activation: invoke the bound handler once; a linked checkbox
    /// is force-checked and its handler fired exactly once as well.
    fn activate(&mut self, row: usize, col: usize, doc: &mut Document) {
        let Some(Value::Action(action)) = self.rows.get(row).and_then(|r| r.get(col)) else {
            warn!("table `{}`: stale action target ({row},{col})", self.id);
            return;
        };
        let action = action.clone();

        match self.registry.action(&action.handler) {
            Some(handler) => handler(&self.rows[row], row),
            None => warn!(
                "table `{}`: no handler registered for `{}`",
                self.id, action.handler
            ),
        }

        if action.has_checkbox() {
            self.checked.insert((row, col), true);
            self.fire_checkbox(&action.handler, row, true);
            self.refresh(doc);
        }
    }

    /// Checkbox toggle: record the new state, then notify the paired
    /// handler.
    fn toggle(&mut self, row: usize, col: usize, checked: bool, doc: &mut Document) {
        let Some(Value::Action(action)) = self.rows.get(row).and_then(|r| r.get(col)) else {
            warn!("table `{}`: stale checkbox target ({row},{col})", self.id);
            return;
        };
        let handler = action.handler.clone();

        self.checked.insert((row, col), checked);
        self.fire_checkbox(&handler, row, checked);
        self.refresh(doc);
    }

    fn fire_checkbox(&self, name: &str, row: usize, checked: bool) {
        match self.registry.checkbox(name) {
            Some(handler) => handler(&self.rows[row], row, checked),
            None => warn!(
                "table `{}`: no checkbox handler registered for `{}`",
                self.id, name
            ),
        }
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Build the CSV artifact for the currently visible rows.
    pub fn export_csv(&self) -> CsvExport {
        let headings = self
            .config
            .export
            .include_headers
            .then_some(self.headings.as_slice());

        let rows = self.filter.visible().iter().filter_map(|&r| {
            self.rows
                .get(r)
                .map(|row| row.iter().map(render::export_text).collect())
        });

        CsvExport {
            filename: self.config.export.filename.clone(),
            content: export::to_csv(headings, rows),
        }
    }

    fn deliver_export(&self) {
        if !self.config.export.enabled {
            return;
        }
        let artifact = self.export_csv();
        match &self.sink {
            Some(sink) => {
                if let Err(err) = sink.deliver(&artifact) {
                    error!(
                        "table `{}`: delivery of `{}` failed: {err}",
                        self.id, artifact.filename
                    );
                }
            }
            None => debug!(
                "table `{}`: no export sink; `{}` built and dropped",
                self.id, artifact.filename
            ),
        }
    }

    // =========================================================================
    // Fragment
    // =========================================================================

    /// Build the full fragment for the current state.
    pub fn element(&self) -> Element {
        let header = self.build_header();
        let body = self.build_body();

        let mut root = Element::box_().id(&self.id).child(header).child(body);

        if self.config.export.enabled {
            root = root.child(
                Element::button(self.config.export.label.as_str())
                    .id(format!("{}-export", self.id)),
            );
        }

        root
    }

    /// Header row: one heading plus one filter input per column.
    fn build_header(&self) -> Element {
        let cells = self.headings.iter().enumerate().map(|(col, heading)| {
            Element::box_()
                .id(format!("{}-heading-{}", self.id, col))
                .child(Element::text(heading.as_str()))
                .child(
                    Element::text_input(self.filter.query(col))
                        .id(format!("{}-filter-{}", self.id, col))
                        .placeholder(format!("Filter {heading}")),
                )
        });

        Element::box_()
            .id(format!("{}-header", self.id))
            .children(cells)
    }

    /// Body: visible rows only, each carrying its identity marker.
    fn build_body(&self) -> Element {
        let rows = self.filter.visible().iter().filter_map(|&row| {
            self.rows.get(row).map(|cells| {
                let rendered = cells.iter().enumerate().map(|(col, cell)| {
                    let cx = CellContext {
                        table_id: &self.id,
                        row,
                        col,
                        checked: self.checked.get(&(row, col)).copied(),
                    };
                    render::render_cell(cell, &cx).element
                });
                Element::box_()
                    .id(format!("{}-row-{}", self.id, row))
                    .data("row", row.to_string())
                    .children(rendered)
            })
        });

        Element::box_()
            .id(format!("{}-body", self.id))
            .children(rows)
    }

    /// Re-emit the fragment to reflect current state.
    fn refresh(&self, doc: &mut Document) {
        if !self.mounted {
            return;
        }
        if let Err(err) = doc.mount(&self.config.container, self.element()) {
            error!("table `{}` refresh failed: {err}", self.id);
        }
    }
}

impl std::fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGrid")
            .field("id", &self.id)
            .field("columns", &self.headings.len())
            .field("rows", &self.rows.len())
            .field("visible", &self.filter.visible().len())
            .field("mounted", &self.mounted)
            .finish()
    }
}

fn parse_coords(s: &str) -> Option<(usize, usize)> {
    let (row, col) = s.split_once('-')?;
    Some((row.parse().ok()?, col.parse().ok()?))
}
