//! Cell rendering: map a value's variant to a presentation fragment plus a
//! plain-text equivalent.
//!
//! The same dispatch backs on-screen rendering, filtering, and CSV export.
//! The two text forms differ only in the array join separator and the
//! density of structural dumps; the fragment form adds interactive markup.

use chrono::DateTime;
use chrono::NaiveTime;
use chrono::Utc;
use griddom::Element;
use log::warn;

use crate::model::{ActionCell, LinkCell, Value};

/// Default label for link cells without one.
pub const LINK_LABEL: &str = "Open";
/// Default label for action cells without one.
pub const ACTION_LABEL: &str = "Action";
/// On-screen placeholder for null cells.
const NULL_PLACEHOLDER: &str = "—";

/// Where a cell sits while rendering; feeds the addressable ids and data
/// attributes of interactive fragments.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub table_id: &'a str,
    pub row: usize,
    pub col: usize,
    /// Component-owned state for the linked checkbox; `None` falls back to
    /// the descriptor's initial flag.
    pub checked: Option<bool>,
}

/// A rendered cell: the emitted fragment and the text used for filtering.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub element: Element,
    pub text: String,
}

/// Render a cell for the screen.
pub fn render_cell(value: &Value, cx: &CellContext<'_>) -> Rendered {
    let text = filter_text(value);
    let element = match value {
        Value::Null => Element::text(NULL_PLACEHOLDER),
        Value::Link(link) => render_link(link),
        Value::Action(action) => render_action(action, cx),
        Value::Array(items) if items.is_empty() => Element::text(""),
        Value::Array(_)
        | Value::DateTime(_)
        | Value::Bool(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::Json(_) => Element::text(text.as_str()),
        Value::String(s) => Element::text(s.as_str()).title(s.as_str()),
    };
    Rendered { element, text }
}

/// The text a cell filters on: same dispatch as the fragment, arrays
/// comma-joined, structural dumps pretty-printed.
pub fn filter_text(value: &Value) -> String {
    cell_text(value, ", ", true)
}

/// The text a cell exports as: arrays semicolon-joined, structural dumps
/// compact.
pub fn export_text(value: &Value) -> String {
    cell_text(value, "; ", false)
}

fn cell_text(value: &Value, array_sep: &str, pretty: bool) -> String {
    match value {
        Value::Null => String::new(),
        Value::Link(link) => link.label.clone().unwrap_or_else(|| LINK_LABEL.into()),
        Value::Action(action) => action
            .label
            .clone()
            .unwrap_or_else(|| ACTION_LABEL.into()),
        Value::Array(items) => items
            .iter()
            .map(|item| cell_text(item, array_sep, pretty))
            .collect::<Vec<_>>()
            .join(array_sep),
        Value::DateTime(dt) => format_datetime(dt),
        Value::Bool(b) => bool_text(*b).into(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Json(json) => dump_json(json, pretty),
        Value::String(s) => s.clone(),
    }
}

fn render_link(link: &LinkCell) -> Element {
    let label = link.label.as_deref().unwrap_or(LINK_LABEL);
    Element::link(link.target.as_str(), label)
}

fn render_action(action: &ActionCell, cx: &CellContext<'_>) -> Element {
    let label = action.label.as_deref().unwrap_or(ACTION_LABEL);

    let button = Element::button(label)
        .id(format!("{}-action-{}-{}", cx.table_id, cx.row, cx.col))
        .data("handler", action.handler.as_str())
        .data("row", cx.row.to_string())
        .data("col", cx.col.to_string());

    match &action.checkbox {
        None => button,
        Some(linked) => {
            let checked = cx.checked.unwrap_or(linked.checked);
            let mut checkbox = Element::checkbox(checked)
                .id(format!("{}-check-{}-{}", cx.table_id, cx.row, cx.col))
                .data("handler", action.handler.as_str())
                .data("row", cx.row.to_string())
                .data("col", cx.col.to_string());
            if let Some(label) = &linked.label {
                checkbox = checkbox.label(label.as_str());
            }
            Element::box_().child(button).child(checkbox)
        }
    }
}

/// Locale-formatted date string: date-only when the time of day is exactly
/// midnight UTC, otherwise date plus 12-hour time.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format("%-d %b %Y").to_string()
    } else {
        dt.format("%-d %b %Y, %-I:%M %p").to_string()
    }
}

fn bool_text(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

fn dump_json(json: &serde_json::Value, pretty: bool) -> String {
    let dumped = if pretty {
        serde_json::to_string_pretty(json)
    } else {
        serde_json::to_string(json)
    };
    dumped.unwrap_or_else(|err| {
        warn!("structural dump failed: {err}");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use griddom::Content;

    fn cx() -> CellContext<'static> {
        CellContext {
            table_id: "t",
            row: 0,
            col: 0,
            checked: None,
        }
    }

    #[test]
    fn midnight_renders_date_only() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(filter_text(&Value::DateTime(dt)), "5 Mar 2024");
    }

    #[test]
    fn non_midnight_renders_twelve_hour_time() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 15, 30, 0).unwrap();
        assert_eq!(filter_text(&Value::DateTime(dt)), "5 Mar 2024, 3:30 PM");
    }

    #[test]
    fn screen_and_export_text_agree_on_scalars() {
        for value in [
            Value::Bool(true),
            Value::Bool(false),
            Value::Int(-3),
            Value::Float(2.5),
            Value::from("plain"),
            Value::DateTime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        ] {
            assert_eq!(filter_text(&value), export_text(&value));
        }
    }

    #[test]
    fn array_separators_differ_between_screen_and_export() {
        let value = Value::Array(vec![Value::from("a"), Value::from(true), Value::Int(2)]);
        assert_eq!(filter_text(&value), "a, Yes, 2");
        assert_eq!(export_text(&value), "a; Yes; 2");
    }

    #[test]
    fn string_fallback_carries_hover_title() {
        let rendered = render_cell(&Value::from("long value"), &cx());
        assert_eq!(rendered.element.title.as_deref(), Some("long value"));
        assert_eq!(rendered.text, "long value");
    }

    #[test]
    fn action_fragment_carries_addressable_attributes() {
        let action = Value::Action(ActionCell::new("approve").label("Approve"));
        let cx = CellContext {
            table_id: "grid-1",
            row: 4,
            col: 2,
            checked: None,
        };
        let rendered = render_cell(&action, &cx);
        assert_eq!(rendered.element.id, "grid-1-action-4-2");
        assert_eq!(
            rendered.element.get_data("handler").map(String::as_str),
            Some("approve")
        );
        assert_eq!(rendered.element.get_data("row").map(String::as_str), Some("4"));
        assert_eq!(rendered.text, "Approve");
    }

    #[test]
    fn checkbox_state_prefers_component_override() {
        let action = Value::Action(ActionCell::new("approve").checkbox(false, "ok"));
        let cx = CellContext {
            table_id: "g",
            row: 1,
            col: 0,
            checked: Some(true),
        };
        let rendered = render_cell(&action, &cx);
        let Content::Children(children) = &rendered.element.content else {
            panic!("expected children");
        };
        let checkbox = &children[1];
        assert_eq!(
            checkbox.content,
            Content::Checkbox {
                checked: true,
                label: Some("ok".into()),
            }
        );
    }

    #[test]
    fn null_renders_placeholder_with_empty_text() {
        let rendered = render_cell(&Value::Null, &cx());
        assert_eq!(rendered.element.content, Content::Text("—".into()));
        assert_eq!(rendered.text, "");
    }

    #[test]
    fn json_dump_is_pretty_on_screen_and_compact_on_export() {
        let value = Value::Json(serde_json::json!({ "a": 1, "b": [2, 3] }));
        let screen = filter_text(&value);
        let export = export_text(&value);
        assert!(screen.contains('\n'));
        assert!(!export.contains('\n'));
        assert_eq!(export, r#"{"a":1,"b":[2,3]}"#);
    }
}
