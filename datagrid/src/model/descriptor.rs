//! Interactive cell descriptors: links and actions.

use serde::Deserialize;
use serde::Serialize;

/// A cell that opens a target in a new context when activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCell {
    /// Where the link points.
    pub target: String,
    /// Display label; the renderer falls back to "Open".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LinkCell {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// The linked checkbox of an action cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionCheckbox {
    /// Initial checked state; component state takes over after construction.
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A cell that renders as a button bound to a named handler, with an
/// optional linked checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCell {
    /// Name the dispatcher resolves against the handler registry.
    pub handler: String,
    /// Button label; the renderer falls back to "Action".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkbox: Option<ActionCheckbox>,
}

impl ActionCell {
    pub fn new(handler: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            label: None,
            checkbox: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach a linked checkbox, initially unchecked.
    pub fn with_checkbox(mut self) -> Self {
        self.checkbox = Some(ActionCheckbox::default());
        self
    }

    /// Attach a linked checkbox with an initial state and label.
    pub fn checkbox(mut self, checked: bool, label: impl Into<String>) -> Self {
        self.checkbox = Some(ActionCheckbox {
            checked,
            label: Some(label.into()),
        });
        self
    }

    pub fn has_checkbox(&self) -> bool {
        self.checkbox.is_some()
    }
}
