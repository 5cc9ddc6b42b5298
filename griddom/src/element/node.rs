use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the document tree.
///
/// Elements carry structure and interaction hooks only; how they are drawn is
/// up to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,

    /// Tooltip text shown on hover.
    pub title: Option<String>,

    // Custom data storage (for handler names, row indices, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            focusable: false,
            clickable: false,
            title: None,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            content: Content::TextInput {
                value: value.into(),
                placeholder: None,
            },
            focusable: true,
            ..Default::default()
        }
    }

    /// Create a button element.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            content: Content::Button {
                label: label.into(),
            },
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    /// Create a checkbox element.
    pub fn checkbox(checked: bool) -> Self {
        Self {
            id: generate_id("checkbox"),
            content: Content::Checkbox {
                checked,
                label: None,
            },
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    /// Create a link element.
    pub fn link(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: generate_id("link"),
            content: Content::Link {
                target: target.into(),
                label: label.into(),
            },
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Set the label for a checkbox.
    pub fn label(mut self, text: impl Into<String>) -> Self {
        if let Content::Checkbox { label, .. } = &mut self.content {
            *label = Some(text.into());
        }
        self
    }

    /// Set whether a checkbox is checked.
    pub fn checked(mut self, is_checked: bool) -> Self {
        if let Content::Checkbox { checked, .. } = &mut self.content {
            *checked = is_checked;
        }
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
