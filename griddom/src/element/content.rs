/// What an element holds: nothing, text, child elements, or an interactive
/// control.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Editable single-line text field.
    TextInput {
        value: String,
        placeholder: Option<String>,
    },
    /// Activatable push button.
    Button { label: String },
    /// Toggleable checkbox with an optional label.
    Checkbox {
        checked: bool,
        label: Option<String>,
    },
    /// Opens `target` in a new context when activated.
    Link { target: String, label: String },
}

impl Content {
    /// Plain-text view of this content, ignoring children.
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            Content::TextInput { value, .. } => Some(value),
            Content::Button { label } => Some(label),
            Content::Checkbox { label, .. } => label.as_deref(),
            Content::Link { label, .. } => Some(label),
            _ => None,
        }
    }
}
