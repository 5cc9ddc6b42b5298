/// High-level events with element targeting.
///
/// The host resolves raw input (keystrokes, pointer activity) to the element
/// it lands on and delivers one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text input value changed.
    Input { target: String, text: String },
    /// Element activated by click or Enter.
    Click { target: String },
    /// Checkbox toggled.
    Toggle { target: String, checked: bool },
}

impl Event {
    /// The id of the element this event is aimed at.
    pub fn target(&self) -> &str {
        match self {
            Event::Input { target, .. } => target,
            Event::Click { target } => target,
            Event::Toggle { target, .. } => target,
        }
    }
}
