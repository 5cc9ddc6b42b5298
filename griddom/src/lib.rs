pub mod document;
pub mod element;
pub mod event;

pub use document::{Document, MountError};
pub use element::{find_element, find_element_mut, Content, Element};
pub use event::Event;
