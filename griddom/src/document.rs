//! A retained element tree with id-addressed mount points.

use log::debug;

use crate::element::{find_element, find_element_mut, Content, Element};

/// Errors from document operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// No element with the given id exists in the tree.
    #[error("container `{0}` not found")]
    ContainerNotFound(String),
}

/// Owns a tree of elements and lets components mount subtrees into
/// id-addressed containers.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty root container.
    pub fn new() -> Self {
        Self {
            root: Element::box_().id("root"),
        }
    }

    /// Create a document around an existing tree.
    pub fn with_root(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Look up an element by id.
    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    /// Look up an element by id, mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// Replace the content of `container_id` with `child`.
    ///
    /// Whatever the container held before is discarded.
    pub fn mount(&mut self, container_id: &str, child: Element) -> Result<(), MountError> {
        let container = find_element_mut(&mut self.root, container_id)
            .ok_or_else(|| MountError::ContainerNotFound(container_id.to_string()))?;
        container.content = Content::Children(vec![child]);
        debug!("mounted into `{container_id}`");
        Ok(())
    }

    /// Empty the content of `container_id`.
    pub fn unmount(&mut self, container_id: &str) -> Result<(), MountError> {
        let container = find_element_mut(&mut self.root, container_id)
            .ok_or_else(|| MountError::ContainerNotFound(container_id.to_string()))?;
        container.content = Content::None;
        Ok(())
    }
}
