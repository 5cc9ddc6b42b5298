//! Named handler registry for action dispatch.
//!
//! The embedding application registers its callbacks here by name and hands
//! the registry to the table at construction; buttons and checkboxes carry
//! only the name. Lookups for unregistered names are a soft failure at the
//! dispatch site, never an error here.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use crate::model::Value;

/// Callback for an action button: `(row data, row index)`.
pub type ActionFn = Arc<dyn Fn(&[Value], usize) + Send + Sync>;

/// Callback for a linked checkbox: `(row data, row index, checked)`.
pub type CheckboxFn = Arc<dyn Fn(&[Value], usize, bool) + Send + Sync>;

/// Registry of named action and checkbox handlers.
///
/// Cheap to clone and shareable across tables; interior mutability lets the
/// host keep registering after construction.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    actions: Arc<RwLock<HashMap<String, ActionFn>>>,
    checkboxes: Arc<RwLock<HashMap<String, CheckboxFn>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a button handler under a name.
    pub fn register<F>(&self, name: impl Into<String>, handler: F)
    where
        F: Fn(&[Value], usize) + Send + Sync + 'static,
    {
        if let Ok(mut actions) = self.actions.write() {
            actions.insert(name.into(), Arc::new(handler));
        }
    }

    /// Register the checkbox handler paired with a button handler name.
    pub fn register_checkbox<F>(&self, name: impl Into<String>, handler: F)
    where
        F: Fn(&[Value], usize, bool) + Send + Sync + 'static,
    {
        if let Ok(mut checkboxes) = self.checkboxes.write() {
            checkboxes.insert(name.into(), Arc::new(handler));
        }
    }

    /// Look up a button handler.
    pub fn action(&self, name: &str) -> Option<ActionFn> {
        self.actions.read().ok()?.get(name).cloned()
    }

    /// Look up the checkbox handler paired with a button handler name.
    pub fn checkbox(&self, name: &str) -> Option<CheckboxFn> {
        self.checkboxes.read().ok()?.get(name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        let actions = self.actions.read().map(|h| h.len()).unwrap_or(0);
        let checkboxes = self.checkboxes.read().map(|h| h.len()).unwrap_or(0);
        actions + checkboxes
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}
