use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
};

use crate::{parse_rules, BootstrapError, HostDocument, StyleLayer, StyleRule, StylesheetResource};

/// Reference to an element of a [`MemoryDocument`].
///
/// Two references are equal when they point at the same element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoryElement {
    node: usize,
    tag: String,
    id: Option<String>,
}

impl MemoryElement {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredStylesheet {
    pub name: String,
    pub layer: StyleLayer,
    pub rules: Vec<StyleRule>,
}

/// In-memory hosted document for tests and harnesses.
///
/// Holds a flat list of elements and an ordered style registry. Style
/// resolution only knows the cascade by registration order: for a selector,
/// the last registered declaration wins. There is no specificity and no
/// `!important`.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RefCell<Vec<MemoryElement>>,
    stylesheets: RefCell<Vec<RegisteredStylesheet>>,
    rejected: RefCell<HashSet<String>>,
    lookup_failure: RefCell<Option<String>>,
    next_node: Cell<usize>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding a single `<div>` with the given id.
    pub fn with_target(id: &str) -> (Self, MemoryElement) {
        let document = Self::new();
        let element = document.append_element("div", Some(id));
        (document, element)
    }

    pub fn append_element(&self, tag: &str, id: Option<&str>) -> MemoryElement {
        let node = self.next_node.get();
        self.next_node.set(node + 1);
        let element = MemoryElement {
            node,
            tag: tag.to_string(),
            id: id.map(str::to_string),
        };
        self.elements.borrow_mut().push(element.clone());
        element
    }

    /// Makes [`HostDocument::register_stylesheet`] fail for the named resource.
    pub fn reject_stylesheet(&self, name: &str) {
        self.rejected.borrow_mut().insert(name.to_string());
    }

    /// Makes every [`HostDocument::elements_by_id`] fail with `reason`.
    pub fn fail_lookups(&self, reason: &str) {
        *self.lookup_failure.borrow_mut() = Some(reason.to_string());
    }

    /// Registered stylesheets in registration order.
    pub fn stylesheets(&self) -> Vec<RegisteredStylesheet> {
        self.stylesheets.borrow().clone()
    }

    /// Resolves `property` for rules targeting `selector` across all registered
    /// stylesheets; later sheets and later rules win.
    pub fn computed_style(&self, selector: &str, property: &str) -> Option<String> {
        self.stylesheets
            .borrow()
            .iter()
            .flat_map(|sheet| sheet.rules.iter())
            .filter(|rule| rule.matches(selector))
            .filter_map(|rule| rule.value_of(property))
            .last()
            .map(str::to_string)
    }
}

impl HostDocument for MemoryDocument {
    type Element = MemoryElement;

    fn elements_by_id(&self, id: &str) -> Result<Vec<MemoryElement>, BootstrapError> {
        if let Some(reason) = self.lookup_failure.borrow().as_ref() {
            return Err(BootstrapError::DocumentQueryFailure {
                target_id: id.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self
            .elements
            .borrow()
            .iter()
            .filter(|e| e.id.as_deref() == Some(id))
            .cloned()
            .collect())
    }

    fn register_stylesheet(&self, resource: &StylesheetResource) -> Result<(), BootstrapError> {
        if self.rejected.borrow().contains(resource.name.as_ref()) {
            return Err(BootstrapError::StylesheetResourceFailure {
                name: resource.name.to_string(),
                reason: "resource could not be resolved".to_string(),
            });
        }
        self.stylesheets.borrow_mut().push(RegisteredStylesheet {
            name: resource.name.to_string(),
            layer: resource.layer,
            rules: parse_rules(&resource.source),
        });
        Ok(())
    }
}
