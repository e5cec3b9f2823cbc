use std::{borrow::Cow, fmt::Display};

use crate::{step::logged_step, BootstrapError, HostDocument};

/// Cascade layer of a global stylesheet, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleLayer {
    Framework,
    Application,
    Feature,
}

impl Display for StyleLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleLayer::Framework => write!(f, "framework"),
            StyleLayer::Application => write!(f, "application"),
            StyleLayer::Feature => write!(f, "feature"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetResource {
    pub name: Cow<'static, str>,
    pub layer: StyleLayer,
    pub source: Cow<'static, str>,
}

impl StylesheetResource {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        layer: StyleLayer,
        source: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            layer,
            source: source.into(),
        }
    }

    /// A stylesheet bundled into the binary, e.g. via `include_str!`.
    pub const fn bundled(name: &'static str, layer: StyleLayer, source: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            layer,
            source: Cow::Borrowed(source),
        }
    }
}

/// Ordered set of global stylesheets.
///
/// Resources are kept sorted by [`StyleLayer`]: the layer overrides the order
/// in which resources are listed, so a feature sheet pushed before a framework
/// sheet is still applied after it. Within a layer the insertion order is
/// preserved. Iteration order is the order of application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetSet {
    resources: Vec<StylesheetResource>,
}

impl StylesheetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `resource` after every resource of the same or a lower layer.
    pub fn push(&mut self, resource: StylesheetResource) {
        let position = self
            .resources
            .iter()
            .position(|r| r.layer > resource.layer)
            .unwrap_or(self.resources.len());
        self.resources.insert(position, resource);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StylesheetResource> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl FromIterator<StylesheetResource> for StylesheetSet {
    fn from_iter<T: IntoIterator<Item = StylesheetResource>>(iter: T) -> Self {
        let mut set = Self::new();
        iter.into_iter().for_each(|r| set.push(r));
        set
    }
}

impl<'a> IntoIterator for &'a StylesheetSet {
    type Item = &'a StylesheetResource;
    type IntoIter = std::slice::Iter<'a, StylesheetResource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

/// Registers every stylesheet of `set` with `document`, in order.
///
/// Stops at the first sheet the document refuses; sheets registered before it
/// stay registered. Returns the number of registered sheets.
pub fn apply_stylesheets<D>(document: &D, set: &StylesheetSet) -> Result<usize, BootstrapError>
where
    D: HostDocument,
{
    logged_step("apply_stylesheets", || {
        for resource in set {
            document.register_stylesheet(resource)?;
            log::debug!("Registered {} stylesheet `{}`", resource.layer, resource.name);
        }
        Ok(set.len())
    })
}
