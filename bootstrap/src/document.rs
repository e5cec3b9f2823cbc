use std::fmt::Debug;

use crate::{BootstrapError, StylesheetResource};

/// The document hosting the application.
///
/// Implemented by the browser document and by [`crate::MemoryDocument`].
/// All methods take `&self`: the document is a shared, single-threaded
/// resource that is mutated in place.
pub trait HostDocument {
    type Element: Clone + PartialEq + Debug;

    /// Returns every element bearing `id`, in document order.
    ///
    /// A lookup the document cannot perform is an error, never an empty
    /// result: an empty result means the target is missing.
    fn elements_by_id(&self, id: &str) -> Result<Vec<Self::Element>, BootstrapError>;

    /// Appends `resource` to the document's global style registry.
    ///
    /// Sheets registered later take precedence on conflicting selectors.
    fn register_stylesheet(&self, resource: &StylesheetResource) -> Result<(), BootstrapError>;
}
