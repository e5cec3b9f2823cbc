//! Platform independent bootstrap lifecycle of the cygbot frontend.
//!
//! The lifecycle is: register the global stylesheets in layer order, resolve
//! the mount target, construct the root component bound to it and hand back
//! an [`AppHandle`]. The hosted document and the UI library are abstracted
//! behind [`HostDocument`] and [`RootProvider`], so the same sequence runs
//! against the browser DOM and against [`MemoryDocument`].

mod config;
mod css;
mod document;
mod error;
mod handle;
mod lifecycle;
mod memory;
mod mount;
mod step;
mod stylesheet;

pub use config::BootstrapConfig;
pub use css::{parse_rules, Declaration, StyleRule};
pub use document::HostDocument;
pub use error::BootstrapError;
pub use handle::AppHandle;
pub use lifecycle::{initialize, Bootstrap, InitGuard, LifecycleState};
pub use memory::{MemoryDocument, MemoryElement, RegisteredStylesheet};
pub use mount::{mount, resolve_target, MountConfig, MountTarget, RootProvider};
pub use stylesheet::{apply_stylesheets, StyleLayer, StylesheetResource, StylesheetSet};
