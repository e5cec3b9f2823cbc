use shared_constants::APP_TARGET_ID;

use crate::{BootstrapError, StylesheetResource, StylesheetSet};

/// What to initialize: the global stylesheets and where to mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub target_id: String,
    pub stylesheets: StylesheetSet,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            target_id: APP_TARGET_ID.to_string(),
            stylesheets: StylesheetSet::new(),
        }
    }
}

impl BootstrapConfig {
    pub fn with_target_id(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = target_id.into();
        self
    }

    pub fn with_stylesheet(mut self, resource: StylesheetResource) -> Self {
        self.stylesheets.push(resource);
        self
    }

    pub fn with_stylesheets(mut self, resources: impl IntoIterator<Item = StylesheetResource>) -> Self {
        resources
            .into_iter()
            .for_each(|r| self.stylesheets.push(r));
        self
    }

    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.target_id.is_empty() || self.target_id.chars().any(char::is_whitespace) {
            return Err(BootstrapError::InvalidTargetId(self.target_id.clone()));
        }
        Ok(())
    }
}
