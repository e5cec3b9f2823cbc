#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("No element with id `{target_id}` found in the document")]
    MountTargetMissing { target_id: String },
    #[error("Expected exactly one element with id `{target_id}`, found {count}")]
    MountTargetAmbiguous { target_id: String, count: usize },
    #[error("Failed to look up elements with id `{target_id}`: {reason}")]
    DocumentQueryFailure { target_id: String, reason: String },
    #[error("Failed to register stylesheet `{name}`: {reason}")]
    StylesheetResourceFailure { name: String, reason: String },
    #[error("The application has already been initialized")]
    AlreadyInitialized,
    #[error("The target id `{0}` is invalid, expected a non-empty id without whitespace")]
    InvalidTargetId(String),
}
