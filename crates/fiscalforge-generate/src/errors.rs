use thiserror::Error;

/// Errors emitted by the template resolution engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The requested document type is not one of the bundled templates.
    #[error("unsupported template type: {0}")]
    UnsupportedTemplateType(String),
    /// The placeholder dependency graph contains a cycle.
    #[error("circular dependency detected at {0}")]
    CircularDependency(String),
    /// A pruning pattern failed to compile.
    #[error("invalid prune pattern: {0}")]
    Pattern(#[from] regex::Error),
}
