use thiserror::Error;

/// Errors raised while running a step graph
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("step execution failed: {0}")]
    StepExecutionFailed(String),

    #[error("step not found: {0}")]
    StepNotFound(String),

    #[error("context error: {0}")]
    ContextError(String),

    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

pub type Result<T> = std::result::Result<T, FlowError>;
