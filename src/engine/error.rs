use thiserror::Error;

/// Programmer errors rejected by the derivation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A page size of zero would make the page count undefined.
    #[error("page size must be positive")]
    InvalidPageSize,
}
