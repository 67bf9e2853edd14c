use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A required argument was absent. Raised before anything is mutated.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The requested algorithm has no implementation.
    #[error("unsupported sort algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
}
