use thiserror::Error;

/// Configuration errors raised while setting up a two-bone chain.
///
/// Numerical trouble during a solve is never reported through this type: degenerate
/// geometry is absorbed by the solver and produces a best-effort pose instead.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IkError {
    #[error("no bone named {0:?} in the skeleton")]
    BoneNotFound(String),
    #[error("bone {tip:?} needs two ancestors to form a chain, found {depth}")]
    MissingAncestor { tip: String, depth: usize },
    #[error("the solver has no resolved chain, call initialize first")]
    NotInitialized,
}

pub type IkResult<T> = Result<T, IkError>;
