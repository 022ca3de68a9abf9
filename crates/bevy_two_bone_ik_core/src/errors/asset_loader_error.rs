use thiserror::Error;

use super::SkeletonError;

/// Possible errors that can be produced by a custom asset loader
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AssetLoaderError {
    /// An [IO](std::io) Error
    #[error("Could not read asset: {0}")]
    Io(#[from] std::io::Error),
    /// A [RON](ron) Error
    #[error("Could not parse RON: {0}")]
    RonSpannedError(#[from] ron::error::SpannedError),
    #[error("Bone {bone:?} names parent {parent:?}, which is not declared before it")]
    UnknownParent { bone: String, parent: String },
    #[error("Invalid skeleton: {0}")]
    Skeleton(#[from] SkeletonError),
}
