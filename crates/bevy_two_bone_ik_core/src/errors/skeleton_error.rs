use thiserror::Error;

use crate::id::BoneId;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkeletonError {
    #[error("a bone named {0:?} already exists")]
    DuplicateBone(String),
    #[error("parent bone {0:?} is not part of this skeleton")]
    UnknownParent(BoneId),
    #[error("bone {0:?} has a non-uniform rest or custom pose scale")]
    NonUniformScale(String),
}
