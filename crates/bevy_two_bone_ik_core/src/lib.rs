//! Core types for two-bone inverse kinematics in Bevy.
//!
//! This crate knows nothing about solving. It provides the [`SkeletonHost`] interface
//! through which a solver reads and writes bones, an arena [`Skeleton`] that implements
//! it (and can be loaded from `*.skn.ron` files), conversion between bone space and
//! character space, and a handful of triangle/rotation helpers.
//!
//! [`SkeletonHost`]: crate::skeleton::SkeletonHost
//! [`Skeleton`]: crate::skeleton::Skeleton

pub mod errors;
pub mod id;
pub mod skeleton;
pub mod space_conversion;
pub mod utils;

pub mod prelude {
    pub use super::errors::{AssetLoaderError, IkError, IkResult, SkeletonError};
    pub use super::id::BoneId;
    pub use super::skeleton::{
        Bone, Skeleton, SkeletonHost,
        loader::{SkeletonLoader, build_skeleton},
        serial::{BoneSerial, SkeletonSerial, TransformSerial},
    };
    pub use super::space_conversion::SpaceConversion;
}
