//! Conversion between bone space (a pose relative to the parent bone) and character
//! space (relative to the skeleton root). Global space is wherever the skeleton
//! itself is placed, see [`SkeletonHost::global_transform`].
//!
//! Conversions are exact only when rest transforms and custom poses have uniform
//! scale. [`Skeleton`](crate::skeleton::Skeleton) refuses anything else.

use bevy::{
    math::{Mat4, Vec3},
    transform::components::Transform,
};

use crate::{id::BoneId, skeleton::SkeletonHost};

/// Matrix entries smaller than this in magnitude are flushed to zero after a
/// character-to-bone conversion.
pub const NEAR_ZERO_EPSILON: f32 = f32::EPSILON;

pub trait SpaceConversion: SkeletonHost {
    /// Transform that a bone's local pose is applied to: the parent's character
    /// transform followed by the bone's rest transform and custom pose. `None` for
    /// bones without a parent.
    fn parent_basis(&self, bone: BoneId) -> Option<Transform> {
        let parent = self.parent(bone)?;
        Some(
            self.character_transform_of_bone(parent)
                * self.rest_transform(bone)
                * self.custom_pose(bone),
        )
    }

    /// Converts a local pose of `bone` into character space.
    fn bone_to_character(&self, bone: BoneId, local: Transform) -> Transform {
        match self.parent_basis(bone) {
            Some(basis) => basis * local,
            None => local,
        }
    }

    /// Converts a character space transform into a local pose for `bone`.
    ///
    /// Components that end up within [`NEAR_ZERO_EPSILON`] of zero are snapped to
    /// exactly zero so that repeated conversions don't accumulate jitter.
    fn character_to_bone(&self, bone: BoneId, character: Transform) -> Transform {
        let Some(basis) = self.parent_basis(bone) else {
            return character;
        };

        let local = basis.to_matrix().inverse() * character.to_matrix();
        Transform::from_matrix(snap_near_zero(local))
    }

    /// Returns transform of bone in character space, using its current local pose
    fn character_transform_of_bone(&self, bone: BoneId) -> Transform {
        self.bone_to_character(bone, self.local_pose(bone))
    }

    /// Brings a global space transform into character space. Only position and
    /// orientation are carried over.
    fn transform_global_to_character(&self, transform: Transform) -> Transform {
        let skeleton_transform = self.global_transform();
        let translation: Vec3 = skeleton_transform
            .to_matrix()
            .inverse()
            .transform_point3(transform.translation);

        Transform {
            translation,
            rotation: skeleton_transform.rotation.inverse() * transform.rotation,
            scale: Vec3::ONE,
        }
    }
}

impl<T: SkeletonHost + ?Sized> SpaceConversion for T {}

pub fn snap_near_zero(matrix: Mat4) -> Mat4 {
    Mat4::from_cols_array(&matrix.to_cols_array().map(|v| {
        if v.abs() < NEAR_ZERO_EPSILON {
            0.
        } else {
            v
        }
    }))
}
