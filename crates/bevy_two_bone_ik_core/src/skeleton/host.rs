use bevy::transform::components::Transform;

use crate::id::BoneId;

/// Read access to a bone hierarchy plus write access to per-bone local poses.
///
/// This is everything the solver needs from whatever owns the skeleton. Hierarchy
/// topology and rest transforms must stay fixed while a solve is running.
///
/// A bone's character-space transform is
/// `character(parent) * rest_transform * custom_pose * local_pose`. Bones without a
/// parent use their local pose directly.
pub trait SkeletonHost {
    fn find_bone(&self, name: &str) -> Option<BoneId>;

    fn parent(&self, bone: BoneId) -> Option<BoneId>;

    fn rest_transform(&self, bone: BoneId) -> Transform;

    /// Extra offset applied between the rest transform and the local pose.
    fn custom_pose(&self, _bone: BoneId) -> Transform {
        Transform::IDENTITY
    }

    fn local_pose(&self, bone: BoneId) -> Transform;

    fn set_local_pose(&mut self, bone: BoneId, pose: Transform);

    /// Placement of the skeleton itself in global space.
    fn global_transform(&self) -> Transform;
}
