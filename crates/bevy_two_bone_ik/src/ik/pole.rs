use bevy::math::{Quat, Vec3};
use bevy_two_bone_ik_core::{
    skeleton::SkeletonHost,
    utils::geometry::{project_on_plane, signed_angle},
};

use super::{chain::Joint, chain_pose::ChainPose};

/// Swings the chain around its own root-to-tip axis so the middle joint points
/// towards `pole` (character space). Reach is unaffected.
///
/// Returns the angle the root joint was rotated by.
pub fn apply_pole<H: SkeletonHost + ?Sized>(pose: &mut ChainPose<'_, H>, pole: Vec3) -> f32 {
    let root = pose.joint_position(Joint::Root);
    let Some(axis) = (pose.joint_position(Joint::Tip) - root).try_normalize() else {
        return 0.;
    };

    let middle_offset = project_on_plane(pose.joint_position(Joint::Middle) - root, axis);
    let pole_offset = project_on_plane(pole - root, axis);
    let angle = signed_angle(middle_offset, pole_offset, axis);

    if angle != 0. {
        pose.rotate_joint(Joint::Root, Quat::from_axis_angle(axis, angle));
    }

    angle
}
