use bevy::{
    math::{Quat, Vec3},
    transform::components::Transform,
};
use bevy_two_bone_ik_core::{
    id::BoneId,
    skeleton::SkeletonHost,
    space_conversion::SpaceConversion,
    utils::geometry::{law_of_cosines, rotation_arc},
};

use super::{
    chain::{BoneChain, Joint, Reach},
    chain_pose::ChainPose,
    pole::apply_pole,
};

/// Below this (relative to the product of the squared bone lengths) the upper and
/// lower bones are treated as collinear.
const COLLINEAR_EPSILON: f32 = 1e-8;

/// New local poses for the three joints of a chain.
#[derive(Clone, Debug, PartialEq)]
pub struct SolvedChain {
    pub joints: [BoneId; 3],
    pub poses: [Transform; 3],
}

impl SolvedChain {
    pub fn pose(&self, joint: Joint) -> Transform {
        self.poses[joint.index()]
    }

    /// Writes the solved local poses back to the host.
    pub fn apply<H: SkeletonHost + ?Sized>(&self, host: &mut H) {
        for (bone, pose) in self.joints.into_iter().zip(self.poses) {
            host.set_local_pose(bone, pose);
        }
    }
}

/// Solves `chain` towards `target` (global space) without modifying the host.
///
/// The chain always starts from its base pose. Targets the chain cannot reach
/// exactly make it point straight at them; reachable targets are met by bending the
/// middle joint and then swinging the root, optionally followed by a pole swing.
/// Either way the tip ends up with the target's orientation.
pub fn solve_chain<H: SkeletonHost + ?Sized>(
    host: &H,
    chain: &BoneChain,
    target: Transform,
    pole: Option<Vec3>,
) -> SolvedChain {
    let target = host.transform_global_to_character(target);
    let mut pose = ChainPose::new(host, chain);

    let root = pose.joint_position(Joint::Root);
    match chain.classify(target.translation.distance_squared(root)) {
        Reach::OutOfRange => aim_at(&mut pose, target.translation),
        Reach::InRange => {
            bend_to_reach(&mut pose, chain, target.translation);
            if let Some(pole) = pole {
                apply_pole(&mut pose, pole);
            }
        }
    }

    let mut tip = pose.joint_transform(Joint::Tip);
    tip.rotation = target.rotation;
    pose.set_joint_transform(Joint::Tip, tip);

    SolvedChain {
        joints: chain.joints(),
        poses: pose.locals(),
    }
}

/// Points each bone in turn straight at the target.
fn aim_at<H: SkeletonHost + ?Sized>(pose: &mut ChainPose<'_, H>, target: Vec3) {
    for (joint, child) in [(Joint::Root, Joint::Middle), (Joint::Middle, Joint::Tip)] {
        let joint_position = pose.joint_position(joint);
        let bone_vector = pose.joint_position(child) - joint_position;

        if let Some(rotation) = rotation_arc(bone_vector, target - joint_position) {
            pose.rotate_joint(joint, rotation);
        }
    }
}

/// Law of cosines solve: opens or closes the middle joint until the root-to-tip
/// distance matches the target distance, then swings the root onto the target.
fn bend_to_reach<H: SkeletonHost + ?Sized>(
    pose: &mut ChainPose<'_, H>,
    chain: &BoneChain,
    target: Vec3,
) {
    let [upper_len, lower_len] = chain.lengths();

    let root = pose.joint_position(Joint::Root);
    let middle = pose.joint_position(Joint::Middle);
    let tip = pose.joint_position(Joint::Tip);
    let to_target = target - root;

    let current_angle = law_of_cosines(root.distance(tip), lower_len, upper_len);
    let target_angle = law_of_cosines(to_target.length(), lower_len, upper_len);

    if let Some(axis) = bend_axis(root - middle, tip - middle) {
        pose.rotate_joint(
            Joint::Middle,
            Quat::from_axis_angle(axis, target_angle - current_angle),
        );
    }

    let to_tip = pose.joint_position(Joint::Tip) - root;
    if let Some(rotation) = rotation_arc(to_tip, to_target) {
        pose.rotate_joint(Joint::Root, rotation);
    }
}

/// Normal of the plane the middle joint bends in. Rotating the lower bone around it
/// by a positive angle opens the joint.
///
/// A straight chain has no bend plane, so any axis perpendicular to the lower bone
/// is used instead.
fn bend_axis(to_root: Vec3, to_tip: Vec3) -> Option<Vec3> {
    let normal = to_root.cross(to_tip);
    let threshold = COLLINEAR_EPSILON * to_root.length_squared() * to_tip.length_squared();
    if normal.length_squared() > threshold {
        return normal.try_normalize();
    }

    to_tip
        .try_normalize()
        .map(|direction| direction.any_orthonormal_vector())
}

#[cfg(test)]
mod test {
    use super::*;
    use bevy_two_bone_ik_core::skeleton::Skeleton;
    use std::f32::consts::FRAC_PI_4;

    const EPSILON: f32 = 1e-4;

    /// Chain of two unit bones hanging off a rotated, translated spine.
    fn arm(elbow_bend: f32) -> Skeleton {
        let mut skeleton = Skeleton::new();
        let spine = skeleton.add_bone("spine", None, Transform::IDENTITY).unwrap();
        let upper = skeleton
            .add_bone("upper_arm", Some(spine), Transform::from_xyz(0.5, 1., 0.))
            .unwrap();
        let lower = skeleton
            .add_bone("forearm", Some(upper), Transform::from_xyz(0., 1., 0.))
            .unwrap();
        skeleton
            .add_bone("hand", Some(lower), Transform::from_xyz(0., 1., 0.))
            .unwrap();

        skeleton.set_local_pose(
            spine,
            Transform::from_xyz(0., 2., 0.).with_rotation(Quat::from_rotation_y(0.4)),
        );
        skeleton.set_local_pose(
            lower,
            Transform::from_rotation(Quat::from_rotation_z(elbow_bend)),
        );
        skeleton
    }

    fn solved_positions(skeleton: &Skeleton, solved: &SolvedChain) -> [Vec3; 3] {
        let mut skeleton = skeleton.clone();
        solved.apply(&mut skeleton);
        solved
            .joints
            .map(|bone| skeleton.character_transform_of_bone(bone).translation)
    }

    #[test]
    fn test_reaches_target_in_range() {
        let skeleton = arm(0.6);
        let chain = BoneChain::from_tip(&skeleton, "hand").unwrap();
        let root = skeleton
            .character_transform_of_bone(chain.joint(Joint::Root))
            .translation;

        for direction in [
            Vec3::new(1., 0.3, -0.2),
            Vec3::new(-0.4, -1., 0.7),
            Vec3::new(0., 0., 1.),
        ] {
            let target_position = root + direction.normalize() * 1.3;
            let target = Transform::from_translation(target_position)
                .with_rotation(Quat::from_rotation_x(FRAC_PI_4));

            let solved = solve_chain(&skeleton, &chain, target, None);
            let [_, _, tip] = solved_positions(&skeleton, &solved);

            assert!(tip.distance(target_position) < EPSILON, "{tip} vs {target_position}");
        }
    }

    #[test]
    fn test_tip_takes_target_orientation() {
        let skeleton = arm(0.6);
        let chain = BoneChain::from_tip(&skeleton, "hand").unwrap();
        let rotation = Quat::from_euler(bevy::math::EulerRot::YXZ, 0.3, 1.2, -0.5);
        let target = Transform::from_xyz(1., 3., 0.5).with_rotation(rotation);

        let solved = solve_chain(&skeleton, &chain, target, None);
        let mut posed = skeleton.clone();
        solved.apply(&mut posed);
        let tip_rotation = posed
            .character_transform_of_bone(chain.joint(Joint::Tip))
            .rotation;

        assert!(tip_rotation.angle_between(rotation) < 1e-3);
    }

    #[test]
    fn test_straight_chain_can_bend() {
        let skeleton = arm(0.);
        let chain = BoneChain::from_tip(&skeleton, "hand").unwrap();
        assert!((chain.max_reach_squared() - 4.).abs() < 1e-4);
        assert!(chain.min_reach_squared() < 1e-6);

        let [root, _, tip] = chain
            .joints()
            .map(|bone| skeleton.character_transform_of_bone(bone).translation);
        let forward = (tip - root).normalize();
        let target_position = root + forward * 1.9;

        let target = Transform::from_translation(target_position);
        let solved = solve_chain(&skeleton, &chain, target, None);
        let [root, middle, tip] = solved_positions(&skeleton, &solved);

        assert!(tip.distance(target_position) < EPSILON);
        let elbow_angle = (root - middle).angle_between(tip - middle);
        let expected = ((1. + 1. - 1.9 * 1.9) / 2_f32).acos();
        assert!((elbow_angle - expected).abs() < 1e-3);
    }

    #[test]
    fn test_points_at_unreachable_target() {
        let skeleton = arm(0.9);
        let chain = BoneChain::from_tip(&skeleton, "hand").unwrap();
        let target_position = Vec3::new(-4., 1., 3.);

        let target = Transform::from_translation(target_position);
        let solved = solve_chain(&skeleton, &chain, target, None);
        let [root, middle, tip] = solved_positions(&skeleton, &solved);

        let to_target = (target_position - root).normalize();
        assert!((tip - root).normalize().abs_diff_eq(to_target, EPSILON));
        assert!((middle - root).normalize().abs_diff_eq(to_target, EPSILON));
    }

    #[test]
    fn test_exact_max_reach_fully_extends() {
        let skeleton = arm(0.7);
        let chain = BoneChain::from_tip(&skeleton, "hand").unwrap();
        let root = skeleton
            .character_transform_of_bone(chain.joint(Joint::Root))
            .translation;
        let direction = Vec3::new(0.3, 0.2, 1.).normalize();
        let target_position = root + direction * chain.max_reach_squared().sqrt();

        let target = Transform::from_translation(target_position);
        let solved = solve_chain(&skeleton, &chain, target, None);
        assert!(solved.poses.iter().all(|pose| pose.is_finite()));

        let [root, middle, tip] = solved_positions(&skeleton, &solved);
        let [upper_len, lower_len] = chain.lengths();
        assert!((root.distance(tip) - (upper_len + lower_len)).abs() < EPSILON);
        assert!((root - middle).angle_between(tip - middle) > std::f32::consts::PI - 1e-2);
        assert!(tip.distance(target_position) < EPSILON);
    }

    #[test]
    fn test_pole_keeps_tip_and_moves_elbow() {
        let skeleton = arm(0.8);
        let chain = BoneChain::from_tip(&skeleton, "hand").unwrap();
        let target = Transform::from_xyz(1.5, 3.2, 0.4);
        let pole = Vec3::new(0., 2., 5.);

        let plain = solve_chain(&skeleton, &chain, target, None);
        let with_pole = solve_chain(&skeleton, &chain, target, Some(pole));
        let [_, _, plain_tip] = solved_positions(&skeleton, &plain);
        let [root, middle, tip] = solved_positions(&skeleton, &with_pole);

        assert!(tip.distance(plain_tip) < EPSILON);
        assert!(tip.distance(target.translation) < EPSILON);

        let axis = (tip - root).normalize();
        let middle_offset = (middle - root).reject_from_normalized(axis);
        let pole_offset = (pole - root).reject_from_normalized(axis);
        assert!(middle_offset.angle_between(pole_offset) < 1e-3);
    }

    #[test]
    fn test_pole_in_bend_plane_keeps_elbow() {
        let skeleton = arm(0.8);
        let chain = BoneChain::from_tip(&skeleton, "hand").unwrap();
        let target = Transform::from_xyz(1.5, 3.2, 0.4);

        let plain = solve_chain(&skeleton, &chain, target, None);
        let [root, middle, tip] = solved_positions(&skeleton, &plain);
        // Further out along the elbow's own offset from the root-tip line
        let midpoint = (root + tip) / 2.;
        let pole = middle + (middle - midpoint) * 2.;

        let with_pole = solve_chain(&skeleton, &chain, target, Some(pole));
        let [_, pole_middle, _] = solved_positions(&skeleton, &with_pole);

        assert!(pole_middle.distance(middle) < 2e-3);
    }

    #[test]
    fn test_target_is_read_in_skeleton_space() {
        let mut skeleton = arm(0.6);
        let placement =
            Transform::from_xyz(10., 0., -3.).with_rotation(Quat::from_rotation_y(1.3));
        skeleton.set_transform(placement);
        let chain = BoneChain::from_tip(&skeleton, "hand").unwrap();

        let character_target = Vec3::new(0.8, 3.1, 0.6);
        let global_target = placement.transform_point(character_target);

        let target = Transform::from_translation(global_target);
        let solved = solve_chain(&skeleton, &chain, target, None);
        let [_, _, tip] = solved_positions(&skeleton, &solved);

        assert!(tip.distance(character_target) < EPSILON);
    }

    #[test]
    fn test_reaches_with_short_bones() {
        let bone_length = 1e-4;
        let mut skeleton = Skeleton::new();
        let base = skeleton.add_bone("base", None, Transform::IDENTITY).unwrap();
        let upper = skeleton
            .add_bone("upper", Some(base), Transform::IDENTITY)
            .unwrap();
        let lower = skeleton
            .add_bone("lower", Some(upper), Transform::from_xyz(bone_length, 0., 0.))
            .unwrap();
        skeleton
            .add_bone("tip", Some(lower), Transform::from_xyz(bone_length, 0., 0.))
            .unwrap();
        skeleton.set_local_pose(lower, Transform::from_rotation(Quat::from_rotation_z(0.5)));
        let chain = BoneChain::from_tip(&skeleton, "tip").unwrap();

        let target_position = Vec3::new(1.3 * bone_length, 0., 0.);
        let target = Transform::from_translation(target_position);
        let solved = solve_chain(&skeleton, &chain, target, None);
        let [_, _, tip] = solved_positions(&skeleton, &solved);

        assert!(tip.distance(target_position) < 0.01 * bone_length);
    }

    #[test]
    fn test_bend_axis() {
        let axis = bend_axis(Vec3::X, Vec3::Y).unwrap();
        assert!(axis.abs_diff_eq(Vec3::Z, 1e-6));

        let fallback = bend_axis(-Vec3::Y, Vec3::Y * 2.).unwrap();
        assert!(fallback.dot(Vec3::Y).abs() < 1e-6);
        assert!((fallback.length() - 1.).abs() < 1e-6);

        assert!(bend_axis(Vec3::X, Vec3::ZERO).is_none());
    }
}
