use bevy::{
    math::{Quat, Vec3},
    transform::components::Transform,
};
use bevy_two_bone_ik_core::{
    id::BoneId, skeleton::SkeletonHost, space_conversion::SpaceConversion,
};

use super::chain::{BoneChain, Joint};

/// Scratch copy of the three chain joints layered over a read-only host.
///
/// Reads of the chain's local poses come from the scratch slots, everything else
/// is forwarded to the host. Writes to bones outside the chain are dropped, so a
/// solve never touches the host until its result is applied.
pub struct ChainPose<'a, H: ?Sized> {
    host: &'a H,
    joints: [BoneId; 3],
    locals: [Transform; 3],
}

impl<'a, H: SkeletonHost + ?Sized> ChainPose<'a, H> {
    /// Starts from the chain's base pose.
    pub fn new(host: &'a H, chain: &BoneChain) -> Self {
        Self {
            host,
            joints: chain.joints(),
            locals: chain.base_pose(),
        }
    }

    fn slot(&self, bone: BoneId) -> Option<usize> {
        self.joints.iter().position(|joint| *joint == bone)
    }

    pub fn joint_transform(&self, joint: Joint) -> Transform {
        self.character_transform_of_bone(self.joints[joint.index()])
    }

    pub fn joint_position(&self, joint: Joint) -> Vec3 {
        self.joint_transform(joint).translation
    }

    /// Overwrites the character space transform of a joint.
    pub fn set_joint_transform(&mut self, joint: Joint, transform: Transform) {
        let bone = self.joints[joint.index()];
        self.locals[joint.index()] = self.character_to_bone(bone, transform);
    }

    /// Applies `rotation` to the joint's character space orientation, pivoting
    /// around the joint itself.
    pub fn rotate_joint(&mut self, joint: Joint, rotation: Quat) {
        let mut transform = self.joint_transform(joint);
        transform.rotation = rotation * transform.rotation;
        self.set_joint_transform(joint, transform);
    }

    pub fn locals(&self) -> [Transform; 3] {
        self.locals
    }
}

impl<H: SkeletonHost + ?Sized> SkeletonHost for ChainPose<'_, H> {
    fn find_bone(&self, name: &str) -> Option<BoneId> {
        self.host.find_bone(name)
    }

    fn parent(&self, bone: BoneId) -> Option<BoneId> {
        self.host.parent(bone)
    }

    fn rest_transform(&self, bone: BoneId) -> Transform {
        self.host.rest_transform(bone)
    }

    fn custom_pose(&self, bone: BoneId) -> Transform {
        self.host.custom_pose(bone)
    }

    fn local_pose(&self, bone: BoneId) -> Transform {
        match self.slot(bone) {
            Some(slot) => self.locals[slot],
            None => self.host.local_pose(bone),
        }
    }

    fn set_local_pose(&mut self, bone: BoneId, pose: Transform) {
        if let Some(slot) = self.slot(bone) {
            self.locals[slot] = pose;
        }
    }

    fn global_transform(&self) -> Transform {
        self.host.global_transform()
    }
}
