use bevy::{log::debug, reflect::Reflect, transform::components::Transform};
use bevy_two_bone_ik_core::{
    errors::{IkError, IkResult},
    id::BoneId,
    skeleton::SkeletonHost,
    space_conversion::SpaceConversion,
};

/// Position of a joint within a [`BoneChain`].
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Joint {
    Root,
    Middle,
    Tip,
}

impl Joint {
    pub const ALL: [Joint; 3] = [Joint::Root, Joint::Middle, Joint::Tip];

    pub const fn index(self) -> usize {
        match self {
            Joint::Root => 0,
            Joint::Middle => 1,
            Joint::Tip => 2,
        }
    }
}

/// Whether the chain can put its tip exactly on a target.
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reach {
    /// Strictly between the folded and extended lengths
    InRange,
    /// At or beyond full extension, or at or inside the fully folded distance
    OutOfRange,
}

/// Three bones resolved from a tip bone and its two ancestors, together with the
/// measurements taken when the chain was resolved.
#[derive(Reflect, Clone, Debug, PartialEq)]
pub struct BoneChain {
    joints: [BoneId; 3],
    /// Local poses at resolution time. Every solve starts from these.
    base_pose: [Transform; 3],
    lengths: [f32; 2],
    max_reach_squared: f32,
    min_reach_squared: f32,
}

impl BoneChain {
    /// Resolves the chain ending at the bone named `tip_bone`.
    ///
    /// Bone lengths come from the character space joint positions of the current
    /// pose, and the current local poses become the base pose of the chain.
    pub fn from_tip<H: SkeletonHost + ?Sized>(host: &H, tip_bone: &str) -> IkResult<Self> {
        let missing_ancestor = |depth| IkError::MissingAncestor {
            tip: tip_bone.to_string(),
            depth,
        };

        let tip = host
            .find_bone(tip_bone)
            .ok_or_else(|| IkError::BoneNotFound(tip_bone.to_string()))?;
        let middle = host.parent(tip).ok_or_else(|| missing_ancestor(0))?;
        let root = host.parent(middle).ok_or_else(|| missing_ancestor(1))?;
        let joints = [root, middle, tip];

        let positions = joints.map(|bone| host.character_transform_of_bone(bone).translation);
        let lengths = [
            positions[0].distance(positions[1]),
            positions[1].distance(positions[2]),
        ];
        let max_reach = lengths[0] + lengths[1];
        let min_reach = (lengths[0] - lengths[1]).abs();

        let chain = Self {
            joints,
            base_pose: joints.map(|bone| host.local_pose(bone)),
            lengths,
            max_reach_squared: max_reach * max_reach,
            min_reach_squared: min_reach * min_reach,
        };

        debug!(
            "Resolved two bone chain {:?} -> {:?} -> {tip_bone:?}, lengths {:?}, reach {}..{}",
            root, middle, chain.lengths, min_reach, max_reach
        );

        Ok(chain)
    }

    pub fn joints(&self) -> [BoneId; 3] {
        self.joints
    }

    pub fn joint(&self, joint: Joint) -> BoneId {
        self.joints[joint.index()]
    }

    pub fn base_pose(&self) -> [Transform; 3] {
        self.base_pose
    }

    pub fn lengths(&self) -> [f32; 2] {
        self.lengths
    }

    pub fn max_reach_squared(&self) -> f32 {
        self.max_reach_squared
    }

    pub fn min_reach_squared(&self) -> f32 {
        self.min_reach_squared
    }

    pub fn classify(&self, target_distance_squared: f32) -> Reach {
        if target_distance_squared >= self.max_reach_squared
            || target_distance_squared <= self.min_reach_squared
        {
            Reach::OutOfRange
        } else {
            Reach::InRange
        }
    }
}
