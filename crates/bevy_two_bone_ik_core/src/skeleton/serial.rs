use bevy::{
    math::{Quat, Vec3},
    transform::components::Transform,
};
use serde::{Deserialize, Serialize};

/// On-disk description of a skeleton, stored in `*.skn.ron` files.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SkeletonSerial {
    /// Placement of the skeleton in global space
    #[serde(default)]
    pub transform: TransformSerial,
    /// Bones in declaration order. Parents must be declared before their children.
    pub bones: Vec<BoneSerial>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BoneSerial {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub rest: TransformSerial,
    #[serde(default)]
    pub custom_pose: TransformSerial,
    /// Initial local pose
    #[serde(default)]
    pub pose: TransformSerial,
}

/// Transform with every component optional, missing ones fall back to identity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct TransformSerial {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for TransformSerial {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl From<TransformSerial> for Transform {
    fn from(value: TransformSerial) -> Self {
        Transform {
            translation: value.translation,
            rotation: value.rotation,
            scale: value.scale,
        }
    }
}

impl From<Transform> for TransformSerial {
    fn from(value: Transform) -> Self {
        Self {
            translation: value.translation,
            rotation: value.rotation,
            scale: value.scale,
        }
    }
}
