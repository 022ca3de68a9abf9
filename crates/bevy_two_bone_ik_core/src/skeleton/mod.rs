mod host;
pub mod loader;
pub mod serial;

pub use host::SkeletonHost;

use bevy::{
    asset::Asset, math::Vec3, platform::collections::HashMap, reflect::Reflect,
    transform::components::Transform,
};
use std::fmt::Debug;

use crate::{errors::SkeletonError, id::BoneId};

#[derive(Reflect, Clone, Debug, Default)]
pub struct Bone {
    pub name: String,
    pub parent: Option<BoneId>,
    /// Reference transform relative to the parent bone
    pub rest: Transform,
    pub custom_pose: Transform,
    /// Current local pose, applied on top of `rest * custom_pose`
    pub pose: Transform,
}

/// Arena-backed bone hierarchy. Bones are stored in insertion order, so a parent
/// always has a smaller index than its children.
#[derive(Asset, Reflect, Clone, Default)]
pub struct Skeleton {
    bones: Vec<Bone>,
    names: HashMap<String, BoneId>,
    transform: Transform,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bone(
        &mut self,
        name: impl Into<String>,
        parent: Option<BoneId>,
        rest: Transform,
    ) -> Result<BoneId, SkeletonError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(SkeletonError::DuplicateBone(name));
        }
        if let Some(parent) = parent {
            if parent.index() >= self.bones.len() {
                return Err(SkeletonError::UnknownParent(parent));
            }
        }
        if !is_uniform(rest.scale) {
            return Err(SkeletonError::NonUniformScale(name));
        }

        let id = BoneId::new(self.bones.len());
        self.names.insert(name.clone(), id);
        self.bones.push(Bone {
            name,
            parent,
            rest,
            ..Default::default()
        });

        Ok(id)
    }

    pub fn bone(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id.index())
    }

    pub fn bone_name(&self, id: BoneId) -> Option<&str> {
        self.bone(id).map(|bone| bone.name.as_str())
    }

    pub fn children(&self, id: BoneId) -> Vec<BoneId> {
        self.ids()
            .filter(|child| self.parent(*child) == Some(id))
            .collect()
    }

    pub fn root_bones(&self) -> Vec<BoneId> {
        self.ids()
            .filter(|bone| self.parent(*bone).is_none())
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = BoneId> + '_ {
        (0..self.bones.len()).map(BoneId::new)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Rejects non-uniform scales, which `Transform` composition can't carry
    /// through a rotated child.
    pub fn set_custom_pose(
        &mut self,
        id: BoneId,
        custom_pose: Transform,
    ) -> Result<(), SkeletonError> {
        let Some(bone) = self.bones.get_mut(id.index()) else {
            return Ok(());
        };
        if !is_uniform(custom_pose.scale) {
            return Err(SkeletonError::NonUniformScale(bone.name.clone()));
        }

        bone.custom_pose = custom_pose;
        Ok(())
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn indent(f: &mut std::fmt::Formatter<'_>, level: u32) -> std::fmt::Result {
        if level == 0 {
            return Ok(());
        }
        for _ in 0..(level - 1) {
            write!(f, "┃ ")?;
        }
        write!(f, "┣━")?;
        Ok(())
    }

    fn fmt_level(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        level: u32,
        bones: Vec<BoneId>,
    ) -> std::fmt::Result {
        for bone in bones {
            Self::indent(f, level)?;
            writeln!(
                f,
                "🦴 {:?} [{}]",
                self.bone_name(bone).unwrap_or_default(),
                bone.index()
            )?;
            self.fmt_level(f, level + 1, self.children(bone))?;
        }
        Ok(())
    }
}

/// Relative tolerance when comparing scale components.
const SCALE_TOLERANCE: f32 = 1e-5;

fn is_uniform(scale: Vec3) -> bool {
    let tolerance = SCALE_TOLERANCE * scale.abs().max_element();
    (scale.x - scale.y).abs() <= tolerance && (scale.x - scale.z).abs() <= tolerance
}

impl SkeletonHost for Skeleton {
    fn find_bone(&self, name: &str) -> Option<BoneId> {
        self.names.get(name).copied()
    }

    fn parent(&self, bone: BoneId) -> Option<BoneId> {
        self.bone(bone).and_then(|bone| bone.parent)
    }

    fn rest_transform(&self, bone: BoneId) -> Transform {
        self.bone(bone).map_or(Transform::IDENTITY, |bone| bone.rest)
    }

    fn custom_pose(&self, bone: BoneId) -> Transform {
        self.bone(bone)
            .map_or(Transform::IDENTITY, |bone| bone.custom_pose)
    }

    fn local_pose(&self, bone: BoneId) -> Transform {
        self.bone(bone).map_or(Transform::IDENTITY, |bone| bone.pose)
    }

    fn set_local_pose(&mut self, bone: BoneId, pose: Transform) {
        if let Some(bone) = self.bones.get_mut(bone.index()) {
            bone.pose = pose;
        }
    }

    fn global_transform(&self) -> Transform {
        self.transform
    }
}

impl Debug for Skeleton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Skeleton hierarchy:")?;
        self.fmt_level(f, 0, self.root_bones())
    }
}
