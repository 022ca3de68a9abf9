use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    reflect::TypePath,
};

use super::{Skeleton, SkeletonHost, serial::SkeletonSerial};
use crate::errors::AssetLoaderError;

#[derive(Default, TypePath)]
pub struct SkeletonLoader;

impl AssetLoader for SkeletonLoader {
    type Asset = Skeleton;
    type Settings = ();
    type Error = AssetLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = vec![];
        reader.read_to_end(&mut bytes).await?;
        let serial: SkeletonSerial = ron::de::from_bytes(&bytes)?;
        build_skeleton(&serial)
    }

    fn extensions(&self) -> &[&str] {
        &["skn.ron"]
    }
}

pub fn build_skeleton(serial: &SkeletonSerial) -> Result<Skeleton, AssetLoaderError> {
    let mut skeleton = Skeleton::new();
    skeleton.set_transform(serial.transform.into());

    for bone in &serial.bones {
        let parent = match &bone.parent {
            Some(parent) => Some(skeleton.find_bone(parent).ok_or_else(|| {
                AssetLoaderError::UnknownParent {
                    bone: bone.name.clone(),
                    parent: parent.clone(),
                }
            })?),
            None => None,
        };

        let id = skeleton.add_bone(bone.name.clone(), parent, bone.rest.into())?;
        skeleton.set_custom_pose(id, bone.custom_pose.into())?;
        skeleton.set_local_pose(id, bone.pose.into());
    }

    Ok(skeleton)
}
