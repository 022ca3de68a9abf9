use bevy::{
    app::{App, Plugin},
    asset::AssetApp,
};
use bevy_two_bone_ik_core::{
    id::BoneId,
    skeleton::{Bone, Skeleton, loader::SkeletonLoader},
};

use crate::{
    config::{TwoBoneIkConfig, TwoBoneIkConfigLoader},
    ik::{BoneChain, Joint},
    solver::{RunState, TwoBoneIk},
};

/// Registers the skeleton and solver configuration assets, their loaders and the
/// reflected solver types.
///
/// No systems are added: call [`TwoBoneIk::tick`] from whichever schedule updates
/// your skeleton.
#[derive(Default)]
pub struct TwoBoneIkPlugin;

impl Plugin for TwoBoneIkPlugin {
    fn build(&self, app: &mut App) {
        self.register_types(app);
        app //
            .init_asset::<Skeleton>()
            .init_asset_loader::<SkeletonLoader>()
            .init_asset::<TwoBoneIkConfig>()
            .init_asset_loader::<TwoBoneIkConfigLoader>();
    }
}

impl TwoBoneIkPlugin {
    fn register_types(&self, app: &mut App) {
        app //
            .register_type::<Skeleton>()
            .register_asset_reflect::<Skeleton>()
            .register_type::<TwoBoneIkConfig>()
            .register_asset_reflect::<TwoBoneIkConfig>()
            .register_type::<Bone>()
            .register_type::<BoneId>()
            .register_type::<BoneChain>()
            .register_type::<Joint>()
            .register_type::<RunState>()
            .register_type::<TwoBoneIk>();
    }
}
