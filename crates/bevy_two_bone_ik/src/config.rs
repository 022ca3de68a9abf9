use bevy::{
    asset::{Asset, AssetLoader, LoadContext, io::Reader},
    math::Vec3,
    reflect::{Reflect, TypePath},
};
use bevy_two_bone_ik_core::errors::AssetLoaderError;
use serde::{Deserialize, Serialize};

/// Settings of a [`TwoBoneIk`](crate::solver::TwoBoneIk) solver, loadable from
/// `*.ik.ron` files:
///
/// ```ron
/// (
///     tip_bone: "hand.L",
///     use_pole: true,
///     pole: (0.5, 1.0, -2.0),
///     enabled: true,
/// )
/// ```
#[derive(Asset, Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TwoBoneIkConfig {
    /// Name of the last bone of the chain. Its parent and grandparent complete it.
    pub tip_bone: String,
    pub use_pole: bool,
    /// Point the middle joint is swung towards, in skeleton space.
    pub pole: Vec3,
    /// Start solving as soon as the chain is initialized.
    pub enabled: bool,
}

impl TwoBoneIkConfig {
    pub fn new(tip_bone: impl Into<String>) -> Self {
        Self {
            tip_bone: tip_bone.into(),
            ..Default::default()
        }
    }

    pub fn with_pole(mut self, pole: Vec3) -> Self {
        self.use_pole = true;
        self.pole = pole;
        self
    }

    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::de::from_str(source)
    }

    /// Pole used for a solve: an explicit `pole` wins over the configured one, which
    /// only applies when `use_pole` is set.
    pub fn effective_pole(&self, pole: Option<Vec3>) -> Option<Vec3> {
        pole.or(self.use_pole.then_some(self.pole))
    }
}

#[derive(Default, TypePath)]
pub struct TwoBoneIkConfigLoader;

impl AssetLoader for TwoBoneIkConfigLoader {
    type Asset = TwoBoneIkConfig;
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
        let config: TwoBoneIkConfig = ron::de::from_bytes(&bytes)?;
        Ok(config)
    }

    fn extensions(&self) -> &[&str] {
        &["ik.ron"]
    }
}
