use bevy::reflect::{Reflect, std_traits::ReflectDefault};
use serde::{Deserialize, Serialize};

/// Index of a bone inside a skeleton host.
///
/// Hosts hand these out; the solver only stores and passes them back.
#[derive(Reflect, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[reflect(Default)]
pub struct BoneId(usize);

impl BoneId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for BoneId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}
