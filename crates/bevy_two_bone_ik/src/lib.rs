//! # Bevy Two Bone IK
//!
//! **Bevy Two Bone IK** is an analytic inverse kinematics solver for three-joint bone
//! chains (shoulder, elbow, hand or hip, knee, foot) in [Bevy](https://bevyengine.org/).
//!
//! ## Introduction
//!
//! A [`TwoBoneIk`] solver is configured with the name of the chain's tip bone; the
//! tip's parent and grandparent complete the chain. Each update it puts the tip on a
//! target transform when the target is within reach, or points the whole chain at it
//! when it isn't, and then gives the tip the target's orientation. An optional pole
//! point picks which way the middle joint bends.
//!
//! The solver doesn't own a skeleton. It talks to one through the [`SkeletonHost`]
//! trait, which the [`Skeleton`] asset in this crate implements, and only ever writes
//! the local poses of its three joints.
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_two_bone_ik::prelude::*;
//!
//! fn reach(skeleton: &mut Skeleton, target: Transform) -> Result<(), IkError> {
//!     let mut solver = TwoBoneIk::new(TwoBoneIkConfig::new("hand.L").enabled());
//!     solver.initialize(&*skeleton)?;
//!     solver.tick(skeleton, target, None);
//!     Ok(())
//! }
//! ```
//!
//! ## Assets
//!
//! [`TwoBoneIkPlugin`] registers two assets:
//! - [`TwoBoneIkConfig`], in `*.ik.ron` files:
//!   ```ron
//!   (
//!       tip_bone: "hand.L",
//!       use_pole: true,
//!       pole: (0.5, 1.0, -2.0),
//!       enabled: true,
//!   )
//!   ```
//! - [`Skeleton`], in `*.skn.ron` files. Bones are listed parents first, each with an
//!   optional rest transform, custom pose and current pose:
//!   ```ron
//!   (
//!       bones: [
//!           (name: "shoulder.L"),
//!           (name: "upper_arm.L", parent: Some("shoulder.L"), rest: (translation: (0.2, 0.0, 0.0))),
//!           (name: "forearm.L", parent: Some("upper_arm.L"), rest: (translation: (0.0, 0.3, 0.0))),
//!           (name: "hand.L", parent: Some("forearm.L"), rest: (translation: (0.0, 0.25, 0.0))),
//!       ],
//!   )
//!   ```
//!
//! [`TwoBoneIk`]: crate::solver::TwoBoneIk
//! [`TwoBoneIkConfig`]: crate::config::TwoBoneIkConfig
//! [`TwoBoneIkPlugin`]: crate::plugin::TwoBoneIkPlugin
//! [`SkeletonHost`]: bevy_two_bone_ik_core::skeleton::SkeletonHost
//! [`Skeleton`]: bevy_two_bone_ik_core::skeleton::Skeleton

pub mod config;
pub mod ik;
pub mod plugin;
pub mod solver;

pub use bevy_two_bone_ik_core as core;

pub mod prelude {
    pub use super::config::{TwoBoneIkConfig, TwoBoneIkConfigLoader};
    pub use super::ik::{BoneChain, ChainPose, Joint, Reach, SolvedChain, solve_chain};
    pub use super::plugin::TwoBoneIkPlugin;
    pub use super::solver::{RunState, TwoBoneIk};
    pub use bevy_two_bone_ik_core::prelude::*;
}
