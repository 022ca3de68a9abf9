//! Analytic two-bone solve.

pub mod chain;
pub mod chain_pose;
pub mod pole;
pub mod two_bone;

pub use chain::{BoneChain, Joint, Reach};
pub use chain_pose::ChainPose;
pub use pole::apply_pole;
pub use two_bone::{SolvedChain, solve_chain};
