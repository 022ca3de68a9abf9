mod asset_loader_error;
mod ik_error;
mod skeleton_error;

pub use asset_loader_error::*;
pub use ik_error::*;
pub use skeleton_error::*;
