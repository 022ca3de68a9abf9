use bevy::{
    ecs::{component::Component, reflect::ReflectComponent},
    log::{error, warn},
    math::Vec3,
    prelude::ReflectDefault,
    reflect::Reflect,
    transform::components::Transform,
};
use bevy_two_bone_ik_core::{
    errors::{IkError, IkResult},
    skeleton::SkeletonHost,
};

use crate::{
    config::TwoBoneIkConfig,
    ik::{BoneChain, SolvedChain, solve_chain},
};

#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[reflect(Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Two-bone IK solver for a single chain.
///
/// The host drives it: [`initialize`](Self::initialize) once the skeleton is
/// available, [`start`](Self::start)/[`stop`](Self::stop) to toggle it, and
/// [`tick`](Self::tick) once per update with the current target.
#[derive(Component, Reflect, Clone, Debug, Default)]
#[reflect(Component, Default)]
pub struct TwoBoneIk {
    config: TwoBoneIkConfig,
    chain: Option<BoneChain>,
    state: RunState,
}

impl TwoBoneIk {
    pub fn new(config: TwoBoneIkConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &TwoBoneIkConfig {
        &self.config
    }

    /// Replaces the configuration. The resolved chain is dropped and the solver
    /// stops until it is initialized again.
    pub fn set_config(&mut self, config: TwoBoneIkConfig) {
        self.config = config;
        self.chain = None;
        self.state = RunState::Stopped;
    }

    pub fn chain(&self) -> Option<&BoneChain> {
        self.chain.as_ref()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Resolves the chain from the configured tip bone and captures its base pose
    /// from the host's current pose.
    ///
    /// On failure the solver is left stopped and without a chain. If the
    /// configuration is `enabled`, a successful initialization also starts it.
    pub fn initialize<H: SkeletonHost + ?Sized>(&mut self, host: &H) -> IkResult<()> {
        self.state = RunState::Stopped;
        self.chain = None;

        let chain = BoneChain::from_tip(host, &self.config.tip_bone).inspect_err(|err| {
            error!("Failed to initialize two bone IK chain: {err}");
        })?;
        self.chain = Some(chain);

        if self.config.enabled {
            self.state = RunState::Running;
        }

        Ok(())
    }

    pub fn start(&mut self) -> IkResult<()> {
        if self.chain.is_none() {
            warn!(
                "Cannot start two bone IK on {:?} before it is initialized",
                self.config.tip_bone
            );
            return Err(IkError::NotInitialized);
        }

        self.state = RunState::Running;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Computes the chain's local poses for `target` (global space) without
    /// writing them. Works regardless of run state, returns `None` only when there
    /// is no chain.
    ///
    /// `pole` overrides the configured pole, see [`TwoBoneIkConfig::effective_pole`].
    pub fn solve<H: SkeletonHost + ?Sized>(
        &self,
        host: &H,
        target: Transform,
        pole: Option<Vec3>,
    ) -> Option<SolvedChain> {
        let chain = self.chain.as_ref()?;
        Some(solve_chain(host, chain, target, self.config.effective_pole(pole)))
    }

    /// Solves and writes the result into the host. Does nothing while stopped.
    ///
    /// Returns whether the host was written to.
    pub fn tick<H: SkeletonHost + ?Sized>(
        &self,
        host: &mut H,
        target: Transform,
        pole: Option<Vec3>,
    ) -> bool {
        if !self.is_running() {
            return false;
        }

        match self.solve(host, target, pole) {
            Some(solved) => {
                solved.apply(host);
                true
            }
            None => false,
        }
    }
}
