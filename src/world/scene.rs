//! One-call setup of a catch arena on the reference world.

use glam::DVec3;

use super::kinematic::{Body, KinematicWorld};
use super::launcher::{BallLauncher, LaunchConfig};
use crate::catcher::{CatcherConfig, CatcherError, EpisodeController};
use crate::scoreboard::{Aggregator, Scoreboard};

/// Controller type produced by [`CatchScene`].
pub type SceneController<A = Scoreboard> = EpisodeController<KinematicWorld, BallLauncher, A>;

/// Arena layout: the agent stands `forward_offset` behind the area anchor
/// and the ball is fired from just above the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchScene {
    /// Episode-local origin.
    pub anchor: DVec3,
    pub agent_radius: f64,
    pub agent_mass: f64,
    pub ball_radius: f64,
    pub ball_mass: f64,
    pub launch: LaunchConfig,
}

impl CatchScene {
    /// Fixed simulation tick used by the demo and the evaluation tests.
    pub const DT: f64 = 0.02;

    /// Agent spawn point for a given forward offset.
    pub fn spawn_point(&self, forward_offset: f64) -> DVec3 {
        self.anchor + DVec3::new(0.0, self.agent_radius, -forward_offset)
    }

    /// Checks that the arena is finite and every body has positive mass and
    /// radius.
    pub fn validate(&self) -> Result<(), CatcherError> {
        fn invalid(msg: &str) -> Result<(), CatcherError> {
            Err(CatcherError::InvalidConfig(msg.to_string()))
        }

        if !self.anchor.is_finite() {
            return invalid("anchor must be finite");
        }
        for (name, value) in [
            ("agent_radius", self.agent_radius),
            ("agent_mass", self.agent_mass),
            ("ball_radius", self.ball_radius),
            ("ball_mass", self.ball_mass),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return invalid(&format!("{name} must be positive and finite"));
            }
        }
        self.launch.validate()
    }

    /// Builds the world, launcher and controller with a fresh [`Scoreboard`].
    pub fn build(&self, config: CatcherConfig) -> Result<SceneController, CatcherError> {
        self.build_with(config, Scoreboard::new())
    }

    /// Builds the world, launcher and controller reporting to `aggregator`.
    pub fn build_with<A: Aggregator>(
        &self,
        config: CatcherConfig,
        aggregator: A,
    ) -> Result<SceneController<A>, CatcherError> {
        self.validate()?;
        let mut world = KinematicWorld::new();
        let agent = world.spawn(Body::new(
            self.spawn_point(config.forward_offset),
            self.agent_radius,
            self.agent_mass,
        ));
        let ball = world.spawn(
            Body::new(self.launch.firing_point, self.ball_radius, self.ball_mass)
                .with_gravity(true),
        );
        let launcher = BallLauncher::new(ball, self.launch.clone());

        Ok(EpisodeController::new(config, world, launcher, aggregator, agent)?
            .with_anchor(self.anchor))
    }
}

impl Default for CatchScene {
    fn default() -> Self {
        Self {
            anchor: DVec3::ZERO,
            agent_radius: 0.5,
            agent_mass: 1.0,
            ball_radius: 0.25,
            ball_mass: 1.0,
            launch: LaunchConfig::default(),
        }
    }
}
