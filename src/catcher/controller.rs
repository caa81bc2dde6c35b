//! The per-agent episode controller.
//!
//! Each step runs: decode action → apply force → soft speed clamp →
//! proximity sensor → distance → progress window → time penalty →
//! termination check.

use glam::DVec3;
use tracing::{debug, trace, warn};

use super::agent::{AgentState, ProgressWindow, ProximitySensor};
use super::config::CatcherConfig;
use super::environment::{Environment, StepResult};
use super::error::CatcherError;
use super::observation::ObservationBuilder;
use super::reward::RewardComputer;
use super::types::{ActionCommand, ActionSpace, EpisodeOutcome, EpisodePhase};
use crate::scoreboard::Aggregator;
use crate::world::{EntityId, Launcher, PhysicsWorld};
use crate::{generate_id, Id};

/// Owns one agent's episode state and drives it against a physics world.
///
/// # Lifecycle
///
/// 1. Build with [`EpisodeController::new`]; the agent's current position
///    becomes its spawn point.
/// 2. Call [`Environment::reset`] to throw a ball and start an episode.
/// 3. Call [`Environment::step`] until `done`.
/// 4. The controller stays [`EpisodePhase::Terminal`] until the next reset.
///
/// Not reentrant: one `step` or `reset` completes before the next begins.
#[derive(Debug)]
pub struct EpisodeController<W, L, A> {
    pub config: CatcherConfig,
    id: Id,
    world: W,
    launcher: L,
    aggregator: A,
    agent: EntityId,
    target: Option<EntityId>,
    spawn_point: DVec3,
    anchor: DVec3,
    sensor: ProximitySensor,
    progress: ProgressWindow,
    phase: EpisodePhase,
    steps: u32,
    episodes: u64,
    /// Sum of step rewards in the current episode.
    pub cumulative_reward: f64,
}

impl<W, L, A> EpisodeController<W, L, A>
where
    W: PhysicsWorld,
    L: Launcher<W>,
    A: Aggregator,
{
    /// Creates a controller for `agent`.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated before use
    /// * `world` - Physics world containing the agent
    /// * `launcher` - Throws the target on every reset
    /// * `aggregator` - Notified once per finished episode
    /// * `agent` - The body this controller drives
    pub fn new(
        config: CatcherConfig,
        world: W,
        launcher: L,
        aggregator: A,
        agent: EntityId,
    ) -> Result<Self, CatcherError> {
        config.validate()?;
        let spawn_point = world.position(agent)?;
        let sensor = ProximitySensor::from_config(&config);
        let progress = ProgressWindow::new(config.progress_window_size, f64::INFINITY);

        Ok(Self {
            config,
            id: generate_id(),
            world,
            launcher,
            aggregator,
            agent,
            target: None,
            spawn_point,
            anchor: spawn_point,
            sensor,
            progress,
            phase: EpisodePhase::AwaitingReset,
            steps: 0,
            episodes: 0,
            cumulative_reward: 0.0,
        })
    }

    /// Sets the episode-local origin used for observations. Defaults to the
    /// spawn point.
    pub fn with_anchor(mut self, anchor: DVec3) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn agent(&self) -> EntityId {
        self.agent
    }

    /// The ball being tracked, once the first reset has happened.
    pub fn target(&self) -> Option<EntityId> {
        self.target
    }

    pub fn spawn_point(&self) -> DVec3 {
        self.spawn_point
    }

    pub fn anchor(&self) -> DVec3 {
        self.anchor
    }

    pub fn sensor_radius(&self) -> f64 {
        self.sensor.radius()
    }

    pub fn best_distance(&self) -> f64 {
        self.progress.best_distance()
    }

    /// Ticks left in the current progress window.
    pub fn progress_remaining(&self) -> u32 {
        self.progress.remaining()
    }

    /// Steps taken in the current episode.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Episodes started so far.
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    pub fn into_parts(self) -> (W, L, A) {
        (self.world, self.launcher, self.aggregator)
    }

    fn require_target(&self) -> Result<EntityId, CatcherError> {
        self.target
            .ok_or(CatcherError::InvalidState("no target; call reset() first"))
    }

    /// World-frame distance between the agent and the ball.
    pub fn current_distance(&self) -> Result<f64, CatcherError> {
        let target = self.require_target()?;
        Ok(self
            .world
            .position(self.agent)?
            .distance(self.world.position(target)?))
    }

    /// Decodes an action into the force applied to the agent.
    pub fn decode_force(&self, action: ActionCommand) -> Result<DVec3, CatcherError> {
        if action.space() != self.config.action_space {
            return Err(CatcherError::ActionSpaceMismatch {
                expected: self.config.action_space,
                got: action.space(),
            });
        }
        if action.is_malformed() {
            warn!(controller = %self.id, ?action, "malformed action coerced to zero");
        }
        Ok(action.direction() * self.config.force_scale)
    }
}

impl<W, L, A> Environment for EpisodeController<W, L, A>
where
    W: PhysicsWorld,
    L: Launcher<W>,
    A: Aggregator,
{
    type Observation = AgentState;

    fn reset(&mut self) -> Result<AgentState, CatcherError> {
        self.launcher.throw(&mut self.world)?;
        let target = self.launcher.projectile();
        self.target = Some(target);

        self.world.set_position(self.agent, self.spawn_point)?;
        self.world.set_velocity(self.agent, DVec3::ZERO)?;

        self.sensor.reset();
        let distance = self.current_distance()?;
        self.progress = ProgressWindow::new(self.config.progress_window_size, distance);

        self.phase = EpisodePhase::Running;
        self.steps = 0;
        self.cumulative_reward = 0.0;
        self.episodes += 1;

        debug!(
            controller = %self.id,
            episode = self.episodes,
            distance,
            "episode reset"
        );

        self.observe()
    }

    fn observe(&self) -> Result<AgentState, CatcherError> {
        let target = self.require_target()?;
        ObservationBuilder::snapshot(
            &self.world,
            self.agent,
            target,
            self.anchor,
            self.progress.best_distance(),
            self.sensor.radius(),
            &self.config,
        )
    }

    fn step(&mut self, action: ActionCommand) -> Result<StepResult<AgentState>, CatcherError> {
        let target = self.require_target()?;
        if self.phase == EpisodePhase::Terminal {
            return Err(CatcherError::EpisodeTerminated);
        }

        let force = self.decode_force(action)?;
        self.world.add_force(self.agent, force)?;

        let velocity = self.world.velocity(self.agent)?;
        if velocity.length_squared() > self.config.speed_ceiling_sq {
            self.world
                .set_velocity(self.agent, velocity * self.config.damping)?;
        }

        let position = self.world.position(self.agent)?;
        let sensed = self.world.sphere_cast_forward(
            position,
            self.sensor.radius(),
            self.config.sensor_direction,
        ) == Some(target);
        if sensed {
            self.sensor.shrink();
        }
        // At most one sensor bonus per window: only on its first tick.
        let sensor_rewarded = sensed && self.progress.is_fresh();

        let distance = position.distance(self.world.position(target)?);
        let progress_bonus = self.progress.advance(distance);

        let outcome = EpisodeOutcome::classify(
            distance,
            self.config.catch_threshold,
            self.config.escape_threshold,
        );
        let components =
            RewardComputer::compute(sensor_rewarded, progress_bonus, outcome, &self.config);
        let reward = components.total();

        self.steps += 1;
        self.cumulative_reward += reward;
        let done = outcome.is_terminal();

        if done {
            self.phase = EpisodePhase::Terminal;
            self.aggregator.on_episode_end(outcome);
            debug!(
                controller = %self.id,
                episode = self.episodes,
                %outcome,
                steps = self.steps,
                cumulative_reward = self.cumulative_reward,
                "episode finished"
            );
        } else {
            trace!(
                controller = %self.id,
                step = self.steps,
                distance,
                reward,
                sensor_radius = self.sensor.radius(),
                "step"
            );
        }

        Ok(StepResult {
            observation: self.observe()?,
            reward,
            done,
            outcome,
            distance,
            step: self.steps,
            components,
        })
    }

    fn encode(&self, observation: &AgentState) -> Vec<f64> {
        ObservationBuilder::build(observation, &self.config)
    }

    fn observation_dim(&self) -> usize {
        self.config.observation_dim()
    }

    fn action_space(&self) -> ActionSpace {
        self.config.action_space
    }
}
