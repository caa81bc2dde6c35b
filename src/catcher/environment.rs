//! Trainer-facing environment contract.

use super::error::CatcherError;
use super::reward::RewardBreakdown;
use super::types::{ActionCommand, ActionSpace, EpisodeOutcome};

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult<O> {
    /// Observation after the step.
    pub observation: O,
    /// Final reward for the step (terminal rewards already applied).
    pub reward: f64,
    /// Whether the episode ended on this step.
    pub done: bool,
    pub outcome: EpisodeOutcome,
    /// Agent-to-ball distance measured this step.
    pub distance: f64,
    /// Steps taken in the current episode, including this one.
    pub step: u32,
    /// How `reward` was assembled.
    pub components: RewardBreakdown,
}

/// The observe/step/reset contract a trainer drives.
///
/// # Lifecycle
///
/// 1. Call [`Environment::reset`] to start an episode.
/// 2. Call [`Environment::step`] until `done`.
/// 3. Call [`Environment::reset`] again; environments never reset themselves.
pub trait Environment {
    type Observation;

    /// Starts a new episode and returns its first observation.
    fn reset(&mut self) -> Result<Self::Observation, CatcherError>;

    /// Current observation; has no side effects.
    fn observe(&self) -> Result<Self::Observation, CatcherError>;

    /// Applies one action and reports reward and termination.
    fn step(&mut self, action: ActionCommand)
        -> Result<StepResult<Self::Observation>, CatcherError>;

    /// Flattens an observation into the vector a trainer consumes.
    fn encode(&self, observation: &Self::Observation) -> Vec<f64>;

    fn observation_dim(&self) -> usize;

    fn action_space(&self) -> ActionSpace;
}
