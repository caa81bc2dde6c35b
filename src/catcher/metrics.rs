//! Evaluation metrics for the catcher environment.
//!
//! Runs a policy for several episodes on a simulated world and aggregates
//! outcomes.

use std::fmt;

use super::controller::EpisodeController;
use super::environment::Environment;
use super::error::CatcherError;
use super::policy::Policy;
use super::types::EpisodeOutcome;
use crate::scoreboard::Aggregator;
use crate::world::{Launcher, Simulation};

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationMetrics {
    /// Episodes that ended in a catch.
    pub catches: usize,
    /// Episodes that ended in a miss.
    pub misses: usize,
    /// Episodes cut off at the step limit.
    pub truncated: usize,
    /// Mean cumulative reward per episode.
    pub mean_cumulative_reward: f64,
    /// Mean number of steps per episode.
    pub mean_episode_length: f64,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
}

impl EvaluationMetrics {
    /// Evaluates a policy and returns aggregated metrics.
    ///
    /// The world is advanced by `dt` after every step. Episodes that reach
    /// `max_steps` without terminating count as truncated.
    ///
    /// # Arguments
    ///
    /// * `controller` - Controller driving a [`Simulation`] world
    /// * `policy` - The policy to evaluate
    /// * `n_episodes` - Number of episodes to run
    /// * `max_steps` - Step limit per episode
    /// * `dt` - Simulation tick between steps
    pub fn evaluate<W, L, A>(
        controller: &mut EpisodeController<W, L, A>,
        policy: &mut dyn Policy,
        n_episodes: usize,
        max_steps: u32,
        dt: f64,
    ) -> Result<Self, CatcherError>
    where
        W: Simulation,
        L: Launcher<W>,
        A: Aggregator,
    {
        let mut catches = 0;
        let mut misses = 0;
        let mut truncated = 0;
        let mut total_reward = 0.0;
        let mut total_steps = 0u64;

        for _ in 0..n_episodes {
            let mut state = controller.reset()?;
            let mut outcome = EpisodeOutcome::Ongoing;

            for _ in 0..max_steps {
                let action = policy.select_action(&controller.encode(&state));
                let result = controller.step(action)?;
                if result.done {
                    outcome = result.outcome;
                    break;
                }
                controller.world_mut().advance(dt);
                state = result.observation;
            }

            match outcome {
                EpisodeOutcome::Caught => catches += 1,
                EpisodeOutcome::Missed => misses += 1,
                EpisodeOutcome::Ongoing => truncated += 1,
            }
            total_reward += controller.cumulative_reward;
            total_steps += u64::from(controller.steps());
        }

        let n = n_episodes.max(1) as f64;
        Ok(Self {
            catches,
            misses,
            truncated,
            mean_cumulative_reward: total_reward / n,
            mean_episode_length: total_steps as f64 / n,
            n_episodes,
        })
    }

    /// Fraction of episodes that ended in a catch.
    pub fn catch_rate(&self) -> f64 {
        if self.n_episodes == 0 {
            0.0
        } else {
            self.catches as f64 / self.n_episodes as f64
        }
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes) ===",
            self.n_episodes
        )?;
        writeln!(f, "  Catches:                 {}", self.catches)?;
        writeln!(f, "  Misses:                  {}", self.misses)?;
        writeln!(f, "  Truncated:               {}", self.truncated)?;
        writeln!(
            f,
            "  Catch rate:              {:.1}%",
            self.catch_rate() * 100.0
        )?;
        writeln!(
            f,
            "  Mean episode length:     {:.1}",
            self.mean_episode_length
        )?;
        writeln!(
            f,
            "  Mean cumulative reward:  {:.2}",
            self.mean_cumulative_reward
        )
    }
}
