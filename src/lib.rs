//! ballcatch - agent-side control loop for a ball-catching RL task
//!
//! An agent observes a flat state vector, pushes itself around a plane with
//! continuous or discrete actions, and is rewarded for catching a thrown ball.
//! The physics world, the ball launcher and the score aggregator are
//! collaborators behind traits; [`world`] ships a small reference
//! implementation of each.

pub mod catcher;
pub mod scoreboard;
pub mod world;

pub use catcher::{
    ActionCommand, ActionSpace, CatcherConfig, CatcherError, EpisodeController, EpisodeOutcome,
    Environment, StepResult,
};
pub use scoreboard::{Aggregator, Scoreboard};

/// Identifier type used for controllers and episodes.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
