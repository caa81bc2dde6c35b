//! Agent-side control loop for the ball-catching task.
//!
//! [`EpisodeController`] implements [`Environment`]: it assembles
//! observations, turns actions into forces, shapes rewards, and detects
//! catches and misses. [`EvaluationMetrics`] runs a [`Policy`] against it on
//! a simulated world.

pub mod agent;
pub mod config;
pub mod controller;
pub mod environment;
pub mod error;
pub mod metrics;
pub mod observation;
pub mod policy;
pub mod reward;
pub mod types;

pub use agent::{AgentState, ProgressWindow, ProximitySensor};
pub use config::{CatcherConfig, ObservationVariant};
pub use controller::EpisodeController;
pub use environment::{Environment, StepResult};
pub use error::CatcherError;
pub use metrics::EvaluationMetrics;
pub use observation::ObservationBuilder;
pub use policy::{ChasePolicy, Policy, RandomPolicy};
pub use reward::{RewardBreakdown, RewardComputer};
pub use types::{ActionCommand, ActionSpace, EpisodeOutcome, EpisodePhase};
