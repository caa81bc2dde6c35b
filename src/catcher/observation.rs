//! Observation encoding for the catcher.
//!
//! Reads agent and ball kinematics from the physics world, shifts positions
//! into the episode-local frame, and flattens them per the configured
//! [`ObservationVariant`](super::config::ObservationVariant).

use glam::DVec3;

use super::agent::AgentState;
use super::config::CatcherConfig;
use super::error::CatcherError;
use crate::world::{EntityId, PhysicsWorld};

/// Builds observation snapshots and vectors.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Maps a world position into the episode frame: relative to `anchor`,
    /// with `forward_offset` added on z.
    pub fn relative(position: DVec3, anchor: DVec3, forward_offset: f64) -> DVec3 {
        position - anchor + DVec3::new(0.0, 0.0, forward_offset)
    }

    /// Queries the world and assembles an [`AgentState`].
    ///
    /// # Arguments
    ///
    /// * `world` - Physics world holding both bodies
    /// * `agent` / `target` - Entities to observe
    /// * `anchor` - Episode-local origin
    /// * `best_distance` / `sensor_radius` - Progress and sensor features
    pub fn snapshot<W: PhysicsWorld + ?Sized>(
        world: &W,
        agent: EntityId,
        target: EntityId,
        anchor: DVec3,
        best_distance: f64,
        sensor_radius: f64,
        config: &CatcherConfig,
    ) -> Result<AgentState, CatcherError> {
        let offset = config.forward_offset;
        Ok(AgentState {
            position: Self::relative(world.position(agent)?, anchor, offset),
            velocity: world.velocity(agent)?,
            target_position: Self::relative(world.position(target)?, anchor, offset),
            target_velocity: world.velocity(target)?,
            best_distance,
            sensor_radius,
        })
    }

    /// Flattens a snapshot into the configured layout.
    pub fn build(state: &AgentState, config: &CatcherConfig) -> Vec<f64> {
        state.features(config.observation_variant)
    }
}
