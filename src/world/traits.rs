//! Physics world contract consumed by the controller.

use std::fmt;

use glam::DVec3;

use crate::catcher::CatcherError;

/// Handle to a body inside a [`PhysicsWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Synchronous, in-process physics queries and commands.
///
/// Every call is a point-in-time snapshot or mutation; nothing is deferred.
/// Unknown entities yield [`CatcherError::UnknownEntity`].
pub trait PhysicsWorld {
    fn position(&self, entity: EntityId) -> Result<DVec3, CatcherError>;

    fn velocity(&self, entity: EntityId) -> Result<DVec3, CatcherError>;

    /// Accumulates a force to be integrated on the next simulation tick.
    fn add_force(&mut self, entity: EntityId, force: DVec3) -> Result<(), CatcherError>;

    /// Applies an instantaneous change of momentum.
    fn apply_impulse(&mut self, entity: EntityId, impulse: DVec3) -> Result<(), CatcherError>;

    fn set_velocity(&mut self, entity: EntityId, velocity: DVec3) -> Result<(), CatcherError>;

    fn set_position(&mut self, entity: EntityId, position: DVec3) -> Result<(), CatcherError>;

    /// Sweeps a sphere of `radius` from `origin` along `direction` and
    /// returns the first body it touches.
    fn sphere_cast_forward(&self, origin: DVec3, radius: f64, direction: DVec3)
        -> Option<EntityId>;
}

/// A [`PhysicsWorld`] that can be advanced in time.
///
/// The controller never advances the world itself; the trainer loop does so
/// between steps.
pub trait Simulation: PhysicsWorld {
    fn advance(&mut self, dt: f64);
}
