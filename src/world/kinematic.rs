//! Point-mass reference world.
//!
//! Bodies are spheres with mass; forces accumulate between ticks and are
//! integrated with semi-implicit Euler. An optional ground plane keeps
//! bodies from falling through.

use glam::DVec3;

use super::traits::{EntityId, PhysicsWorld, Simulation};
use crate::catcher::CatcherError;

/// A spherical rigid body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: DVec3,
    pub velocity: DVec3,
    pub mass: f64,
    pub radius: f64,
    /// Whether world gravity acts on this body.
    pub gravity: bool,
    force: DVec3,
}

impl Body {
    /// Creates a resting body; gravity is off by default.
    pub fn new(position: DVec3, radius: f64, mass: f64) -> Self {
        Self {
            position,
            velocity: DVec3::ZERO,
            mass,
            radius,
            gravity: false,
            force: DVec3::ZERO,
        }
    }

    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    /// Force accumulated since the last tick.
    pub fn pending_force(&self) -> DVec3 {
        self.force
    }
}

/// Simple world of [`Body`] spheres.
#[derive(Debug, Clone)]
pub struct KinematicWorld {
    bodies: Vec<Body>,
    /// Gravity acceleration applied to bodies with `gravity` set.
    pub gravity: DVec3,
    /// Height of the ground plane, if any.
    pub ground: Option<f64>,
}

impl KinematicWorld {
    /// Creates an empty world with Earth gravity and a ground plane at y = 0.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            gravity: DVec3::new(0.0, -9.81, 0.0),
            ground: Some(0.0),
        }
    }

    /// Adds a body and returns its handle.
    pub fn spawn(&mut self, body: Body) -> EntityId {
        self.bodies.push(body);
        EntityId((self.bodies.len() - 1) as u32)
    }

    pub fn body(&self, entity: EntityId) -> Option<&Body> {
        self.bodies.get(entity.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    fn body_mut(&mut self, entity: EntityId) -> Result<&mut Body, CatcherError> {
        self.bodies
            .get_mut(entity.0 as usize)
            .ok_or(CatcherError::UnknownEntity(entity))
    }

    fn get(&self, entity: EntityId) -> Result<&Body, CatcherError> {
        self.body(entity).ok_or(CatcherError::UnknownEntity(entity))
    }
}

impl Default for KinematicWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld for KinematicWorld {
    fn position(&self, entity: EntityId) -> Result<DVec3, CatcherError> {
        Ok(self.get(entity)?.position)
    }

    fn velocity(&self, entity: EntityId) -> Result<DVec3, CatcherError> {
        Ok(self.get(entity)?.velocity)
    }

    fn add_force(&mut self, entity: EntityId, force: DVec3) -> Result<(), CatcherError> {
        self.body_mut(entity)?.force += force;
        Ok(())
    }

    fn apply_impulse(&mut self, entity: EntityId, impulse: DVec3) -> Result<(), CatcherError> {
        let body = self.body_mut(entity)?;
        body.velocity += impulse / body.mass;
        Ok(())
    }

    fn set_velocity(&mut self, entity: EntityId, velocity: DVec3) -> Result<(), CatcherError> {
        self.body_mut(entity)?.velocity = velocity;
        Ok(())
    }

    fn set_position(&mut self, entity: EntityId, position: DVec3) -> Result<(), CatcherError> {
        self.body_mut(entity)?.position = position;
        Ok(())
    }

    fn sphere_cast_forward(
        &self,
        origin: DVec3,
        radius: f64,
        direction: DVec3,
    ) -> Option<EntityId> {
        let dir = direction.try_normalize()?;
        let mut nearest: Option<(f64, EntityId)> = None;

        for (i, body) in self.bodies.iter().enumerate() {
            let reach = radius + body.radius;
            let to_center = body.position - origin;
            // Bodies already inside the start sphere are not reported.
            if to_center.length_squared() <= reach * reach {
                continue;
            }
            let along = to_center.dot(dir);
            if along < 0.0 {
                continue;
            }
            let off_axis_sq = to_center.length_squared() - along * along;
            if off_axis_sq > reach * reach {
                continue;
            }
            let hit_at = along - (reach * reach - off_axis_sq).sqrt();
            if nearest.map_or(true, |(best, _)| hit_at < best) {
                nearest = Some((hit_at, EntityId(i as u32)));
            }
        }

        nearest.map(|(_, id)| id)
    }
}

impl Simulation for KinematicWorld {
    fn advance(&mut self, dt: f64) {
        let gravity = self.gravity;
        let ground = self.ground;
        for body in &mut self.bodies {
            let mut accel = body.force / body.mass;
            if body.gravity {
                accel += gravity;
            }
            body.velocity += accel * dt;
            body.position += body.velocity * dt;
            body.force = DVec3::ZERO;

            if let Some(height) = ground {
                let rest = height + body.radius;
                if body.position.y < rest {
                    body.position.y = rest;
                    body.velocity.y = body.velocity.y.max(0.0);
                }
            }
        }
    }
}
