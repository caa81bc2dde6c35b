//! Per-episode agent state: observation snapshot, progress window, and the
//! shrinking proximity sensor.

use glam::DVec3;

use super::config::{CatcherConfig, ObservationVariant};

/// Snapshot of everything the agent observes on one step.
///
/// Positions are relative to the episode anchor (with the forward offset
/// applied), never world-absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentState {
    /// Agent position relative to the anchor.
    pub position: DVec3,
    /// Agent velocity in world frame.
    pub velocity: DVec3,
    /// Ball position relative to the anchor.
    pub target_position: DVec3,
    /// Ball velocity in world frame.
    pub target_velocity: DVec3,
    pub best_distance: f64,
    pub sensor_radius: f64,
}

impl AgentState {
    /// Encodes the state as a flat feature vector for the given layout.
    ///
    /// Positions and velocities come first; `best_distance` and
    /// `sensor_radius` are always the last two entries. Only the planar
    /// (x, z) components of the agent velocity are emitted.
    pub fn features(&self, variant: ObservationVariant) -> Vec<f64> {
        let mut obs = Vec::with_capacity(variant.dim());
        obs.extend(self.position.to_array());
        obs.extend(self.target_position.to_array());
        if variant == ObservationVariant::Rich {
            obs.extend(self.position.to_array());
        }
        obs.extend(self.target_velocity.to_array());
        obs.push(self.velocity.x);
        obs.push(self.velocity.z);
        obs.push(self.best_distance);
        obs.push(self.sensor_radius);
        obs
    }
}

/// Rolling window that rewards getting closer at some point and then
/// drifting away.
///
/// The best distance is only updated on the window's first tick, so it is
/// monotonically non-increasing while a window is open.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressWindow {
    size: u32,
    remaining: u32,
    best_distance: f64,
}

impl ProgressWindow {
    /// Opens a fresh window with `best_distance` as the starting reference.
    pub fn new(size: u32, best_distance: f64) -> Self {
        Self {
            size,
            remaining: size,
            best_distance,
        }
    }

    /// True on the first tick of a window.
    pub fn is_fresh(&self) -> bool {
        self.remaining == self.size
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// Records the distance for one step and advances the window.
    ///
    /// Returns `true` when the window closes on this step with a best
    /// distance strictly below `current`. The window reopens either way.
    pub fn advance(&mut self, current: f64) -> bool {
        if self.is_fresh() {
            self.best_distance = self.best_distance.min(current);
        }

        self.remaining -= 1;
        if self.remaining > 0 {
            return false;
        }

        self.remaining = self.size;
        self.best_distance < current
    }
}

/// Forward proximity sensor whose radius shrinks with each hit on the target.
///
/// Once the radius has reached the floor, the next shrink wraps it back to
/// the starting radius.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximitySensor {
    radius: f64,
    start: f64,
    floor: f64,
    decrement: f64,
}

impl ProximitySensor {
    pub fn new(start: f64, floor: f64, decrement: f64) -> Self {
        Self {
            radius: start,
            start,
            floor,
            decrement,
        }
    }

    pub fn from_config(config: &CatcherConfig) -> Self {
        Self::new(
            config.sensor_start,
            config.sensor_floor,
            config.sensor_decrement,
        )
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Shrinks by one decrement, never below the floor; wraps to the start
    /// radius when already at the floor.
    pub fn shrink(&mut self) {
        if self.radius <= self.floor {
            self.radius = self.start;
        } else {
            self.radius = (self.radius - self.decrement).max(self.floor);
        }
    }

    pub fn reset(&mut self) {
        self.radius = self.start;
    }
}
