//! Chase heuristic: push toward the ball's planar position.

use super::trait_::Policy;
use crate::catcher::types::{ActionCommand, ActionSpace};

/// Steers straight at the ball on the x/z plane.
///
/// Reads the agent position from entries `0..3` and the ball position from
/// `3..6`. Continuous spaces get a unit planar direction; discrete spaces
/// pick the dominant axis. Observations too short to read give the idle
/// action.
pub struct ChasePolicy {
    space: ActionSpace,
}

impl ChasePolicy {
    pub fn new(space: ActionSpace) -> Self {
        Self { space }
    }
}

impl Policy for ChasePolicy {
    fn select_action(&mut self, observation: &[f64]) -> ActionCommand {
        if observation.len() < 6 {
            return ActionCommand::idle(self.space);
        }
        let dx = observation[3] - observation[0];
        let dz = observation[5] - observation[2];

        match self.space {
            ActionSpace::Continuous => {
                let norm = (dx * dx + dz * dz).sqrt();
                if norm < 1e-12 {
                    return ActionCommand::idle(self.space);
                }
                ActionCommand::Continuous {
                    lateral: dx / norm,
                    forward: dz / norm,
                }
            }
            ActionSpace::Discrete => {
                let index = if dx.abs() >= dz.abs() {
                    if dx < 0.0 {
                        ActionCommand::LEFT
                    } else {
                        ActionCommand::RIGHT
                    }
                } else if dz > 0.0 {
                    ActionCommand::FORWARD
                } else {
                    ActionCommand::BACK
                };
                ActionCommand::Discrete(index)
            }
        }
    }

    fn name(&self) -> &str {
        "chase"
    }
}
