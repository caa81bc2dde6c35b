//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_::Policy;
use crate::catcher::types::{ActionCommand, ActionSpace};

/// Uniformly random actions.
///
/// Continuous spaces draw both axes from `[-1, 1]`; discrete spaces draw an
/// index from `0..4`. Used as a lower-bound baseline.
pub struct RandomPolicy {
    space: ActionSpace,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(space: ActionSpace, seed: u64) -> Self {
        Self {
            space,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &[f64]) -> ActionCommand {
        match self.space {
            ActionSpace::Continuous => ActionCommand::Continuous {
                lateral: self.rng.gen_range(-1.0..=1.0),
                forward: self.rng.gen_range(-1.0..=1.0),
            },
            ActionSpace::Discrete => {
                ActionCommand::Discrete(self.rng.gen_range(0..self.space.action_dim() as i64))
            }
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}
