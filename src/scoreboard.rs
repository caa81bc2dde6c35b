//! Episode aggregation: success and failure counters.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::catcher::EpisodeOutcome;

/// Receives one notification per finished episode.
pub trait Aggregator {
    fn on_episode_end(&mut self, outcome: EpisodeOutcome);
}

/// Counts catches and misses across episodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub successes: u64,
    pub failures: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of finished episodes.
    pub fn total(&self) -> u64 {
        self.successes + self.failures
    }

    /// Fraction of finished episodes that ended in a catch.
    pub fn success_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.successes as f64 / n as f64,
        }
    }
}

impl Aggregator for Scoreboard {
    fn on_episode_end(&mut self, outcome: EpisodeOutcome) {
        match outcome {
            EpisodeOutcome::Caught => self.successes += 1,
            EpisodeOutcome::Missed => self.failures += 1,
            EpisodeOutcome::Ongoing => {}
        }
    }
}

/// Lets several controllers on one thread report to the same board.
impl<A: Aggregator> Aggregator for Rc<RefCell<A>> {
    fn on_episode_end(&mut self, outcome: EpisodeOutcome) {
        self.borrow_mut().on_episode_end(outcome);
    }
}

impl<A: Aggregator + ?Sized> Aggregator for Box<A> {
    fn on_episode_end(&mut self, outcome: EpisodeOutcome) {
        (**self).on_episode_end(outcome);
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successes : {}  Fails : {}", self.successes, self.failures)
    }
}
