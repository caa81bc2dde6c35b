//! Reward shaping and terminal overrides for one controller step.

use super::config::CatcherConfig;
use super::types::EpisodeOutcome;

/// Reward components accrued during a single step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RewardBreakdown {
    /// Sensor bonus (zero unless the sensor hit on a fresh window).
    pub sensor: f64,
    /// Progress-window bonus (zero unless the window closed this step).
    pub progress: f64,
    /// Time penalty, stored as a negative number.
    pub time: f64,
    /// Terminal reward; replaces everything else when set.
    pub terminal: Option<f64>,
}

impl RewardBreakdown {
    /// Sum of the shaping components, ignoring any terminal override.
    pub fn shaping(&self) -> f64 {
        self.sensor + self.progress + self.time
    }

    /// Final reward for the step.
    pub fn total(&self) -> f64 {
        self.terminal.unwrap_or_else(|| self.shaping())
    }
}

/// Computes rewards for the catcher.
pub struct RewardComputer;

impl RewardComputer {
    /// Combines the step's shaping signals.
    ///
    /// # Components
    ///
    /// 1. **Sensor bonus**: `+sensor_bonus_reward` on a rewarded sensor hit.
    /// 2. **Progress bonus**: `+progress_bonus_reward` when a window closes
    ///    further away than its best distance.
    /// 3. **Time penalty**: `-time_penalty` on every non-terminal step.
    /// 4. **Terminal override**: on a catch or miss the total is replaced, not
    ///    added to.
    pub fn compute(
        sensor_hit: bool,
        progress_bonus: bool,
        outcome: EpisodeOutcome,
        config: &CatcherConfig,
    ) -> RewardBreakdown {
        RewardBreakdown {
            sensor: if sensor_hit {
                config.sensor_bonus_reward
            } else {
                0.0
            },
            progress: if progress_bonus {
                config.progress_bonus_reward
            } else {
                0.0
            },
            time: -config.time_penalty,
            terminal: Self::terminal(outcome, config),
        }
    }

    /// Terminal reward for an outcome, if it ends the episode.
    pub fn terminal(outcome: EpisodeOutcome, config: &CatcherConfig) -> Option<f64> {
        match outcome {
            EpisodeOutcome::Caught => Some(config.terminal_reward_caught),
            EpisodeOutcome::Missed => Some(config.terminal_reward_missed),
            EpisodeOutcome::Ongoing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_penalty_only() {
        let config = CatcherConfig::default();
        let r = RewardComputer::compute(false, false, EpisodeOutcome::Ongoing, &config);
        assert!((r.total() + 0.005).abs() < 1e-12);
    }

    #[test]
    fn bonuses_add_up() {
        let config = CatcherConfig::default();
        let r = RewardComputer::compute(true, true, EpisodeOutcome::Ongoing, &config);
        assert!((r.total() - (0.2 + 0.1 - 0.005)).abs() < 1e-12);
    }

    #[test]
    fn terminal_overwrites_shaping() {
        let config = CatcherConfig::default();
        let caught = RewardComputer::compute(true, true, EpisodeOutcome::Caught, &config);
        assert_eq!(caught.total(), 1000.0);
        assert!(caught.shaping() > 0.0);

        let missed = RewardComputer::compute(true, false, EpisodeOutcome::Missed, &config);
        assert_eq!(missed.total(), -1000.0);
    }

    #[test]
    fn lean_preset_terminal_values() {
        let config = CatcherConfig::lean();
        assert_eq!(
            RewardComputer::terminal(EpisodeOutcome::Caught, &config),
            Some(10.0)
        );
        assert_eq!(
            RewardComputer::terminal(EpisodeOutcome::Missed, &config),
            Some(-10.0)
        );
        assert_eq!(RewardComputer::terminal(EpisodeOutcome::Ongoing, &config), None);
    }
}
