//! Configuration for the catcher control loop.

use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::CatcherError;
use super::types::ActionSpace;

/// Field set emitted by the observation builder.
///
/// Both layouts end with `[best_distance, sensor_radius]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObservationVariant {
    /// `agent(3), target(3), agent(3), target_vel(3), agent_vel(2), best, sensor`.
    Rich,
    /// `agent(3), target(3), target_vel(3), agent_vel(2), best, sensor`.
    Lean,
}

impl ObservationVariant {
    /// Length of the flat observation vector for this layout.
    pub fn dim(&self) -> usize {
        match self {
            ObservationVariant::Rich => 16,
            ObservationVariant::Lean => 13,
        }
    }
}

/// Configuration for an [`EpisodeController`](super::EpisodeController).
///
/// Controls action decoding, agent dynamics, the proximity sensor, the
/// progress window, reward shaping, and termination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatcherConfig {
    // --- Actions and dynamics ---
    /// Which action representation the controller accepts.
    pub action_space: ActionSpace,
    /// Force applied per unit of action direction.
    pub force_scale: f64,
    /// Squared speed above which velocity is damped.
    pub speed_ceiling_sq: f64,
    /// Multiplicative velocity damping once over the ceiling, in `(0, 1)`.
    pub damping: f64,

    // --- Termination ---
    /// Distance at or below which the ball counts as caught.
    pub catch_threshold: f64,
    /// Distance above which the ball counts as missed.
    pub escape_threshold: f64,
    /// Reward that replaces the step's reward on a catch.
    pub terminal_reward_caught: f64,
    /// Reward that replaces the step's reward on a miss.
    pub terminal_reward_missed: f64,

    // --- Shaping ---
    /// Cost subtracted every non-terminal step.
    pub time_penalty: f64,
    /// Bonus for a sensor hit on the first tick of a progress window.
    pub sensor_bonus_reward: f64,
    /// Bonus when the window's best distance beats the closing distance.
    pub progress_bonus_reward: f64,
    /// Number of steps in one progress window.
    pub progress_window_size: u32,

    // --- Proximity sensor ---
    /// Radius the sensor starts at and wraps back to.
    pub sensor_start: f64,
    /// Smallest radius the sensor shrinks to.
    pub sensor_floor: f64,
    /// Shrink applied per sensor hit.
    pub sensor_decrement: f64,
    /// Direction the sensor sphere is cast in.
    pub sensor_direction: DVec3,

    // --- Observation ---
    pub observation_variant: ObservationVariant,
    /// Added to the forward (z) axis of every relative position; must match
    /// the launcher's spawn geometry.
    pub forward_offset: f64,
}

impl CatcherConfig {
    /// Preset with ×100 terminal rewards and the richer observation.
    pub fn rich() -> Self {
        Self {
            action_space: ActionSpace::Continuous,
            force_scale: 40.0,
            speed_ceiling_sq: 25.0,
            damping: 0.95,
            catch_threshold: 0.8,
            escape_threshold: 30.0,
            terminal_reward_caught: 1000.0,
            terminal_reward_missed: -1000.0,
            time_penalty: 0.005,
            sensor_bonus_reward: 0.2,
            progress_bonus_reward: 0.1,
            progress_window_size: 5,
            sensor_start: 4.0,
            sensor_floor: 0.05,
            sensor_decrement: 0.05,
            sensor_direction: DVec3::Z,
            observation_variant: ObservationVariant::Rich,
            forward_offset: 5.0,
        }
    }

    /// Preset with ±10 terminal rewards, a finer sensor decrement and the
    /// leaner observation.
    pub fn lean() -> Self {
        Self {
            terminal_reward_caught: 10.0,
            terminal_reward_missed: -10.0,
            sensor_decrement: 0.005,
            observation_variant: ObservationVariant::Lean,
            ..Self::rich()
        }
    }

    /// Observation dimension for the configured variant.
    pub fn observation_dim(&self) -> usize {
        self.observation_variant.dim()
    }

    /// Number of action outputs for the configured space.
    pub fn action_dim(&self) -> usize {
        self.action_space.action_dim()
    }

    /// Checks the invariants the controller relies on.
    pub fn validate(&self) -> Result<(), CatcherError> {
        fn invalid(msg: &str) -> Result<(), CatcherError> {
            Err(CatcherError::InvalidConfig(msg.to_string()))
        }

        if !(self.catch_threshold > 0.0) {
            return invalid("catch_threshold must be positive");
        }
        if !(self.escape_threshold > self.catch_threshold) {
            return invalid("escape_threshold must exceed catch_threshold");
        }
        if !(self.sensor_floor > 0.0) {
            return invalid("sensor_floor must be positive");
        }
        if !(self.sensor_start > self.sensor_floor) {
            return invalid("sensor_start must exceed sensor_floor");
        }
        if !(self.sensor_decrement > 0.0) {
            return invalid("sensor_decrement must be positive");
        }
        if self.progress_window_size == 0 {
            return invalid("progress_window_size must be at least 1");
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return invalid("damping must lie in (0, 1)");
        }
        if !self.force_scale.is_finite() || !self.speed_ceiling_sq.is_finite() {
            return invalid("force_scale and speed_ceiling_sq must be finite");
        }
        if !self.sensor_direction.is_finite() || self.sensor_direction.length_squared() == 0.0 {
            return invalid("sensor_direction must be finite and non-zero");
        }
        Ok(())
    }
}

impl Default for CatcherConfig {
    fn default() -> Self {
        Self::rich()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = CatcherConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg, CatcherConfig::rich());
        assert_eq!(cfg.progress_window_size, 5);
    }

    #[test]
    fn lean_preset_differs_only_in_tunables() {
        let rich = CatcherConfig::rich();
        let lean = CatcherConfig::lean();
        assert!(lean.validate().is_ok());
        assert_eq!(lean.terminal_reward_caught, 10.0);
        assert_eq!(lean.terminal_reward_missed, -10.0);
        assert_eq!(lean.sensor_decrement, 0.005);
        assert_eq!(lean.catch_threshold, rich.catch_threshold);
        assert_eq!(lean.escape_threshold, rich.escape_threshold);
    }

    #[test]
    fn observation_dim_matches_variant() {
        assert_eq!(CatcherConfig::rich().observation_dim(), 16);
        assert_eq!(CatcherConfig::lean().observation_dim(), 13);
    }

    #[test]
    fn action_dim_matches_space() {
        let mut cfg = CatcherConfig::default();
        assert_eq!(cfg.action_dim(), 2);
        cfg.action_space = ActionSpace::Discrete;
        assert_eq!(cfg.action_dim(), 4);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let cfg = CatcherConfig {
            catch_threshold: 40.0,
            ..CatcherConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CatcherError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_floor_and_window() {
        let cfg = CatcherConfig {
            sensor_floor: 0.0,
            ..CatcherConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = CatcherConfig {
            progress_window_size: 0,
            ..CatcherConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_damping_out_of_range() {
        for damping in [0.0, 1.0, 1.5, f64::NAN] {
            let cfg = CatcherConfig {
                damping,
                ..CatcherConfig::default()
            };
            assert!(cfg.validate().is_err(), "damping {damping} accepted");
        }
    }

    #[test]
    fn rejects_degenerate_sensor_direction() {
        for sensor_direction in [
            DVec3::ZERO,
            DVec3::new(f64::NAN, 0.0, 1.0),
            DVec3::new(0.0, 0.0, f64::INFINITY),
        ] {
            let cfg = CatcherConfig {
                sensor_direction,
                ..CatcherConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(CatcherError::InvalidConfig(_))),
                "direction {sensor_direction:?} accepted"
            );
        }
        let cfg = CatcherConfig {
            sensor_direction: DVec3::new(0.0, 0.0, 3.0),
            ..CatcherConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_json_roundtrip() {
        let cfg = CatcherConfig::lean();
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"observation_variant\":\"lean\""));
        let restored: CatcherConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cfg);
    }
}
