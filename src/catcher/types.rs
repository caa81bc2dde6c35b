//! Core types for the catcher control loop.
//!
//! Defines the action space, action commands, and the episode outcome and
//! phase enums shared by the controller, the policies, and the aggregator.

use std::fmt;

use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which action representation the controller accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionSpace {
    /// Two scalars in `[-1, 1]`: lateral (x) and forward (z).
    Continuous,
    /// One index in `{0, 1, 2, 3}`: left, right, forward, back.
    Discrete,
}

impl ActionSpace {
    /// Number of action outputs a trainer must produce for this space.
    ///
    /// Continuous spaces take two scalars, discrete spaces choose among four
    /// directions.
    pub fn action_dim(&self) -> usize {
        match self {
            ActionSpace::Continuous => 2,
            ActionSpace::Discrete => 4,
        }
    }
}

impl fmt::Display for ActionSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionSpace::Continuous => write!(f, "continuous"),
            ActionSpace::Discrete => write!(f, "discrete"),
        }
    }
}

/// A single action supplied by the trainer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionCommand {
    Continuous { lateral: f64, forward: f64 },
    Discrete(i64),
}

impl ActionCommand {
    /// Discrete index for "move left" (-x).
    pub const LEFT: i64 = 0;
    /// Discrete index for "move right" (+x).
    pub const RIGHT: i64 = 1;
    /// Discrete index for "move forward" (+z).
    pub const FORWARD: i64 = 2;
    /// Discrete index for "move back" (-z).
    pub const BACK: i64 = 3;
    /// Discrete index of the idle action. Applies no force and is never
    /// reported as malformed.
    pub const IDLE: i64 = -1;

    /// The zero action for a given space.
    pub fn idle(space: ActionSpace) -> Self {
        match space {
            ActionSpace::Continuous => ActionCommand::Continuous {
                lateral: 0.0,
                forward: 0.0,
            },
            ActionSpace::Discrete => ActionCommand::Discrete(Self::IDLE),
        }
    }

    /// Decodes a trainer's flat action vector.
    ///
    /// Continuous spaces read the first two entries (missing ones are zero).
    /// Discrete spaces floor the first entry; an empty or non-finite vector
    /// becomes an unmapped (malformed) index.
    pub fn from_raw(space: ActionSpace, raw: &[f64]) -> Self {
        match space {
            ActionSpace::Continuous => ActionCommand::Continuous {
                lateral: raw.first().copied().unwrap_or(0.0),
                forward: raw.get(1).copied().unwrap_or(0.0),
            },
            ActionSpace::Discrete => {
                let index = raw
                    .first()
                    .filter(|v| v.is_finite())
                    .map(|v| v.floor() as i64)
                    .unwrap_or(i64::MIN);
                ActionCommand::Discrete(index)
            }
        }
    }

    /// Returns the space this command belongs to.
    pub fn space(&self) -> ActionSpace {
        match self {
            ActionCommand::Continuous { .. } => ActionSpace::Continuous,
            ActionCommand::Discrete(_) => ActionSpace::Discrete,
        }
    }

    /// Planar direction `(x, 0, z)` for this command, each axis in `[-1, 1]`.
    ///
    /// Continuous components are clamped; NaN becomes zero. Discrete indices
    /// outside `{0, 1, 2, 3}` give the zero vector.
    pub fn direction(&self) -> DVec3 {
        match *self {
            ActionCommand::Continuous { lateral, forward } => {
                DVec3::new(clamp_unit(lateral), 0.0, clamp_unit(forward))
            }
            ActionCommand::Discrete(index) => match index {
                Self::LEFT => DVec3::new(-1.0, 0.0, 0.0),
                Self::RIGHT => DVec3::new(1.0, 0.0, 0.0),
                Self::FORWARD => DVec3::new(0.0, 0.0, 1.0),
                Self::BACK => DVec3::new(0.0, 0.0, -1.0),
                _ => DVec3::ZERO,
            },
        }
    }

    /// True if decoding this command had to coerce a value (NaN, or an
    /// unmapped discrete index other than [`Self::IDLE`]).
    pub fn is_malformed(&self) -> bool {
        match *self {
            ActionCommand::Continuous { lateral, forward } => lateral.is_nan() || forward.is_nan(),
            ActionCommand::Discrete(index) => {
                index != Self::IDLE && !(Self::LEFT..=Self::BACK).contains(&index)
            }
        }
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}

/// Result of the termination check for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EpisodeOutcome {
    /// The agent came within the catch radius.
    Caught,
    /// The ball got further away than the escape radius.
    Missed,
    Ongoing,
}

impl EpisodeOutcome {
    /// Classifies a distance against the escape and catch thresholds.
    ///
    /// Escape is checked first, so a distance can never be both.
    pub fn classify(distance: f64, catch_threshold: f64, escape_threshold: f64) -> Self {
        if distance > escape_threshold {
            EpisodeOutcome::Missed
        } else if distance <= catch_threshold {
            EpisodeOutcome::Caught
        } else {
            EpisodeOutcome::Ongoing
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, EpisodeOutcome::Ongoing)
    }
}

impl fmt::Display for EpisodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeOutcome::Caught => write!(f, "caught"),
            EpisodeOutcome::Missed => write!(f, "missed"),
            EpisodeOutcome::Ongoing => write!(f, "ongoing"),
        }
    }
}

/// Lifecycle phase of an [`EpisodeController`](super::EpisodeController).
///
/// `AwaitingReset → Running → Terminal → Running → ...`; only `reset()`
/// leaves `AwaitingReset` or `Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    AwaitingReset,
    Running,
    Terminal,
}
