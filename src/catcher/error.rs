use thiserror::Error;

use super::types::ActionSpace;
use crate::world::EntityId;

/// Errors surfaced by the episode controller and its collaborators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatcherError {
    #[error("Invalid controller state: {0}")]
    InvalidState(&'static str),

    #[error("Episode has terminated; call reset() before stepping again")]
    EpisodeTerminated,

    #[error("Action space mismatch: controller expects {expected}, got {got}")]
    ActionSpaceMismatch {
        expected: ActionSpace,
        got: ActionSpace,
    },

    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_display() {
        let e = CatcherError::InvalidState("no target; call reset() first");
        assert_eq!(
            e.to_string(),
            "Invalid controller state: no target; call reset() first"
        );
    }

    #[test]
    fn mismatch_display() {
        let e = CatcherError::ActionSpaceMismatch {
            expected: ActionSpace::Discrete,
            got: ActionSpace::Continuous,
        };
        assert_eq!(
            e.to_string(),
            "Action space mismatch: controller expects discrete, got continuous"
        );
    }

    #[test]
    fn unknown_entity_display() {
        let e = CatcherError::UnknownEntity(EntityId(7));
        assert_eq!(e.to_string(), "Unknown entity: #7");
    }

    #[test]
    fn error_equality() {
        assert_eq!(CatcherError::EpisodeTerminated, CatcherError::EpisodeTerminated);
        assert_ne!(
            CatcherError::EpisodeTerminated,
            CatcherError::InvalidConfig("x".into())
        );
    }
}
