//! Policy trait for the catcher environment.

use crate::catcher::types::ActionCommand;

/// A policy that picks an action from a flat observation vector.
///
/// Observations follow either [`ObservationVariant`] layout; both start with
/// the agent's relative position followed by the ball's.
///
/// [`ObservationVariant`]: crate::catcher::config::ObservationVariant
pub trait Policy {
    fn select_action(&mut self, observation: &[f64]) -> ActionCommand;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
