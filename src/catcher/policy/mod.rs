//! Policy trait and baseline implementations.

pub mod chase;
pub mod random;
pub mod trait_;

pub use chase::ChasePolicy;
pub use random::RandomPolicy;
pub use trait_::Policy;
