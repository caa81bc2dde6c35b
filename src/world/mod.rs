//! Collaborators of the episode controller.
//!
//! The controller only talks to the traits in [`traits`] and
//! [`launcher::Launcher`]. [`KinematicWorld`], [`BallLauncher`] and
//! [`CatchScene`] are a small reference implementation used by the tests,
//! the evaluation harness, and the demo.

pub mod kinematic;
pub mod launcher;
pub mod scene;
pub mod traits;

pub use kinematic::{Body, KinematicWorld};
pub use launcher::{BallLauncher, LaunchConfig, Launcher};
pub use scene::{CatchScene, SceneController};
pub use traits::{EntityId, PhysicsWorld, Simulation};
