//! Ball launcher: throws the target on a randomized trajectory each episode.

use glam::{DQuat, DVec3, EulerRot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::traits::{EntityId, PhysicsWorld};
use crate::catcher::CatcherError;

/// Puts a projectile on a new trajectory.
///
/// The controller only relies on the side effect being visible through the
/// [`PhysicsWorld`]; [`Launcher::projectile`] tells it which entity to track.
pub trait Launcher<W: PhysicsWorld + ?Sized> {
    fn throw(&mut self, world: &mut W) -> Result<(), CatcherError>;

    /// The entity this launcher throws.
    fn projectile(&self) -> EntityId;
}

/// Launch geometry and randomization.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    /// Where the ball is placed before every throw.
    pub firing_point: DVec3,
    /// Half-angle, in degrees, of the random pivot rotation on each axis.
    pub cone_degrees: f64,
    /// Impulse applied along the pivot's up axis.
    pub impulse: f64,
    pub seed: u64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            firing_point: DVec3::new(0.0, 1.0, 0.0),
            cone_degrees: 20.0,
            impulse: 16.0,
            seed: 42,
        }
    }
}

impl LaunchConfig {
    /// Rejects geometry that would make a throw panic or produce a
    /// non-finite trajectory.
    pub fn validate(&self) -> Result<(), CatcherError> {
        if !self.firing_point.is_finite() {
            return Err(CatcherError::InvalidConfig(
                "firing_point must be finite".to_string(),
            ));
        }
        if !self.cone_degrees.is_finite() {
            return Err(CatcherError::InvalidConfig(
                "cone_degrees must be finite".to_string(),
            ));
        }
        if !self.impulse.is_finite() {
            return Err(CatcherError::InvalidConfig(
                "impulse must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Throws a ball from a fixed firing point with a random tilt.
#[derive(Debug)]
pub struct BallLauncher {
    pub config: LaunchConfig,
    ball: EntityId,
    rng: StdRng,
}

impl BallLauncher {
    pub fn new(ball: EntityId, config: LaunchConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, ball, rng }
    }

    pub fn ball(&self) -> EntityId {
        self.ball
    }

    /// Samples a pivot rotation with each Euler angle uniform in
    /// `[-cone, cone]` degrees.
    fn sample_pivot(&mut self) -> DQuat {
        let cone = self.config.cone_degrees.abs();
        let mut angle = || {
            if cone == 0.0 {
                0.0
            } else {
                self.rng.gen_range(-cone..=cone).to_radians()
            }
        };
        let (x, y, z) = (angle(), angle(), angle());
        DQuat::from_euler(EulerRot::YXZ, y, x, z)
    }

    /// Launch direction for a given pivot rotation.
    pub fn launch_direction(pivot: DQuat) -> DVec3 {
        pivot * DVec3::Y
    }
}

impl<W: PhysicsWorld + ?Sized> Launcher<W> for BallLauncher {
    fn throw(&mut self, world: &mut W) -> Result<(), CatcherError> {
        self.config.validate()?;
        let pivot = self.sample_pivot();
        let direction = Self::launch_direction(pivot);

        world.set_velocity(self.ball, DVec3::ZERO)?;
        world.set_position(self.ball, self.config.firing_point)?;
        world.apply_impulse(self.ball, direction * self.config.impulse)?;

        tracing::trace!(ball = %self.ball, ?direction, "ball thrown");
        Ok(())
    }

    fn projectile(&self) -> EntityId {
        self.ball
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Body, KinematicWorld};

    fn setup(config: LaunchConfig) -> (KinematicWorld, BallLauncher) {
        let mut world = KinematicWorld::new();
        let ball = world.spawn(Body::new(DVec3::new(9.0, 9.0, 9.0), 0.25, 1.0).with_gravity(true));
        (world, BallLauncher::new(ball, config))
    }

    #[test]
    fn throw_places_ball_at_firing_point() {
        let (mut world, mut launcher) = setup(LaunchConfig::default());
        world.set_velocity(launcher.ball(), DVec3::new(5.0, 5.0, 5.0)).unwrap();
        launcher.throw(&mut world).unwrap();
        assert_eq!(
            world.position(launcher.ball()).unwrap(),
            LaunchConfig::default().firing_point
        );
        // Previous velocity is discarded before the impulse.
        let speed = world.velocity(launcher.ball()).unwrap().length();
        assert!((speed - 16.0).abs() < 1e-9);
    }

    #[test]
    fn zero_cone_throws_straight_up() {
        let (mut world, mut launcher) = setup(LaunchConfig {
            cone_degrees: 0.0,
            impulse: 4.0,
            ..LaunchConfig::default()
        });
        launcher.throw(&mut world).unwrap();
        let v = world.velocity(launcher.ball()).unwrap();
        assert!((v - DVec3::new(0.0, 4.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn throws_stay_inside_cone() {
        let (mut world, mut launcher) = setup(LaunchConfig::default());
        // Three axes at ±20° never tilt the up axis past ~30°.
        let min_cos = 30.0_f64.to_radians().cos();
        for _ in 0..200 {
            launcher.throw(&mut world).unwrap();
            let dir = world.velocity(launcher.ball()).unwrap().normalize();
            assert!(dir.dot(DVec3::Y) >= min_cos, "direction {dir:?} outside cone");
        }
    }

    #[test]
    fn same_seed_same_throws() {
        let (mut wa, mut la) = setup(LaunchConfig::default());
        let (mut wb, mut lb) = setup(LaunchConfig::default());
        for _ in 0..5 {
            la.throw(&mut wa).unwrap();
            lb.throw(&mut wb).unwrap();
            assert_eq!(
                wa.velocity(la.ball()).unwrap(),
                wb.velocity(lb.ball()).unwrap()
            );
        }
    }

    #[test]
    fn non_finite_launch_is_rejected_before_moving_the_ball() {
        let bad = [
            LaunchConfig {
                cone_degrees: f64::NAN,
                ..LaunchConfig::default()
            },
            LaunchConfig {
                cone_degrees: f64::INFINITY,
                ..LaunchConfig::default()
            },
            LaunchConfig {
                impulse: f64::NEG_INFINITY,
                ..LaunchConfig::default()
            },
            LaunchConfig {
                firing_point: DVec3::new(0.0, f64::NAN, 0.0),
                ..LaunchConfig::default()
            },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(CatcherError::InvalidConfig(_))));
            let (mut world, mut launcher) = setup(config);
            assert!(matches!(
                launcher.throw(&mut world),
                Err(CatcherError::InvalidConfig(_))
            ));
            assert_eq!(
                world.position(launcher.ball()).unwrap(),
                DVec3::new(9.0, 9.0, 9.0)
            );
        }
        assert!(LaunchConfig::default().validate().is_ok());
    }

    #[test]
    fn unknown_ball_errors() {
        let mut world = KinematicWorld::new();
        let mut launcher = BallLauncher::new(EntityId(3), LaunchConfig::default());
        assert_eq!(
            launcher.throw(&mut world),
            Err(CatcherError::UnknownEntity(EntityId(3)))
        );
    }
}
