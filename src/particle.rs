// Particle struct to keep track of individual position and velocity, plus the
// box particles bounce around in

use rand::Rng;
use serde::Deserialize;

/// How a particle's velocity is stored and reflected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityModel {
    /// One scalar drives both x and y. A bounce on either axis negates it, so
    /// bouncing on both axes in the same frame leaves it unchanged.
    Shared,
    /// Independent x and y components, each reflected by its own wall.
    PerAxis,
}

impl Default for VelocityModel {
    fn default() -> Self {
        VelocityModel::Shared
    }
}

/// Axis-aligned walls on x and y. z is unbounded.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// [min, max]
    pub x: [f64; 2],
    /// [min, max]
    pub y: [f64; 2],
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            x: [-7.0, 7.0],
            y: [-4.0, 4.0],
        }
    }
}

impl Bounds {
    pub fn outside_x(&self, x: f64) -> bool {
        x > self.x[1] || x < self.x[0]
    }

    pub fn outside_y(&self, y: f64) -> bool {
        y > self.y[1] || y < self.y[0]
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        let ordered = |r: [f64; 2]| r[0].is_finite() && r[1].is_finite() && r[0] < r[1];
        if ordered(self.x) && ordered(self.y) {
            Ok(())
        } else {
            Err(crate::error::Error::InvalidParam(format!(
                "bounds must be finite with min < max, got x={:?} y={:?}",
                self.x, self.y
            )))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 3],
    /// [vx, vy]; under `VelocityModel::Shared` only vx is read and vy mirrors it.
    pub vel: [f64; 2],
}

impl Particle {
    pub fn new(pos: [f64; 3], vel: [f64; 2]) -> Particle {
        Particle { pos, vel }
    }

    pub fn with_shared_velocity(pos: [f64; 3], vel: f64) -> Particle {
        Particle {
            pos,
            vel: [vel, vel],
        }
    }

    pub fn random<R: Rng>(
        rng: &mut R,
        spread: f64,
        max_speed: f64,
        model: VelocityModel,
    ) -> Particle {
        let mut coord = || (rng.gen::<f64>() - 0.5) * spread;
        let pos = [coord(), coord(), coord()];
        let mut speed = || (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        match model {
            VelocityModel::Shared => Particle::with_shared_velocity(pos, speed()),
            VelocityModel::PerAxis => Particle::new(pos, [speed(), speed()]),
        }
    }

    // Move one step, then reverse velocity for any wall the new position is past.
    // The crossing step itself is not undone, so a particle can sit one step
    // outside its bounds for a frame.
    pub fn advance(&mut self, bounds: &Bounds, model: VelocityModel) {
        match model {
            VelocityModel::Shared => {
                let mut v = self.vel[0];
                self.pos[0] += v;
                self.pos[1] += v;
                if bounds.outside_x(self.pos[0]) {
                    v = -v;
                }
                if bounds.outside_y(self.pos[1]) {
                    v = -v;
                }
                self.vel = [v, v];
            }
            VelocityModel::PerAxis => {
                self.pos[0] += self.vel[0];
                self.pos[1] += self.vel[1];
                if bounds.outside_x(self.pos[0]) {
                    self.vel[0] = -self.vel[0];
                }
                if bounds.outside_y(self.pos[1]) {
                    self.vel[1] = -self.vel[1];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    #[test]
    fn z_never_moves() {
        let mut p = Particle::new([0.0, 0.0, 2.5], [0.01, -0.01]);
        for _ in 0..50 {
            p.advance(&Bounds::default(), VelocityModel::PerAxis);
        }
        assert_eq!(p.pos[2], 2.5);
    }

    #[test]
    fn shared_velocity_moves_diagonally() {
        let mut p = Particle::with_shared_velocity([1.0, 1.0, 0.0], 0.01);
        p.advance(&Bounds::default(), VelocityModel::Shared);
        assert!((p.pos[0] - 1.01).abs() < EPS);
        assert!((p.pos[1] - 1.01).abs() < EPS);
    }

    #[test]
    fn shared_velocity_double_bounce_cancels() {
        // past both walls after the move: two negations leave the scalar unchanged
        let mut p = Particle::with_shared_velocity([6.995, 3.995, 0.0], 0.01);
        p.advance(&Bounds::default(), VelocityModel::Shared);
        assert_eq!(p.vel, [0.01, 0.01]);
    }

    #[test]
    fn shared_velocity_single_bounce_flips_both() {
        let mut p = Particle::with_shared_velocity([6.995, 0.0, 0.0], 0.01);
        p.advance(&Bounds::default(), VelocityModel::Shared);
        assert_eq!(p.vel, [-0.01, -0.01]);
    }

    #[test]
    fn per_axis_bounce_is_independent() {
        let mut p = Particle::new([6.995, 3.995, 0.0], [0.01, 0.01]);
        p.advance(&Bounds::default(), VelocityModel::PerAxis);
        assert_eq!(p.vel, [-0.01, -0.01]);

        let mut q = Particle::new([6.995, 0.0, 0.0], [0.01, 0.01]);
        q.advance(&Bounds::default(), VelocityModel::PerAxis);
        assert_eq!(q.vel, [-0.01, 0.01]);
    }

    #[test]
    fn random_particles_stay_in_initial_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 15.0, 0.01, VelocityModel::PerAxis);
            assert!(p.pos.iter().all(|c| c.abs() <= 7.5));
            assert!(p.vel.iter().all(|v| v.abs() <= 0.01));
        }
    }

    #[test]
    fn random_shared_particles_have_equal_components() {
        let mut rng = StdRng::seed_from_u64(11);
        let p = Particle::random(&mut rng, 15.0, 0.01, VelocityModel::Shared);
        assert_eq!(p.vel[0], p.vel[1]);
    }

    #[test]
    fn walls_are_exclusive() {
        let b = Bounds::default();
        assert!(!b.outside_x(7.0));
        assert!(b.outside_x(7.0001));
        assert!(!b.outside_y(-4.0));
        assert!(b.outside_y(-4.0001));
    }
}
