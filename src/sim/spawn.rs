//! Procedural asteroid spawning
//!
//! All randomness flows through a single seeded Pcg32 owned by the
//! spawner, so a session's asteroid field is reproducible from its
//! seed. Batch and single spawns share one distribution.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Asteroid, Bounds};
use crate::consts::*;

/// Seedable asteroid factory
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn one asteroid fully off-screen, drifting inward.
    ///
    /// Picks a horizontal or vertical edge (50/50), then a side of it
    /// (50/50). The velocity component on the spawn axis has magnitude
    /// in [1, 3) signed toward the interior; the cross-axis component
    /// is uniform in [-2, 2). Size is uniform in [20, 70) per axis.
    pub fn spawn_one(&mut self, bounds: Bounds) -> Asteroid {
        let size = Vec2::new(self.side_len(), self.side_len());

        let axis_speed = self
            .rng
            .random_range(ASTEROID_AXIS_SPEED_MIN..ASTEROID_AXIS_SPEED_MAX);
        let cross_speed = self
            .rng
            .random_range(-ASTEROID_CROSS_SPEED_MAX..ASTEROID_CROSS_SPEED_MAX);
        let near_side = self.rng.random_bool(0.5);

        let (pos, vel) = if self.rng.random_bool(0.5) {
            // Off-screen horizontally (left or right edge)
            let x = if near_side { -size.x } else { bounds.width };
            let y = self.cross_pos(bounds.height);
            let vx = if near_side { axis_speed } else { -axis_speed };
            (Vec2::new(x, y), Vec2::new(vx, cross_speed))
        } else {
            // Off-screen vertically (top or bottom edge)
            let x = self.cross_pos(bounds.width);
            let y = if near_side { -size.y } else { bounds.height };
            let vy = if near_side { axis_speed } else { -axis_speed };
            (Vec2::new(x, y), Vec2::new(cross_speed, vy))
        };

        Asteroid {
            pos,
            size,
            vel,
            entered: false,
            shade: self.rng.random_range(ASTEROID_SHADE_MIN..ASTEROID_SHADE_MAX),
        }
    }

    /// Spawn `n` asteroids with the same distribution as `spawn_one`
    pub fn spawn_batch(&mut self, n: usize, bounds: Bounds) -> Vec<Asteroid> {
        (0..n).map(|_| self.spawn_one(bounds)).collect()
    }

    fn side_len(&mut self) -> f32 {
        self.rng
            .random_range(ASTEROID_MIN_SIZE..ASTEROID_MIN_SIZE + ASTEROID_SIZE_SPAN)
    }

    /// Placement along the spawn edge, clamped to a point when bounds
    /// are degenerate so the range never inverts.
    fn cross_pos(&mut self, extent: f32) -> f32 {
        if extent > 0.0 {
            self.rng.random_range(0.0..extent)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_spawns_fully_off_screen() {
        let mut spawner = Spawner::new(42);
        for a in spawner.spawn_batch(200, BOUNDS) {
            let off_x = a.pos.x <= -a.size.x || a.pos.x >= BOUNDS.width;
            let off_y = a.pos.y <= -a.size.y || a.pos.y >= BOUNDS.height;
            assert!(off_x || off_y, "asteroid spawned on screen at {:?}", a.pos);
            assert!(!a.entered);
        }
    }

    #[test]
    fn test_spawn_axis_velocity_points_inward() {
        let mut spawner = Spawner::new(42);
        for a in spawner.spawn_batch(200, BOUNDS) {
            if a.pos.x <= -a.size.x {
                assert!(a.vel.x >= 1.0 && a.vel.x < 3.0);
            } else if a.pos.x >= BOUNDS.width {
                assert!(a.vel.x <= -1.0 && a.vel.x > -3.0);
            } else if a.pos.y <= -a.size.y {
                assert!(a.vel.y >= 1.0 && a.vel.y < 3.0);
            } else {
                assert!(a.vel.y <= -1.0 && a.vel.y > -3.0);
            }
        }
    }

    #[test]
    fn test_size_and_shade_ranges() {
        let mut spawner = Spawner::new(7);
        for a in spawner.spawn_batch(200, BOUNDS) {
            assert!(a.size.x >= 20.0 && a.size.x < 70.0);
            assert!(a.size.y >= 20.0 && a.size.y < 70.0);
            assert!((180..240).contains(&a.shade));
        }
    }

    #[test]
    fn test_equal_seeds_spawn_identically() {
        let mut a = Spawner::new(99);
        let mut b = Spawner::new(99);
        let first = a.spawn_batch(50, BOUNDS);
        let second = b.spawn_batch(50, BOUNDS);
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
            assert_eq!(x.size, y.size);
            assert_eq!(x.shade, y.shade);
        }
    }

    #[test]
    fn test_batch_size() {
        let mut spawner = Spawner::new(1);
        assert_eq!(spawner.spawn_batch(5, BOUNDS).len(), 5);
        assert!(spawner.spawn_batch(0, BOUNDS).is_empty());
    }

    #[test]
    fn test_degenerate_bounds_clamp_placement() {
        let mut spawner = Spawner::new(3);
        for a in spawner.spawn_batch(50, Bounds::new(0.0, 0.0)) {
            assert!(a.pos.x.is_finite() && a.pos.y.is_finite());
            assert!(a.vel.x.is_finite() && a.vel.y.is_finite());
        }
    }
}
