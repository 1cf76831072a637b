//! Time-driven difficulty ramp
//!
//! Two independent wall-clock watermarks: one adds an asteroid every
//! 5 seconds, the other scales every asteroid's velocity by 1.1 every
//! 10 seconds. Wall-clock based, so the ramp is frame-rate independent.

use super::spawn::Spawner;
use super::state::{Asteroid, Bounds};
use crate::consts::*;

/// Watermarks for the two periodic difficulty effects
#[derive(Debug, Clone, Copy)]
pub struct Difficulty {
    last_add_ms: f64,
    last_speed_ms: f64,
}

impl Difficulty {
    pub fn new() -> Self {
        Self {
            last_add_ms: 0.0,
            last_speed_ms: 0.0,
        }
    }

    /// Rebase both watermarks to `now` (session start)
    pub fn reset(&mut self, now: f64) {
        self.last_add_ms = now;
        self.last_speed_ms = now;
    }

    /// Run both periodic checks for the current tick.
    ///
    /// Non-compensating by design of the ramp: an overdue check fires
    /// at most once no matter how many intervals elapsed while ticks
    /// were stalled, then rebases its watermark to `now`. Both checks
    /// may fire in the same call.
    pub fn check(
        &mut self,
        now: f64,
        asteroids: &mut Vec<Asteroid>,
        spawner: &mut Spawner,
        bounds: Bounds,
    ) {
        if now - self.last_add_ms > ASTEROID_ADD_INTERVAL_MS {
            self.last_add_ms = now;
            asteroids.push(spawner.spawn_one(bounds));
            log::debug!("difficulty: asteroid added, field size {}", asteroids.len());
        }

        if now - self.last_speed_ms > SPEED_INCREASE_INTERVAL_MS {
            self.last_speed_ms = now;
            for a in asteroids.iter_mut() {
                a.vel *= SPEED_INCREASE_FACTOR;
            }
            log::debug!("difficulty: asteroid speed scaled by {SPEED_INCREASE_FACTOR}");
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn setup() -> (Difficulty, Vec<Asteroid>, Spawner) {
        let mut difficulty = Difficulty::new();
        difficulty.reset(0.0);
        (difficulty, Vec::new(), Spawner::new(42))
    }

    #[test]
    fn test_no_add_before_interval() {
        let (mut d, mut asteroids, mut spawner) = setup();
        d.check(5000.0, &mut asteroids, &mut spawner, BOUNDS);
        assert!(asteroids.is_empty()); // strict: exactly 5000 is not "over"
    }

    #[test]
    fn test_adds_one_past_interval() {
        let (mut d, mut asteroids, mut spawner) = setup();
        d.check(5001.0, &mut asteroids, &mut spawner, BOUNDS);
        assert_eq!(asteroids.len(), 1);
    }

    #[test]
    fn test_overdue_check_adds_at_most_one() {
        // Clock jumps far past several intervals (stalled frames):
        // a single check still adds a single asteroid.
        let (mut d, mut asteroids, mut spawner) = setup();
        d.check(60_000.0, &mut asteroids, &mut spawner, BOUNDS);
        assert_eq!(asteroids.len(), 1);

        // And the watermark rebased to now, not to the missed slots.
        d.check(60_001.0, &mut asteroids, &mut spawner, BOUNDS);
        assert_eq!(asteroids.len(), 1);
        d.check(65_001.0, &mut asteroids, &mut spawner, BOUNDS);
        assert_eq!(asteroids.len(), 2);
    }

    #[test]
    fn test_one_add_per_interval_under_small_steps() {
        let (mut d, mut asteroids, mut spawner) = setup();
        let mut now = 0.0;
        while now < 20_000.0 {
            now += 16.0;
            d.check(now, &mut asteroids, &mut spawner, BOUNDS);
        }
        // ~20s of play at 60fps: the watermark rebases to the firing
        // tick, so adds land near 5.0s, 10.0s and 15.0s; the fourth
        // slot drifts just past the end of the run.
        assert_eq!(asteroids.len(), 3);
    }

    #[test]
    fn test_speed_scaling() {
        let (mut d, mut asteroids, mut spawner) = setup();
        asteroids.push(Asteroid {
            pos: Vec2::ZERO,
            size: Vec2::splat(30.0),
            vel: Vec2::new(2.0, -1.0),
            entered: true,
            shade: 200,
        });
        d.check(10_001.0, &mut asteroids, &mut spawner, BOUNDS);
        let v = asteroids[0].vel;
        assert!((v.x - 2.2).abs() < 1e-5);
        assert!((v.y - -1.1).abs() < 1e-5);
    }

    #[test]
    fn test_both_checks_fire_same_tick() {
        let (mut d, mut asteroids, mut spawner) = setup();
        asteroids.push(Asteroid {
            pos: Vec2::ZERO,
            size: Vec2::splat(30.0),
            vel: Vec2::new(1.0, 0.0),
            entered: true,
            shade: 200,
        });
        d.check(10_001.0, &mut asteroids, &mut spawner, BOUNDS);
        assert_eq!(asteroids.len(), 2);
        // The scale pass runs over the just-added asteroid too.
        assert!((asteroids[0].vel.x - 1.1).abs() < 1e-5);
    }
}
