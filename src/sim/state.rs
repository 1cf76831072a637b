//! Session state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::Difficulty;
use super::spawn::Spawner;
use crate::consts::*;
use crate::timer;

/// Current play-area dimensions
///
/// Always read fresh from the host each tick; the window may resize
/// between ticks, so nothing in the sim caches a copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False mid-resize when the host reports a collapsed area.
    /// Reflection and wrap checks are skipped until this holds again.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Snapshot of the four held movement keys, read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; terminal until reset
    GameOver,
}

/// Lifecycle notifications, drained by the host after each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Fired exactly once per Running -> GameOver transition
    GameOver {
        elapsed_ms: f64,
        best_ms: f64,
        new_record: bool,
    },
}

/// A drifting asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Latched true once the full rect first lies inside the play area.
    /// Edge reflection only applies after that, so freshly spawned
    /// asteroids can drift in from off-screen without bouncing away.
    pub entered: bool,
    /// Gray value chosen at spawn, in [180, 240)
    pub shade: u8,
}

impl Asteroid {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The player's rocket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Rocket {
    /// A fresh rocket centered in the play area
    pub fn new(bounds: Bounds) -> Self {
        let size = Vec2::splat(ROCKET_SIZE);
        Self {
            pos: Vec2::new(bounds.width, bounds.height) / 2.0 - size / 2.0,
            size,
            speed: ROCKET_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// One game session: the single owner of all mutable gameplay state
///
/// Owned by the host entry point and threaded explicitly through
/// `start`/`tick`/`reset`. Only one tick runs at a time; no other
/// component retains references into the session.
#[derive(Debug)]
pub struct Session {
    pub phase: GamePhase,
    /// Membership-only semantics; order never affects gameplay
    pub asteroids: Vec<Asteroid>,
    pub rocket: Rocket,
    pub(super) spawner: Spawner,
    pub(super) difficulty: Difficulty,
    /// Wall-clock ms at which the current run started
    pub(super) started_at: f64,
    /// Elapsed ms frozen at the Running -> GameOver transition
    pub(super) final_elapsed: f64,
    /// Best elapsed ms seen so far (seeded from the record store)
    pub(super) best_ms: f64,
    events: Vec<GameEvent>,
    seed: u64,
}

impl Session {
    /// Create an idle session
    ///
    /// `best_ms` is the persisted record read once at process start
    /// (0.0 when absent). `bounds` only places the initial rocket; live
    /// bounds are supplied to every later call.
    pub fn new(seed: u64, best_ms: f64, bounds: Bounds) -> Self {
        Self {
            phase: GamePhase::Idle,
            asteroids: Vec::new(),
            rocket: Rocket::new(bounds),
            spawner: Spawner::new(seed),
            difficulty: Difficulty::new(),
            started_at: 0.0,
            final_elapsed: 0.0,
            best_ms,
            events: Vec::new(),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Elapsed ms for the current run: live while Running, frozen at
    /// its final value after GameOver, zero while Idle.
    pub fn elapsed(&self, now: f64) -> f64 {
        match self.phase {
            GamePhase::Idle => 0.0,
            GamePhase::Running => timer::elapsed(self.started_at, now),
            GamePhase::GameOver => self.final_elapsed,
        }
    }

    /// Best elapsed ms, authoritative for display even when the
    /// backing store is unavailable
    pub fn best_ms(&self) -> f64 {
        self.best_ms
    }

    pub(super) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand pending lifecycle notifications to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
