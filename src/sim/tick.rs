//! Session state machine: start, per-frame tick, reset
//!
//! One tick is a discrete, atomic unit of work: difficulty check,
//! asteroid motion with a find-first collision scan, rocket movement,
//! timer readout. The host supplies wall-clock `now`, the held-key
//! snapshot and the live bounds on every call.

use super::collision::overlaps;
use super::motion::{advance_asteroid, move_rocket};
use super::state::{Bounds, GameEvent, GamePhase, HeldDirections, Rocket, Session};
use crate::consts::INITIAL_ASTEROIDS;
use crate::records::RecordStore;
use crate::timer;

/// Invalid state-machine transitions
///
/// These signal driver bugs; the session never silently no-ops a call
/// made in the wrong phase.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    /// `start()` while already Running
    #[error("session is already running")]
    AlreadyRunning,
    /// `tick()` outside Running
    #[error("tick is only valid while the session is running")]
    NotRunning,
    /// `reset()` outside GameOver
    #[error("reset is only valid after game over")]
    NotGameOver,
}

/// Per-tick display data for the host HUD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub elapsed_ms: f64,
    pub best_ms: f64,
    pub game_over: bool,
}

impl Session {
    /// Begin a run: Idle/GameOver -> Running.
    ///
    /// Spawns the initial asteroid batch, recreates the rocket centered
    /// in the play area, rebases the difficulty watermarks and the
    /// timer to `now`.
    pub fn start(&mut self, now: f64, bounds: Bounds) -> Result<(), SessionError> {
        if self.phase == GamePhase::Running {
            return Err(SessionError::AlreadyRunning);
        }

        self.asteroids = self.spawner.spawn_batch(INITIAL_ASTEROIDS, bounds);
        self.rocket = Rocket::new(bounds);
        self.difficulty.reset(now);
        self.started_at = now;
        self.final_elapsed = 0.0;
        self.phase = GamePhase::Running;

        log::info!("session started (seed {})", self.seed());
        Ok(())
    }

    /// Advance the session by one frame. Valid only while Running.
    ///
    /// Asteroids advance one at a time and are checked against the
    /// rocket as they move; the scan stops at the first overlap, so
    /// asteroids after the colliding one do not move on the ending
    /// frame. On a hit the session enters GameOver, freezes the
    /// elapsed time, runs exactly one best-time update attempt against
    /// `store` and queues exactly one [`GameEvent::GameOver`].
    pub fn tick(
        &mut self,
        now: f64,
        held: HeldDirections,
        bounds: Bounds,
        store: &mut dyn RecordStore,
    ) -> Result<TickReport, SessionError> {
        if self.phase != GamePhase::Running {
            return Err(SessionError::NotRunning);
        }

        self.difficulty
            .check(now, &mut self.asteroids, &mut self.spawner, bounds);

        // Find-first scan fused with motion: each asteroid advances and
        // is immediately tested, mirroring the frame order of the game
        // (asteroids move and are checked before the rocket moves).
        let rocket_rect = self.rocket.rect();
        let hit = self.asteroids.iter_mut().position(|a| {
            advance_asteroid(a, bounds);
            overlaps(rocket_rect, a.rect())
        });

        if let Some(idx) = hit {
            let elapsed_ms = timer::elapsed(self.started_at, now);
            self.final_elapsed = elapsed_ms;
            self.phase = GamePhase::GameOver;

            let (best_ms, new_record) = timer::compare_and_update(elapsed_ms, self.best_ms);
            self.best_ms = best_ms;
            if new_record {
                // Non-fatal: the in-memory record stays authoritative
                // for display even when the store is unavailable.
                if let Err(e) = store.write_best(best_ms) {
                    log::warn!("best time not persisted: {e}");
                }
            }

            self.push_event(GameEvent::GameOver {
                elapsed_ms,
                best_ms,
                new_record,
            });
            log::info!(
                "game over after {} ms (asteroid {idx}, new record: {new_record})",
                elapsed_ms
            );

            return Ok(TickReport {
                elapsed_ms,
                best_ms,
                game_over: true,
            });
        }

        move_rocket(&mut self.rocket, held, bounds);

        Ok(TickReport {
            elapsed_ms: timer::elapsed(self.started_at, now),
            best_ms: self.best_ms,
            game_over: false,
        })
    }

    /// Restart after a run ended: GameOver -> Running.
    ///
    /// Equivalent to `start()`; the best-time comparison for the run
    /// that just ended already happened at the GameOver transition.
    pub fn reset(&mut self, now: f64, bounds: Bounds) -> Result<(), SessionError> {
        if self.phase != GamePhase::GameOver {
            return Err(SessionError::NotGameOver);
        }
        self.phase = GamePhase::Idle;
        log::info!("session reset");
        self.start(now, bounds)
    }
}
