//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Externally supplied wall-clock timestamps only (no hidden clocks)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use motion::{advance_asteroid, move_rocket};
pub use spawn::Spawner;
pub use state::{Asteroid, Bounds, GameEvent, GamePhase, HeldDirections, Rocket, Session};
pub use tick::{SessionError, TickReport};
