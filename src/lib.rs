//! Asteroid Dodge - steer a rocket through an ever-thickening asteroid field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, session state)
//! - `timer`: Elapsed-time measurement and best-time tracking
//! - `records`: Best-time persistence
//! - `render`: Renderer boundary (anything that can draw a shadowed rect)

pub mod records;
pub mod render;
pub mod sim;
pub mod timer;

pub use records::BestTime;
pub use render::{Color, Renderer, draw_frame};

/// Game configuration constants
pub mod consts {
    /// Rocket square side length
    pub const ROCKET_SIZE: f32 = 70.0;
    /// Rocket movement per tick along each held axis
    pub const ROCKET_SPEED: f32 = 5.0;

    /// Asteroids spawned when a session starts
    pub const INITIAL_ASTEROIDS: usize = 5;
    /// Asteroid side length range: [min, min + span)
    pub const ASTEROID_MIN_SIZE: f32 = 20.0;
    pub const ASTEROID_SIZE_SPAN: f32 = 50.0;
    /// Spawn-axis speed range: [min, max), signed toward the interior
    pub const ASTEROID_AXIS_SPEED_MIN: f32 = 1.0;
    pub const ASTEROID_AXIS_SPEED_MAX: f32 = 3.0;
    /// Cross-axis speed range: [-max, max)
    pub const ASTEROID_CROSS_SPEED_MAX: f32 = 2.0;
    /// Asteroid gray shade range: [min, max)
    pub const ASTEROID_SHADE_MIN: u8 = 180;
    pub const ASTEROID_SHADE_MAX: u8 = 240;

    /// One new asteroid every 5 seconds
    pub const ASTEROID_ADD_INTERVAL_MS: f64 = 5000.0;
    /// All asteroid velocities scale every 10 seconds
    pub const SPEED_INCREASE_INTERVAL_MS: f64 = 10_000.0;
    pub const SPEED_INCREASE_FACTOR: f32 = 1.1;
}

/// Format a millisecond duration as `mm:ss:cc` for the HUD
pub fn format_ms(ms: f64) -> String {
    let total = ms.max(0.0) as u64;
    let minutes = (total / 60_000) % 60;
    let seconds = (total / 1000) % 60;
    let centis = (total % 1000) / 10;
    format!("{minutes:02}:{seconds:02}:{centis:02}")
}

#[cfg(test)]
mod tests {
    use super::format_ms;

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(0.0), "00:00:00");
        assert_eq!(format_ms(65_234.0), "01:05:23");
        assert_eq!(format_ms(-5.0), "00:00:00");
    }
}
