//! Entity motion: asteroid drift with edge reflection, rocket movement
//! with edge wrap
//!
//! The two rules are deliberately different: asteroids bounce off the
//! boundary once they have entered the play area, while the rocket
//! teleports to the opposite edge after leaving it entirely.

use super::state::{Asteroid, Bounds, HeldDirections, Rocket};

/// Advance one asteroid by its velocity and apply the boundary rules.
///
/// The entered-bounds latch and both reflection checks are skipped
/// while bounds are degenerate (mid-resize); position still integrates
/// so nothing stalls.
pub fn advance_asteroid(a: &mut Asteroid, bounds: Bounds) {
    a.pos += a.vel;

    if !bounds.is_valid() {
        return;
    }

    if !a.entered && a.rect().fully_inside(bounds) {
        a.entered = true;
    }

    // Axes reflect independently; a corner contact flips both.
    if a.entered {
        if a.pos.x <= 0.0 || a.pos.x + a.size.x >= bounds.width {
            a.vel.x = -a.vel.x;
        }
        if a.pos.y <= 0.0 || a.pos.y + a.size.y >= bounds.height {
            a.vel.y = -a.vel.y;
        }
    }
}

/// Move the rocket along each held axis, then wrap.
///
/// The wrap check runs on every call, held keys or not, so a rocket
/// already past an edge (say, after a resize shrank the bounds) snaps
/// back on the next tick.
pub fn move_rocket(r: &mut Rocket, held: HeldDirections, bounds: Bounds) {
    if held.left {
        r.pos.x -= r.speed;
    }
    if held.right {
        r.pos.x += r.speed;
    }
    if held.up {
        r.pos.y -= r.speed;
    }
    if held.down {
        r.pos.y += r.speed;
    }

    if !bounds.is_valid() {
        return;
    }

    // Wrap, not bounce: teleport only once the rocket is fully outside.
    if r.pos.x < -r.size.x {
        r.pos.x = bounds.width;
    } else if r.pos.x > bounds.width {
        r.pos.x = -r.size.x;
    }
    if r.pos.y < -r.size.y {
        r.pos.y = bounds.height;
    } else if r.pos.y > bounds.height {
        r.pos.y = -r.size.y;
    }
}
