//! Renderer boundary
//!
//! The sim never touches pixels. A host supplies anything that can
//! draw a filled rectangle with a drop shadow and this module issues
//! one call per entity per frame.

use crate::sim::Session;

/// A solid RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };

    /// Uniform gray of the given value
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// CSS `rgb(r, g, b)` form, for canvas hosts
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Anything that can draw a filled, optionally shadowed rectangle
pub trait Renderer {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, shadow: bool);
}

/// Draw one frame: every asteroid in its spawn shade, then the rocket
pub fn draw_frame(session: &Session, renderer: &mut dyn Renderer) {
    for a in &session.asteroids {
        renderer.draw_rect(
            a.pos.x,
            a.pos.y,
            a.size.x,
            a.size.y,
            Color::gray(a.shade),
            true,
        );
    }

    let r = &session.rocket;
    renderer.draw_rect(r.pos.x, r.pos.y, r.size.x, r.size.y, Color::RED, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Bounds;

    #[derive(Default)]
    struct RecordingRenderer {
        rects: Vec<(f32, f32, Color, bool)>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_rect(&mut self, x: f32, y: f32, _w: f32, _h: f32, color: Color, shadow: bool) {
            self.rects.push((x, y, color, shadow));
        }
    }

    #[test]
    fn test_one_rect_per_entity() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut session = Session::new(42, 0.0, bounds);
        session.start(0.0, bounds).unwrap();

        let mut renderer = RecordingRenderer::default();
        draw_frame(&session, &mut renderer);

        assert_eq!(renderer.rects.len(), 6); // 5 asteroids + rocket
        let (_, _, color, shadow) = renderer.rects[5];
        assert_eq!(color, Color::RED);
        assert!(shadow);
    }

    #[test]
    fn test_asteroid_shade_is_gray() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut session = Session::new(42, 0.0, bounds);
        session.start(0.0, bounds).unwrap();

        let mut renderer = RecordingRenderer::default();
        draw_frame(&session, &mut renderer);
        for (_, _, color, _) in &renderer.rects[..5] {
            assert_eq!(color.r, color.g);
            assert_eq!(color.g, color.b);
            assert!((180..240).contains(&color.r));
        }
    }

    #[test]
    fn test_css_form() {
        assert_eq!(Color::gray(200).to_css(), "rgb(200, 200, 200)");
    }
}
