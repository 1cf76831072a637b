//! Asteroid Dodge entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use asteroid_dodge::format_ms;
    use asteroid_dodge::records::{LocalStorageStore, RecordStore};
    use asteroid_dodge::render::{Color, Renderer, draw_frame};
    use asteroid_dodge::sim::{Bounds, GameEvent, GamePhase, HeldDirections, Session};

    const CANVAS_BORDER: f64 = 4.0;

    /// Canvas 2D implementation of the renderer boundary
    struct CanvasRenderer {
        ctx: CanvasRenderingContext2d,
    }

    impl Renderer for CanvasRenderer {
        fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, shadow: bool) {
            if shadow {
                self.ctx.set_shadow_color("rgba(0, 0, 0, 0.5)");
                self.ctx.set_shadow_blur(10.0);
                self.ctx.set_shadow_offset_x(5.0);
                self.ctx.set_shadow_offset_y(5.0);
            }

            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);

            self.ctx.set_shadow_color("transparent");
            self.ctx.set_shadow_blur(0.0);
            self.ctx.set_shadow_offset_x(0.0);
            self.ctx.set_shadow_offset_y(0.0);
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        held: HeldDirections,
        store: LocalStorageStore,
        canvas: HtmlCanvasElement,
        renderer: CanvasRenderer,
    }

    impl Game {
        /// Live play-area dimensions, re-read every call (the canvas
        /// resizes with the window)
        fn bounds(&self) -> Bounds {
            Bounds::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }

        /// One animation frame: tick, draw, HUD, lifecycle events
        fn frame(&mut self, now: f64) {
            let bounds = self.bounds();

            if self.session.phase == GamePhase::Running {
                if let Err(e) = self.session.tick(now, self.held, bounds, &mut self.store) {
                    log::error!("tick rejected: {e}");
                }
            }

            self.renderer.ctx.clear_rect(
                0.0,
                0.0,
                bounds.width as f64,
                bounds.height as f64,
            );
            draw_frame(&self.session, &mut self.renderer);
            self.draw_hud(now, bounds);

            for event in self.session.drain_events() {
                let GameEvent::GameOver {
                    elapsed_ms,
                    new_record,
                    ..
                } = event;
                log::info!(
                    "run over at {} (new record: {new_record})",
                    format_ms(elapsed_ms)
                );
                show_restart_button(true);
            }
        }

        fn draw_hud(&self, now: f64, bounds: Bounds) {
            let ctx = &self.renderer.ctx;
            ctx.set_font("20px Arial");
            ctx.set_fill_style_str("black");
            ctx.set_text_align("right");
            let right = (bounds.width - 20.0) as f64;
            let _ = ctx.fill_text(
                &format!("Current time: {}", format_ms(self.session.elapsed(now))),
                right,
                30.0,
            );
            let _ = ctx.fill_text(
                &format!("Best Time: {}", format_ms(self.session.best_ms())),
                right,
                60.0,
            );
        }
    }

    fn window() -> web_sys::Window {
        web_sys::window().expect("no window")
    }

    /// Size the canvas to the window, leaving room for the page border
    fn resize_canvas(canvas: &HtmlCanvasElement) {
        let w = window()
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        canvas.set_width((w - CANVAS_BORDER * 2.0).max(0.0) as u32);
        canvas.set_height((h - CANVAS_BORDER * 2.0).max(0.0) as u32);
    }

    fn show_restart_button(visible: bool) {
        if let Some(btn) = window().document().and_then(|d| d.get_element_by_id("restart-btn")) {
            if let Some(el) = btn.dyn_ref::<web_sys::HtmlElement>() {
                let _ = el
                    .style()
                    .set_property("display", if visible { "block" } else { "none" });
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Asteroid Dodge starting...");

        let document = window().document().expect("no document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        resize_canvas(&canvas);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("no 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Read the persisted record once at startup.
        let mut store = LocalStorageStore;
        let best_ms = store.read_best().unwrap_or(0.0);

        let now = js_sys::Date::now();
        let seed = now as u64;
        let bounds = Bounds::new(canvas.width() as f32, canvas.height() as f32);
        let mut session = Session::new(seed, best_ms, bounds);
        session.start(now, bounds).expect("fresh session must start");

        log::info!("Session initialized with seed: {seed}");

        let game = Rc::new(RefCell::new(Game {
            session,
            held: HeldDirections::default(),
            store,
            canvas,
            renderer: CanvasRenderer { ctx },
        }));

        setup_input_handlers(game.clone());
        setup_resize_handler(game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);
        log::info!("Asteroid Dodge running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        // Keydown
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.held.left = true,
                    "ArrowRight" => g.held.right = true,
                    "ArrowUp" => g.held.up = true,
                    "ArrowDown" => g.held.down = true,
                    _ => {}
                }
            });
            let _ = window()
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.held.left = false,
                    "ArrowRight" => g.held.right = false,
                    "ArrowUp" => g.held.up = false,
                    "ArrowDown" => g.held.down = false,
                    _ => {}
                }
            });
            let _ = window()
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let g = game.borrow();
            resize_canvas(&g.canvas);
        });
        let _ = window()
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(btn) = window().document().and_then(|d| d.get_element_by_id("restart-btn"))
        else {
            log::warn!("no restart button in page");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut g = game.borrow_mut();
            let now = js_sys::Date::now();
            let bounds = g.bounds();
            g.held = HeldDirections::default();
            match g.session.reset(now, bounds) {
                Ok(()) => show_restart_button(false),
                Err(e) => log::error!("restart rejected: {e}"),
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame(js_sys::Date::now());
            request_animation_frame(game.clone());
        });
        let _ = window().request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use asteroid_dodge::format_ms;
    use asteroid_dodge::records::MemoryStore;
    use asteroid_dodge::sim::{Bounds, GamePhase, HeldDirections, Session};

    env_logger::init();
    log::info!("Asteroid Dodge (native) starting headless demo run...");

    let bounds = Bounds::new(800.0, 600.0);
    let mut store = MemoryStore::default();
    let mut session = Session::new(0xA57E_401D, 0.0, bounds);
    session.start(0.0, bounds).expect("fresh session must start");

    // Drive the sim at a simulated 60 Hz until the field wins.
    let mut now = 0.0;
    while now < 600_000.0 {
        now += 1000.0 / 60.0;
        let report = session
            .tick(now, HeldDirections::default(), bounds, &mut store)
            .expect("session is running");
        if report.game_over {
            break;
        }
    }

    if session.phase == GamePhase::GameOver {
        log::info!(
            "demo run over against {} asteroids",
            session.asteroids.len()
        );
        println!("Demo run over after {}", format_ms(session.elapsed(now)));
    } else {
        println!("Demo run still alive after {}", format_ms(now));
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
