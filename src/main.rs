//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::renderer::{RenderState, ShapeBatch, TextLabel};
    use brick_breaker::sim::{FrameStatus, Key};
    use brick_breaker::{GameConfig, Notifier, Session};

    /// Blocking browser alert
    struct AlertNotifier;

    impl Notifier for AlertNotifier {
        fn notify(&mut self, message: &str) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        batch: ShapeBatch,
        render_state: RenderState,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        /// Simulate and draw one frame. The final frame is drawn too, so the
        /// last brick and score are on screen behind the alert.
        fn step(&mut self) -> FrameStatus {
            let status = self.session.run_frame(&mut self.batch);
            self.render();
            self.update_hud();
            status
        }

        fn render(&mut self) {
            match self.render_state.render(&self.batch) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Place score/tries labels over the canvas (document coordinates)
        fn update_hud(&self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let rect = self.canvas.get_bounding_client_rect();
            let left = rect.left() + window.scroll_x().unwrap_or(0.0);
            let top = rect.top() + window.scroll_y().unwrap_or(0.0);
            let ids = ["hud-score", "hud-tries"];
            for (id, label) in ids.iter().zip(&self.batch.labels) {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(&label.text));
                    let _ = el.set_attribute("style", &label_style(label, left, top));
                }
            }
        }
    }

    fn label_style(label: &TextLabel, left: f64, top: f64) -> String {
        let [r, g, b, _] = label.color.map(|c| (c * 255.0).round() as u8);
        format!(
            "position:absolute;left:{}px;top:{}px;transform:translateY(-100%);font:14px 'Segoe UI';color:rgb({},{},{})",
            left + label.pos.x as f64,
            top + label.pos.y as f64,
            r,
            g,
            b
        )
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let config = GameConfig::load();
        let width = config.arena.width as u32;
        let height = config.arena.height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let session = Session::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (config.arena.width, config.arena.height),
        )
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            session,
            batch: ShapeBatch::new(),
            render_state,
            canvas: canvas.clone(),
        }));

        setup_input_handlers(&document, &canvas, game.clone());

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(
        document: &web_sys::Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session
                    .input
                    .key_down(Key::from_event(&event.key(), event.key_code()));
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session
                    .input
                    .key_up(Key::from_event(&event.key(), event.key_code()));
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - x relative to the canvas origin
        {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                game.borrow_mut().session.input.pointer_move(x as f32);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let status = game.borrow_mut().step();

        match status {
            FrameStatus::Continue => request_animation_frame(game),
            FrameStatus::Finished(_) => {
                game.borrow_mut().session.conclude(&mut AlertNotifier);
                // Full reload, nothing survives into the next session
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames the headless demo runs before giving up
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAME_LIMIT: u32 = 100_000;

#[cfg(not(target_arch = "wasm32"))]
struct LogNotifier;

#[cfg(not(target_arch = "wasm32"))]
impl brick_breaker::Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
    }
}

/// Headless demo: the pointer tracks the ball until the session ends
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::renderer::DrawList;
    use brick_breaker::sim::{FrameStatus, Key};
    use brick_breaker::{GameConfig, Session};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless demo - use `trunk serve` for the playable web version");

    let mut session = match Session::new(&GameConfig::load()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    let mut surface = DrawList::new();

    for _ in 0..DEMO_FRAME_LIMIT {
        let ball_x = session.state.ball.pos.x;
        session.input.pointer_move(ball_x);

        if let FrameStatus::Finished(phase) = session.run_frame(&mut surface) {
            println!(
                "{:?} after {} frames, score {}",
                phase, session.state.frame_count, session.state.score.value
            );
            session.conclude(&mut LogNotifier);
            return;
        }
    }

    println!(
        "Stopped after {} frames: score {}, {} bricks left",
        DEMO_FRAME_LIMIT,
        session.state.score.value,
        session.state.bricks.standing().count()
    );
}
