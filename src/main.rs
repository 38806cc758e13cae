//! Rail Rush entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use rail_rush::consts::*;
    use rail_rush::input::{self, Intent, Key};
    use rail_rush::render;
    use rail_rush::sim::{GamePhase, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        ctx: CanvasRenderingContext2d,
        /// Whether a frame callback is currently scheduled
        running: bool,
    }

    impl Game {
        /// Run one frame: tick, draw, HUD. Game over deschedules the loop.
        fn frame(&mut self) {
            tick(&mut self.state);
            render::draw_frame(&self.ctx, &self.state);
            update_hud(&self.state);

            if self.state.phase == GamePhase::GameOver {
                self.running = false;
                log::info!(
                    "Game over after {} frames - score {}",
                    self.state.frame,
                    self.state.score
                );
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rail Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAY_WIDTH as u32);
        canvas.set_height(PLAY_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            ctx,
            running: false,
        }));
        log::info!("Session armed with seed: {seed}");

        // Initial still frame; the loop starts on the first qualifying key
        {
            let g = game.borrow();
            render::draw_frame(&g.ctx, &g.state);
            update_hud(&g.state);
        }

        setup_input(game);
        log::info!("Rail Rush ready");
    }

    fn setup_input(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let Some(key) = Key::from_event_key(&event.key()) else {
                return;
            };

            let intent = input::resolve(game.borrow().state.phase, key);
            let reseed = js_sys::Date::now() as u64;
            let start = input::apply(&mut game.borrow_mut().state, intent, reseed);

            if intent == Intent::Restart {
                // Fresh still frame; the loop re-arms on the next qualifying key
                let g = game.borrow();
                render::draw_frame(&g.ctx, &g.state);
                update_hud(&g.state);
                log::info!("Session reset with seed: {reseed}");
            }

            if start {
                let should_schedule = {
                    let mut g = game.borrow_mut();
                    let fresh = !g.running;
                    g.running = true;
                    fresh
                };
                if should_schedule {
                    request_frame(game.clone());
                }
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            let keep_going = {
                let mut g = game.borrow_mut();
                g.frame();
                g.running
            };
            if keep_going {
                request_frame(game);
            }
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Update score readout and banner visibility in the DOM
    fn update_hud(state: &GameState) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(el) = document.get_element_by_id("score") {
            el.set_text_content(Some(&format!("Score: {}", state.score)));
        }
        set_hidden(&document, "instructions", state.phase != GamePhase::Ready);
        set_hidden(&document, "gameOver", state.phase != GamePhase::GameOver);
    }

    fn set_hidden(document: &web_sys::Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rail_rush::input::{self, Key};
    use rail_rush::sim::{GamePhase, GameState, tick};

    env_logger::init();
    log::info!("Rail Rush (native) - headless demo run");

    let seed = 0xC0FFEE;
    let mut state = GameState::new(seed);
    let intent = input::resolve(state.phase, Key::Confirm);
    input::apply(&mut state, intent, seed);

    let mut frames = 0u32;
    while state.phase == GamePhase::Running && frames < 20_000 {
        // Zig-zag between the outer lanes so the demo survives a while
        if frames % 120 == 0 {
            let direction = if state.train.current_lane == 0 { 1 } else { -1 };
            state.train.steer(direction);
        }
        tick(&mut state);
        frames += 1;
    }

    log::info!("Demo finished: phase {:?}", state.phase);
    println!(
        "seed {seed:#x}: survived {frames} frames, score {}",
        state.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
